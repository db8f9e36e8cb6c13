//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::LanguageTag;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Page Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    /// Jump to the first page of the open page's category
    BackToCategory,

    // ─────────────────────────────────────────────────────────────────────────
    // Language Tabs
    // ─────────────────────────────────────────────────────────────────────────
    SelectLanguage(LanguageTag),
    /// Select the tab at a position on the strip (0-based)
    SelectLanguageIndex(usize),
    NextLanguage,
    PrevLanguage,

    // ─────────────────────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────────────────────
    /// Copy the visible snippet
    CopyCurrent,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // View Toggles
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the decorative container around the code block
    ToggleContainer,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenPageInfo,
    OpenHelp,
    CloseModal,
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    EnterSearchMode,
    /// Leave search mode keeping the filter
    ExitSearchMode,
    /// Leave search mode and clear the filter
    CancelSearch,
    SearchInput(char),
    SearchBackspace,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::FirstPage => write!(f, "FirstPage"),
            Action::LastPage => write!(f, "LastPage"),
            Action::BackToCategory => write!(f, "BackToCategory"),
            Action::SelectLanguage(tag) => write!(f, "SelectLanguage({})", tag),
            Action::SelectLanguageIndex(i) => write!(f, "SelectLanguageIndex({})", i),
            Action::NextLanguage => write!(f, "NextLanguage"),
            Action::PrevLanguage => write!(f, "PrevLanguage"),
            Action::CopyCurrent => write!(f, "CopyCurrent"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::ToggleContainer => write!(f, "ToggleContainer"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenPageInfo => write!(f, "OpenPageInfo"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::CancelSearch => write!(f, "CancelSearch"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
        }
    }
}
