//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it coordinates between components but
//! does not contain business logic itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_browser_screen, BrowserComponent, BrowserRenderContext, HelpDialog, PageComponent,
    PageInfoDialog, QuitDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::{AppMode, CopyNotice, DisplayMode};
use crate::model::{Catalog, CodeViewer, CopyOutcome, LanguageTag};
use crate::services::{ClipboardWriter, Delivery};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Every page that can be opened
    pub catalog: Catalog,

    /// View-model of the open page; replaced whenever another page opens
    pub viewer: Option<CodeViewer>,

    /// Modal overlay stack
    pub modals: ModalStack,

    clipboard: Box<dyn ClipboardWriter>,

    pub config: Config,

    /// Where config changes (container toggle) are written; None keeps them in memory
    save_path: Option<PathBuf>,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Result of the last copy, cleared with the copy indicator
    pub copy_notice: Option<CopyNotice>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub browser: BrowserComponent,
    pub page: PageComponent,
    pub quit_dialog: QuitDialog,
    pub page_info_dialog: PageInfoDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: Config, catalog: Catalog, clipboard: Box<dyn ClipboardWriter>) -> App {
        let mode = if config.show_splash {
            AppMode::Splash
        } else {
            AppMode::Running
        };

        let mut app = App {
            mode,
            catalog,
            viewer: None,
            modals: ModalStack::new(),
            clipboard,
            page: PageComponent::new(DisplayMode::from_show_container(config.show_container)),
            config,
            save_path: None,
            should_quit: false,
            error: None,
            status_message: None,
            copy_notice: None,
            splash: SplashComponent::new(),
            browser: BrowserComponent::new(),
            quit_dialog: QuitDialog,
            page_info_dialog: PageInfoDialog::new(),
            help_dialog: HelpDialog::default(),
        };

        app.browser.select_first(&app.catalog);
        app.sync_viewer();
        app
    }

    /// Save config changes made from the UI to `path`
    pub fn with_save_path(mut self, path: Option<PathBuf>) -> Self {
        self.save_path = path;
        self
    }

    /// Slug of the open page
    pub fn current_slug(&self) -> Option<&str> {
        self.viewer.as_ref().map(|v| v.page().slug.as_str())
    }

    /// Mount a fresh viewer when the list selection moved to another page
    ///
    /// The old viewer is dropped together with any pending copy indicator.
    fn sync_viewer(&mut self) {
        let selected = self.browser.selected_page(&self.catalog);
        let selected_slug = selected.map(|p| p.slug.as_str());
        if selected_slug == self.current_slug() {
            return;
        }

        self.viewer = selected.map(|page| CodeViewer::new(page.clone(), self.config.copy_feedback()));
        self.copy_notice = None;
        self.page.reset_scroll();
    }

    /// Advance time-based state to `now`
    pub fn tick_at(&mut self, now: Instant) {
        if let Some(ref mut viewer) = self.viewer {
            if viewer.tick(now) {
                self.copy_notice = None;
            }
        }
    }

    /// Handle one pass of the event loop
    ///
    /// `event` is None when the poll timed out. Time-based state advances on
    /// every pass, so a steady stream of events cannot hold the copy
    /// indicator past its deadline.
    pub fn step(&mut self, event: Option<Event>, now: Instant) -> Result<()> {
        let action = match event {
            Some(Event::Key(key)) => self.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => self.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // Action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = self.update(a)?;
        }

        self.tick_at(now);
        Ok(())
    }

    fn change_language<F>(&mut self, change: F)
    where
        F: FnOnce(&mut CodeViewer),
    {
        if let Some(ref mut viewer) = self.viewer {
            let before = viewer.selected();
            change(viewer);
            if viewer.selected() != before {
                self.page.reset_scroll();
            }
        }
    }

    fn copy_current(&mut self) {
        let Some(ref mut viewer) = self.viewer else {
            return;
        };

        let notice = match viewer.copy_current(self.clipboard.as_mut(), Instant::now()) {
            CopyOutcome::Copied {
                bytes,
                delivery: Delivery::Confirmed,
            } => CopyNotice::Copied(format!(
                "Copied {} ({} bytes)",
                viewer.current_file_name(),
                bytes
            )),
            CopyOutcome::Copied {
                bytes,
                delivery: Delivery::Sent,
            } => CopyNotice::Sent(format!(
                "Sent {} ({} bytes) to the terminal clipboard",
                viewer.current_file_name(),
                bytes
            )),
            CopyOutcome::Failed(err) => CopyNotice::Failed(format!("Copy failed: {}", err)),
        };
        self.copy_notice = Some(notice);
    }

    fn back_to_category(&mut self) {
        let Some(category) = self.viewer.as_ref().map(|v| v.page().category.clone()) else {
            return;
        };

        if !self.browser.select_category(&self.catalog, &category) {
            // Hidden by the search filter
            self.browser.cancel_search(&self.catalog);
            self.browser.select_category(&self.catalog, &category);
        }
        debug!(%category, "back to category");
        self.sync_viewer();
    }

    fn toggle_container(&mut self) {
        let mode = self.page.toggle_display_mode();
        self.config.show_container = mode == DisplayMode::Container;

        if let Some(ref path) = self.save_path {
            if let Err(e) = self.config.save_to(path) {
                warn!(error = %e, path = %path.display(), "failed to save config");
                self.error = Some(format!("Failed to save config: {}", e));
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        info!(pages = self.catalog.len(), "catalog ready");
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    self.handle_modal_key_event(&modal, key)
                } else if self.browser.search_mode {
                    self.handle_search_key_event(key)
                } else {
                    match self.browser.handle_key_event(key)? {
                        Some(action) => Ok(Some(action)),
                        None => self.page.handle_key_event(key),
                    }
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode == AppMode::Running && self.modals.is_empty() {
            return self.page.handle_mouse_event(mouse);
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Page Navigation (delegate to BrowserComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage => {
                self.browser.next(&self.catalog);
                self.sync_viewer();
            }
            Action::PrevPage => {
                self.browser.previous(&self.catalog);
                self.sync_viewer();
            }
            Action::FirstPage => {
                self.browser.select_first(&self.catalog);
                self.sync_viewer();
            }
            Action::LastPage => {
                self.browser.select_last(&self.catalog);
                self.sync_viewer();
            }
            Action::BackToCategory => self.back_to_category(),

            // ─────────────────────────────────────────────────────────────────
            // Language Tabs (delegate to CodeViewer)
            // ─────────────────────────────────────────────────────────────────
            Action::SelectLanguage(language) => {
                self.change_language(|viewer| {
                    viewer.select_language(language);
                });
            }
            Action::SelectLanguageIndex(index) => {
                self.change_language(|viewer| {
                    viewer.select_index(index);
                });
            }
            Action::NextLanguage => self.change_language(CodeViewer::next_language),
            Action::PrevLanguage => self.change_language(CodeViewer::previous_language),

            Action::CopyCurrent => self.copy_current(),

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (delegate to PageComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                self.page.update(action)?;
            }

            Action::ToggleContainer => self.toggle_container(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenPageInfo => {
                self.page_info_dialog
                    .set_page(self.viewer.as_ref().map(|v| v.page()));
                self.modals.toggle(Modal::PageInfo);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.toggle(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if self.modals.pop() == Some(Modal::QuitConfirm) {
                    return Ok(Some(Action::ForceQuit));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Search (delegate to BrowserComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.browser.enter_search_mode(),
            Action::ExitSearchMode => self.browser.exit_search_mode(),
            Action::CancelSearch => {
                self.browser.cancel_search(&self.catalog);
                self.sync_viewer();
            }
            Action::SearchInput(c) => {
                self.browser.search_input(c, &self.catalog);
                self.sync_viewer();
            }
            Action::SearchBackspace => {
                self.browser.search_backspace(&self.catalog);
                self.sync_viewer();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let ctx = BrowserRenderContext {
                    catalog: &self.catalog,
                    viewer: self.viewer.as_ref(),
                    error: self.error.as_deref(),
                    status_message: self.status_message.as_deref(),
                    copy_notice: self.copy_notice.as_ref(),
                };

                draw_browser_screen(frame, area, &mut self.browser, &mut self.page, &ctx)?;

                // Draw modal overlays bottom to top
                let modals: Vec<Modal> = self.modals.iter().cloned().collect();
                for modal in &modals {
                    self.draw_modal(frame, area, modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::PageInfo => self.page_info_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CancelSearch),
            KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::PageInfo => self.page_info_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }

    /// Language the open page shows, if any
    pub fn selected_language(&self) -> Option<LanguageTag> {
        self.viewer.as_ref().map(CodeViewer::selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;
    use crate::services::clipboard::MemoryClipboard;
    use crossterm::event::MouseEventKind;
    use ratatui::{backend::TestBackend, Terminal};
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Clipboard handle the test keeps after the app takes ownership
    #[derive(Clone, Default)]
    struct SharedClipboard(Rc<RefCell<MemoryClipboard>>);

    impl SharedClipboard {
        fn failing(reason: &str) -> Self {
            Self(Rc::new(RefCell::new(MemoryClipboard::failing(reason))))
        }

        fn contents(&self) -> Option<String> {
            self.0.borrow().contents().map(str::to_string)
        }

        fn writes(&self) -> usize {
            self.0.borrow().writes
        }
    }

    impl ClipboardWriter for SharedClipboard {
        fn write_text(&mut self, text: &str) -> Result<Delivery, ClipboardError> {
            self.0.borrow_mut().write_text(text)
        }

        fn name(&self) -> &'static str {
            "shared"
        }
    }

    fn config() -> Config {
        Config {
            show_splash: false,
            ..Config::default()
        }
    }

    fn app_with(clipboard: SharedClipboard) -> App {
        let catalog = Catalog::builtin(LanguageTag::Cpp).unwrap();
        App::new(config(), catalog, Box::new(clipboard))
    }

    fn press(app: &mut App, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        let mut action = app.handle_key_event(KeyEvent::new(code, modifiers)).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|frame| {
                app.draw(frame, frame.area()).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn label(app: &App) -> &'static str {
        app.viewer.as_ref().unwrap().feedback().button_label()
    }

    #[test]
    fn test_starts_on_first_page_with_default_language() {
        let app = app_with(SharedClipboard::default());
        let first = app.catalog.pages()[0].slug.clone();
        assert_eq!(app.current_slug(), Some(first.as_str()));
        assert_eq!(app.selected_language(), Some(LanguageTag::Cpp));
        assert_eq!(label(&app), "Copy Code");
    }

    #[test]
    fn test_splash_then_running() {
        let catalog = Catalog::builtin(LanguageTag::Cpp).unwrap();
        let mut app = App::new(Config::default(), catalog, Box::new(SharedClipboard::default()));
        assert_eq!(app.mode, AppMode::Splash);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Running);
    }

    #[test]
    fn test_select_python_copy_and_revert() {
        let clipboard = SharedClipboard::default();
        let mut app = app_with(clipboard.clone());

        app.update(Action::SelectLanguage(LanguageTag::Python)).unwrap();
        let viewer = app.viewer.as_ref().unwrap();
        let python = viewer.page().content.get(LanguageTag::Python).unwrap().to_string();
        assert_eq!(viewer.current_text(), python);
        assert!(screen(&mut app).contains(" Python "));

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(clipboard.contents().as_deref(), Some(python.as_str()));
        assert_eq!(label(&app), "Copied");
        assert!(screen(&mut app).contains("[ Copied ]"));
        assert!(matches!(app.copy_notice, Some(CopyNotice::Copied(_))));

        app.tick_at(Instant::now() + Duration::from_millis(2000));
        assert_eq!(label(&app), "Copy Code");
        assert!(app.copy_notice.is_none());
    }

    #[test]
    fn test_failed_copy_reports_error() {
        let clipboard = SharedClipboard::failing("no display");
        let mut app = app_with(clipboard.clone());

        app.update(Action::CopyCurrent).unwrap();
        assert_eq!(clipboard.writes(), 1);
        assert_eq!(label(&app), "Copy Failed");
        assert!(!app.viewer.as_ref().unwrap().feedback().is_copied());
        match app.copy_notice {
            Some(CopyNotice::Failed(ref text)) => assert!(text.contains("no display")),
            ref other => panic!("unexpected notice {:?}", other),
        }
        assert!(app.error.is_none());
        assert!(screen(&mut app).contains("Copy failed"));
    }

    #[test]
    fn test_copy_messages_leave_other_errors_alone() {
        let mut app = app_with(SharedClipboard::default());
        app.error = Some("Invalid config".to_string());

        app.update(Action::CopyCurrent).unwrap();
        assert_eq!(app.error.as_deref(), Some("Invalid config"));

        app.tick_at(Instant::now() + Duration::from_millis(2000));
        assert!(app.copy_notice.is_none());
        assert_eq!(app.error.as_deref(), Some("Invalid config"));
        assert!(screen(&mut app).contains("Invalid config"));
    }

    #[test]
    fn test_copy_notice_dropped_with_page() {
        let mut app = app_with(SharedClipboard::default());
        app.update(Action::CopyCurrent).unwrap();
        assert!(app.copy_notice.is_some());

        press(&mut app, KeyCode::Char('j'));
        assert!(app.copy_notice.is_none());
    }

    #[test]
    fn test_indicator_reverts_while_events_keep_arriving() {
        let mut app = app_with(SharedClipboard::default());
        app.update(Action::CopyCurrent).unwrap();
        let start = Instant::now();

        let moved = || {
            Some(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            }))
        };

        app.step(moved(), start + Duration::from_millis(1000)).unwrap();
        assert_eq!(label(&app), "Copied");

        app.step(moved(), start + Duration::from_millis(2100)).unwrap();
        assert_eq!(label(&app), "Copy Code");
        assert!(app.copy_notice.is_none());
    }

    #[test]
    fn test_step_routes_key_events() {
        let mut app = app_with(SharedClipboard::default());
        let key = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        app.step(Some(key), Instant::now()).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        app.step(None, Instant::now()).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
    }

    #[test]
    fn test_switching_language_keeps_copy_flag() {
        let mut app = app_with(SharedClipboard::default());
        app.update(Action::CopyCurrent).unwrap();
        app.update(Action::NextLanguage).unwrap();
        assert_ne!(app.selected_language(), Some(LanguageTag::Cpp));
        assert_eq!(label(&app), "Copied");
    }

    #[test]
    fn test_changing_page_drops_copy_state_and_selection() {
        let mut app = app_with(SharedClipboard::default());
        let first = app.current_slug().map(str::to_string);

        app.update(Action::SelectLanguage(LanguageTag::Java)).unwrap();
        app.update(Action::CopyCurrent).unwrap();
        press(&mut app, KeyCode::Char('j'));

        assert_ne!(app.current_slug().map(str::to_string), first);
        assert_eq!(app.selected_language(), Some(LanguageTag::Cpp));
        assert_eq!(label(&app), "Copy Code");
    }

    #[test]
    fn test_language_change_resets_scroll() {
        let mut app = app_with(SharedClipboard::default());
        app.page.scroll = 3;
        app.update(Action::SelectLanguage(LanguageTag::Cpp)).unwrap();
        assert_eq!(app.page.scroll, 3);
        app.update(Action::SelectLanguageIndex(2)).unwrap();
        assert_eq!(app.page.scroll, 0);
    }

    #[test]
    fn test_number_keys_pick_tabs() {
        let mut app = app_with(SharedClipboard::default());
        press(&mut app, KeyCode::Char('4'));
        let tabs = app.viewer.as_ref().unwrap().tabs();
        assert_eq!(app.selected_language(), tabs.get(3).copied());
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.selected_language(), tabs.get(3).copied());
    }

    #[test]
    fn test_search_mode_routes_keys_to_filter() {
        let mut app = app_with(SharedClipboard::default());
        press(&mut app, KeyCode::Char('/'));
        assert!(app.browser.search_mode);

        // 'q' is text here, not quit
        for c in "quick".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.modals.is_empty());
        assert_eq!(app.browser.search_query, "quick");

        press(&mut app, KeyCode::Esc);
        assert!(!app.browser.search_mode);
        assert!(app.browser.search_query.is_empty());
        assert!(app.viewer.is_some());
    }

    #[test]
    fn test_search_enter_keeps_filter() {
        let mut app = app_with(SharedClipboard::default());
        press(&mut app, KeyCode::Char('/'));
        for c in "bubble".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(!app.browser.search_mode);
        assert_eq!(app.browser.search_query, "bubble");
        assert_eq!(app.current_slug(), Some("bubble-sort"));
    }

    #[test]
    fn test_back_to_category_clears_hiding_filter() {
        let mut app = app_with(SharedClipboard::default());
        press(&mut app, KeyCode::Char('G'));
        let category = app.viewer.as_ref().unwrap().page().category.clone();

        press(&mut app, KeyCode::Char('/'));
        for c in app.viewer.as_ref().unwrap().page().title.clone().chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);

        let expected = app
            .catalog
            .pages()
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.slug.clone());
        assert_eq!(app.current_slug().map(str::to_string), expected);
    }

    #[test]
    fn test_quit_flow() {
        let mut app = app_with(SharedClipboard::default());
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = app_with(SharedClipboard::default());
        press(&mut app, KeyCode::Char('?'));
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_info_and_help_toggle() {
        let mut app = app_with(SharedClipboard::default());
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.modals.top(), Some(&Modal::PageInfo));
        assert!(screen(&mut app).contains("Algorithm Info"));
        press(&mut app, KeyCode::Char('i'));
        assert!(app.modals.is_empty());

        press(&mut app, KeyCode::Char('?'));
        assert!(screen(&mut app).contains("Keyboard Shortcuts"));
        press(&mut app, KeyCode::Char('?'));
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_container_toggle_updates_config_without_saving() {
        let mut app = app_with(SharedClipboard::default());
        assert!(app.config.show_container);
        press(&mut app, KeyCode::Char('b'));
        assert!(!app.config.show_container);
        assert_eq!(app.page.display_mode(), DisplayMode::Bare);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_container_toggle_saves_to_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "show_splash": false, "copy_feedback_ms": 3000 }"#).unwrap();

        let startup = Config::startup(Some(path.clone()));
        let catalog = Catalog::builtin(LanguageTag::Cpp).unwrap();
        let mut app = App::new(startup.config, catalog, Box::new(SharedClipboard::default()))
            .with_save_path(startup.save_path);

        press(&mut app, KeyCode::Char('b'));

        let saved = Config::load_from(&path).unwrap().unwrap();
        assert!(!saved.show_container);
        assert_eq!(saved.copy_feedback_ms, 3000);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_container_toggle_never_overwrites_malformed_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let original = r#"{ "catalog_paths": ["~/my-algos"], "copy_feedback_ms": 3000, }"#;
        fs::write(&path, original).unwrap();

        let startup = Config::startup(Some(path.clone()));
        assert!(startup.error.is_some());
        let config = Config {
            show_splash: false,
            ..startup.config
        };
        let catalog = Catalog::builtin(LanguageTag::Cpp).unwrap();
        let mut app = App::new(config, catalog, Box::new(SharedClipboard::default()))
            .with_save_path(startup.save_path);

        press(&mut app, KeyCode::Char('b'));

        assert!(!app.config.show_container);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_running_screen_shows_list_and_page() {
        let mut app = app_with(SharedClipboard::default());
        let rendered = screen(&mut app);
        assert!(rendered.contains("Algorithms ("));
        assert!(rendered.contains("Bubble Sort"));
        assert!(rendered.contains("[ Copy Code ]"));
        assert!(rendered.contains("← Back to"));
    }
}
