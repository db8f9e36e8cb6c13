//! UI state - presentation state separate from catalog data

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

/// Whether the code block is drawn inside its decorative container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Container,
    Bare,
}

impl DisplayMode {
    pub fn from_show_container(show: bool) -> Self {
        if show {
            DisplayMode::Container
        } else {
            DisplayMode::Bare
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Container => DisplayMode::Bare,
            DisplayMode::Bare => DisplayMode::Container,
        }
    }
}

/// Status-bar message for the last copy; lives as long as the copy indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyNotice {
    Copied(String),
    Sent(String),
    Failed(String),
}

impl CopyNotice {
    pub fn text(&self) -> &str {
        match self {
            CopyNotice::Copied(text) | CopyNotice::Sent(text) | CopyNotice::Failed(text) => text,
        }
    }
}
