//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod browser;
pub mod code_block;
pub mod code_highlight;
pub mod help_dialog;
pub mod layout;
pub mod page;
pub mod page_info_dialog;
pub mod quit_dialog;
pub mod splash;

pub use browser::{draw_browser_screen, BrowserComponent, BrowserRenderContext};
pub use code_block::CodeBlock;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use page::PageComponent;
pub use page_info_dialog::PageInfoDialog;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
