//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `Catalog` / `AlgorithmPage` - The pages and their snippets
//! - `CodeViewer` - State of the page currently on screen
//! - `ModalStack` - Modal overlay management

pub mod catalog;
pub mod copy_feedback;
pub mod language;
pub mod modal;
pub mod ui;
pub mod viewer;

// Re-export commonly used types
pub use catalog::{AlgorithmPage, Catalog, Complexity, ContentMap, PageSpec};
pub use copy_feedback::{CopyFeedback, CopyState};
pub use language::LanguageTag;
pub use viewer::{CodeViewer, CopyOutcome};
