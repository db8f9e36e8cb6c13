//! External service interactions
//!
//! This module contains services for interacting with external systems:
//! - Catalog files on disk
//! - The system clipboard and the terminal's OSC 52 clipboard

pub mod catalog;
pub mod clipboard;

pub use catalog::{load_catalog, CatalogLoad};
pub use clipboard::{create_clipboard, ClipboardBackend, ClipboardWriter, Delivery};
