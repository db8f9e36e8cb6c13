//! Typed errors for catalog loading and clipboard access

use crate::model::LanguageTag;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("page '{slug}' has no snippets")]
    EmptyContent { slug: String },

    #[error("page '{slug}' defaults to {language} but has no {language} snippet")]
    MissingDefault { slug: String, language: LanguageTag },

    #[error("page '{slug}' is defined more than once in {origin}")]
    DuplicateSlug { slug: String, origin: String },

    #[error("catalog contains no pages")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),

    #[error("payload of {size} bytes exceeds the {limit} byte OSC 52 limit")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
