//! Catalog loading services
//!
//! Reads user catalog files from disk and merges them over the built-in
//! catalog. A bad user file never prevents startup: it is reported and the
//! rest of the catalog still loads.

use crate::error::CatalogError;
use crate::model::{AlgorithmPage, Catalog, LanguageTag};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of assembling the catalog
#[derive(Debug)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    /// User files that could not be loaded
    pub errors: Vec<CatalogError>,
}

/// Load every page from one YAML file
pub fn load_catalog_file<P: AsRef<Path>>(
    path: P,
    fallback: LanguageTag,
) -> Result<Vec<AlgorithmPage>, CatalogError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Catalog::parse(&contents, &path.display().to_string(), fallback)
}

/// Expand a configured path into catalog files
///
/// Directories contribute their `.yaml`/`.yml` files in name order.
pub fn catalog_files<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>, CatalogError> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let entries = fs::read_dir(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.is_file()
                && matches!(
                    p.extension().and_then(|e| e.to_str()),
                    Some("yaml") | Some("yml")
                )
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Build the catalog: built-in pages first, then each configured path
pub fn load_catalog(paths: &[String], fallback: LanguageTag) -> Result<CatalogLoad, CatalogError> {
    let mut catalog = Catalog::builtin(fallback)?;
    let mut errors = Vec::new();

    for configured in paths {
        let files = match catalog_files(expand_home(configured)) {
            Ok(files) => files,
            Err(err) => {
                warn!(path = %configured, error = %err, "skipping catalog path");
                errors.push(err);
                continue;
            }
        };

        for file in files {
            match load_catalog_file(&file, fallback) {
                Ok(pages) => {
                    let count = pages.len();
                    let replaced = catalog.merge(pages);
                    info!(file = %file.display(), count, replaced, "catalog file merged");
                }
                Err(err) => {
                    warn!(file = %file.display(), error = %err, "skipping catalog file");
                    errors.push(err);
                }
            }
        }
    }

    Ok(CatalogLoad { catalog, errors })
}

/// Expand a leading `~/` using `$HOME`
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}
