//! JSON document files
//!
//! Each collection is a single JSON array on disk. A missing file is an
//! empty collection. Documents that do not fit the expected shape are
//! skipped with a warning so one bad record cannot hide the rest.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Profiles collection filename
pub const PROFILES_FILE: &str = "profiles.json";

/// Schemes collection filename
pub const SCHEMES_FILE: &str = "schemes.json";

/// Errors raised by the JSON document store
#[derive(Debug, Error)]
pub enum StoreError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// File could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// File is not a valid JSON array of documents
    #[error("malformed documents in {path}: {source}")]
    Malformed {
        /// File path
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// Documents could not be serialized
    #[error("failed to encode documents: {0}")]
    Encode(#[from] serde_json::Error),

    /// Another writer panicked while holding the store lock
    #[error("store lock poisoned")]
    Poisoned,
}

/// Load every document in a collection file
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not a
/// JSON array. Individual documents that fail to parse are skipped.
pub fn load_documents<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let raw = load_raw_documents(path)?;
    let total = raw.len();
    let documents: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("Skipping document #{index} in {}: {e}", path.display());
                None
            },
        })
        .collect();

    if documents.len() < total {
        warn!("Loaded {} of {total} documents from {}", documents.len(), path.display());
    }
    Ok(documents)
}

/// Load a collection file as untyped documents
///
/// # Errors
///
/// Returns an error if the file exists but is not a JSON array.
pub fn load_raw_documents(path: &Path) -> Result<Vec<Value>, StoreError> {
    match fs::read_to_string(path) {
        Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
        Ok(content) => load_raw(path, &content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(source) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn load_raw(path: &Path, content: &str) -> Result<Vec<Value>, StoreError> {
    serde_json::from_str(content).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace a collection file with the given documents
///
/// # Errors
///
/// Returns an error if the parent directory or file cannot be written.
pub fn save_documents<T: Serialize>(path: &Path, documents: &[T]) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(documents)?;
    fs::write(path, content).map_err(write_err)
}
