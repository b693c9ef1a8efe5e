//! Error types for verse store access.
//!
//! Copyright (c) 2025 Posit, PBC

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scripture-store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Infrastructure failures of a verse store.
///
/// A verse that is simply absent is not an error; lookups report it as
/// `Ok(None)` and retrieval substitutes a placeholder record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be read
    #[error("Failed to read verse store {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The store file is not a valid verse map
    #[error("Invalid verse store {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// In-memory store content is not a valid verse map
    #[error("Invalid verse store content: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backing store cannot serve requests at all
    #[error("Verse store unavailable: {0}")]
    Unavailable(String),
}
