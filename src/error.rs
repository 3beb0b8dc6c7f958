// src/error.rs
// Error types for reading project memory

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the project-memory library
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Result using MemoryError
pub type Result<T> = std::result::Result<T, MemoryError>;
