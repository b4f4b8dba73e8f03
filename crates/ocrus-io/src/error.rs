//! Error types for ocrus-io

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during image file I/O
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ocrus_core::Error),

    /// File could not be read or decoded
    #[error("failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// File could not be encoded or written
    #[error("failed to write image {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
