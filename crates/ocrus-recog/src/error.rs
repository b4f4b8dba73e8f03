//! Error types for ocrus-recog
//!
//! Every failure here is terminal for the run: the pipeline never
//! retries, and the binary reports the diagnostic and exits.

use thiserror::Error;

/// Errors that can occur during training and recognition
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ocrus_core::Error),

    /// Filter library error
    #[error("filter error: {0}")]
    Filter(#[from] ocrus_filter::FilterError),

    /// Transform library error
    #[error("transform error: {0}")]
    Transform(#[from] ocrus_transform::TransformError),

    /// Region library error
    #[error("region error: {0}")]
    Region(#[from] ocrus_region::RegionError),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Character outside the label whitelist
    #[error("invalid label: {0:?} is not in 0-9 or A-Z")]
    InvalidLabel(char),

    /// Feature vector length disagrees with the training set
    #[error("feature vector length mismatch: expected {expected}, got {actual}")]
    VectorLength { expected: usize, actual: usize },

    /// Recognition attempted with zero training examples
    #[error("empty model: recognition requires at least one training example")]
    EmptyModel,

    /// Operator aborted the training session
    #[error("training session aborted by operator")]
    Aborted,

    /// Dataset file is malformed
    #[error("dataset format error: {0}")]
    DatasetFormat(String),

    /// I/O error reading or writing dataset files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
