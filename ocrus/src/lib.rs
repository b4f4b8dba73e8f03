//! Ocrus - isolated-glyph OCR in pure Rust
//!
//! Segments printed alphanumeric glyphs out of a raster image and
//! classifies each by 1-nearest-neighbor matching against an
//! operator-labeled training set.
//!
//! # Overview
//!
//! The pipeline runs binarization (grayscale, Gaussian blur, adaptive
//! threshold), outer-border region extraction, area filtering, and
//! canonicalization into fixed-shape feature vectors. A training
//! session pairs those vectors with operator-assigned labels; a
//! recognition run matches them against the stored pairs and assembles
//! the text left to right.
//!
//! # Example
//!
//! ```
//! use ocrus::{Pix, PixelDepth};
//!
//! // Create an 8-bit grayscale image
//! let pix = Pix::new(640, 480, PixelDepth::Bit8).unwrap();
//! assert_eq!(pix.width(), 640);
//! assert_eq!(pix.height(), 480);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ocrus_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use ocrus_filter as filter;
pub use ocrus_io as io;
pub use ocrus_recog as recog;
pub use ocrus_region as region;
pub use ocrus_transform as transform;
