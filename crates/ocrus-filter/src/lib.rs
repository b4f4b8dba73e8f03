//! ocrus-filter - Smoothing and binarization
//!
//! The front half of the glyph pipeline: Gaussian smoothing to suppress
//! pixel noise, then locally-adaptive thresholding to produce a clean
//! foreground/background image.
//!
//! # Examples
//!
//! ```
//! use ocrus_core::{Pix, PixelDepth};
//! use ocrus_filter::{AdaptiveThresholdOptions, adaptive_threshold, gaussian_blur};
//!
//! let pix = Pix::new(32, 32, PixelDepth::Bit8).unwrap();
//! let smoothed = gaussian_blur(&pix, 2, 1.1).unwrap();
//! let binary = adaptive_threshold(&smoothed, &AdaptiveThresholdOptions::default()).unwrap();
//! assert_eq!(binary.width(), 32);
//! ```

pub mod convolve;
pub mod error;
pub mod kernel;
pub mod threshold;

pub use convolve::{convolve_gray, gaussian_blur};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
pub use threshold::{
    AdaptiveMethod, AdaptiveThresholdOptions, BACKGROUND, FOREGROUND, ThresholdPolarity,
    adaptive_threshold, threshold_to_binary,
};
