//! ocrus-transform - Image scaling
//!
//! Provides the deterministic resize used to bring every cropped glyph
//! to the canonical feature shape.

pub mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{ScaleMethod, scale_to_size};
