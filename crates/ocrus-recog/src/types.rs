//! Pipeline configuration
//!
//! All tunable constants of the segmentation-and-classification pipeline
//! in one explicit struct, passed into each stage. Nothing reads ambient
//! global state, so tests can vary any constant independently.

use crate::error::{RecogError, RecogResult};
use ocrus_filter::AdaptiveMethod;

/// Configuration for the shared segmentation pipeline and the
/// canonical feature shape.
///
/// The defaults reproduce the constants the recognizer was tuned with:
/// 5x5 Gaussian blur, Gaussian-weighted adaptive threshold with an
/// 11-pixel window and offset 2, minimum region area 100, canonical
/// shape 20x30.
#[derive(Debug, Clone)]
pub struct PipelineParams {
    /// Gaussian blur radius (kernel size is `2 * radius + 1`)
    pub blur_radius: u32,
    /// Gaussian blur standard deviation
    pub blur_sigma: f32,
    /// Adaptive threshold window size (odd, >= 3)
    pub thresh_window: u32,
    /// Constant subtracted from the local mean
    pub thresh_offset: f32,
    /// Local mean weighting
    pub thresh_method: AdaptiveMethod,
    /// Minimum region area in foreground pixels
    pub min_area: u32,
    /// Canonical glyph width
    pub canon_width: u32,
    /// Canonical glyph height
    pub canon_height: u32,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            blur_radius: 2,
            blur_sigma: 1.1,
            thresh_window: 11,
            thresh_offset: 2.0,
            thresh_method: AdaptiveMethod::Gaussian,
            min_area: 100,
            canon_width: 20,
            canon_height: 30,
        }
    }
}

impl PipelineParams {
    /// Length of a canonical feature vector under these parameters.
    #[inline]
    pub fn canon_len(&self) -> usize {
        (self.canon_width * self.canon_height) as usize
    }

    /// Check parameter consistency.
    ///
    /// # Errors
    ///
    /// Returns an error for zero canonical dimensions; the threshold
    /// window is validated by the filter stage itself.
    pub fn validate(&self) -> RecogResult<()> {
        if self.canon_width == 0 || self.canon_height == 0 {
            return Err(RecogError::InvalidParameter(format!(
                "canonical shape must be positive: {}x{}",
                self.canon_width, self.canon_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canon_len() {
        let params = PipelineParams::default();
        assert_eq!(params.canon_len(), 600);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_canon() {
        let params = PipelineParams {
            canon_width: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
