//! Shared segmentation front end
//!
//! Both phases run the same chain: grayscale conversion, Gaussian
//! smoothing, adaptive thresholding, outer-border extraction, area
//! filtering. Training labels the surviving candidates; recognition
//! classifies them.

use crate::error::RecogResult;
use crate::types::PipelineParams;
use ocrus_core::{Pix, convert_to_gray};
use ocrus_filter::{AdaptiveThresholdOptions, ThresholdPolarity, adaptive_threshold, gaussian_blur};
use ocrus_region::{Region, filter_by_min_area, find_outer_regions};

/// Binarize a source image for glyph extraction.
///
/// Produces an 8 bpp {0, 255} image with ink as foreground 255. The
/// result must stay pristine for cropping; stages that need a scratch
/// copy make their own.
pub fn binarize(src: &Pix, params: &PipelineParams) -> RecogResult<Pix> {
    let gray = convert_to_gray(src)?;
    let blurred = gaussian_blur(&gray, params.blur_radius, params.blur_sigma)?;
    let options = AdaptiveThresholdOptions {
        window_size: params.thresh_window,
        offset: params.thresh_offset,
        method: params.thresh_method,
        polarity: ThresholdPolarity::Inverted,
    };
    Ok(adaptive_threshold(&blurred, &options)?)
}

/// Extract glyph candidates from a binarized image.
///
/// Returns the outermost regions with `area >= params.min_area`, in
/// discovery order. Callers needing reading order sort explicitly.
pub fn find_glyph_regions(bin: &Pix, params: &PipelineParams) -> RecogResult<Vec<Region>> {
    let regions = find_outer_regions(bin)?;
    Ok(filter_by_min_area(regions, params.min_area))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocrus_core::{PixMut, PixelDepth};

    /// White page with a black ink bar (stroke thin enough for the
    /// adaptive window).
    fn page_with_bar() -> Pix {
        let pix = Pix::new(40, 40, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_all(255);
        ink_rect(&mut pm, 18, 10, 4, 20);
        pm.into()
    }

    fn ink_rect(pm: &mut PixMut, x: u32, y: u32, w: u32, h: u32) {
        for yy in y..y + h {
            for xx in x..x + w {
                pm.set_pixel(xx, yy, 0).unwrap();
            }
        }
    }

    #[test]
    fn test_binarize_ink_is_foreground() {
        let src = page_with_bar();
        let bin = binarize(&src, &PipelineParams::default()).unwrap();
        assert_eq!(bin.depth(), PixelDepth::Bit8);
        assert_eq!(bin.get_pixel(19, 20), Some(255));
        assert_eq!(bin.get_pixel(5, 5), Some(0));
    }

    #[test]
    fn test_blank_page_has_no_regions() {
        let pix = Pix::new(32, 32, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_all(255);
        let src: Pix = pm.into();

        let params = PipelineParams::default();
        let bin = binarize(&src, &params).unwrap();
        let regions = find_glyph_regions(&bin, &params).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_bar_survives_filtering() {
        let src = page_with_bar();
        let params = PipelineParams {
            min_area: 60,
            ..Default::default()
        };
        let bin = binarize(&src, &params).unwrap();
        let regions = find_glyph_regions(&bin, &params).unwrap();
        assert_eq!(regions.len(), 1);
        // The candidate covers the drawn bar
        let b = regions[0].bounds;
        assert!(b.contains_point(19, 11));
        assert!(b.contains_point(20, 28));
    }

    #[test]
    fn test_chain_is_deterministic() {
        let src = page_with_bar();
        let params = PipelineParams::default();
        let bin_a = binarize(&src, &params).unwrap();
        let bin_b = binarize(&src, &params).unwrap();
        assert_eq!(bin_a.data(), bin_b.data());
    }
}
