//! Canonicalization
//!
//! Turns one region of a binarized image into the fixed-shape numeric
//! feature vector the classifier operates on: crop the bounding box,
//! resize to the canonical shape, flatten row-major.
//!
//! The crop must come from the pristine binarized image, and the resize
//! method is pinned to linear interpolation for both phases; training
//! and recognition disagreeing here would not fail anywhere visible, it
//! would just erode matching accuracy.

use crate::error::RecogResult;
use crate::types::PipelineParams;
use ocrus_core::Pix;
use ocrus_region::Region;
use ocrus_transform::{ScaleMethod, scale_to_size};

/// Crop a region from the binarized image and resize it to the
/// canonical shape.
///
/// Pure: neither input is modified. Exposed separately so the training
/// display can show the operator exactly what will be stored.
pub fn canonical_crop(bin: &Pix, region: &Region, params: &PipelineParams) -> RecogResult<Pix> {
    params.validate()?;
    let crop = bin.clip_rectangle(&region.bounds)?;
    let canon = scale_to_size(
        &crop,
        params.canon_width,
        params.canon_height,
        ScaleMethod::Linear,
    )?;
    Ok(canon)
}

/// Flatten an image into a row-major `f32` vector.
pub fn flatten(pix: &Pix) -> Vec<f32> {
    let mut out = Vec::with_capacity((pix.width() * pix.height()) as usize);
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            out.push(pix.get_pixel_unchecked(x, y) as f32);
        }
    }
    out
}

/// Produce the canonical feature vector for a region.
///
/// The result always has exactly `canon_width * canon_height` entries,
/// regardless of the region's original size.
pub fn canonicalize(bin: &Pix, region: &Region, params: &PipelineParams) -> RecogResult<Vec<f32>> {
    let canon = canonical_crop(bin, region, params)?;
    Ok(flatten(&canon))
}
