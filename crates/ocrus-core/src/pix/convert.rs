//! Pixel depth conversion
//!
//! The pipeline's first stage: reducing a loaded color image to a single
//! intensity channel before smoothing and thresholding.

use super::{Pix, PixelDepth};
use crate::color;
use crate::error::Result;

/// Perceptual weights for RGB-to-gray conversion.
const RED_WEIGHT: f32 = 0.3;
const GREEN_WEIGHT: f32 = 0.5;
const BLUE_WEIGHT: f32 = 0.2;

/// Convert a 32 bpp RGB image to 8 bpp grayscale using perceptual weights.
///
/// The alpha channel, if present, is ignored.
pub fn rgb_to_gray(pix: &Pix) -> Result<Pix> {
    debug_assert_eq!(pix.depth(), PixelDepth::Bit32);

    let w = pix.width();
    let h = pix.height();
    let out = Pix::new(w, h, PixelDepth::Bit8)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(x, y));
            let gray = RED_WEIGHT * r as f32 + GREEN_WEIGHT * g as f32 + BLUE_WEIGHT * b as f32;
            out_mut.set_pixel_unchecked(x, y, (gray + 0.5) as u32);
        }
    }

    Ok(out_mut.into())
}

/// Convert any supported image to 8 bpp grayscale.
///
/// 8 bpp input is returned as a cheap shared clone.
pub fn convert_to_gray(pix: &Pix) -> Result<Pix> {
    match pix.depth() {
        PixelDepth::Bit8 => Ok(pix.clone()),
        PixelDepth::Bit32 => rgb_to_gray(pix),
    }
}

/// Convert an 8 bpp grayscale image to 32 bpp RGB (R = G = B = gray).
///
/// Used to produce display copies that annotation boxes are drawn on.
pub fn gray_to_rgb(pix: &Pix) -> Result<Pix> {
    debug_assert_eq!(pix.depth(), PixelDepth::Bit8);

    let w = pix.width();
    let h = pix.height();
    let out = Pix::new(w, h, PixelDepth::Bit32)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..h {
        for x in 0..w {
            let v = pix.get_pixel_unchecked(x, y) as u8;
            out_mut.set_pixel_unchecked(x, y, color::compose_rgb(v, v, v));
        }
    }

    Ok(out_mut.into())
}
