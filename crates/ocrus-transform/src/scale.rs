//! Image scaling
//!
//! Resizing cropped glyphs to the fixed canonical shape. Training and
//! recognition must resize with the same method: a mismatch does not
//! fail loudly, it just quietly ruins nearest-neighbor accuracy, so the
//! canonicalizer pins [`ScaleMethod::Linear`] and both phases go through
//! this one implementation.

use crate::{TransformError, TransformResult};
use ocrus_core::{Pix, PixelDepth};

/// Scaling method to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (fastest, pixelated results)
    Sampling,
    /// Bilinear interpolation
    Linear,
}

fn check_grayscale(pix: &Pix) -> TransformResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(TransformError::UnsupportedDepth {
            expected: "8 bpp",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Scale an 8-bit grayscale image to a specific size.
///
/// # Errors
///
/// Returns an error if the input is not 8 bpp or either target
/// dimension is 0.
pub fn scale_to_size(
    pix: &Pix,
    width: u32,
    height: u32,
    method: ScaleMethod,
) -> TransformResult<Pix> {
    check_grayscale(pix)?;
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "target size must be positive: {}x{}",
            width, height
        )));
    }

    if width == pix.width() && height == pix.height() {
        return Ok(pix.clone());
    }

    match method {
        ScaleMethod::Sampling => scale_by_sampling(pix, width, height),
        ScaleMethod::Linear => scale_linear(pix, width, height),
    }
}

/// Scale by nearest-neighbor sampling.
fn scale_by_sampling(pix: &Pix, width: u32, height: u32) -> TransformResult<Pix> {
    let sx = pix.width() as f32 / width as f32;
    let sy = pix.height() as f32 / height as f32;

    let out = Pix::new(width, height, PixelDepth::Bit8)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..height {
        let src_y = ((y as f32 * sy) as u32).min(pix.height() - 1);
        for x in 0..width {
            let src_x = ((x as f32 * sx) as u32).min(pix.width() - 1);
            out_mut.set_pixel_unchecked(x, y, pix.get_pixel_unchecked(src_x, src_y));
        }
    }

    Ok(out_mut.into())
}

/// Scale by bilinear interpolation.
///
/// Destination pixel centers map back into the source with the usual
/// half-pixel offset; source coordinates are clamped at the borders.
fn scale_linear(pix: &Pix, width: u32, height: u32) -> TransformResult<Pix> {
    let src_w = pix.width();
    let src_h = pix.height();
    let sx = src_w as f32 / width as f32;
    let sy = src_h as f32 / height as f32;

    let out = Pix::new(width, height, PixelDepth::Bit8)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..height {
        let fy = ((y as f32 + 0.5) * sy - 0.5).max(0.0);
        let y0 = (fy as u32).min(src_h - 1);
        let y1 = (y0 + 1).min(src_h - 1);
        let wy = fy - y0 as f32;

        for x in 0..width {
            let fx = ((x as f32 + 0.5) * sx - 0.5).max(0.0);
            let x0 = (fx as u32).min(src_w - 1);
            let x1 = (x0 + 1).min(src_w - 1);
            let wx = fx - x0 as f32;

            let p00 = pix.get_pixel_unchecked(x0, y0) as f32;
            let p10 = pix.get_pixel_unchecked(x1, y0) as f32;
            let p01 = pix.get_pixel_unchecked(x0, y1) as f32;
            let p11 = pix.get_pixel_unchecked(x1, y1) as f32;

            let top = p00 + wx * (p10 - p00);
            let bot = p01 + wx * (p11 - p01);
            let val = top + wy * (bot - top);

            out_mut.set_pixel_unchecked(x, y, (val + 0.5).clamp(0.0, 255.0) as u32);
        }
    }

    Ok(out_mut.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(w: u32, h: u32) -> Pix {
        let pix = Pix::new(w, h, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        for y in 0..h {
            for x in 0..w {
                pm.set_pixel(x, y, if (x + y) % 2 == 0 { 255 } else { 0 }).unwrap();
            }
        }
        pm.into()
    }

    #[test]
    fn test_target_dimensions() {
        let pix = checkerboard(13, 9);
        for method in [ScaleMethod::Sampling, ScaleMethod::Linear] {
            let out = scale_to_size(&pix, 20, 30, method).unwrap();
            assert_eq!(out.width(), 20);
            assert_eq!(out.height(), 30);
        }
    }

    #[test]
    fn test_identity_size_is_noop() {
        let pix = checkerboard(8, 8);
        let out = scale_to_size(&pix, 8, 8, ScaleMethod::Linear).unwrap();
        assert_eq!(out.data(), pix.data());
    }

    #[test]
    fn test_flat_image_stays_flat() {
        let pix = Pix::new(17, 5, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_all(180);
        let pix: Pix = pm.into();
        let out = scale_to_size(&pix, 20, 30, ScaleMethod::Linear).unwrap();
        for y in 0..30 {
            for x in 0..20 {
                assert_eq!(out.get_pixel(x, y), Some(180));
            }
        }
    }

    #[test]
    fn test_upscale_by_sampling_replicates() {
        let pix = Pix::new(2, 1, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_pixel(0, 0, 10).unwrap();
        pm.set_pixel(1, 0, 200).unwrap();
        let pix: Pix = pm.into();
        let out = scale_to_size(&pix, 4, 1, ScaleMethod::Sampling).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some(10));
        assert_eq!(out.get_pixel(1, 0), Some(10));
        assert_eq!(out.get_pixel(2, 0), Some(200));
        assert_eq!(out.get_pixel(3, 0), Some(200));
    }

    #[test]
    fn test_linear_interpolates_between_values() {
        let pix = Pix::new(2, 1, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_pixel(0, 0, 0).unwrap();
        pm.set_pixel(1, 0, 200).unwrap();
        let pix: Pix = pm.into();
        let out = scale_to_size(&pix, 4, 1, ScaleMethod::Linear).unwrap();
        // Interior pixels take intermediate values
        let v1 = out.get_pixel(1, 0).unwrap();
        let v2 = out.get_pixel(2, 0).unwrap();
        assert!(v1 > 0 && v1 < 200);
        assert!(v2 > v1);
    }

    #[test]
    fn test_scaling_deterministic() {
        let pix = checkerboard(11, 7);
        let a = scale_to_size(&pix, 20, 30, ScaleMethod::Linear).unwrap();
        let b = scale_to_size(&pix, 20, 30, ScaleMethod::Linear).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_rejects_zero_target_and_rgb() {
        let pix = checkerboard(4, 4);
        assert!(scale_to_size(&pix, 0, 4, ScaleMethod::Linear).is_err());
        let rgb = Pix::new(4, 4, PixelDepth::Bit32).unwrap();
        assert!(scale_to_size(&rgb, 2, 2, ScaleMethod::Linear).is_err());
    }
}
