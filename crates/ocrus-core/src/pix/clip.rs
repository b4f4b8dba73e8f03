//! Rectangle clipping
//!
//! Extracting rectangular sub-regions from images. The canonicalizer uses
//! this to crop each candidate glyph out of the pristine binarized image.

use super::{Pix, PixelDepth};
use crate::box_::Box;
use crate::error::{Error, Result};

impl Pix {
    /// Extract a rectangular sub-region as a new image.
    ///
    /// If the rectangle extends beyond the image bounds it is clipped to
    /// the valid region. The source image is not modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the rectangle is empty or lies entirely
    /// outside the image.
    pub fn clip_rectangle(&self, rect: &Box) -> Result<Pix> {
        if rect.is_empty() {
            return Err(Error::InvalidParameter(format!(
                "empty clip rectangle: {}x{}",
                rect.w, rect.h
            )));
        }

        let clipped = rect
            .clip(self.width() as i32, self.height() as i32)
            .ok_or(Error::RectangleOutside {
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
            })?;

        let out = Pix::new(clipped.w as u32, clipped.h as u32, self.depth())?;
        let mut out_mut = out.try_into_mut().unwrap();
        if self.depth() == PixelDepth::Bit32 {
            out_mut.set_spp(self.spp());
        }

        for dy in 0..clipped.h as u32 {
            for dx in 0..clipped.w as u32 {
                let sx = clipped.x as u32 + dx;
                let sy = clipped.y as u32 + dy;
                out_mut.set_pixel_unchecked(dx, dy, self.get_pixel_unchecked(sx, sy));
            }
        }

        Ok(out_mut.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_pix(w: u32, h: u32) -> Pix {
        let pix = Pix::new(w, h, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        for y in 0..h {
            for x in 0..w {
                pm.set_pixel(x, y, (x + y * w) % 256).unwrap();
            }
        }
        pm.into()
    }

    #[test]
    fn test_clip_interior() {
        let pix = gradient_pix(10, 10);
        let crop = pix.clip_rectangle(&Box::new_unchecked(2, 3, 4, 5)).unwrap();
        assert_eq!(crop.width(), 4);
        assert_eq!(crop.height(), 5);
        for y in 0..5u32 {
            for x in 0..4u32 {
                assert_eq!(crop.get_pixel(x, y), pix.get_pixel(x + 2, y + 3));
            }
        }
    }

    #[test]
    fn test_clip_is_clipped_to_bounds() {
        let pix = gradient_pix(8, 8);
        let crop = pix.clip_rectangle(&Box::new_unchecked(6, 6, 10, 10)).unwrap();
        assert_eq!(crop.width(), 2);
        assert_eq!(crop.height(), 2);
    }

    #[test]
    fn test_clip_outside_fails() {
        let pix = gradient_pix(8, 8);
        assert!(pix.clip_rectangle(&Box::new_unchecked(20, 20, 4, 4)).is_err());
        assert!(pix.clip_rectangle(&Box::new_unchecked(0, 0, 0, 4)).is_err());
    }

    #[test]
    fn test_clip_leaves_source_untouched() {
        let pix = gradient_pix(6, 6);
        let before: Vec<u32> = pix.data().to_vec();
        let _ = pix.clip_rectangle(&Box::new_unchecked(1, 1, 3, 3)).unwrap();
        assert_eq!(pix.data(), &before[..]);
    }
}
