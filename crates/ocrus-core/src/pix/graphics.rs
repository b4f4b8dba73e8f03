//! Graphics rendering
//!
//! Box-outline drawing for the annotated display copies: a red marker
//! around the candidate being labeled during training, green markers
//! around every classified glyph during recognition. Annotation is
//! cosmetic; the pipeline never reads these copies back.

use super::{PixMut, PixelDepth};
use crate::box_::Box;
use crate::error::{Error, Result};

/// RGB color for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red color
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    /// Green color
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };

    /// Convert to grayscale value (0-255)
    pub fn to_gray(&self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }

    /// Compose as 32-bit RGBA pixel
    pub fn to_pixel32(&self) -> u32 {
        crate::color::compose_rgb(self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl PixMut {
    /// Draw a rectangle outline with the given line width and color.
    ///
    /// The outline grows inward from the box edges. Portions outside the
    /// image are silently clipped; a box entirely outside is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if `line_width` is 0.
    pub fn render_box_outline(&mut self, rect: &Box, line_width: u32, color: Color) -> Result<()> {
        if line_width == 0 {
            return Err(Error::InvalidParameter(
                "line width must be positive".to_string(),
            ));
        }

        let val = match self.depth() {
            PixelDepth::Bit8 => color.to_gray() as u32,
            PixelDepth::Bit32 => color.to_pixel32(),
        };

        let w = self.width() as i32;
        let h = self.height() as i32;
        let lw = line_width as i32;

        let mut fill = |bx: i32, by: i32, bw: i32, bh: i32| {
            let Some(part) = Box::new_unchecked(bx, by, bw, bh).clip(w, h) else {
                return;
            };
            for y in part.y..part.bottom() {
                for x in part.x..part.right() {
                    self.set_pixel_unchecked(x as u32, y as u32, val);
                }
            }
        };

        // Top, bottom, left, right bands
        fill(rect.x, rect.y, rect.w, lw);
        fill(rect.x, rect.bottom() - lw, rect.w, lw);
        fill(rect.x, rect.y, lw, rect.h);
        fill(rect.right() - lw, rect.y, lw, rect.h);

        Ok(())
    }
}
