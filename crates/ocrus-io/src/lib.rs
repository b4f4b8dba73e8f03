//! ocrus-io - Raster file I/O
//!
//! Decodes image files (PNG, JPEG, BMP, and anything else the `image`
//! crate recognizes) into [`Pix`] and encodes [`Pix`] back out. Grayscale
//! sources stay 8 bpp; everything else converts to 32 bpp RGB(A).

pub mod error;

pub use error::{IoError, IoResult};

use image::{DynamicImage, ImageBuffer, Rgba};
use ocrus_core::{Pix, PixelDepth, color};
use std::path::Path;

/// Read an image file into a [`Pix`].
///
/// The format is detected from the file content. An 8-bit grayscale
/// source produces an 8 bpp `Pix`; any color or higher-depth source is
/// converted to 32 bpp RGBA.
///
/// # Errors
///
/// Returns [`IoError::Read`] if the file cannot be opened or decoded.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match img {
        DynamicImage::ImageLuma8(gray) => {
            let (w, h) = gray.dimensions();
            let pix = Pix::new(w, h, PixelDepth::Bit8)?;
            let mut pix_mut = pix.try_into_mut().unwrap();
            for (x, y, p) in gray.enumerate_pixels() {
                pix_mut.set_pixel_unchecked(x, y, p.0[0] as u32);
            }
            Ok(pix_mut.into())
        }
        other => {
            let rgba = other.to_rgba8();
            let (w, h) = rgba.dimensions();
            let pix = Pix::new(w, h, PixelDepth::Bit32)?;
            let mut pix_mut = pix.try_into_mut().unwrap();
            pix_mut.set_spp(4);
            for (x, y, p) in rgba.enumerate_pixels() {
                let [r, g, b, a] = p.0;
                pix_mut.set_pixel_unchecked(x, y, color::compose_rgba(r, g, b, a));
            }
            Ok(pix_mut.into())
        }
    }
}

/// Write a [`Pix`] to a file.
///
/// The format is chosen from the file extension (use `.png` for the
/// annotated display copies).
///
/// # Errors
///
/// Returns [`IoError::Write`] if the file cannot be encoded or written.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let path = path.as_ref();
    match pix.depth() {
        PixelDepth::Bit8 => {
            let mut buf = ImageBuffer::new(pix.width(), pix.height());
            for (x, y, p) in buf.enumerate_pixels_mut() {
                *p = image::Luma([pix.get_pixel_unchecked(x, y) as u8]);
            }
            buf.save(path).map_err(|source| IoError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
        PixelDepth::Bit32 => {
            let mut buf: ImageBuffer<Rgba<u8>, Vec<u8>> =
                ImageBuffer::new(pix.width(), pix.height());
            for (x, y, p) in buf.enumerate_pixels_mut() {
                let (r, g, b, a) = color::extract_rgba(pix.get_pixel_unchecked(x, y));
                *p = Rgba([r, g, b, a]);
            }
            buf.save(path).map_err(|source| IoError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
