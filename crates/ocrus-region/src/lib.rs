//! ocrus-region - Region extraction for the ocrus OCR pipeline
//!
//! This crate finds the connected foreground regions of a binarized
//! image and prepares them for classification:
//!
//! - **Outer-border extraction** - Moore border following, outermost
//!   regions only
//! - **Area filtering** - noise-speckle rejection
//! - **Spatial ordering** - left-to-right reading order
//!
//! # Examples
//!
//! ```
//! use ocrus_core::{Pix, PixelDepth};
//! use ocrus_region::{filter_by_min_area, find_outer_regions};
//!
//! let pix = Pix::new(50, 50, PixelDepth::Bit8).unwrap();
//! let mut pix_mut = pix.try_into_mut().unwrap();
//! for y in 10..20 {
//!     for x in 10..20 {
//!         pix_mut.set_pixel(x, y, 255).unwrap();
//!     }
//! }
//! let pix: Pix = pix_mut.into();
//!
//! let regions = find_outer_regions(&pix).unwrap();
//! assert_eq!(regions.len(), 1);
//! let kept = filter_by_min_area(regions, 50);
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].area, 100);
//! ```

pub mod error;
pub mod extract;
pub mod select;

pub use error::{RegionError, RegionResult};
pub use extract::{BorderPoint, Direction, Region, find_outer_regions};
pub use select::{filter_by_min_area, sort_left_to_right};
