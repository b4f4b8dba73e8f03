//! Recognition driver
//!
//! Classifies every glyph candidate of a query image against a loaded
//! training set and reassembles the text in reading order.

use crate::canon::canonicalize;
use crate::dataset::TrainingSet;
use crate::error::RecogResult;
use crate::knn::NearestNeighbor;
use crate::label::GlyphLabel;
use crate::segment::{binarize, find_glyph_regions};
use crate::types::PipelineParams;
use ocrus_core::{Box, Color, Pix, PixelDepth, gray_to_rgb};
use ocrus_region::sort_left_to_right;

/// One classified glyph
#[derive(Debug, Clone, Copy)]
pub struct RecognizedGlyph {
    /// Bounding box in the query image
    pub bounds: Box,
    /// Assigned label
    pub label: GlyphLabel,
}

/// Result of a recognition run
#[derive(Debug)]
pub struct Recognition {
    /// Assembled text, left to right
    pub text: String,
    /// Classified glyphs in reading order
    pub glyphs: Vec<RecognizedGlyph>,
    /// Display copy of the query image with a marker box around every
    /// classified glyph (cosmetic; nothing downstream reads it)
    pub annotated: Pix,
}

/// Concatenate labels into the output string.
pub fn assemble_text<I: IntoIterator<Item = GlyphLabel>>(labels: I) -> String {
    labels.into_iter().map(GlyphLabel::as_char).collect()
}

/// Recognize the glyphs of a query image.
///
/// The classifier is built first, so a zero-row training set fails with
/// [`crate::RecogError::EmptyModel`] before any segmentation work or
/// classification happens. Candidates are then segmented, filtered,
/// sorted left to right, canonicalized, and classified one by one.
///
/// # Errors
///
/// Fails on an empty training set, on a canonical-shape mismatch
/// between `params` and the set, or if any pipeline stage fails.
pub fn recognize(
    src: &Pix,
    set: &TrainingSet,
    params: &PipelineParams,
) -> RecogResult<Recognition> {
    params.validate()?;
    let classifier = NearestNeighbor::new(set)?;

    let bin = binarize(src, params)?;
    let mut regions = find_glyph_regions(&bin, params)?;
    sort_left_to_right(&mut regions);

    let mut display = match src.depth() {
        PixelDepth::Bit8 => gray_to_rgb(src)?,
        PixelDepth::Bit32 => src.deep_clone(),
    }
    .try_into_mut()
    .unwrap();

    let mut glyphs = Vec::with_capacity(regions.len());
    for region in &regions {
        let vector = canonicalize(&bin, region, params)?;
        let label = classifier.classify(&vector)?;
        display.render_box_outline(&region.bounds, 2, Color::GREEN)?;
        glyphs.push(RecognizedGlyph {
            bounds: region.bounds,
            label,
        });
    }

    Ok(Recognition {
        text: assemble_text(glyphs.iter().map(|g| g.label)),
        glyphs,
        annotated: display.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecogError;
    use ocrus_region::{Region, filter_by_min_area};

    fn label(c: char) -> GlyphLabel {
        GlyphLabel::from_char(c).unwrap()
    }

    #[test]
    fn test_assemble_text() {
        let text = assemble_text([label('H'), label('I'), label('5')]);
        assert_eq!(text, "HI5");
        assert_eq!(assemble_text([]), "");
    }

    #[test]
    fn test_spatial_order_drives_assembly() {
        // Regions discovered at x = 50, 10, 30 with labels C, A, B must
        // assemble to "ABC" after the left-to-right sort
        let make = |x: i32| Region {
            boundary: Vec::new(),
            bounds: Box::new_unchecked(x, 0, 5, 5),
            area: 25,
        };
        let mut pairs = vec![
            (make(50), label('C')),
            (make(10), label('A')),
            (make(30), label('B')),
        ];
        let mut regions: Vec<Region> = pairs.iter().map(|(r, _)| r.clone()).collect();
        sort_left_to_right(&mut regions);
        pairs.sort_by_key(|(r, _)| r.bounds.x);
        let text = assemble_text(pairs.into_iter().map(|(_, l)| l));
        assert_eq!(text, "ABC");
        assert_eq!(regions[0].bounds.x, 10);
    }

    #[test]
    fn test_empty_model_fails_before_segmentation() {
        let set = TrainingSet::new(600).unwrap();
        // A 32x32 blank page; if segmentation ran first this would
        // succeed with empty text instead of failing
        let pix = Pix::new(32, 32, PixelDepth::Bit8).unwrap();
        let err = recognize(&pix, &set, &PipelineParams::default()).unwrap_err();
        assert!(matches!(err, RecogError::EmptyModel));
    }

    #[test]
    fn test_filter_applies_before_classification() {
        // Regions below min_area never reach the classifier
        let regions = vec![
            Region {
                boundary: Vec::new(),
                bounds: Box::new_unchecked(0, 0, 5, 5),
                area: 500,
            },
            Region {
                boundary: Vec::new(),
                bounds: Box::new_unchecked(20, 0, 3, 3),
                area: 50,
            },
        ];
        let kept = filter_by_min_area(regions, 100);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].area, 500);
    }
}
