//! Training session
//!
//! Walks an operator through the glyph candidates of a labeled
//! reference image. The operator is the only interactive point in the
//! whole system; the [`LabelSource`] trait is the synchronous
//! request/response boundary that keeps the segmentation core testable
//! without any display or input device.

use crate::canon::{canonical_crop, flatten};
use crate::dataset::TrainingSet;
use crate::error::{RecogError, RecogResult};
use crate::label::GlyphLabel;
use crate::segment::{binarize, find_glyph_regions};
use crate::types::PipelineParams;
use ocrus_core::{Box, Color, Pix, PixelDepth, gray_to_rgb};

/// One candidate presented to the operator
#[derive(Debug)]
pub struct LabelRequest<'a> {
    /// Index of this candidate (0-based)
    pub index: usize,
    /// Total number of candidates in the session
    pub total: usize,
    /// Bounding box of the candidate in the source image
    pub bounds: Box,
    /// Raw crop from the binarized image
    pub crop: &'a Pix,
    /// Canonicalized (resized) crop; exactly what will be stored
    pub canon: &'a Pix,
    /// Display copy of the source with marker boxes drawn so far
    pub display: &'a Pix,
}

/// Operator's answer to a label request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelReply {
    /// A keystroke; whitelist membership is checked by the session
    Key(char),
    /// Abort the whole training session
    Abort,
}

/// Synchronous operator boundary
///
/// `request_label` blocks until the operator answers; there is no
/// timeout and no cancellation beyond [`LabelReply::Abort`].
pub trait LabelSource {
    /// Present one candidate and wait for a single input event.
    fn request_label(&mut self, request: &LabelRequest<'_>) -> RecogResult<LabelReply>;
}

/// Run a training session over a labeled reference image.
///
/// Candidates are presented in discovery order. A whitelist keystroke
/// appends the candidate's canonical vector and label to the returned
/// set; any other keystroke silently discards the candidate; an abort
/// discards the whole session.
///
/// # Errors
///
/// Returns [`RecogError::Aborted`] on operator abort; nothing labeled
/// so far survives (the partial set is dropped, not returned).
pub fn collect_training_set(
    src: &Pix,
    params: &PipelineParams,
    source: &mut dyn LabelSource,
) -> RecogResult<TrainingSet> {
    params.validate()?;

    let bin = binarize(src, params)?;
    let regions = find_glyph_regions(&bin, params)?;

    let mut set = TrainingSet::new(params.canon_len())?;
    // Marker boxes accumulate on one display copy across the session
    let mut display = make_display(src)?;
    let total = regions.len();

    for (index, region) in regions.iter().enumerate() {
        let mut display_mut = match display.try_into_mut() {
            Ok(m) => m,
            Err(shared) => shared.to_mut(),
        };
        display_mut.render_box_outline(&region.bounds, 2, Color::RED)?;
        display = display_mut.into();

        let crop = bin.clip_rectangle(&region.bounds)?;
        let canon = canonical_crop(&bin, region, params)?;

        let request = LabelRequest {
            index,
            total,
            bounds: region.bounds,
            crop: &crop,
            canon: &canon,
            display: &display,
        };

        match source.request_label(&request)? {
            LabelReply::Abort => return Err(RecogError::Aborted),
            LabelReply::Key(c) => {
                if let Some(label) = GlyphLabel::from_char(c) {
                    set.push(flatten(&canon), label)?;
                }
                // Any other keystroke: discard this candidate silently
            }
        }
    }

    Ok(set)
}

/// Build the RGB display copy marker boxes are drawn on.
fn make_display(src: &Pix) -> RecogResult<Pix> {
    match src.depth() {
        PixelDepth::Bit8 => Ok(gray_to_rgb(src)?),
        PixelDepth::Bit32 => Ok(src.deep_clone()),
    }
}
