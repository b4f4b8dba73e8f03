//! ocrus-recog - Glyph recognition
//!
//! The core of the OCR system: a shared segmentation front end feeding
//! either a training session (operator labels candidates, the set is
//! persisted) or a recognition run (candidates are classified by
//! 1-nearest-neighbor matching and reassembled into text).
//!
//! # Overview
//!
//! Training:
//!
//! 1. Binarize the labeled reference image
//! 2. Extract and filter glyph candidates
//! 3. Present each candidate through a [`LabelSource`]
//! 4. Persist the accumulated [`TrainingSet`]
//!
//! Recognition:
//!
//! 1. Load the [`TrainingSet`] and build the classifier from it
//! 2. Binarize the query image, extract and filter candidates
//! 3. Sort candidates left to right
//! 4. Canonicalize and classify each, concatenating the labels
//!
//! # Example
//!
//! ```
//! use ocrus_core::{Pix, PixelDepth};
//! use ocrus_recog::{PipelineParams, TrainingSet, recognize, RecogError};
//!
//! let query = Pix::new(64, 64, PixelDepth::Bit8).unwrap();
//! let empty = TrainingSet::new(600).unwrap();
//! // Recognition without training examples is refused up front
//! assert!(matches!(
//!     recognize(&query, &empty, &PipelineParams::default()),
//!     Err(RecogError::EmptyModel)
//! ));
//! ```

pub mod canon;
pub mod dataset;
pub mod error;
pub mod ident;
pub mod knn;
pub mod label;
pub mod segment;
pub mod train;
pub mod types;

pub use canon::{canonical_crop, canonicalize, flatten};
pub use dataset::TrainingSet;
pub use error::{RecogError, RecogResult};
pub use ident::{Recognition, RecognizedGlyph, assemble_text, recognize};
pub use knn::NearestNeighbor;
pub use label::{ALPHABET, GlyphLabel};
pub use segment::{binarize, find_glyph_regions};
pub use train::{LabelReply, LabelRequest, LabelSource, collect_training_set};
pub use types::PipelineParams;
