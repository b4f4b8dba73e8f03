//! Nearest-neighbor classification
//!
//! k-NN with k = 1: a query takes the label of the training vector at
//! minimum Euclidean distance. There is nothing to train beyond holding
//! the examples; the classifier is just the training set viewed as a
//! lookup structure, built once per recognition run.
//!
//! The scan is O(samples * vector length) per query, which is fine at
//! this scale (tens to low hundreds of examples); no index structure.

use crate::dataset::TrainingSet;
use crate::error::{RecogError, RecogResult};
use crate::label::GlyphLabel;

/// Squared Euclidean distance between two equal-length vectors.
///
/// The square root is monotone, so comparisons can skip it.
fn squared_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// 1-nearest-neighbor classifier over a training set
///
/// Never mutated after construction.
#[derive(Debug)]
pub struct NearestNeighbor<'a> {
    set: &'a TrainingSet,
}

impl<'a> NearestNeighbor<'a> {
    /// Build a classifier over a training set.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::EmptyModel`] for a zero-row set;
    /// recognition cannot proceed without at least one example.
    pub fn new(set: &'a TrainingSet) -> RecogResult<Self> {
        if set.is_empty() {
            return Err(RecogError::EmptyModel);
        }
        Ok(Self { set })
    }

    /// Classify a query vector.
    ///
    /// Ties in distance go to the example appended first, so results
    /// are deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::VectorLength`] if the query length
    /// disagrees with the training vectors.
    pub fn classify(&self, query: &[f32]) -> RecogResult<GlyphLabel> {
        if query.len() != self.set.dim() {
            return Err(RecogError::VectorLength {
                expected: self.set.dim(),
                actual: query.len(),
            });
        }

        let mut best_index = 0;
        let mut best_dist = f32::INFINITY;
        for (i, vector) in self.set.vectors().iter().enumerate() {
            let dist = squared_distance(query, vector);
            // Strict comparison keeps the first-appended example on ties
            if dist < best_dist {
                best_dist = dist;
                best_index = i;
            }
        }

        Ok(self.set.labels()[best_index])
    }
}
