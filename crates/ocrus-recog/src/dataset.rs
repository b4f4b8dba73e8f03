//! Training set storage
//!
//! An append-only pairing of canonical feature vectors with their
//! ground-truth labels, persisted as two parallel text tables: a
//! one-column label table and an N-column feature table with the same
//! row order. Row *i* of one table always describes row *i* of the
//! other; that correspondence is the only invariant the files must
//! preserve.
//!
//! # Labels format
//!
//! ```text
//! Glyph Labels Version 1
//! Number of samples = N
//!   [0] = A
//!   [1] = 7
//!   ...
//! ```
//!
//! # Features format
//!
//! ```text
//! Glyph Features Version 1
//! Number of samples = N
//! Vector length = D
//!   [0] = 0.000000 255.000000 ...
//!   ...
//! ```

use crate::error::{RecogError, RecogResult};
use crate::label::GlyphLabel;
use std::io::{Read, Write};
use std::path::Path;

/// Dataset serialization format version
const DATASET_VERSION: i64 = 1;

/// Maximum number of samples accepted when reading.
const MAX_SAMPLES: usize = 1_000_000;

/// Maximum feature vector length accepted when reading.
const MAX_VECTOR_LEN: usize = 1_000_000;

/// Maximum input size in bytes to prevent unbounded memory growth.
const MAX_INPUT_SIZE: usize = 500_000_000;

/// The training set: parallel feature vectors and labels
///
/// Created empty at the start of a training session, grown append-only
/// by the labeler, and written out whole at session end. A recognition
/// session loads it read-only.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    /// Feature vector length every sample must have
    dim: usize,
    /// Flattened canonical vectors, one per sample
    vectors: Vec<Vec<f32>>,
    /// Ground-truth labels, parallel to `vectors`
    labels: Vec<GlyphLabel>,
}

impl TrainingSet {
    /// Create an empty training set for vectors of length `dim`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dim` is 0.
    pub fn new(dim: usize) -> RecogResult<Self> {
        if dim == 0 {
            return Err(RecogError::InvalidParameter(
                "feature vector length must be positive".to_string(),
            ));
        }
        Ok(Self {
            dim,
            vectors: Vec::new(),
            labels: Vec::new(),
        })
    }

    /// Feature vector length.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of training examples.
    ///
    /// The two parallel collections always have this same length.
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.vectors.len(), self.labels.len());
        self.vectors.len()
    }

    /// Check whether the set holds no examples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append one (vector, label) pair.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::VectorLength`] if the vector's length
    /// disagrees with the set's dimension.
    pub fn push(&mut self, vector: Vec<f32>, label: GlyphLabel) -> RecogResult<()> {
        if vector.len() != self.dim {
            return Err(RecogError::VectorLength {
                expected: self.dim,
                actual: vector.len(),
            });
        }
        self.vectors.push(vector);
        self.labels.push(label);
        Ok(())
    }

    /// Get the example at `index`.
    pub fn get(&self, index: usize) -> Option<(&[f32], GlyphLabel)> {
        Some((self.vectors.get(index)?.as_slice(), self.labels[index]))
    }

    /// All feature vectors, in append order.
    pub fn vectors(&self) -> &[Vec<f32>] {
        &self.vectors
    }

    /// All labels, in append order.
    pub fn labels(&self) -> &[GlyphLabel] {
        &self.labels
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    /// Write both tables to their files.
    ///
    /// Each file is written to a temporary sibling first and atomically
    /// renamed into place, so a crash mid-write never leaves a truncated
    /// table behind.
    pub fn write_to_files(
        &self,
        labels_path: impl AsRef<Path>,
        features_path: impl AsRef<Path>,
    ) -> RecogResult<()> {
        let mut labels_buf = Vec::new();
        self.write_labels(&mut labels_buf)?;
        let mut features_buf = Vec::new();
        self.write_features(&mut features_buf)?;

        persist_atomically(labels_path.as_ref(), &labels_buf)?;
        persist_atomically(features_path.as_ref(), &features_buf)?;
        Ok(())
    }

    /// Read both tables and cross-check them against each other.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::DatasetFormat`] for malformed tables or a
    /// sample-count disagreement between the two files.
    pub fn read_from_files(
        labels_path: impl AsRef<Path>,
        features_path: impl AsRef<Path>,
    ) -> RecogResult<Self> {
        let labels_buf = read_limited(&mut std::fs::File::open(labels_path.as_ref())?)?;
        let features_buf = read_limited(&mut std::fs::File::open(features_path.as_ref())?)?;

        let labels = parse_labels(&labels_buf)?;
        let (dim, vectors) = parse_features(&features_buf)?;

        if labels.len() != vectors.len() {
            return Err(RecogError::DatasetFormat(format!(
                "label table has {} rows but feature table has {}",
                labels.len(),
                vectors.len()
            )));
        }

        Ok(Self {
            dim,
            vectors,
            labels,
        })
    }

    /// Write the label table.
    pub fn write_labels(&self, writer: &mut impl Write) -> RecogResult<()> {
        writeln!(writer, "Glyph Labels Version {DATASET_VERSION}")?;
        writeln!(writer, "Number of samples = {}", self.len())?;
        for (i, label) in self.labels.iter().enumerate() {
            writeln!(writer, "  [{i}] = {label}")?;
        }
        Ok(())
    }

    /// Write the feature table.
    pub fn write_features(&self, writer: &mut impl Write) -> RecogResult<()> {
        writeln!(writer, "Glyph Features Version {DATASET_VERSION}")?;
        writeln!(writer, "Number of samples = {}", self.len())?;
        writeln!(writer, "Vector length = {}", self.dim)?;
        for (i, vector) in self.vectors.iter().enumerate() {
            write!(writer, "  [{i}] =")?;
            for v in vector {
                write!(writer, " {v:.6}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// Write `bytes` to `path` via a temporary sibling and rename.
fn persist_atomically(path: &Path, bytes: &[u8]) -> RecogResult<()> {
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Read from a reader with a size limit, returning a clear error if exceeded.
fn read_limited(reader: &mut impl Read) -> RecogResult<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .take((MAX_INPUT_SIZE + 1) as u64)
        .read_to_end(&mut buf)?;
    if buf.len() > MAX_INPUT_SIZE {
        return Err(RecogError::DatasetFormat(format!(
            "input too large: exceeds maximum allowed size of {MAX_INPUT_SIZE} bytes"
        )));
    }
    Ok(buf)
}

/// Parse the label table.
fn parse_labels(data: &[u8]) -> RecogResult<Vec<GlyphLabel>> {
    let text = std::str::from_utf8(data)
        .map_err(|e| RecogError::DatasetFormat(format!("invalid UTF-8: {e}")))?;
    let mut lines = text.lines();

    let version = find_and_parse_int(&mut lines, "Glyph Labels Version ")?;
    if version != DATASET_VERSION {
        return Err(RecogError::DatasetFormat(format!(
            "invalid label table version: {version}"
        )));
    }
    let n = parse_count(&mut lines, "Number of samples = ", MAX_SAMPLES)?;

    let mut labels = Vec::with_capacity(n);
    for _ in 0..n {
        let value = parse_value_line(&mut lines)?;
        let mut chars = value.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(RecogError::DatasetFormat(format!(
                "label row must hold a single character: {value:?}"
            )));
        };
        labels.push(GlyphLabel::try_from(c)?);
    }
    Ok(labels)
}

/// Parse the feature table, returning the declared vector length and
/// the rows.
fn parse_features(data: &[u8]) -> RecogResult<(usize, Vec<Vec<f32>>)> {
    let text = std::str::from_utf8(data)
        .map_err(|e| RecogError::DatasetFormat(format!("invalid UTF-8: {e}")))?;
    let mut lines = text.lines();

    let version = find_and_parse_int(&mut lines, "Glyph Features Version ")?;
    if version != DATASET_VERSION {
        return Err(RecogError::DatasetFormat(format!(
            "invalid feature table version: {version}"
        )));
    }
    let n = parse_count(&mut lines, "Number of samples = ", MAX_SAMPLES)?;
    let dim = parse_count(&mut lines, "Vector length = ", MAX_VECTOR_LEN)?;
    if dim == 0 {
        return Err(RecogError::DatasetFormat(
            "feature vector length must be positive".to_string(),
        ));
    }

    let mut vectors = Vec::with_capacity(n);
    for _ in 0..n {
        let value = parse_value_line(&mut lines)?;
        let row: Vec<f32> = value
            .split_ascii_whitespace()
            .map(|tok| {
                tok.parse::<f32>().map_err(|e| {
                    RecogError::DatasetFormat(format!("failed to parse float {tok:?}: {e}"))
                })
            })
            .collect::<RecogResult<_>>()?;
        if row.len() != dim {
            return Err(RecogError::DatasetFormat(format!(
                "feature row has {} values, expected {dim}",
                row.len()
            )));
        }
        vectors.push(row);
    }
    Ok((dim, vectors))
}

/// Find a line containing `prefix` and parse the integer after it.
fn find_and_parse_int<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    prefix: &str,
) -> RecogResult<i64> {
    for line in lines.by_ref() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return rest.trim().parse::<i64>().map_err(|e| {
                RecogError::DatasetFormat(format!("failed to parse integer after {prefix:?}: {e}"))
            });
        }
    }
    Err(RecogError::DatasetFormat(format!(
        "expected line with {prefix:?} not found"
    )))
}

/// Parse a bounded non-negative count after `prefix`.
fn parse_count<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    prefix: &str,
    max: usize,
) -> RecogResult<usize> {
    let raw = find_and_parse_int(lines, prefix)?;
    if raw < 0 {
        return Err(RecogError::DatasetFormat(format!(
            "negative count after {prefix:?}: {raw}"
        )));
    }
    let n = raw as usize;
    if n > max {
        return Err(RecogError::DatasetFormat(format!(
            "count after {prefix:?} too large: {n}"
        )));
    }
    Ok(n)
}

/// Parse a value line like "  [0] = <value>", returning the value part.
fn parse_value_line<'a>(lines: &mut impl Iterator<Item = &'a str>) -> RecogResult<&'a str> {
    for line in lines.by_ref() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix('[')
            && let Some((_, after_bracket)) = rest.split_once(']')
        {
            let value_part = after_bracket.trim_start();
            if let Some(val) = value_part.strip_prefix('=') {
                return Ok(val.trim());
            }
        }
    }
    Err(RecogError::DatasetFormat(
        "expected value line '[N] = <value>' not found".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(c: char) -> GlyphLabel {
        GlyphLabel::from_char(c).unwrap()
    }

    fn sample_set() -> TrainingSet {
        let mut set = TrainingSet::new(3).unwrap();
        set.push(vec![0.0, 255.0, 128.0], label('A')).unwrap();
        set.push(vec![1.5, 2.5, 3.5], label('7')).unwrap();
        set.push(vec![255.0, 255.0, 0.0], label('Z')).unwrap();
        set
    }

    #[test]
    fn test_push_keeps_tables_parallel() {
        let set = sample_set();
        assert_eq!(set.len(), 3);
        assert_eq!(set.vectors().len(), set.labels().len());
        let (v, l) = set.get(1).unwrap();
        assert_eq!(v, &[1.5, 2.5, 3.5]);
        assert_eq!(l.as_char(), '7');
    }

    #[test]
    fn test_push_rejects_wrong_length() {
        let mut set = TrainingSet::new(3).unwrap();
        let err = set.push(vec![1.0, 2.0], label('A')).unwrap_err();
        assert!(matches!(
            err,
            RecogError::VectorLength {
                expected: 3,
                actual: 2
            }
        ));
        // Rejected push leaves both tables untouched
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_zero_dim_rejected() {
        assert!(TrainingSet::new(0).is_err());
    }

    #[test]
    fn test_memory_roundtrip() {
        let set = sample_set();
        let mut labels_buf = Vec::new();
        set.write_labels(&mut labels_buf).unwrap();
        let mut features_buf = Vec::new();
        set.write_features(&mut features_buf).unwrap();

        let labels = parse_labels(&labels_buf).unwrap();
        let (dim, vectors) = parse_features(&features_buf).unwrap();

        assert_eq!(dim, 3);
        assert_eq!(labels, set.labels());
        for (a, b) in vectors.iter().zip(set.vectors()) {
            for (x, y) in a.iter().zip(b) {
                assert!((x - y).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_file_roundtrip() {
        let set = sample_set();
        let dir = std::env::temp_dir().join("ocrus_dataset_roundtrip");
        std::fs::create_dir_all(&dir).unwrap();
        let labels_path = dir.join("classifications.txt");
        let features_path = dir.join("images.txt");

        set.write_to_files(&labels_path, &features_path).unwrap();
        let restored = TrainingSet::read_from_files(&labels_path, &features_path).unwrap();

        assert_eq!(restored.len(), 3);
        assert_eq!(restored.dim(), 3);
        assert_eq!(restored.labels(), set.labels());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_set_roundtrip() {
        let set = TrainingSet::new(600).unwrap();
        let dir = std::env::temp_dir().join("ocrus_dataset_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let labels_path = dir.join("classifications.txt");
        let features_path = dir.join("images.txt");

        set.write_to_files(&labels_path, &features_path).unwrap();
        let restored = TrainingSet::read_from_files(&labels_path, &features_path).unwrap();
        assert!(restored.is_empty());
        assert_eq!(restored.dim(), 600);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_row_count_disagreement_rejected() {
        let set = sample_set();
        let mut labels_buf = Vec::new();
        set.write_labels(&mut labels_buf).unwrap();
        let mut short = TrainingSet::new(3).unwrap();
        short.push(vec![0.0, 0.0, 0.0], label('B')).unwrap();
        let mut features_buf = Vec::new();
        short.write_features(&mut features_buf).unwrap();

        let dir = std::env::temp_dir().join("ocrus_dataset_mismatch");
        std::fs::create_dir_all(&dir).unwrap();
        let labels_path = dir.join("classifications.txt");
        let features_path = dir.join("images.txt");
        std::fs::write(&labels_path, &labels_buf).unwrap();
        std::fs::write(&features_path, &features_buf).unwrap();

        let err = TrainingSet::read_from_files(&labels_path, &features_path).unwrap_err();
        assert!(matches!(err, RecogError::DatasetFormat(_)));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_label_in_file_rejected() {
        let buf = b"Glyph Labels Version 1\nNumber of samples = 1\n  [0] = x\n";
        let err = parse_labels(buf).unwrap_err();
        assert!(matches!(err, RecogError::InvalidLabel('x')));
    }

    #[test]
    fn test_negative_count_rejected() {
        let buf = b"Glyph Labels Version 1\nNumber of samples = -1\n";
        assert!(parse_labels(buf).is_err());
    }

    #[test]
    fn test_wrong_version_rejected() {
        let buf = b"Glyph Labels Version 2\nNumber of samples = 0\n";
        assert!(parse_labels(buf).is_err());
    }

    #[test]
    fn test_short_feature_row_rejected() {
        let buf =
            b"Glyph Features Version 1\nNumber of samples = 1\nVector length = 3\n  [0] = 1.0 2.0\n";
        assert!(parse_features(buf).is_err());
    }
}
