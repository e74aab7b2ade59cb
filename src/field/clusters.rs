//! Dense remapping of externally supplied cluster labels.

use super::FieldError;
use std::collections::HashMap;

/// Per-pixel cluster ids in `0..count`, row-major.
///
/// Arbitrary input labels are renumbered in order of first appearance while
/// scanning rows top to bottom, so the first pixel is always cluster 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterLabels {
    width: usize,
    height: usize,
    ids: Vec<usize>,
    count: usize,
}

impl ClusterLabels {
    pub fn new(width: usize, height: usize, labels: Vec<i64>) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyGrid { width, height });
        }
        if labels.len() != width * height {
            return Err(FieldError::DimensionMismatch {
                what: "cluster label count",
                expected: (width * height, 1),
                found: (labels.len(), 1),
            });
        }

        let mut dense: HashMap<i64, usize> = HashMap::new();
        let ids = labels
            .into_iter()
            .map(|label| {
                let next = dense.len();
                *dense.entry(label).or_insert(next)
            })
            .collect();

        Ok(Self {
            width,
            height,
            ids,
            count: dense.len(),
        })
    }

    /// Single-cluster labelling of a `width × height` grid.
    pub fn uniform(width: usize, height: usize) -> Result<Self, FieldError> {
        Self::new(width, height, vec![0; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of distinct clusters.
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.ids[row * self.width + col]
    }

    pub fn ids(&self) -> &[usize] {
        &self.ids
    }
}
