//! Same-cluster candidate selection in a clipped square window.

use crate::field::{Cell, FieldState};
use serde::Serialize;

/// Which same-cluster window members may contribute to a cell's average.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionPolicy {
    /// Only neighbors whose initial magnitude is at least the center's.
    StrengthGated,
    /// Every same-cluster neighbor in the window.
    Unconstrained,
}

/// Snapshot values of an admitted neighbor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub row: usize,
    pub col: usize,
    pub angle: f32,
    pub magnitude: f32,
}

/// Enumerates candidates against a read-only field state.
pub struct NeighborSelector<'a> {
    state: &'a FieldState,
    cells: &'a [Cell],
    radius: usize,
}

impl<'a> NeighborSelector<'a> {
    /// `radius` is half the window side: a `k × k` window has radius `k / 2`.
    pub fn new(state: &'a FieldState, cells: &'a [Cell], radius: usize) -> Self {
        debug_assert_eq!(cells.len(), state.angle.data.len());
        Self {
            state,
            cells,
            radius,
        }
    }

    #[inline]
    fn width(&self) -> usize {
        self.state.angle.w
    }

    #[inline]
    fn height(&self) -> usize {
        self.state.angle.h
    }

    /// Snapshot values of the cell at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Neighbor {
        Neighbor {
            row,
            col,
            angle: self.state.angle.get(col, row),
            magnitude: self.state.magnitude.get(col, row),
        }
    }

    /// Collects into `out` (cleared first) every cell of the window around
    /// `(row, col)`, clipped to the grid, that shares the center's cluster and
    /// passes `policy`. The center itself always qualifies, so `out` is never
    /// empty afterwards.
    pub fn select(
        &self,
        row: usize,
        col: usize,
        policy: AdmissionPolicy,
        out: &mut Vec<Neighbor>,
    ) {
        out.clear();
        let width = self.width();
        let center = &self.cells[row * width + col];

        let r0 = row.saturating_sub(self.radius);
        let r1 = (row + self.radius).min(self.height() - 1);
        let c0 = col.saturating_sub(self.radius);
        let c1 = (col + self.radius).min(width - 1);

        for rr in r0..=r1 {
            for cc in c0..=c1 {
                let cell = &self.cells[rr * width + cc];
                if cell.cluster != center.cluster {
                    continue;
                }
                if policy == AdmissionPolicy::StrengthGated
                    && cell.initial_magnitude < center.initial_magnitude
                {
                    continue;
                }
                out.push(self.at(rr, cc));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{ClusterLabels, FieldParts, OrientationField};
    use crate::image::ImageF32;

    fn field(w: usize, h: usize, labels: Vec<i64>, magnitudes: Vec<f32>) -> OrientationField {
        let zeros = ImageF32::new(w, h);
        let mag = ImageF32::from_vec(w, h, magnitudes).unwrap();
        let labels = ClusterLabels::new(w, h, labels).unwrap();
        OrientationField::from_parts(FieldParts {
            gx: &zeros,
            gy: &zeros,
            magnitude: &mag,
            angle: &zeros,
            labels: &labels,
        })
        .unwrap()
    }

    fn positions(out: &[Neighbor]) -> Vec<(usize, usize)> {
        out.iter().map(|n| (n.row, n.col)).collect()
    }

    #[test]
    fn window_is_clipped_at_corner() {
        let f = field(5, 5, vec![0; 25], vec![1.0; 25]);
        let sel = NeighborSelector::new(f.state(), f.cells(), 1);
        let mut out = Vec::new();
        sel.select(0, 0, AdmissionPolicy::Unconstrained, &mut out);
        assert_eq!(positions(&out), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        sel.select(2, 2, AdmissionPolicy::Unconstrained, &mut out);
        assert_eq!(out.len(), 9);
    }

    #[test]
    fn other_clusters_are_excluded() {
        #[rustfmt::skip]
        let labels = vec![
            1, 1, 2,
            1, 1, 2,
            2, 2, 2,
        ];
        let f = field(3, 3, labels, vec![1.0; 9]);
        let sel = NeighborSelector::new(f.state(), f.cells(), 1);
        let mut out = Vec::new();
        sel.select(1, 1, AdmissionPolicy::Unconstrained, &mut out);
        assert_eq!(positions(&out), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn strength_gate_keeps_equal_or_stronger() {
        #[rustfmt::skip]
        let mags = vec![
            0.5, 2.0, 1.0,
            1.0, 1.0, 0.9,
            3.0, 0.0, 1.0,
        ];
        let f = field(3, 3, vec![0; 9], mags);
        let sel = NeighborSelector::new(f.state(), f.cells(), 1);
        let mut out = Vec::new();
        sel.select(1, 1, AdmissionPolicy::StrengthGated, &mut out);
        assert_eq!(
            positions(&out),
            vec![(0, 1), (0, 2), (1, 0), (1, 1), (2, 0), (2, 2)]
        );
        sel.select(1, 1, AdmissionPolicy::Unconstrained, &mut out);
        assert_eq!(out.len(), 9);
    }

    #[test]
    fn strongest_cell_admits_only_itself_when_gated() {
        let f = field(3, 1, vec![0; 3], vec![1.0, 2.0, 1.0]);
        let sel = NeighborSelector::new(f.state(), f.cells(), 3);
        let mut out = Vec::new();
        sel.select(0, 1, AdmissionPolicy::StrengthGated, &mut out);
        assert_eq!(positions(&out), vec![(0, 1)]);
    }
}
