//! Bilateral weighting: spatial closeness times photometric similarity.

use super::neighbors::Neighbor;
use super::options::BilateralParams;
use crate::image::{ImageF32, ImageRgb8};
use crate::kernel::{GaussianKernel, OrientationSample};
use nalgebra::{Vector2, Vector3};

/// Color/intensity lookup for the photometric term. Must stay constant for
/// the whole run.
pub trait Photometric: Sync {
    /// `(width, height)` in pixels.
    fn extent(&self) -> (usize, usize);
    fn color(&self, row: usize, col: usize) -> Vector3<f32>;
}

impl Photometric for ImageRgb8 {
    fn extent(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    #[inline]
    fn color(&self, row: usize, col: usize) -> Vector3<f32> {
        let [r, g, b] = self.get(col, row);
        Vector3::new(r as f32, g as f32, b as f32)
    }
}

/// Single-channel intensity; distances reduce to `|a - b|`.
impl Photometric for ImageF32 {
    fn extent(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    #[inline]
    fn color(&self, row: usize, col: usize) -> Vector3<f32> {
        Vector3::new(self.get(col, row), 0.0, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BilateralWeighter {
    spatial: GaussianKernel,
    color: GaussianKernel,
}

impl BilateralWeighter {
    pub fn new(params: &BilateralParams) -> Self {
        Self {
            spatial: GaussianKernel::centered(params.spatial_sigma),
            color: GaussianKernel::centered(params.color_sigma),
        }
    }

    /// `N(|p_c - p_n|; σ_s) · N(|I(p_c) - I(p_n)|; σ_c)`.
    #[inline]
    pub fn weight(&self, spatial_distance: f32, color_distance: f32) -> f32 {
        self.spatial.eval(spatial_distance) * self.color.eval(color_distance)
    }

    /// Weighs every neighbor against `center` and writes one sample per
    /// neighbor into `out` (cleared first), in neighbor order.
    pub fn weigh<P: Photometric + ?Sized>(
        &self,
        center: (usize, usize),
        neighbors: &[Neighbor],
        photometric: &P,
        out: &mut Vec<OrientationSample>,
    ) {
        out.clear();
        let (row, col) = center;
        let center_pos = Vector2::new(row as f32, col as f32);
        let center_color = photometric.color(row, col);
        out.extend(neighbors.iter().map(|n| {
            let spatial = (Vector2::new(n.row as f32, n.col as f32) - center_pos).norm();
            let color = (photometric.color(n.row, n.col) - center_color).norm();
            OrientationSample {
                angle: n.angle,
                magnitude: n.magnitude,
                weight: self.weight(spatial, color),
            }
        }));
    }
}
