//! Stateless numeric primitives for neighborhood aggregation.
//!
//! - [`GaussianKernel`]: normalized Gaussian weighting `N(x; mean, sigma)`.
//! - [`weighted_magnitude_mean`]: `Σ w·m / Σ w` over a neighborhood.
//! - [`circular_mean`]: weighted mean of orientations on the π-periodic
//!   domain, cutting the circle at its widest empty arc before averaging.
//!
//! The circular mean weights every orientation by `weight × magnitude`, so
//! strong gradients dominate the average while the bilateral weight still
//! controls locality.

use crate::angle::wrap_orientation;
use std::f32::consts::PI;

/// Normalized Gaussian `exp(-½((x-μ)/σ)²) / (σ·√(2π))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianKernel {
    sigma: f32,
    mean: f32,
}

impl GaussianKernel {
    pub const fn new(sigma: f32, mean: f32) -> Self {
        Self { sigma, mean }
    }

    /// Zero-mean kernel, the form used for distances.
    pub const fn centered(sigma: f32) -> Self {
        Self::new(sigma, 0.0)
    }

    #[inline]
    pub fn eval(&self, x: f32) -> f32 {
        let z = (x - self.mean) / self.sigma;
        (-0.5 * z * z).exp() / (self.sigma * (2.0 * PI).sqrt())
    }
}

/// One neighbor's contribution to an aggregate: its orientation, strength and
/// bilateral weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationSample {
    /// Orientation in `(-π/2, π/2]`.
    pub angle: f32,
    /// Gradient strength, `>= 0`.
    pub magnitude: f32,
    /// Bilateral weight assigned for the current center.
    pub weight: f32,
}

/// Weighted mean of the sample magnitudes, `Σ(w·m) / Σ w`.
///
/// Sums are accumulated in f64. Returns `None` when the weights do not sum to
/// a positive finite value.
pub fn weighted_magnitude_mean(samples: &[OrientationSample]) -> Option<f32> {
    let (sum, total) = samples.iter().fold((0.0f64, 0.0f64), |(sum, total), s| {
        let w = s.weight as f64;
        (sum + w * s.magnitude as f64, total + w)
    });
    (total > 0.0 && total.is_finite()).then(|| (sum / total) as f32)
}

/// Weighted circular mean of orientations modulo π.
///
/// The samples are sorted by angle in place. The circle of circumference π is
/// cut at the widest gap between consecutive orientations (the wraparound gap
/// from the last back to the first counts too, and wins ties), every sample
/// before the cut is lifted by π, and the ordinary mean is taken with
/// `weight × magnitude` as the mass. The result is wrapped into `(-π/2, π/2]`.
///
/// A single sample with positive mass yields its own angle unchanged.
///
/// Returns `None` for an empty slice or when the total mass is not a positive
/// finite value.
pub fn circular_mean(samples: &mut [OrientationSample]) -> Option<f32> {
    match &*samples {
        [] => return None,
        [only] => {
            let mass = only.weight as f64 * only.magnitude as f64;
            return (mass > 0.0 && mass.is_finite()).then_some(only.angle);
        }
        _ => {}
    }
    samples.sort_by(|a, b| a.angle.total_cmp(&b.angle));

    let n = samples.len();
    let mut widest_gap = samples[0].angle + PI - samples[n - 1].angle;
    let mut split = 0usize;
    for i in 1..n {
        let gap = samples[i].angle - samples[i - 1].angle;
        if gap > widest_gap {
            widest_gap = gap;
            split = i;
        }
    }

    let mut weighted_sum = 0.0f64;
    let mut total_mass = 0.0f64;
    for (i, sample) in samples.iter().enumerate() {
        let mass = sample.weight as f64 * sample.magnitude as f64;
        let angle = if i < split {
            sample.angle as f64 + std::f64::consts::PI
        } else {
            sample.angle as f64
        };
        weighted_sum += angle * mass;
        total_mass += mass;
    }

    if total_mass > 0.0 && total_mass.is_finite() {
        Some(wrap_orientation((weighted_sum / total_mass) as f32))
    } else {
        None
    }
}
