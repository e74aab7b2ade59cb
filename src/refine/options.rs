//! Parameters of the iterative orientation refinement.

use crate::field::FieldError;
use crate::kernel::GaussianKernel;
use serde::Deserialize;

/// Bilateral kernel widths.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BilateralParams {
    /// Gaussian sigma over the grid distance between cells (px).
    pub spatial_sigma: f32,
    /// Gaussian sigma over the RGB distance between the two pixels.
    pub color_sigma: f32,
}

impl Default for BilateralParams {
    fn default() -> Self {
        Self {
            spatial_sigma: 2.0,
            color_sigma: 10.0,
        }
    }
}

/// Parameters controlling the sweep schedule and neighborhood.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RefineOptions {
    /// Total number of sweeps; always run to completion.
    pub iterations: usize,
    /// Side of the square neighborhood window (odd).
    pub window_size: usize,
    /// Sweeps `0..phase_switch` admit only equal-or-stronger neighbors; later
    /// sweeps admit every same-cluster neighbor.
    pub phase_switch: usize,
    pub bilateral: BilateralParams,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            iterations: 40,
            window_size: 7,
            phase_switch: 20,
            bilateral: BilateralParams::default(),
        }
    }
}

impl RefineOptions {
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.window_size == 0 || self.window_size % 2 == 0 {
            return Err(FieldError::InvalidWindow {
                size: self.window_size,
            });
        }
        for (name, value) in [
            ("spatial_sigma", self.bilateral.spatial_sigma),
            ("color_sigma", self.bilateral.color_sigma),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(FieldError::InvalidParameter { name, value });
            }
        }
        let BilateralParams {
            spatial_sigma,
            color_sigma,
        } = self.bilateral;
        let peak = GaussianKernel::centered(spatial_sigma).eval(0.0)
            * GaussianKernel::centered(color_sigma).eval(0.0);
        if !(peak.is_finite() && peak > 0.0) {
            return Err(FieldError::DegenerateKernel {
                spatial_sigma,
                color_sigma,
            });
        }
        Ok(())
    }

    /// Half-width of the window, `window_size / 2`.
    #[inline]
    pub fn radius(&self) -> usize {
        self.window_size / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let opts = RefineOptions::default();
        assert_eq!(opts.window_size, 7);
        assert_eq!(opts.phase_switch, 20);
        assert_eq!(opts.radius(), 3);
        assert_eq!(opts.bilateral.spatial_sigma, 2.0);
        assert_eq!(opts.bilateral.color_sigma, 10.0);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn even_window_is_rejected() {
        let opts = RefineOptions {
            window_size: 4,
            ..Default::default()
        };
        assert_eq!(opts.validate(), Err(FieldError::InvalidWindow { size: 4 }));
    }

    #[test]
    fn non_positive_sigma_is_rejected() {
        let opts = RefineOptions {
            bilateral: BilateralParams {
                spatial_sigma: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(FieldError::InvalidParameter {
                name: "spatial_sigma",
                ..
            })
        ));
    }

    #[test]
    fn tiny_sigmas_overflowing_the_peak_weight_are_rejected() {
        let opts = RefineOptions {
            bilateral: BilateralParams {
                spatial_sigma: 1e-20,
                color_sigma: 1e-20,
            },
            ..Default::default()
        };
        assert_eq!(
            opts.validate(),
            Err(FieldError::DegenerateKernel {
                spatial_sigma: 1e-20,
                color_sigma: 1e-20,
            })
        );

        let huge = RefineOptions {
            bilateral: BilateralParams {
                spatial_sigma: 1e30,
                color_sigma: 1e30,
            },
            ..Default::default()
        };
        assert!(matches!(
            huge.validate(),
            Err(FieldError::DegenerateKernel { .. })
        ));

        let small_but_fine = RefineOptions {
            bilateral: BilateralParams {
                spatial_sigma: 0.05,
                color_sigma: 0.5,
            },
            ..Default::default()
        };
        assert!(small_but_fine.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let opts: RefineOptions =
            serde_json::from_str(r#"{"iterations": 3, "bilateral": {"color_sigma": 25.0}}"#)
                .unwrap();
        assert_eq!(opts.iterations, 3);
        assert_eq!(opts.window_size, 7);
        assert_eq!(opts.bilateral.spatial_sigma, 2.0);
        assert_eq!(opts.bilateral.color_sigma, 25.0);
    }
}
