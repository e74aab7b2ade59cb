use super::bilateral::{BilateralWeighter, Photometric};
use super::neighbors::{AdmissionPolicy, Neighbor, NeighborSelector};
use super::options::RefineOptions;
use super::report::{RefineReport, SweepStats};
use crate::angle::angular_difference;
use crate::field::{FieldError, OrientationField};
use crate::kernel::{circular_mean, weighted_magnitude_mean, OrientationSample};
use log::debug;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-worker scratch reused across the cells of a row.
#[derive(Default)]
struct Scratch {
    neighbors: Vec<Neighbor>,
    samples: Vec<OrientationSample>,
}

/// Fixed-schedule driver for orientation field refinement.
///
/// Every sweep reads the field's current state and writes a fresh one, so the
/// result does not depend on cell traversal order and rows can be processed
/// concurrently. There is no convergence test: [`Refiner::run`] always
/// performs exactly `iterations` sweeps.
#[derive(Clone, Debug)]
pub struct Refiner {
    options: RefineOptions,
    weighter: BilateralWeighter,
}

impl Refiner {
    pub fn new(options: RefineOptions) -> Result<Self, FieldError> {
        options.validate()?;
        let weighter = BilateralWeighter::new(&options.bilateral);
        Ok(Self { options, weighter })
    }

    pub fn options(&self) -> &RefineOptions {
        &self.options
    }

    /// Admission policy of the zero-based sweep `iteration`.
    pub fn policy_for(&self, iteration: usize) -> AdmissionPolicy {
        if iteration < self.options.phase_switch {
            AdmissionPolicy::StrengthGated
        } else {
            AdmissionPolicy::Unconstrained
        }
    }

    /// Runs all configured sweeps.
    pub fn run<P: Photometric + ?Sized>(
        &self,
        field: &mut OrientationField,
        photometric: &P,
    ) -> Result<RefineReport, FieldError> {
        self.run_with(field, photometric, |_, _| Ok::<(), FieldError>(()))
    }

    /// Runs all configured sweeps, calling `observe` after each one with its
    /// statistics and the updated field. An observer error stops the run.
    pub fn run_with<P, E, F>(
        &self,
        field: &mut OrientationField,
        photometric: &P,
        mut observe: F,
    ) -> Result<RefineReport, E>
    where
        P: Photometric + ?Sized,
        E: From<FieldError>,
        F: FnMut(&SweepStats, &OrientationField) -> Result<(), E>,
    {
        check_photometric(field, photometric)?;
        let start = Instant::now();
        let mut report = RefineReport::default();
        for iteration in 0..self.options.iterations {
            let stats = self.sweep_unchecked(field, photometric, iteration);
            observe(&stats, field)?;
            report.sweeps.push(stats);
        }
        report.total_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Refiner::run {} sweeps over {}x{} cells in {:.3} ms",
            report.sweeps.len(),
            field.width(),
            field.height(),
            report.total_ms
        );
        Ok(report)
    }

    /// Performs the single sweep with index `iteration`, using its scheduled
    /// admission policy.
    pub fn sweep<P: Photometric + ?Sized>(
        &self,
        field: &mut OrientationField,
        photometric: &P,
        iteration: usize,
    ) -> Result<SweepStats, FieldError> {
        check_photometric(field, photometric)?;
        Ok(self.sweep_unchecked(field, photometric, iteration))
    }

    fn sweep_unchecked<P: Photometric + ?Sized>(
        &self,
        field: &mut OrientationField,
        photometric: &P,
        iteration: usize,
    ) -> SweepStats {
        let start = Instant::now();
        let policy = self.policy_for(iteration);
        let width = field.width();
        let total = field.len();

        let (read, write, cells) = field.sweep_buffers();
        let selector = NeighborSelector::new(read, cells, self.options.radius());

        #[cfg(feature = "parallel")]
        let updated: usize = write
            .angle
            .data
            .par_chunks_mut(width)
            .zip(write.magnitude.data.par_chunks_mut(width))
            .enumerate()
            .map_init(Scratch::default, |scratch, (row, (angles, magnitudes))| {
                self.refine_row(&selector, photometric, row, policy, angles, magnitudes, scratch)
            })
            .sum();

        #[cfg(not(feature = "parallel"))]
        let updated: usize = {
            let mut scratch = Scratch::default();
            write
                .angle
                .data
                .chunks_mut(width)
                .zip(write.magnitude.data.chunks_mut(width))
                .enumerate()
                .map(|(row, (angles, magnitudes))| {
                    self.refine_row(
                        &selector,
                        photometric,
                        row,
                        policy,
                        angles,
                        magnitudes,
                        &mut scratch,
                    )
                })
                .sum()
        };

        let (mean_change, max_change) = angle_change(&read.angle.data, &write.angle.data);
        field.swap_buffers();

        let stats = SweepStats {
            iteration,
            policy,
            updated_cells: updated,
            unchanged_cells: total - updated,
            mean_angle_change: mean_change,
            max_angle_change: max_change,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "sweep {} ({:?}): updated={} unchanged={} mean_change={:.5} max_change={:.5} elapsed_ms={:.3}",
            stats.iteration,
            stats.policy,
            stats.updated_cells,
            stats.unchanged_cells,
            stats.mean_angle_change,
            stats.max_angle_change,
            stats.elapsed_ms
        );
        stats
    }

    /// Recomputes one row into `angles`/`magnitudes`; returns how many cells
    /// were aggregated from two or more candidates.
    #[allow(clippy::too_many_arguments)]
    fn refine_row<P: Photometric + ?Sized>(
        &self,
        selector: &NeighborSelector<'_>,
        photometric: &P,
        row: usize,
        policy: AdmissionPolicy,
        angles: &mut [f32],
        magnitudes: &mut [f32],
        scratch: &mut Scratch,
    ) -> usize {
        let mut updated = 0;
        for col in 0..angles.len() {
            let previous = selector.at(row, col);
            angles[col] = previous.angle;
            magnitudes[col] = previous.magnitude;

            selector.select(row, col, policy, &mut scratch.neighbors);
            debug_assert!(!scratch.neighbors.is_empty(), "center always qualifies");
            if scratch.neighbors.len() < 2 {
                continue;
            }

            self.weighter
                .weigh((row, col), &scratch.neighbors, photometric, &mut scratch.samples);
            let magnitude = weighted_magnitude_mean(&scratch.samples);
            let angle = circular_mean(&mut scratch.samples);
            if let (Some(angle), Some(magnitude)) = (angle, magnitude) {
                angles[col] = angle;
                magnitudes[col] = magnitude;
                updated += 1;
            }
        }
        updated
    }
}

fn check_photometric<P: Photometric + ?Sized>(
    field: &OrientationField,
    photometric: &P,
) -> Result<(), FieldError> {
    let expected = (field.width(), field.height());
    let found = photometric.extent();
    if found != expected {
        return Err(FieldError::DimensionMismatch {
            what: "photometric image",
            expected,
            found,
        });
    }
    Ok(())
}

fn angle_change(before: &[f32], after: &[f32]) -> (f32, f32) {
    if before.is_empty() {
        return (0.0, 0.0);
    }
    let (sum, max) = before
        .iter()
        .zip(after)
        .map(|(&a, &b)| angular_difference(a, b))
        .fold((0.0f64, 0.0f32), |(sum, max), d| (sum + d as f64, max.max(d)));
    ((sum / before.len() as f64) as f32, max)
}
