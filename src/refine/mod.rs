//! Iterative, cluster-constrained bilateral refinement of orientation fields.
//!
//! One sweep recomputes every cell from the previous field state:
//!
//! 1. [`NeighborSelector`] gathers same-cluster cells in a `k × k` window,
//!    optionally restricted to neighbors at least as strong as the center
//!    (see [`AdmissionPolicy`]).
//! 2. [`BilateralWeighter`] weights each candidate by grid distance and
//!    photometric distance to the center.
//! 3. The new magnitude is the weighted mean magnitude; the new angle is the
//!    π-periodic circular mean from [`crate::kernel`].
//!
//! [`Refiner`] runs a fixed number of sweeps and switches from the
//! strength-gated to the unconstrained policy after `phase_switch` sweeps.

mod bilateral;
mod driver;
mod neighbors;
mod options;
mod report;

pub use bilateral::{BilateralWeighter, Photometric};
pub use driver::Refiner;
pub use neighbors::{AdmissionPolicy, Neighbor, NeighborSelector};
pub use options::{BilateralParams, RefineOptions};
pub use report::{RefineReport, SweepStats};
