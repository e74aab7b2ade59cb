#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod field;
pub mod image;
pub mod matrix;
pub mod refine;
pub mod render;

// Numeric building blocks, public for tools and tests.
pub mod angle;
pub mod edges;
pub mod kernel;

// --- High-level re-exports -------------------------------------------------

pub use crate::field::{ClusterLabels, FieldError, OrientationField};
pub use crate::refine::{AdmissionPolicy, RefineOptions, RefineReport, Refiner};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::{ImageF32, ImageRgb8};
    pub use crate::refine::{BilateralParams, Photometric};
    pub use crate::{ClusterLabels, FieldError, OrientationField, RefineOptions, Refiner};
}
