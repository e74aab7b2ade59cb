//! Orientation field: per-cell provenance plus double-buffered angle and
//! magnitude planes.
//!
//! A field is built once from gradient components and cluster labels. Every
//! refinement sweep reads the front buffer, writes the back buffer and swaps
//! them, so all cells of one sweep observe the same prior state.

mod cell;
mod clusters;
mod error;
mod grid;

pub use cell::Cell;
pub use clusters::ClusterLabels;
pub use error::FieldError;
pub use grid::{FieldParts, FieldState, OrientationField};
