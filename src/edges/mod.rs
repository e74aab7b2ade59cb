//! Image gradients feeding the initial orientation field.
//!
//! - 3×3 Sobel/Scharr convolution returning `gx`, `gy` and magnitude.
//! - Borders are handled by clamping indices (replicate).
//!
//! The refinement itself never touches these buffers again; they are
//! provenance copied into each field cell at construction.

pub mod grad;

pub use grad::{scharr_gradients, sobel_gradients, Grad, GradientOperator};
