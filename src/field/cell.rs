use serde::Serialize;

/// Immutable provenance of one grid position.
///
/// The evolving angle and magnitude live in the field's buffers, not here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// Dense cluster id in `0..cluster_count`.
    pub cluster: usize,
    pub dx: f32,
    pub dy: f32,
    /// Magnitude at construction; the strength gate compares against this.
    pub initial_magnitude: f32,
}
