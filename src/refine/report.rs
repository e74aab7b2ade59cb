use super::neighbors::AdmissionPolicy;
use serde::Serialize;

/// Outcome of one sweep over the grid.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepStats {
    /// Zero-based sweep index.
    pub iteration: usize,
    pub policy: AdmissionPolicy,
    /// Cells recomputed from two or more candidates.
    pub updated_cells: usize,
    /// Cells left as they were (single candidate or zero aggregate mass).
    pub unchanged_cells: usize,
    /// Mean undirected angle change over all cells, radians.
    pub mean_angle_change: f32,
    pub max_angle_change: f32,
    pub elapsed_ms: f64,
}

/// Per-sweep trace of a full refinement run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineReport {
    pub total_ms: f64,
    pub sweeps: Vec<SweepStats>,
}

impl RefineReport {
    pub fn last(&self) -> Option<&SweepStats> {
        self.sweeps.last()
    }
}
