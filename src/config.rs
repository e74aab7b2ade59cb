//! JSON configuration of the `orient_refine` binary.

use crate::edges::GradientOperator;
use crate::refine::RefineOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct RunConfig {
    /// Source image; provides both the gradients and the bilateral colors.
    pub input: PathBuf,
    /// Text matrix of integer cluster labels, same size as the image.
    pub clusters: PathBuf,
    #[serde(default)]
    pub gradient: GradientOperator,
    #[serde(default)]
    pub refine: RefineOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// Export every `save_every` sweeps; `None` or 0 exports the final field
    /// only.
    #[serde(default)]
    pub save_every: Option<usize>,
    /// Also write angle/magnitude text matrices.
    #[serde(default)]
    pub write_matrices: bool,
    /// Per-sweep statistics as JSON.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

impl OutputConfig {
    /// Whether the field is exported after `completed` of `total` sweeps.
    pub fn exports_after(&self, completed: usize, total: usize) -> bool {
        if completed == total {
            return true;
        }
        match self.save_every {
            Some(step) if step > 0 => completed % step == 0,
            _ => false,
        }
    }
}

pub fn load_config(path: &Path) -> Result<RunConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
