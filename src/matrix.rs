//! Plain-text numeric matrices.
//!
//! Format: a `rows cols` header followed by `rows × cols` whitespace-separated
//! values in row-major order. Writers put one matrix row per line; readers
//! accept any whitespace layout.

use crate::field::ClusterLabels;
use crate::image::io::ensure_parent_dir;
use crate::image::{ImageF32, ImageView};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Row-major values with their shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<T>,
}

/// Parse a matrix from text.
pub fn parse_matrix<T>(text: &str) -> Result<Matrix<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    let mut tokens = text.split_whitespace();
    let mut header = |name: &str| -> Result<usize, String> {
        let token = tokens
            .next()
            .ok_or_else(|| format!("missing {name} in matrix header"))?;
        token
            .parse::<usize>()
            .map_err(|e| format!("invalid {name} '{token}' in matrix header: {e}"))
    };
    let rows = header("rows")?;
    let cols = header("cols")?;
    if rows == 0 || cols == 0 {
        return Err(format!("matrix must be non-empty, header says {rows}x{cols}"));
    }

    let expected = rows * cols;
    let mut data = Vec::with_capacity(expected);
    for (i, token) in tokens.by_ref().take(expected).enumerate() {
        let value = token.parse::<T>().map_err(|e| {
            format!(
                "invalid value '{token}' at row {}, col {}: {e}",
                i / cols,
                i % cols
            )
        })?;
        data.push(value);
    }
    if data.len() < expected {
        return Err(format!(
            "matrix truncated: expected {expected} values, found {}",
            data.len()
        ));
    }
    if tokens.next().is_some() {
        return Err(format!("trailing data after {expected} matrix values"));
    }
    Ok(Matrix { rows, cols, data })
}

/// Read a matrix from a text file.
pub fn read_matrix<T>(path: &Path) -> Result<Matrix<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read matrix {}: {e}", path.display()))?;
    parse_matrix(&text).map_err(|e| format!("Failed to parse matrix {}: {e}", path.display()))
}

/// Format an image as a text matrix (`h` rows, `w` cols).
pub fn format_matrix(image: &ImageF32) -> String {
    let mut out = format!("{} {}\n", image.height(), image.width());
    for row in image.rows() {
        let line = row
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write an image as a text matrix, creating parent directories.
pub fn write_matrix(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, format_matrix(image))
        .map_err(|e| format!("Failed to write matrix {}: {e}", path.display()))
}

/// Load integer cluster labels and remap them to dense ids.
pub fn load_cluster_labels(path: &Path) -> Result<ClusterLabels, String> {
    let m: Matrix<i64> = read_matrix(path)?;
    ClusterLabels::new(m.cols, m.rows, m.data)
        .map_err(|e| format!("Invalid cluster labels {}: {e}", path.display()))
}
