//! Visualizations of an orientation field.
//!
//! - [`render_orientation`]: hue-encoded orientation per cell.
//! - [`render_gradient`]: the construction-time gradient components, with the
//!   cluster id in the blue channel.

pub mod hue;

pub use hue::{hsv_to_rgb, orientation_color};

use crate::field::{FieldError, OrientationField};
use crate::image::io::save_rgb_image;
use crate::image::ImageRgb8;
use std::path::Path;

/// Hue-encoded orientation image. Fails on the first non-finite angle.
pub fn render_orientation(field: &OrientationField) -> Result<ImageRgb8, FieldError> {
    let mut out = ImageRgb8::new(field.width(), field.height());
    for row in 0..field.height() {
        for col in 0..field.width() {
            let rgb = orientation_color(field.angle(row, col)).ok_or(
                FieldError::NonFiniteValue {
                    what: "angle",
                    row,
                    col,
                },
            )?;
            out.set(col, row, rgb);
        }
    }
    Ok(out)
}

/// Gradient image: red `|dx|`, green `|dy|`, both scaled by the largest
/// absolute component in the field; blue is the cluster id modulo 256.
pub fn render_gradient(field: &OrientationField) -> ImageRgb8 {
    let max_grad = field
        .cells()
        .iter()
        .fold(0.0f32, |m, c| m.max(c.dx.abs()).max(c.dy.abs()));
    let scale = if max_grad > 0.0 { 255.0 / max_grad } else { 0.0 };

    let mut out = ImageRgb8::new(field.width(), field.height());
    for cell in field.cells() {
        let r = (cell.dx.abs() * scale).round().clamp(0.0, 255.0) as u8;
        let g = (cell.dy.abs() * scale).round().clamp(0.0, 255.0) as u8;
        let b = (cell.cluster % 256) as u8;
        out.set(cell.col, cell.row, [r, g, b]);
    }
    out
}

pub fn save_orientation_image(field: &OrientationField, path: &Path) -> Result<(), String> {
    let image = render_orientation(field)
        .map_err(|e| format!("Failed to render {}: {e}", path.display()))?;
    save_rgb_image(&image, path)
}

pub fn save_gradient_image(field: &OrientationField, path: &Path) -> Result<(), String> {
    save_rgb_image(&render_gradient(field), path)
}
