//! I/O helpers for color images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned 8-bit RGB buffer.
//! - `save_rgb_image`: write an `ImageRgb8` to disk (format from extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageRgb8;
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<ImageRgb8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|p| p.0).collect();
    ImageRgb8::from_vec(width, height, data)
        .ok_or_else(|| format!("Failed to decode {}: unexpected buffer size", path.display()))
}

/// Save an RGB buffer; the format follows the file extension.
pub fn save_rgb_image(buffer: &ImageRgb8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(buffer.w as u32, buffer.h as u32);
    for (x, y, px) in out.enumerate_pixels_mut() {
        px.0 = buffer.get(x as usize, y as usize);
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
