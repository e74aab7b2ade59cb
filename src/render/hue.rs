//! Orientation → color mapping.
//!
//! The orientation domain `(-π/2, π/2]` is spread over the full hue circle:
//! `hue = (angle + π/2) / π · 360°`. Both ends of the domain describe the same
//! line, and both map to red.

use crate::angle::wrap_orientation;
use std::f32::consts::{FRAC_PI_2, PI};

/// HSV → RGB with `hue` in degrees (any finite value, taken modulo 360) and
/// `saturation`, `value` in `[0, 1]`.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> [u8; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    // rem_euclid may round up to exactly 360.
    let sector = (h.floor() as usize) % 6;
    let f = h - h.floor();
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);
    let (r, g, b) = match sector {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    [to_u8(r), to_u8(g), to_u8(b)]
}

#[inline]
fn to_u8(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Fully saturated color for an orientation. Out-of-domain angles are wrapped
/// first; non-finite angles have no color.
pub fn orientation_color(angle: f32) -> Option<[u8; 3]> {
    if !angle.is_finite() {
        return None;
    }
    let hue = (wrap_orientation(angle) + FRAC_PI_2) / PI * 360.0;
    Some(hsv_to_rgb(hue, 1.0, 1.0))
}
