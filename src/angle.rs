//! Orientation helpers for the π-periodic (undirected line) domain.
//!
//! Orientations in this crate live in `(-π/2, π/2]`. Adding or subtracting π
//! yields the same line, so every helper here folds its result back into that
//! half-open interval.

use std::f32::consts::{FRAC_PI_2, PI};

/// Wraps an angle into the orientation domain `(-π/2, π/2]`.
///
/// Angles already in the domain and non-finite input are returned unchanged,
/// bit for bit.
#[inline]
pub fn wrap_orientation(angle: f32) -> f32 {
    if !angle.is_finite() || (angle > -FRAC_PI_2 && angle <= FRAC_PI_2) {
        return angle;
    }
    let mut wrapped = (angle + FRAC_PI_2).rem_euclid(PI) - FRAC_PI_2;
    // rem_euclid lands in [0, π), so the result is in [-π/2, π/2).
    if wrapped <= -FRAC_PI_2 {
        wrapped += PI;
    }
    wrapped
}

/// Line orientation for a gradient `(dx, dy)`, i.e. `atan(-dx / dy)`.
///
/// A vertical slope (`dy == 0`) maps to `π/2`; a zero gradient has no
/// direction and maps to `0`.
#[inline]
pub fn orientation_from_gradient(dx: f32, dy: f32) -> f32 {
    if dy == 0.0 {
        return if dx == 0.0 { 0.0 } else { FRAC_PI_2 };
    }
    wrap_orientation((-dx / dy).atan())
}

/// Computes the smallest unsigned angular difference between two angles,
/// treating antipodal directions as equivalent (i.e. π apart → 0).
#[inline]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let mut diff = (a - b).abs();
    if diff > PI {
        diff = diff.rem_euclid(PI);
    }
    if diff > FRAC_PI_2 {
        PI - diff
    } else {
        diff
    }
}
