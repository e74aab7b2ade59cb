use orientation_refine::image::ImageRgb8;

/// Gray diagonal stripes along `x + y = const` with the given period.
///
/// Every non-extremal pixel has a gradient parallel to `(1, 1)`, so the
/// expected line orientation away from the border is `-π/4`.
pub fn diagonal_stripes(width: usize, height: usize, period: usize) -> ImageRgb8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(period > 1, "period must exceed one pixel");

    let mut img = ImageRgb8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let phase = ((x + y) % period) as f32 / period as f32;
            let v = 128.0 + 100.0 * (phase * std::f32::consts::TAU).sin();
            let v = v.round() as u8;
            img.set(x, y, [v, v, v]);
        }
    }
    img
}

/// Constant mid-gray image, so bilateral weights reduce to spatial ones.
pub fn flat_gray(width: usize, height: usize) -> ImageRgb8 {
    ImageRgb8::filled(width, height, [128, 128, 128])
}
