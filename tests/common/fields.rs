use orientation_refine::field::FieldParts;
use orientation_refine::image::ImageF32;
use orientation_refine::{ClusterLabels, OrientationField};

/// Field with explicit angles (radians), magnitudes and raw cluster labels;
/// the gradient planes are left at zero.
pub fn field_from(
    width: usize,
    height: usize,
    angles: Vec<f32>,
    magnitudes: Vec<f32>,
    labels: Vec<i64>,
) -> OrientationField {
    let zeros = ImageF32::new(width, height);
    let angle = ImageF32::from_vec(width, height, angles).expect("angle plane size");
    let magnitude = ImageF32::from_vec(width, height, magnitudes).expect("magnitude plane size");
    let labels = ClusterLabels::new(width, height, labels).expect("label count");
    OrientationField::from_parts(FieldParts {
        gx: &zeros,
        gy: &zeros,
        magnitude: &magnitude,
        angle: &angle,
        labels: &labels,
    })
    .expect("valid field")
}

/// Deterministic linear congruential generator for reproducible fixtures.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform sample in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 40) as f32 / (1u64 << 24) as f32
    }

    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

/// Random angles over several half turns, random magnitudes (some zero)
/// and `clusters` interleaved labels.
pub fn random_planes(
    width: usize,
    height: usize,
    clusters: i64,
    seed: u64,
) -> (Vec<f32>, Vec<f32>, Vec<i64>) {
    let mut rng = Lcg::new(seed);
    let n = width * height;
    let mut angles = Vec::with_capacity(n);
    let mut magnitudes = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        angles.push(rng.range(-4.0, 4.0));
        magnitudes.push(if i % 7 == 0 { 0.0 } else { rng.range(0.0, 50.0) });
        labels.push(100 + (rng.next_f32() * clusters as f32) as i64);
    }
    (angles, magnitudes, labels)
}
