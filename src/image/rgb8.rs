//! Owned 8-bit RGB image in row-major layout.
//!
//! Serves as the photometric side channel of the refinement and as the
//! output raster of the visualizations.
use super::ImageF32;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageRgb8 {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: Vec<[u8; 3]>,
}

impl ImageRgb8 {
    /// Black image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, [0, 0, 0])
    }

    pub fn filled(w: usize, h: usize, rgb: [u8; 3]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![rgb; w * h],
        }
    }

    /// Wrap row-major pixels. Returns `None` when `data.len() != w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<[u8; 3]>) -> Option<Self> {
        (data.len() == w * h).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let i = y * self.stride + x;
        self.data[i] = rgb;
    }

    /// Luma in 0..=255 using the BT.601 weights.
    pub fn to_luma_f32(&self) -> ImageF32 {
        ImageF32::from_fn(self.w, self.h, |x, y| {
            let [r, g, b] = self.get(x, y);
            0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
        })
    }
}

impl crate::image::traits::ImageView for ImageRgb8 {
    type Pixel = [u8; 3];

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageRgb8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [[u8; 3]] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
