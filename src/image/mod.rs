pub mod f32;
pub mod io;
pub mod rgb8;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::rgb8::ImageRgb8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
