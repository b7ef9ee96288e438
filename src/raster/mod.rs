//! Raster side of the viewer: pixel buffers and the geometric pipeline.
//!
//! 1. **Decoding** - image file to an owned RGB/RGBA [`PixelBuffer`]
//! 2. **Orientation** - horizontal/vertical flips, quarter-turn rotations
//! 3. **Windowing** - zoom and pan select a [`ViewWindow`]
//! 4. **Resampling** - bilinear resize of the window to the display grid

mod buffer;
mod decode;
mod resample;
mod transform;
mod window;

pub use buffer::{allocate, byte_len, BufferError, PixelBuffer};
pub use decode::{decode, from_dynamic, DecodeError};
pub use resample::resize_bilinear;
pub use transform::{flip_horizontal, flip_vertical, rotate, rotate_180, rotate_90_cw, Rotation};
pub use window::ViewWindow;
