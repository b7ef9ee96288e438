//! Orientation operators: flips and clockwise rotations.
//!
//! Every operator borrows its source and returns a freshly allocated buffer.
//! Callers hold a single binding and reassign it, so the previous generation
//! is dropped as soon as the next one exists.

use super::buffer::{BufferError, PixelBuffer};

/// Clockwise rotation in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    Cw90,
    Cw180,
    Cw270,
}

impl Rotation {
    /// Build a rotation from a degree count.
    ///
    /// Degrees that are not a multiple of 90 lose their remainder (toward
    /// zero, so `-100` becomes `-90`) with a warning. The result is then
    /// reduced modulo 360, so `-90` is `Cw270` and `450` is `Cw90`.
    pub fn from_degrees(degrees: i32) -> Self {
        let remainder = degrees % 90;
        let degrees = if remainder != 0 {
            let adjusted = degrees - remainder;
            log::warn!(
                "Rotation must be a multiple of 90 degrees; using {} instead of {}",
                adjusted,
                degrees
            );
            adjusted
        } else {
            degrees
        };

        match degrees.rem_euclid(360) {
            90 => Rotation::Cw90,
            180 => Rotation::Cw180,
            270 => Rotation::Cw270,
            _ => Rotation::None,
        }
    }

    pub fn degrees(self) -> u32 {
        match self {
            Rotation::None => 0,
            Rotation::Cw90 => 90,
            Rotation::Cw180 => 180,
            Rotation::Cw270 => 270,
        }
    }
}

/// Mirror left-right into a new buffer.
pub fn flip_horizontal(src: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
    let (w, h) = (src.width(), src.height());
    let bpp = src.channels();
    let mut out = PixelBuffer::zeroed(w, h, bpp)?;

    for y in 0..h {
        for x in 0..w {
            let from = src.offset(w - 1 - x, y);
            let to = out.offset(x, y);
            out.data_mut()[to..to + bpp].copy_from_slice(&src.data()[from..from + bpp]);
        }
    }
    Ok(out)
}

/// Mirror top-bottom into a new buffer.
pub fn flip_vertical(src: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
    let (w, h) = (src.width(), src.height());
    let row_len = w as usize * src.channels();
    let mut out = PixelBuffer::zeroed(w, h, src.channels())?;

    // Whole rows move together, so copy them as slices.
    for y in 0..h as usize {
        let from = (h as usize - 1 - y) * row_len;
        let to = y * row_len;
        out.data_mut()[to..to + row_len].copy_from_slice(&src.data()[from..from + row_len]);
    }
    Ok(out)
}

/// Rotate a quarter turn clockwise. The output is `height x width`.
///
/// Output pixel `(x, y)` reads source pixel `(y, src_h - 1 - x)`, which
/// stays in bounds for non-square input.
pub fn rotate_90_cw(src: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
    let (new_w, new_h) = (src.height(), src.width());
    let src_h = src.height();
    let bpp = src.channels();
    let mut out = PixelBuffer::zeroed(new_w, new_h, bpp)?;

    for y in 0..new_h {
        for x in 0..new_w {
            let from = src.offset(y, src_h - 1 - x);
            let to = out.offset(x, y);
            out.data_mut()[to..to + bpp].copy_from_slice(&src.data()[from..from + bpp]);
        }
    }
    Ok(out)
}

/// Rotate a half turn in a single pass.
pub fn rotate_180(src: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
    let (w, h) = (src.width(), src.height());
    let bpp = src.channels();
    let mut out = PixelBuffer::zeroed(w, h, bpp)?;

    for y in 0..h {
        for x in 0..w {
            let from = src.offset(w - 1 - x, h - 1 - y);
            let to = out.offset(x, y);
            out.data_mut()[to..to + bpp].copy_from_slice(&src.data()[from..from + bpp]);
        }
    }
    Ok(out)
}

/// Apply a [`Rotation`]. Returns `None` when no rotation is requested so the
/// caller can keep its current buffer.
pub fn rotate(src: &PixelBuffer, rotation: Rotation) -> Result<Option<PixelBuffer>, BufferError> {
    match rotation {
        Rotation::None => Ok(None),
        Rotation::Cw90 => rotate_90_cw(src).map(Some),
        Rotation::Cw180 => rotate_180(src).map(Some),
        Rotation::Cw270 => {
            let mut current = rotate_90_cw(src)?;
            for _ in 0..2 {
                current = rotate_90_cw(&current)?;
            }
            Ok(Some(current))
        }
    }
}
