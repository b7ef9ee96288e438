//! Bilinear resampling of a view window to the display grid.

use super::buffer::{allocate, byte_len, BufferError, PixelBuffer};
use super::window::ViewWindow;

/// Resize the `window` region of `src` to `new_w x new_h` pixels.
///
/// Each output pixel maps back to the floating source position
/// `(win.x + x * win.w / new_w, win.y + y * win.h / new_h)` and blends its four
/// integer neighbours. Neighbour coordinates are clamped into the image
/// independently, so sampling at the right or bottom edge repeats the last
/// row or column instead of wrapping.
///
/// # Arguments
/// * `src` - Source buffer (3 or 4 channels)
/// * `window` - Region of `src` to sample
/// * `new_w` / `new_h` - Output size in pixels (one pixel per terminal cell)
///
/// # Errors
/// Returns an error when the window or target has a zero side, when
/// `new_w * new_h * channels` overflows `usize`, or when allocation fails.
pub fn resize_bilinear(
    src: &PixelBuffer,
    window: ViewWindow,
    new_w: u32,
    new_h: u32,
) -> Result<PixelBuffer, BufferError> {
    if window.w == 0 || window.h == 0 {
        return Err(BufferError::InvalidDimensions {
            width: window.w,
            height: window.h,
        });
    }
    if new_w == 0 || new_h == 0 {
        return Err(BufferError::InvalidDimensions {
            width: new_w,
            height: new_h,
        });
    }

    let bpp = src.channels();
    let mut out = allocate(byte_len(new_w, new_h, bpp)?)?;

    let max_x = src.width() as i64 - 1;
    let max_y = src.height() as i64 - 1;
    let x_scale = window.w as f32 / new_w as f32;
    let y_scale = window.h as f32 / new_h as f32;
    let data = src.data();

    for y in 0..new_h {
        let oy = window.y as f32 + y as f32 * y_scale;
        let y1 = oy as i64;
        let dy = oy - y1 as f32;
        let y2 = (y1 + 1).clamp(0, max_y);
        let y1 = y1.clamp(0, max_y);

        for x in 0..new_w {
            let ox = window.x as f32 + x as f32 * x_scale;
            let x1 = ox as i64;
            let dx = ox - x1 as f32;
            let x2 = (x1 + 1).clamp(0, max_x);
            let x1 = x1.clamp(0, max_x);

            let p11 = src.offset(x1 as u32, y1 as u32);
            let p21 = src.offset(x2 as u32, y1 as u32);
            let p12 = src.offset(x1 as u32, y2 as u32);
            let p22 = src.offset(x2 as u32, y2 as u32);
            let dst = (y as usize * new_w as usize + x as usize) * bpp;

            for c in 0..bpp {
                let top = lerp(data[p11 + c] as f32, data[p21 + c] as f32, dx);
                let bottom = lerp(data[p12 + c] as f32, data[p22 + c] as f32, dx);
                out[dst + c] = (lerp(top, bottom, dy) + 0.5) as u8;
            }
        }
    }

    PixelBuffer::new(new_w, new_h, bpp, out)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_resize_is_exact() {
        let src = PixelBuffer::new(3, 2, 3, (0..18).map(|v| v * 10).collect()).unwrap();
        let out = resize_bilinear(&src, ViewWindow::full(3, 2), 3, 2).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_upscale_interpolates_midpoint() {
        // 2x1 black to white, upscaled to 4x1: sample positions 0, 0.5, 1, 1.5
        let src = PixelBuffer::new(2, 1, 3, vec![0, 0, 0, 200, 200, 200]).unwrap();
        let out = resize_bilinear(&src, ViewWindow::full(2, 1), 4, 1).unwrap();
        let reds: Vec<u8> = out.data().chunks_exact(3).map(|p| p[0]).collect();
        // Position 1.5 clamps its right neighbour to column 1
        assert_eq!(reds, vec![0, 100, 200, 200]);
    }

    #[test]
    fn test_window_offset_is_respected() {
        // 4x1 with distinct values; window covering the last two pixels
        let src = PixelBuffer::new(4, 1, 3, vec![10, 10, 10, 20, 20, 20, 30, 30, 30, 40, 40, 40])
            .unwrap();
        let window = ViewWindow { x: 2, y: 0, w: 2, h: 1 };
        let out = resize_bilinear(&src, window, 2, 1).unwrap();
        assert_eq!(out.data(), &[30, 30, 30, 40, 40, 40]);
    }

    #[test]
    fn test_alpha_channel_is_resampled() {
        let src = PixelBuffer::new(1, 1, 4, vec![1, 2, 3, 128]).unwrap();
        let out = resize_bilinear(&src, ViewWindow::full(1, 1), 2, 2).unwrap();
        assert_eq!(out.channels(), 4);
        assert!(out.data().chunks_exact(4).all(|p| p == [1, 2, 3, 128]));
    }

    #[test]
    fn test_zero_target_rejected() {
        let src = PixelBuffer::new(1, 1, 3, vec![0, 0, 0]).unwrap();
        assert!(matches!(
            resize_bilinear(&src, ViewWindow::full(1, 1), 0, 5),
            Err(BufferError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_zero_window_rejected() {
        let src = PixelBuffer::new(1, 1, 3, vec![0, 0, 0]).unwrap();
        let window = ViewWindow { x: 0, y: 0, w: 0, h: 1 };
        assert!(resize_bilinear(&src, window, 1, 1).is_err());
    }

    #[test]
    fn test_overflowing_target_rejected() {
        let src = PixelBuffer::new(1, 1, 4, vec![0, 0, 0, 0]).unwrap();
        let result = resize_bilinear(&src, ViewWindow::full(1, 1), u32::MAX, u32::MAX);
        assert!(matches!(
            result,
            Err(BufferError::SizeOverflow { .. }) | Err(BufferError::AllocationFailed { .. })
        ));
    }
}
