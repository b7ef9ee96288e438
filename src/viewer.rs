//! Decode, orient, fit and render one image.
//!
//! Each stage borrows the current buffer and returns a new one; the result is
//! assigned back over the predecessor so no more than two generations are
//! alive at any point.

use std::io::Write;
use std::path::Path;

use crate::color::{CellColor, ColorDepth, EncoderCache};
use crate::error::ViewError;
use crate::raster::{
    decode, flip_horizontal, flip_vertical, resize_bilinear, rotate, BufferError, PixelBuffer,
    Rotation, ViewWindow,
};
use crate::terminal::{
    render, solve_with_overrides, DisplayTarget, RenderStyle, TerminalSize,
    DEFAULT_CHAR_ASPECT_RATIO,
};

/// Peak working set (bytes per decoded byte) above which a warning is logged.
const WORKING_SET_FACTOR: u64 = 5;
const LARGE_IMAGE_BYTES: u64 = 100 * 1024 * 1024;

/// Everything that controls how an image is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    /// Explicit output width in columns.
    pub width: Option<u32>,
    /// Explicit output height in rows.
    pub height: Option<u32>,
    /// Zoom factor applied to the view window.
    pub zoom: f32,
    /// Pan offsets in post-rotation pixels.
    pub offset_x: i64,
    pub offset_y: i64,
    pub flip_h: bool,
    pub flip_v: bool,
    pub rotation: Rotation,
    /// Blended under pixels with alpha.
    pub background: CellColor,
    pub depth: ColorDepth,
    /// Terminal cell height / width.
    pub char_aspect: f32,
    pub terminal: TerminalSize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            zoom: 1.0,
            offset_x: 0,
            offset_y: 0,
            flip_h: false,
            flip_v: false,
            rotation: Rotation::None,
            background: CellColor::BLACK,
            depth: ColorDepth::TrueColor,
            char_aspect: DEFAULT_CHAR_ASPECT_RATIO,
            terminal: TerminalSize::default(),
        }
    }
}

/// Apply the flips and then the rotation from `options`.
pub fn orient(image: PixelBuffer, options: &ViewOptions) -> Result<PixelBuffer, BufferError> {
    let mut image = image;
    if options.flip_h {
        image = flip_horizontal(&image)?;
    }
    if options.flip_v {
        image = flip_vertical(&image)?;
    }
    if let Some(rotated) = rotate(&image, options.rotation)? {
        image = rotated;
    }
    Ok(image)
}

/// Turn a decoded image into the buffer that is written to the terminal.
///
/// Orientation comes first, then the zoom/pan window is chosen in the
/// oriented image and the window is resampled to the solved target. Zoom
/// only narrows the window; the grid itself is fitted at zoom 1.0.
///
/// # Returns
/// The resampled buffer together with the target it was sized for.
pub fn prepare(
    decoded: PixelBuffer,
    options: &ViewOptions,
) -> Result<(PixelBuffer, DisplayTarget), ViewError> {
    warn_if_large(&decoded);

    let mut image = orient(decoded, options)?;
    log::debug!(
        "Oriented image: {}x{} (rotation {} degrees)",
        image.width(),
        image.height(),
        options.rotation.degrees()
    );

    let window = ViewWindow::select(
        image.width(),
        image.height(),
        options.zoom,
        options.offset_x,
        options.offset_y,
    );
    log::debug!(
        "View window: {}x{} at ({}, {})",
        window.w,
        window.h,
        window.x,
        window.y
    );

    let target = solve_with_overrides(
        window.w,
        window.h,
        options.width,
        options.height,
        1.0,
        options.terminal,
        options.char_aspect,
    );

    image = resize_bilinear(&image, window, target.cols, target.rows)?;
    Ok((image, target))
}

/// Show the image at `path` on `out`.
///
/// # Returns
/// The display target the image was rendered at.
pub fn run<W: Write>(
    path: &Path,
    options: &ViewOptions,
    out: &mut W,
) -> Result<DisplayTarget, ViewError> {
    log::info!("Loading image: {}", path.display());
    let decoded = decode(path)?;
    log::info!(
        "Decoded {}x{} {}",
        decoded.width(),
        decoded.height(),
        if decoded.has_alpha() { "RGBA" } else { "RGB" }
    );

    let (image, target) = prepare(decoded, options)?;
    let style = RenderStyle {
        depth: options.depth,
        background: options.background,
        encoder: EncoderCache::global(),
    };
    render(out, &image, target, style)?;
    log::info!("Rendered {}x{} cells at {}", target.cols, target.rows, options.depth);
    Ok(target)
}

fn warn_if_large(image: &PixelBuffer) {
    let working_set = image.width() as u64
        * image.height() as u64
        * image.channels() as u64
        * WORKING_SET_FACTOR;
    if working_set > LARGE_IMAGE_BYTES {
        log::warn!(
            "Large image {}x{} may need about {} MiB while processing; \
             consider --width/--height to reduce the output size",
            image.width(),
            image.height(),
            working_set / (1024 * 1024)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_2x2() -> PixelBuffer {
        // A B / C D, each pixel a distinct red value
        PixelBuffer::new(2, 2, 3, vec![10, 0, 0, 20, 0, 0, 30, 0, 0, 40, 0, 0]).unwrap()
    }

    fn reds(image: &PixelBuffer) -> Vec<u8> {
        image.data().chunks_exact(image.channels()).map(|p| p[0]).collect()
    }

    #[test]
    fn test_orient_identity() {
        let image = orient(rgb_2x2(), &ViewOptions::default()).unwrap();
        assert_eq!(reds(&image), vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_orient_flips_before_rotation() {
        let options = ViewOptions {
            flip_h: true,
            rotation: Rotation::Cw90,
            ..ViewOptions::default()
        };
        let image = orient(rgb_2x2(), &options).unwrap();
        // flip-h gives B A / D C, rotating that clockwise gives D B / C A
        assert_eq!(reds(&image), vec![40, 20, 30, 10]);
    }

    #[test]
    fn test_prepare_explicit_size_is_identity() {
        let options = ViewOptions {
            width: Some(2),
            height: Some(2),
            ..ViewOptions::default()
        };
        let (image, target) = prepare(rgb_2x2(), &options).unwrap();
        assert_eq!(target, DisplayTarget { cols: 2, rows: 2 });
        assert_eq!(image, rgb_2x2());
    }

    #[test]
    fn test_prepare_rotation_swaps_window() {
        let tall = PixelBuffer::zeroed(4, 8, 3).unwrap();
        let options = ViewOptions {
            rotation: Rotation::Cw90,
            width: Some(8),
            height: Some(4),
            ..ViewOptions::default()
        };
        let (image, target) = prepare(tall, &options).unwrap();
        assert_eq!((image.width(), image.height()), (8, 4));
        assert_eq!(target, DisplayTarget { cols: 8, rows: 4 });
    }

    #[test]
    fn test_prepare_fits_terminal() {
        let big = PixelBuffer::zeroed(1920, 1080, 3).unwrap();
        let (image, target) = prepare(big, &ViewOptions::default()).unwrap();
        assert_eq!(target, DisplayTarget { cols: 58, rows: 22 });
        assert_eq!(image.data().len(), 58 * 22 * 3);
    }

    #[test]
    fn test_prepare_zoom_narrows_window() {
        // Zoomed 2x on a 4x1 strip with a dark left half; panning right shows the bright half
        let data = vec![0, 0, 0, 0, 0, 0, 200, 0, 0, 200, 0, 0];
        let strip = PixelBuffer::new(4, 1, 3, data).unwrap();
        let options = ViewOptions {
            zoom: 2.0,
            offset_x: 10,
            width: Some(2),
            height: Some(1),
            ..ViewOptions::default()
        };
        let (image, _) = prepare(strip, &options).unwrap();
        assert_eq!(reds(&image), vec![200, 200]);
    }
}
