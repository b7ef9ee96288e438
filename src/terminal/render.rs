//! Streaming a resampled image to the terminal as colored cells.

use std::io::{self, Write};

use crate::color::{CellColor, ColorDepth, EncoderCache, RESET};
use crate::raster::PixelBuffer;

use super::dimensions::DisplayTarget;

/// Bytes reserved per row beyond the cells, for the reset code and newline.
const ROW_MARGIN: usize = 32;

/// Errors that abort rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("row buffer size for {cols} columns overflows the address space")]
    SizeOverflow { cols: u32 },

    #[error("failed to allocate a {bytes} byte row buffer")]
    AllocationFailed { bytes: usize },

    #[error("image is {width}x{height} but the display target is {cols}x{rows}")]
    TargetMismatch {
        width: u32,
        height: u32,
        cols: u32,
        rows: u32,
    },

    #[error("failed to write to the terminal: {0}")]
    Io(#[from] io::Error),
}

/// Settings shared by every row of one render.
#[derive(Debug, Clone, Copy)]
pub struct RenderStyle<'a> {
    pub depth: ColorDepth,
    pub background: CellColor,
    pub encoder: &'a EncoderCache,
}

/// Write `image` to `out`, one terminal row per pixel row.
///
/// Each pixel becomes one space whose background is the pixel color,
/// alpha-blended over `style.background` for RGBA input. Rows end with a
/// color reset and a newline and are written as soon as they are complete.
///
/// # Errors
/// Fails before writing anything if `image` does not match `target` or the
/// row buffer cannot be sized or allocated; fails mid-stream on I/O errors.
pub fn render<W: Write>(
    out: &mut W,
    image: &PixelBuffer,
    target: DisplayTarget,
    style: RenderStyle<'_>,
) -> Result<(), RenderError> {
    if image.width() != target.cols || image.height() != target.rows {
        return Err(RenderError::TargetMismatch {
            width: image.width(),
            height: image.height(),
            cols: target.cols,
            rows: target.rows,
        });
    }

    let capacity = (target.cols as usize)
        .checked_mul(style.depth.max_cell_len())
        .and_then(|n| n.checked_add(ROW_MARGIN))
        .ok_or(RenderError::SizeOverflow { cols: target.cols })?;
    let mut row = Vec::new();
    row.try_reserve_exact(capacity)
        .map_err(|_| RenderError::AllocationFailed { bytes: capacity })?;

    let row_len = image.width() as usize * image.channels();
    for pixels in image.data().chunks_exact(row_len) {
        row.clear();
        for pixel in pixels.chunks_exact(image.channels()) {
            let color = CellColor::composite(pixel, style.background);
            style.encoder.encode_into(&mut row, color, style.depth);
        }
        row.extend_from_slice(RESET);
        row.push(b'\n');
        if closed_early(out.write_all(&row))? {
            return Ok(());
        }
    }

    closed_early(out.flush())?;
    Ok(())
}

/// A reader that hung up (`| head`) ends the output; other write errors fail.
fn closed_early(result: io::Result<()>) -> Result<bool, RenderError> {
    match result {
        Ok(()) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("Output closed by reader, stopping");
            Ok(true)
        }
        Err(e) => Err(e.into()),
    }
}
