//! Top-level error type for viewing an image.

use crate::raster::{BufferError, DecodeError};
use crate::terminal::RenderError;

/// Any failure between reading the file and the last byte written.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("image processing failed: {0}")]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
