//! Owned pixel buffers and fallible allocation helpers.

/// Errors raised while building or allocating pixel buffers.
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("unsupported channel count {0} (expected 3 or 4)")]
    UnsupportedChannels(usize),

    #[error("pixel data is {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("buffer size {width}x{height}x{channels} overflows the address space")]
    SizeOverflow {
        width: u32,
        height: u32,
        channels: usize,
    },

    #[error("failed to allocate {bytes} bytes")]
    AllocationFailed { bytes: usize },
}

/// Byte length of a `width x height x channels` buffer, checked for overflow.
pub fn byte_len(width: u32, height: u32, channels: usize) -> Result<usize, BufferError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(channels))
        .ok_or(BufferError::SizeOverflow {
            width,
            height,
            channels,
        })
}

/// Allocate a zeroed byte vector, reporting allocation failure instead of aborting.
pub fn allocate(len: usize) -> Result<Vec<u8>, BufferError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| BufferError::AllocationFailed { bytes: len })?;
    data.resize(len, 0);
    Ok(data)
}

/// A decoded or transformed image held as interleaved 8-bit channels.
///
/// The invariant `data.len() == width * height * channels` holds for every
/// value of this type; the only way to build one is [`PixelBuffer::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw pixel data after validating its shape.
    ///
    /// # Errors
    /// Fails on a zero dimension, a channel count other than 3 or 4, or a
    /// data length that does not match the dimensions.
    pub fn new(
        width: u32,
        height: u32,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::InvalidDimensions { width, height });
        }
        if channels != 3 && channels != 4 {
            return Err(BufferError::UnsupportedChannels(channels));
        }
        let expected = byte_len(width, height, channels)?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Allocate a zero-filled buffer of the given shape.
    pub fn zeroed(width: u32, height: u32, channels: usize) -> Result<Self, BufferError> {
        let len = byte_len(width, height, channels)?;
        Self::new(width, height, channels, allocate(len)?)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per pixel (3 for RGB, 4 for RGBA).
    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels
    }
}
