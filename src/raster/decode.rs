//! Image file decoding into [`PixelBuffer`]s.

use std::path::{Path, PathBuf};

use image::error::ImageError;
use image::{DynamicImage, GenericImageView, ImageReader};

use super::buffer::{BufferError, PixelBuffer};

/// Errors that can occur while loading an image file.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported image format or corrupt file header for '{}'", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("image dimensions exceed internal limits for '{}'", path.display())]
    TooLarge { path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to load image '{}': {reason}", path.display())]
    Other { path: PathBuf, reason: String },

    #[error("decoded image for '{}' is unusable: {source}", path.display())]
    Buffer { path: PathBuf, source: BufferError },
}

/// Load an image file as 8-bit RGB or RGBA.
///
/// Sources with an alpha channel become 4-channel buffers; everything else
/// (gray, gray+alpha without alpha, 16-bit, float) is expanded to 3-channel
/// RGB so the renderer only ever sees 3 or 4 channels.
pub fn decode(path: &Path) -> Result<PixelBuffer, DecodeError> {
    log::debug!("Decoding {}", path.display());
    let io_error = |source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    };
    // Sniff the magic bytes; the extension is only a fallback.
    let img = ImageReader::open(path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)?
        .decode()
        .map_err(|e| classify(path, e))?;
    from_dynamic(img).map_err(|source| DecodeError::Buffer {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert an already-decoded image to a [`PixelBuffer`].
pub fn from_dynamic(img: DynamicImage) -> Result<PixelBuffer, BufferError> {
    let (width, height) = img.dimensions();
    if img.color().has_alpha() {
        PixelBuffer::new(width, height, 4, img.into_rgba8().into_raw())
    } else {
        PixelBuffer::new(width, height, 3, img.into_rgb8().into_raw())
    }
}

fn classify(path: &Path, err: ImageError) -> DecodeError {
    let path = path.to_path_buf();
    match err {
        ImageError::Unsupported(_) | ImageError::Decoding(_) => {
            DecodeError::UnsupportedFormat { path }
        }
        ImageError::Limits(_) => DecodeError::TooLarge { path },
        ImageError::IoError(source) => DecodeError::Io { path, source },
        other => DecodeError::Other {
            path,
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, RgbaImage};

    #[test]
    fn test_from_dynamic_keeps_alpha() {
        let img = RgbaImage::from_raw(1, 1, vec![10, 20, 30, 40]).unwrap();
        let buf = from_dynamic(DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(buf.channels(), 4);
        assert_eq!(buf.data(), &[10, 20, 30, 40]);
    }

    #[test]
    fn test_from_dynamic_expands_gray() {
        let img = GrayImage::from_raw(2, 1, vec![7, 200]).unwrap();
        let buf = from_dynamic(DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(buf.channels(), 3);
        assert_eq!(buf.data(), &[7, 7, 7, 200, 200, 200]);
    }

    #[test]
    fn test_decode_missing_file_is_io_error() {
        let err = decode(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, DecodeError::Io { .. }), "got {:?}", err);
    }
}
