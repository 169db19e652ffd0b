use alloc::string::String;
use core::fmt;

use crate::pixel::Depth;

/// Errors from BMP decoding, encoding, and pixel access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    OutOfRange { x: u32, y: u32, width: u32, height: u32 },

    #[error("{op} not supported for {depth:?} images")]
    UnsupportedOperation { op: &'static str, depth: Depth },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Unwrap a result, or write the error description to `sink` and return
/// `fallback`.
///
/// Keeps the check-after-every-call pattern to one line:
///
/// ```
/// use zenbmp::{Depth, Image, RGB8, unwrap_or_report};
///
/// let image = Image::new(4, 4, Depth::Rgb24).unwrap();
/// let mut log = String::new();
/// let px = unwrap_or_report(image.pixel_rgb(9, 9), &mut log, RGB8::new(0, 0, 0));
/// assert_eq!(px, RGB8::new(0, 0, 0));
/// assert!(log.contains("outside"));
/// ```
pub fn unwrap_or_report<T, W: fmt::Write>(
    result: Result<T, BmpError>,
    sink: &mut W,
    fallback: T,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            let _ = writeln!(sink, "{err}");
            fallback
        }
    }
}
