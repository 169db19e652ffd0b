//! # zenbmp
//!
//! Minimal BMP image codec: decode, per-pixel access, encode.
//!
//! The whole file is held in memory. Decoding validates the headers,
//! normalizes row order, and produces an [`Image`] that owns its pixel
//! buffer; encoding is deterministic (same image, same bytes). Pixel
//! accessors hide the storage differences between indexed and
//! direct-color images.
//!
//! ## Supported
//!
//! - Uncompressed BMP with a 40-byte BITMAPINFOHEADER
//! - 8-bit indexed (256-entry palette), 24-bit RGB, 32-bit RGBX
//!   (the fourth byte is padding, not alpha)
//! - Bottom-up and top-down (negative height) row order on decode
//!
//! ## Non-Goals
//!
//! - RLE and bitfield compression
//! - 1/2/4/16-bit depths
//! - Color management
//! - Streaming or incremental I/O
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{Depth, Image, ImageInfo, RGB8};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.depth);
//!
//! // Decode
//! let image = Image::from_bytes(data)?;
//! let top_left = image.pixel_rgb(0, 0)?;
//!
//! // Build from scratch and encode
//! let mut blank = Image::new(2, 2, Depth::Rgb24)?;
//! blank.set_pixel_rgb(0, 0, RGB8::new(255, 0, 0))?;
//! let bytes = blank.to_bytes();
//! # let _ = (top_left, bytes);
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod image;
mod info;
mod limits;
mod pixel;

// Re-exports
pub use decode::Decoder;
pub use error::{BmpError, unwrap_or_report};
pub use image::Image;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::Depth;
pub use rgb::RGB8;
