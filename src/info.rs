use crate::decode::parse_header;
use crate::error::BmpError;
use crate::pixel::Depth;

/// Image properties read from the headers, without decoding pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub depth: Depth,
    /// Whether the file stores rows top-down (negative height field).
    pub top_down: bool,
}

impl ImageInfo {
    /// Probe a BMP byte stream. Runs the same header validation as a
    /// full decode, including the check that the pixel-data region fits
    /// in the buffer.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let header = parse_header(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            depth: header.depth,
            top_down: header.top_down,
        })
    }
}
