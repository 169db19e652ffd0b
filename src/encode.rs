//! BMP encoder: header synthesis, palette serialization, row padding.

use alloc::vec::Vec;

use crate::image::Image;

/// Serialize an image to a complete BMP file. Rows are written
/// bottom-up with zero padding to the stride boundary; output depends
/// only on the image contents.
pub(crate) fn encode_bmp(image: &Image) -> Vec<u8> {
    let stride = image.stride();
    let h = image.height() as usize;
    let row_bytes = image.width() as usize * image.depth().bytes_per_pixel();
    let pad_bytes = stride - row_bytes;

    let palette_bytes = if image.depth().has_palette() { 256 * 4 } else { 0 };
    let pixel_offset = 14 + 40 + palette_bytes;
    let pixel_data_size = stride * h;
    let file_size = pixel_offset + pixel_data_size;

    let mut out = Vec::with_capacity(file_size);

    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(pixel_offset as u32).to_le_bytes());

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(image.width() as i32).to_le_bytes());
    out.extend_from_slice(&(image.height() as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&image.depth().bits().to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    let colors_used: u32 = if image.depth().has_palette() { 256 } else { 0 };
    out.extend_from_slice(&colors_used.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    // Color table, B,G,R,reserved per entry
    if let Some(palette) = image.palette() {
        for entry in palette {
            out.extend_from_slice(&[entry.b, entry.g, entry.r, 0]);
        }
    }

    for row in image.raw_pixels().rchunks_exact(stride) {
        out.extend_from_slice(&row[..row_bytes]);
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    out
}
