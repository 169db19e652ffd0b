use crate::error::BmpError;

/// Resource limits for a decode operation.
///
/// All fields default to `None` (unlimited). Applied after header
/// validation, before the pixel buffer is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check(
        &self,
        width: u32,
        height: u32,
        pixel_bytes: usize,
    ) -> Result<(), BmpError> {
        let checks = [
            (self.max_width, u64::from(width), "width"),
            (self.max_height, u64::from(height), "height"),
            (
                self.max_pixels,
                u64::from(width) * u64::from(height),
                "pixel count",
            ),
            (self.max_memory_bytes, pixel_bytes as u64, "pixel buffer"),
        ];
        for (limit, actual, what) in checks {
            if let Some(limit) = limit {
                if actual > limit {
                    return Err(BmpError::LimitExceeded(alloc::format!(
                        "{what} {actual} exceeds limit {limit}"
                    )));
                }
            }
        }
        Ok(())
    }
}
