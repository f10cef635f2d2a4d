//! Raster image types.

use crate::error::{RenderError, Result};

/// A single RGB pixel.
pub type Rgb = [u8; 3];

/// A decoded RGB image.
///
/// Pixels are stored row-major, three bytes per pixel. Each pipeline stage
/// produces a new `RasterImage` rather than mutating its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Raw pixel data in RGB format
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl RasterImage {
    /// Number of bytes per pixel (always 3, RGB).
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Create an image from raw RGB bytes.
    ///
    /// Fails with [`RenderError::InvalidParameter`] if either dimension is
    /// zero or the buffer length does not match `width * height * 3`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::invalid(format!(
                "image dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(Self::BYTES_PER_PIXEL))
            .ok_or_else(|| RenderError::invalid("image dimensions overflow"))?;
        if data.len() != expected {
            return Err(RenderError::Internal(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{}",
                data.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Create an image filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let count = width as usize * height as usize;
        let data = color.iter().copied().cycle().take(count * 3).collect();
        Self::new(width, height, data)
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let idx = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Raw bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * Self::BYTES_PER_PIXEL;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
