//! Lanczos resampling to the resolved character grid.

use image::imageops::{self, FilterType};
use image::RgbImage;

use super::types::RasterImage;
use crate::ascii::MAX_OUTPUT_PIXELS;
use crate::error::{RenderError, Result};

/// Resample `image` to exactly `width` x `height` pixels.
///
/// Uses a 3-lobe Lanczos filter for both upscaling and downscaling. The
/// filter support is clamped at the image edges, so border pixels are never
/// blended with the opposite side.
///
/// # Errors
/// [`RenderError::InvalidParameter`] if either target dimension is zero or
/// the target holds more than [`MAX_OUTPUT_PIXELS`] pixels.
pub fn resample(image: &RasterImage, width: u32, height: u32) -> Result<RasterImage> {
    if width == 0 || height == 0 {
        return Err(RenderError::invalid(format!(
            "resample target must be at least 1x1, got {}x{}",
            width, height
        )));
    }
    if width as u64 * height as u64 > MAX_OUTPUT_PIXELS {
        return Err(RenderError::invalid(format!(
            "resample target {}x{} exceeds the limit of {} pixels",
            width, height, MAX_OUTPUT_PIXELS
        )));
    }

    let source = RgbImage::from_raw(image.width, image.height, image.data.clone())
        .ok_or_else(|| {
            RenderError::Internal(format!(
                "pixel buffer does not match {}x{}",
                image.width, image.height
            ))
        })?;

    let resized = imageops::resize(&source, width, height, FilterType::Lanczos3);
    log::debug!(
        "Resampled {}x{} -> {}x{}",
        image.width,
        image.height,
        width,
        height
    );

    RasterImage::new(width, height, resized.into_raw())
}
