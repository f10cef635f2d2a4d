//! Tonal enhancement: contrast, sharpness, and brightness.
//!
//! Each adjustment blends the image with a "degenerate" version of itself:
//!
//! ```text
//! out = degenerate + factor * (pixel - degenerate)
//! ```
//!
//! A factor of 1.0 reproduces the input, 0.0 yields the degenerate image,
//! and values above 1.0 push pixels further away from it. Results are
//! clamped to [0, 255] and truncated to 8 bits after every step.

use super::types::RasterImage;
use crate::ascii::luma;
use crate::error::{RenderError, Result};

/// Smoothing kernel used as the degenerate image for sharpness.
#[rustfmt::skip]
const SMOOTH_KERNEL: [[u32; 3]; 3] = [
    [1, 1, 1],
    [1, 5, 1],
    [1, 1, 1],
];
const SMOOTH_DIVISOR: u32 = 13;

/// Enhancement factors. 1.0 means "no change" for each.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enhancement {
    pub contrast: f32,
    pub sharpness: f32,
    pub brightness: f32,
}

impl Default for Enhancement {
    fn default() -> Self {
        Self {
            contrast: 1.0,
            sharpness: 1.0,
            brightness: 1.0,
        }
    }
}

impl Enhancement {
    /// True if every factor is exactly 1.0.
    pub fn is_identity(&self) -> bool {
        self.contrast == 1.0 && self.sharpness == 1.0 && self.brightness == 1.0
    }

    /// Check that every factor is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("contrast", self.contrast),
            ("sharpness", self.sharpness),
            ("brightness", self.brightness),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RenderError::invalid(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Apply the enhancement factors to `image`, returning a new image.
///
/// Adjustments run in the fixed order contrast, sharpness, brightness, and
/// each is skipped when its factor is exactly 1.0.
pub fn enhance(image: &RasterImage, factors: &Enhancement) -> Result<RasterImage> {
    factors.validate()?;

    let mut current = image.clone();
    if factors.contrast != 1.0 {
        log::debug!("Applying contrast {}", factors.contrast);
        current = adjust_contrast(&current, factors.contrast);
    }
    if factors.sharpness != 1.0 {
        log::debug!("Applying sharpness {}", factors.sharpness);
        current = adjust_sharpness(&current, factors.sharpness);
    }
    if factors.brightness != 1.0 {
        log::debug!("Applying brightness {}", factors.brightness);
        current = adjust_brightness(&current, factors.brightness);
    }
    Ok(current)
}

/// Scale each channel around the image's mean luminance.
fn adjust_contrast(image: &RasterImage, factor: f32) -> RasterImage {
    let sum: u64 = image
        .data
        .chunks_exact(3)
        .map(|p| luma([p[0], p[1], p[2]]) as u64)
        .sum();
    let mean = (sum as f64 / image.pixel_count() as f64 + 0.5).floor() as f32;

    let data = image.data.iter().map(|&v| blend(mean, v, factor)).collect();
    RasterImage {
        data,
        ..image.clone()
    }
}

/// Blend the image with a 3x3 smoothed copy of itself.
fn adjust_sharpness(image: &RasterImage, factor: f32) -> RasterImage {
    let smoothed = smooth(image);
    let data = smoothed
        .data
        .iter()
        .zip(&image.data)
        .map(|(&soft, &orig)| blend(soft as f32, orig, factor))
        .collect();
    RasterImage {
        data,
        ..image.clone()
    }
}

/// Scale each channel around zero.
fn adjust_brightness(image: &RasterImage, factor: f32) -> RasterImage {
    let data = image.data.iter().map(|&v| blend(0.0, v, factor)).collect();
    RasterImage {
        data,
        ..image.clone()
    }
}

/// Apply the smoothing kernel. Border pixels are copied unchanged.
fn smooth(image: &RasterImage) -> RasterImage {
    let w = image.width as usize;
    let h = image.height as usize;
    if w < 3 || h < 3 {
        return image.clone();
    }

    let mut out = image.data.clone();

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            for c in 0..3 {
                let mut acc = 0u32;
                for (ky, kernel_row) in SMOOTH_KERNEL.iter().enumerate() {
                    for (kx, &weight) in kernel_row.iter().enumerate() {
                        let idx = ((y + ky - 1) * w + (x + kx - 1)) * 3 + c;
                        acc += weight * image.data[idx] as u32;
                    }
                }
                // Round to nearest
                out[(y * w + x) * 3 + c] = ((acc + SMOOTH_DIVISOR / 2) / SMOOTH_DIVISOR) as u8;
            }
        }
    }

    RasterImage {
        data: out,
        ..image.clone()
    }
}

#[inline]
fn blend(degenerate: f32, value: u8, factor: f32) -> u8 {
    let out = degenerate + factor * (value as f32 - degenerate);
    out.clamp(0.0, 255.0) as u8
}
