//! RGB to luminance conversion using the ITU-R BT.601 formula.

use crate::raster::Rgb;

/// Weighted channel sum scaled by 1000: 299 + 587 + 114 = 1000.
#[inline]
fn weighted_sum(rgb: Rgb) -> u32 {
    299 * rgb[0] as u32 + 587 * rgb[1] as u32 + 114 * rgb[2] as u32
}

/// Luminance of a pixel: `Y = 0.299*R + 0.587*G + 0.114*B`.
///
/// The weights are applied in integer thousandths and divided once, so the
/// result is the exact value of the formula (white is exactly 255.0).
#[inline]
pub fn luminance(rgb: Rgb) -> f64 {
    weighted_sum(rgb) as f64 / 1000.0
}

/// 8-bit luminance, truncated toward zero.
#[inline]
pub fn luma(rgb: Rgb) -> u8 {
    (weighted_sum(rgb) / 1000) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_white_and_black() {
        assert_eq!(luminance([255, 255, 255]), 255.0);
        assert_eq!(luminance([0, 0, 0]), 0.0);
    }

    #[test]
    fn test_luminance_primaries() {
        assert_eq!(luminance([255, 0, 0]), 76.245);
        assert_eq!(luminance([0, 255, 0]), 149.685);
        assert_eq!(luminance([0, 0, 255]), 29.07);
    }

    #[test]
    fn test_luma_truncates() {
        assert_eq!(luma([255, 0, 0]), 76);
        assert_eq!(luma([0, 255, 0]), 149);
        assert_eq!(luma([0, 0, 255]), 29);
        assert_eq!(luma([255, 255, 255]), 255);
    }
}
