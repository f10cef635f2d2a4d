//! Brightness to glyph mapping.

use super::charset::{Ramp, FULL_BLOCK, LOWER_HALF_BLOCK, UPPER_HALF_BLOCK};

/// A half-block half is lit when its 8-bit luminance exceeds this value.
pub const HALF_BLOCK_THRESHOLD: u8 = 128;

/// Glyphs indexed by `[top_lit][bottom_lit]`.
const HALF_BLOCK_GLYPHS: [[char; 2]; 2] = [
    [' ', LOWER_HALF_BLOCK],
    [UPPER_HALF_BLOCK, FULL_BLOCK],
];

/// Index into a ramp of `levels` glyphs for a luminance in [0, 255].
///
/// The luminance is mapped proportionally, `floor(lum / 255 * levels)`, then
/// clamped to the last valid index so that pure white lands on the densest
/// glyph instead of one past the end.
#[inline]
pub fn ramp_index(luminance: f64, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    let scaled = luminance / 255.0 * levels as f64;
    // `as usize` saturates negatives and NaN to 0
    (scaled as usize).min(levels - 1)
}

/// Map luminance values to glyphs from `ramp`.
///
/// # Arguments
/// * `luminance` - Luminance values (0-255), one per pixel
/// * `ramp` - Ramp to draw from, ordered sparse to dense
///
/// # Returns
/// A vector of characters, one per input value.
///
/// # Example
/// ```ignore
/// let chars = map_to_chars(&[0.0, 127.0, 255.0], Ramp::Standard);
/// // [' ', '=', '@']
/// ```
pub fn map_to_chars(luminance: &[f64], ramp: Ramp) -> Vec<char> {
    let chars = ramp.chars();
    luminance
        .iter()
        .map(|&lum| chars[ramp_index(lum, ramp.levels())])
        .collect()
}

/// Whether an 8-bit luminance counts as lit for half-block thresholding.
#[inline]
pub fn is_lit(luma: u8) -> bool {
    luma > HALF_BLOCK_THRESHOLD
}

/// Pick the half-block glyph for a (top, bottom) pair of lit flags.
#[inline]
pub fn half_block_glyph(top_lit: bool, bottom_lit: bool) -> char {
    HALF_BLOCK_GLYPHS[top_lit as usize][bottom_lit as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_index_endpoints() {
        assert_eq!(ramp_index(0.0, 10), 0);
        assert_eq!(ramp_index(255.0, 10), 9);
        assert_eq!(ramp_index(0.0, 5), 0);
        assert_eq!(ramp_index(255.0, 5), 4);
    }

    #[test]
    fn test_ramp_index_proportional() {
        // 127 / 255 * 10 = 4.98
        assert_eq!(ramp_index(127.0, 10), 4);
        // 128 / 255 * 10 = 5.02
        assert_eq!(ramp_index(128.0, 10), 5);
        // 51 / 255 * 5 = 1.0
        assert_eq!(ramp_index(51.0, 5), 1);
    }

    #[test]
    fn test_ramp_index_clamps_out_of_range() {
        assert_eq!(ramp_index(300.0, 10), 9);
        assert_eq!(ramp_index(-5.0, 10), 0);
        assert_eq!(ramp_index(f64::NAN, 10), 0);
        assert_eq!(ramp_index(100.0, 0), 0);
    }

    #[test]
    fn test_map_to_chars_standard() {
        let chars = map_to_chars(&[0.0, 127.0, 255.0], Ramp::Standard);
        assert_eq!(chars, vec![' ', '=', '@']);
    }

    #[test]
    fn test_map_to_chars_blocks() {
        let chars = map_to_chars(&[0.0, 60.0, 110.0, 160.0, 255.0], Ramp::Blocks);
        assert_eq!(chars, vec![' ', '░', '▒', '▓', '█']);
    }

    #[test]
    fn test_is_lit_threshold_is_strict() {
        assert!(!is_lit(0));
        assert!(!is_lit(128));
        assert!(is_lit(129));
        assert!(is_lit(255));
    }

    #[test]
    fn test_half_block_glyph_table() {
        assert_eq!(half_block_glyph(false, false), ' ');
        assert_eq!(half_block_glyph(false, true), '▄');
        assert_eq!(half_block_glyph(true, false), '▀');
        assert_eq!(half_block_glyph(true, true), '█');
    }
}
