//! Per-line glyph encoders for each render mode.
//!
//! Every encoder reads only the rows it needs from the final pixel grid, so
//! lines can be produced independently and emitted in order.

use std::fmt;

use super::ansi;
use crate::ascii::{
    half_block_glyph, is_lit, luma, luminance, map_to_chars, Ramp, LOWER_HALF_BLOCK,
};
use crate::raster::{RasterImage, Rgb};

/// Foreground used for the bottom half of an unpaired final row.
const UNPAIRED_FOREGROUND: Rgb = [0, 0, 0];

/// One terminal cell: a glyph with optional true colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
}

impl Glyph {
    /// A glyph with no color escapes.
    pub fn plain(ch: char) -> Self {
        Self {
            ch,
            fg: None,
            bg: None,
        }
    }
}

/// One printable terminal row.
///
/// Formats as the glyphs with their escapes (background before foreground),
/// followed by a color reset when `reset` is set. No trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphLine {
    pub glyphs: Vec<Glyph>,
    pub reset: bool,
}

impl GlyphLine {
    /// The glyph characters without any escapes.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.ch).collect()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl fmt::Display for GlyphLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            if let Some(bg) = glyph.bg {
                ansi::write_bg(f, bg)?;
            }
            if let Some(fg) = glyph.fg {
                ansi::write_fg(f, fg)?;
            }
            fmt::Write::write_char(f, glyph.ch)?;
        }
        if self.reset {
            f.write_str(ansi::RESET)?;
        }
        Ok(())
    }
}

/// Row indices of the top and (if present) bottom row of half-block line `line`.
fn row_pair(image: &RasterImage, line: u32) -> (u32, Option<u32>) {
    let top = line * 2;
    let bottom = top + 1;
    (top, (bottom < image.height).then_some(bottom))
}

/// Encode rows `2*line` and `2*line + 1` as colored lower half blocks.
///
/// Background carries the top pixel and foreground the bottom pixel. An
/// unpaired final row gets a black foreground.
pub fn encode_truecolor_half_block_line(image: &RasterImage, line: u32) -> GlyphLine {
    let (top, bottom) = row_pair(image, line);
    let glyphs = (0..image.width)
        .map(|x| Glyph {
            ch: LOWER_HALF_BLOCK,
            fg: Some(bottom.map_or(UNPAIRED_FOREGROUND, |y| image.pixel(x, y))),
            bg: Some(image.pixel(x, top)),
        })
        .collect();
    GlyphLine {
        glyphs,
        reset: true,
    }
}

/// Encode rows `2*line` and `2*line + 1` as thresholded block glyphs.
///
/// A missing bottom row counts as unlit.
pub fn encode_grayscale_half_block_line(image: &RasterImage, line: u32) -> GlyphLine {
    let (top, bottom) = row_pair(image, line);
    let glyphs = (0..image.width)
        .map(|x| {
            let top_lit = is_lit(luma(image.pixel(x, top)));
            let bottom_lit = bottom.is_some_and(|y| is_lit(luma(image.pixel(x, y))));
            Glyph::plain(half_block_glyph(top_lit, bottom_lit))
        })
        .collect();
    GlyphLine {
        glyphs,
        reset: false,
    }
}

/// Pixels of row `row` with their luminance, left to right.
fn row_luminance(image: &RasterImage, row: u32) -> (Vec<Rgb>, Vec<f64>) {
    image
        .row(row)
        .chunks_exact(RasterImage::BYTES_PER_PIXEL)
        .map(|p| {
            let rgb = [p[0], p[1], p[2]];
            (rgb, luminance(rgb))
        })
        .unzip()
}

/// Encode row `row` as shade glyphs tinted with each pixel's true color.
pub fn encode_truecolor_chars_line(image: &RasterImage, row: u32) -> GlyphLine {
    let (pixels, lum) = row_luminance(image, row);
    let glyphs = map_to_chars(&lum, Ramp::Blocks)
        .into_iter()
        .zip(pixels)
        .map(|(ch, rgb)| Glyph {
            ch,
            fg: Some(rgb),
            bg: None,
        })
        .collect();
    GlyphLine {
        glyphs,
        reset: true,
    }
}

/// Encode row `row` as plain ASCII density glyphs.
pub fn encode_ascii_line(image: &RasterImage, row: u32) -> GlyphLine {
    let (_, lum) = row_luminance(image, row);
    let glyphs = map_to_chars(&lum, Ramp::Standard)
        .into_iter()
        .map(Glyph::plain)
        .collect();
    GlyphLine {
        glyphs,
        reset: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = [255, 255, 255];
    const BLACK: Rgb = [0, 0, 0];

    fn column(pixels: &[Rgb]) -> RasterImage {
        let data = pixels.iter().flatten().copied().collect();
        RasterImage::new(1, pixels.len() as u32, data).unwrap()
    }

    #[test]
    fn test_truecolor_half_block_pairs_rows() {
        let img = column(&[[10, 20, 30], [40, 50, 60]]);
        let line = encode_truecolor_half_block_line(&img, 0);
        assert_eq!(
            line.to_string(),
            "\x1b[48;2;10;20;30m\x1b[38;2;40;50;60m▄\x1b[0m"
        );
    }

    #[test]
    fn test_truecolor_half_block_unpaired_row() {
        let img = column(&[WHITE, WHITE, [1, 2, 3]]);
        let line = encode_truecolor_half_block_line(&img, 1);
        assert_eq!(line.glyphs[0].bg, Some([1, 2, 3]));
        assert_eq!(line.glyphs[0].fg, Some(BLACK));
        assert!(line.to_string().ends_with("▄\x1b[0m"));
    }

    #[test]
    fn test_grayscale_half_block_lookup() {
        // Four columns covering every (top, bottom) combination
        let data = [
            BLACK, BLACK, WHITE, WHITE, // top row
            BLACK, WHITE, BLACK, WHITE, // bottom row
        ]
        .iter()
        .flatten()
        .copied()
        .collect();
        let img = RasterImage::new(4, 2, data).unwrap();
        let line = encode_grayscale_half_block_line(&img, 0);
        assert_eq!(line.to_string(), " ▄▀█");
    }

    #[test]
    fn test_grayscale_half_block_unpaired_row_has_unlit_bottom() {
        let img = column(&[WHITE]);
        let line = encode_grayscale_half_block_line(&img, 0);
        assert_eq!(line.to_string(), "▀");
    }

    #[test]
    fn test_grayscale_half_block_threshold_is_strict() {
        let img = column(&[[128, 128, 128], [129, 129, 129]]);
        let line = encode_grayscale_half_block_line(&img, 0);
        assert_eq!(line.text(), "▄");
    }

    #[test]
    fn test_truecolor_chars_uses_foreground_only() {
        let img = RasterImage::new(2, 1, vec![255, 255, 255, 0, 0, 0]).unwrap();
        let line = encode_truecolor_chars_line(&img, 0);
        assert_eq!(
            line.to_string(),
            "\x1b[38;2;255;255;255m█\x1b[38;2;0;0;0m \x1b[0m"
        );
        assert!(line.glyphs.iter().all(|g| g.bg.is_none()));
    }

    #[test]
    fn test_ascii_line_has_no_escapes() {
        let img = RasterImage::new(3, 1, vec![0, 0, 0, 127, 127, 127, 255, 255, 255]).unwrap();
        let line = encode_ascii_line(&img, 0);
        assert_eq!(line.to_string(), " =@");
        assert!(!line.to_string().contains('\x1b'));
    }

    #[test]
    fn test_line_width_matches_image_width() {
        let img = RasterImage::filled(17, 3, [90, 90, 90]).unwrap();
        assert_eq!(encode_ascii_line(&img, 2).len(), 17);
        assert_eq!(encode_truecolor_chars_line(&img, 0).len(), 17);
        assert_eq!(encode_truecolor_half_block_line(&img, 1).len(), 17);
        assert_eq!(encode_grayscale_half_block_line(&img, 0).len(), 17);
    }
}
