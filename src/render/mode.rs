//! Render mode selection.

use std::fmt;

use super::encoder::{
    encode_ascii_line, encode_grayscale_half_block_line, encode_truecolor_chars_line,
    encode_truecolor_half_block_line, GlyphLine,
};
use crate::raster::RasterImage;

/// The four encoding strategies, one per combination of the color and
/// half-block flags. Chosen once per render and held for every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// True-color lower half blocks, two pixels per cell
    TrueColorHalfBlock,
    /// True-color shade glyphs, one pixel per cell
    TrueColorChars,
    /// Thresholded block glyphs, two pixels per cell, no color
    GrayscaleHalfBlock,
    /// ASCII density ramp, one pixel per cell, no color
    AsciiGrayscale,
}

impl RenderMode {
    /// Select the mode for a pair of flags.
    pub fn from_flags(color: bool, half_blocks: bool) -> Self {
        match (color, half_blocks) {
            (true, true) => RenderMode::TrueColorHalfBlock,
            (true, false) => RenderMode::TrueColorChars,
            (false, true) => RenderMode::GrayscaleHalfBlock,
            (false, false) => RenderMode::AsciiGrayscale,
        }
    }

    /// Whether each output line covers two pixel rows.
    pub fn is_half_block(&self) -> bool {
        matches!(
            self,
            RenderMode::TrueColorHalfBlock | RenderMode::GrayscaleHalfBlock
        )
    }

    /// Number of output lines for a grid `height` rows tall.
    pub fn line_count(&self, height: u32) -> u32 {
        if self.is_half_block() {
            height.div_ceil(2)
        } else {
            height
        }
    }

    /// Encode output line `line` of `image`.
    ///
    /// `line` must be below `self.line_count(image.height)`.
    pub fn encode_line(&self, image: &RasterImage, line: u32) -> GlyphLine {
        match self {
            RenderMode::TrueColorHalfBlock => encode_truecolor_half_block_line(image, line),
            RenderMode::TrueColorChars => encode_truecolor_chars_line(image, line),
            RenderMode::GrayscaleHalfBlock => encode_grayscale_half_block_line(image, line),
            RenderMode::AsciiGrayscale => encode_ascii_line(image, line),
        }
    }

    /// Encode every line of `image`, top to bottom.
    pub fn lines<'a>(&self, image: &'a RasterImage) -> impl Iterator<Item = GlyphLine> + 'a {
        let mode = *self;
        (0..mode.line_count(image.height)).map(move |line| mode.encode_line(image, line))
    }

    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::TrueColorHalfBlock => "truecolor-half-block",
            RenderMode::TrueColorChars => "truecolor-chars",
            RenderMode::GrayscaleHalfBlock => "grayscale-half-block",
            RenderMode::AsciiGrayscale => "ascii-grayscale",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
