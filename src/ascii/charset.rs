//! Glyph ramps and half-block glyphs.

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from sparsest (space) to densest (@).
pub const STANDARD_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Shade ramp (5 levels).
/// Uses Unicode shade characters, ordered from space to full block.
pub const BLOCKS_RAMP: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Lower half block (U+2584). Background paints the top, foreground the bottom.
pub const LOWER_HALF_BLOCK: char = '▄';

/// Upper half block (U+2580).
pub const UPPER_HALF_BLOCK: char = '▀';

/// Full block (U+2588).
pub const FULL_BLOCK: char = '█';

/// Density ramp used for brightness-to-glyph mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ramp {
    /// Standard ASCII ramp (10 levels)
    #[default]
    Standard,
    /// Shade block ramp (5 levels)
    Blocks,
}

impl Ramp {
    /// Get the character slice for this ramp.
    pub fn chars(&self) -> &'static [char] {
        match self {
            Ramp::Standard => STANDARD_RAMP,
            Ramp::Blocks => BLOCKS_RAMP,
        }
    }

    /// Number of levels in the ramp.
    pub fn levels(&self) -> usize {
        self.chars().len()
    }
}
