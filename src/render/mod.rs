//! Encoding resampled images into lines of terminal glyphs.
//!
//! [`RenderMode`] selects one of four encoders from the color and
//! half-block flags. Each encoder turns the final pixel grid into
//! [`GlyphLine`]s, which format themselves as ANSI true-color text.

pub mod ansi;
mod encoder;
mod mode;

pub use encoder::{
    encode_ascii_line, encode_grayscale_half_block_line, encode_truecolor_chars_line,
    encode_truecolor_half_block_line, Glyph, GlyphLine,
};
pub use mode::RenderMode;
