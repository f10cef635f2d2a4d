//! Glyph-side building blocks for terminal image rendering.
//!
//! This module turns pixels into glyph choices:
//!
//! 1. **Luminance** - RGB to brightness using ITU-R BT.601 weights
//! 2. **Target size** - Resolve the output character grid from presets,
//!    explicit sizes, scale, and the source aspect ratio
//! 3. **Glyph mapping** - Map brightness onto a density ramp, or threshold
//!    it into half-block glyphs
//!
//! # Ramps
//!
//! Two fixed ramps are available via [`Ramp`]:
//! - `Blocks` - 5-level shade ramp used by true-color character mode
//! - `Standard` - 10-level ASCII ramp used by plain grayscale mode

mod charset;
mod dimensions;
mod grayscale;
mod mapping;

pub use charset::{
    Ramp, BLOCKS_RAMP, FULL_BLOCK, LOWER_HALF_BLOCK, STANDARD_RAMP, UPPER_HALF_BLOCK,
};
pub use dimensions::{
    resolve_dimensions, ResolutionPreset, SizeRequest, DEFAULT_WIDTH, HALF_BLOCK_ASPECT,
    MAX_OUTPUT_PIXELS, TEXT_ASPECT,
};
pub use grayscale::{luma, luminance};
pub use mapping::{half_block_glyph, is_lit, map_to_chars, ramp_index, HALF_BLOCK_THRESHOLD};
