//! Raster image handling: decoding, tonal enhancement, and resampling.
//!
//! This module owns the pixel side of the pipeline:
//! - Decoding a file into an RGB buffer via [`load`]
//! - Contrast/sharpness/brightness adjustment via [`enhance`]
//! - Lanczos resampling to the target grid via [`resample`]

mod enhance;
mod loader;
mod resample;
mod types;

pub use enhance::{enhance, Enhancement};
pub use loader::load;
pub use resample::resample;
pub use types::{RasterImage, Rgb};
