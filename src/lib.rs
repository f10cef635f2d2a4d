//! pixprint library crate.
//!
//! Renders decoded images as lines of terminal glyphs with embedded 24-bit
//! color escapes. The binary is a thin wrapper over [`pipeline::Pipeline`].

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod raster;
pub mod render;

pub use error::{RenderError, Result};
pub use pipeline::{Pipeline, PreparedImage, RenderSettings};
