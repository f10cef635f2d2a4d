//! Command-line interface definitions and helpers.
//!
//! This module contains argument parsing, the preset enum, default image
//! lookup, and the merge of flags with the config file.

mod args;
mod enums;
mod source;

pub use args::Args;
pub use enums::Resolution;
pub use source::{locate_image, DEFAULT_IMAGE_NAMES};
