//! ANSI 24-bit color escape sequences.

use std::fmt::{self, Write};

use crate::raster::Rgb;

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// Append a true-color foreground escape (`ESC[38;2;r;g;bm`).
#[inline]
pub fn write_fg(out: &mut impl Write, rgb: Rgb) -> fmt::Result {
    write!(out, "\x1b[38;2;{};{};{}m", rgb[0], rgb[1], rgb[2])
}

/// Append a true-color background escape (`ESC[48;2;r;g;bm`).
#[inline]
pub fn write_bg(out: &mut impl Write, rgb: Rgb) -> fmt::Result {
    write!(out, "\x1b[48;2;{};{};{}m", rgb[0], rgb[1], rgb[2])
}
