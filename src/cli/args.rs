//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::Resolution;
use crate::ascii::{ResolutionPreset, SizeRequest};
use crate::config::Config;
use crate::pipeline::RenderSettings;
use crate::raster::Enhancement;

/// Parse and validate the scale factor (positive, finite)
fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(format!("Scale must be greater than 0, got {}", s));
    }
    Ok(scale)
}

/// Parse and validate an enhancement factor (non-negative, finite)
fn parse_factor(s: &str) -> Result<f32, String> {
    let factor: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !factor.is_finite() || factor < 0.0 {
        return Err(format!("Factor must be 0 or greater, got {}", s));
    }
    Ok(factor)
}

/// Print images in the terminal using 24-bit color
#[derive(Parser, Debug)]
#[command(name = "pixprint")]
#[command(version, about = "Print images in the terminal using 24-bit color", long_about = None)]
#[command(after_help = "RESOLUTION PRESETS:
    low     80 characters wide, for small terminals
    medium  120 characters wide, everyday use
    high    180 characters wide
    ultra   250 characters wide, for large screens
    max     400 characters wide

EXAMPLES:
    pixprint image.jpg                 # Default width (150)
    pixprint image.jpg -w 200          # Width 200
    pixprint image.jpg -H 50           # Height 50
    pixprint image.jpg -r high         # High resolution preset
    pixprint image.jpg --scale 1.5     # 1.5x larger
    pixprint image.jpg -c 1.2 -s 1.5   # More contrast and sharpness
    pixprint image.jpg --no-color      # Black and white")]
pub struct Args {
    /// Image file path (defaults to cats_images.png, cats_image.jpeg, or cats_image.jpg)
    pub image: Option<PathBuf>,

    /// Output width in characters
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Output height, computed from the aspect ratio when omitted
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Resolution preset; overrides --width
    #[arg(short, long, value_enum)]
    pub resolution: Option<Resolution>,

    /// Scale factor applied to width and height [default: 1.0]
    #[arg(long, value_parser = parse_scale)]
    pub scale: Option<f64>,

    /// Contrast (>1 increases) [default: 1.0]
    #[arg(short, long, value_parser = parse_factor)]
    pub contrast: Option<f32>,

    /// Sharpness (>1 sharper) [default: 1.0]
    #[arg(short, long, value_parser = parse_factor)]
    pub sharpness: Option<f32>,

    /// Brightness [default: 1.0]
    #[arg(short, long, value_parser = parse_factor)]
    pub brightness: Option<f32>,

    /// Disable color (black and white output)
    #[arg(long)]
    pub no_color: bool,

    /// Disable half-block glyphs (halves vertical resolution)
    #[arg(long)]
    pub no_half_blocks: bool,

    /// Do not print the file name and resolution before the image
    #[arg(short, long)]
    pub quiet: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Merge flags with config file values: CLI args > config file > defaults.
    ///
    /// Width and preset are taken as a pair: if either `--width` or
    /// `--resolution` is given, the file's width and resolution are ignored.
    pub fn settings(&self, config: &Config) -> RenderSettings {
        let (preset, width) = if self.width.is_some() || self.resolution.is_some() {
            (self.resolution.map(ResolutionPreset::from), self.width)
        } else {
            (config.render.resolution, config.render.width)
        };

        RenderSettings {
            size: SizeRequest {
                preset,
                width,
                height: self.height.or(config.render.height),
                scale: self.scale.unwrap_or(config.render.scale),
                half_blocks: !self.no_half_blocks && config.render.half_blocks,
            },
            enhancement: Enhancement {
                contrast: self.contrast.unwrap_or(config.enhance.contrast),
                sharpness: self.sharpness.unwrap_or(config.enhance.sharpness),
                brightness: self.brightness.unwrap_or(config.enhance.brightness),
            },
            color: !self.no_color && config.render.color,
        }
    }
}
