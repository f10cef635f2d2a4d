//! Target size resolution for terminal rendering.

use serde::Deserialize;

use crate::error::{RenderError, Result};

/// Output width in characters when no preset or explicit width is given.
pub const DEFAULT_WIDTH: u32 = 150;

/// Vertical factor for character modes.
/// Terminal characters are roughly twice as tall as they are wide, so one
/// output row covers two rows' worth of source height.
pub const TEXT_ASPECT: f64 = 0.5;

/// Vertical factor for half-block modes.
/// Each glyph cell shows two stacked pixels, which cancels the 2:1 cell
/// shape; the resampled grid keeps the source aspect ratio.
pub const HALF_BLOCK_ASPECT: f64 = 1.0;

/// Upper bound on the resolved grid, in pixels (8192 x 8192).
/// At three bytes per pixel the resampled buffer stays under 200 MiB.
pub const MAX_OUTPUT_PIXELS: u64 = 8192 * 8192;

/// Named output widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionPreset {
    Low,
    Medium,
    High,
    Ultra,
    Max,
}

impl ResolutionPreset {
    /// Every preset, narrowest first.
    pub const ALL: [ResolutionPreset; 5] = [
        ResolutionPreset::Low,
        ResolutionPreset::Medium,
        ResolutionPreset::High,
        ResolutionPreset::Ultra,
        ResolutionPreset::Max,
    ];

    /// Output width in characters.
    pub fn width(&self) -> u32 {
        match self {
            ResolutionPreset::Low => 80,
            ResolutionPreset::Medium => 120,
            ResolutionPreset::High => 180,
            ResolutionPreset::Ultra => 250,
            ResolutionPreset::Max => 400,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResolutionPreset::Low => "low",
            ResolutionPreset::Medium => "medium",
            ResolutionPreset::High => "high",
            ResolutionPreset::Ultra => "ultra",
            ResolutionPreset::Max => "max",
        }
    }
}

/// The size-related inputs of a render, before resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRequest {
    /// Named width preset; wins over `width` when set
    pub preset: Option<ResolutionPreset>,
    /// Explicit output width in characters
    pub width: Option<u32>,
    /// Explicit output height in pixels of the resampled grid
    pub height: Option<u32>,
    /// Multiplier applied to the chosen width and to an explicit height
    pub scale: f64,
    /// Whether rows will be paired into half-block glyphs
    pub half_blocks: bool,
}

impl Default for SizeRequest {
    fn default() -> Self {
        Self {
            preset: None,
            width: None,
            height: None,
            scale: 1.0,
            half_blocks: true,
        }
    }
}

impl SizeRequest {
    /// Width before scaling: preset, then explicit width, then the default.
    pub fn base_width(&self) -> u32 {
        match (self.preset, self.width) {
            (Some(preset), _) => preset.width(),
            (None, Some(width)) => width,
            (None, None) => DEFAULT_WIDTH,
        }
    }
}

/// Resolve the output grid for a source image.
///
/// Width is the preset width, else the explicit width, else
/// [`DEFAULT_WIDTH`], multiplied by `scale` and truncated. Height is the
/// explicit height times `scale` when given; otherwise it follows the source
/// aspect ratio, multiplied by [`HALF_BLOCK_ASPECT`] in half-block mode or
/// [`TEXT_ASPECT`] otherwise, and truncated.
///
/// # Arguments
/// * `request` - Size inputs from configuration
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
///
/// # Returns
/// `(width, height)` of the resampled grid, both at least 1 and together at
/// most [`MAX_OUTPUT_PIXELS`].
///
/// # Example
/// ```ignore
/// // 300x200 source, width 100, character mode
/// let (w, h) = resolve_dimensions(&request, 300, 200)?;
/// // (100, 33); with half blocks enabled: (100, 66)
/// ```
pub fn resolve_dimensions(
    request: &SizeRequest,
    img_width: u32,
    img_height: u32,
) -> Result<(u32, u32)> {
    if !request.scale.is_finite() || request.scale <= 0.0 {
        return Err(RenderError::invalid(format!(
            "scale must be a positive number, got {}",
            request.scale
        )));
    }
    if img_width == 0 || img_height == 0 {
        return Err(RenderError::invalid(format!(
            "source image has no pixels ({}x{})",
            img_width, img_height
        )));
    }

    let width = to_dimension("width", request.base_width() as f64 * request.scale)?;

    let height = match request.height {
        Some(height) => to_dimension("height", height as f64 * request.scale)?,
        None => {
            let aspect_ratio = img_height as f64 / img_width as f64;
            let factor = if request.half_blocks {
                HALF_BLOCK_ASPECT
            } else {
                TEXT_ASPECT
            };
            to_dimension("height", width as f64 * aspect_ratio * factor)?
        }
    };

    if width == 0 || height == 0 {
        return Err(RenderError::invalid(format!(
            "resolved output size {}x{} is empty; increase width, height, or scale",
            width, height
        )));
    }

    if width as u64 * height as u64 > MAX_OUTPUT_PIXELS {
        return Err(RenderError::invalid(format!(
            "resolved output size {}x{} exceeds the limit of {} pixels",
            width, height, MAX_OUTPUT_PIXELS
        )));
    }

    Ok((width, height))
}

/// Truncate a computed size to `u32`, rejecting values that do not fit.
fn to_dimension(axis: &str, value: f64) -> Result<u32> {
    let truncated = value.trunc();
    if truncated > u32::MAX as f64 {
        return Err(RenderError::invalid(format!(
            "resolved {} {} is too large",
            axis, truncated
        )));
    }
    Ok(truncated as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_widths() {
        let widths: Vec<u32> = ResolutionPreset::ALL.iter().map(|p| p.width()).collect();
        assert_eq!(widths, vec![80, 120, 180, 250, 400]);
    }

    #[test]
    fn test_default_width() {
        let request = SizeRequest::default();
        let (w, _) = resolve_dimensions(&request, 640, 480).unwrap();
        assert_eq!(w, 150);
    }

    #[test]
    fn test_text_mode_halves_height() {
        let request = SizeRequest {
            width: Some(100),
            half_blocks: false,
            ..Default::default()
        };
        assert_eq!(resolve_dimensions(&request, 300, 200).unwrap(), (100, 33));
    }

    #[test]
    fn test_half_block_mode_keeps_aspect() {
        let request = SizeRequest {
            width: Some(100),
            half_blocks: true,
            ..Default::default()
        };
        assert_eq!(resolve_dimensions(&request, 300, 200).unwrap(), (100, 66));
    }

    #[test]
    fn test_preset_overrides_width() {
        let request = SizeRequest {
            preset: Some(ResolutionPreset::Ultra),
            width: Some(42),
            scale: 2.0,
            ..Default::default()
        };
        let (w, _) = resolve_dimensions(&request, 100, 100).unwrap();
        assert_eq!(w, 500);
    }

    #[test]
    fn test_explicit_height_is_scaled() {
        let request = SizeRequest {
            width: Some(80),
            height: Some(30),
            scale: 1.5,
            ..Default::default()
        };
        assert_eq!(resolve_dimensions(&request, 10, 1000).unwrap(), (120, 45));
    }

    #[test]
    fn test_scale_truncates() {
        let request = SizeRequest {
            width: Some(99),
            scale: 0.5,
            ..Default::default()
        };
        let (w, _) = resolve_dimensions(&request, 100, 100).unwrap();
        assert_eq!(w, 49);
    }

    #[test]
    fn test_zero_width_is_invalid() {
        let request = SizeRequest {
            width: Some(1),
            scale: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            resolve_dimensions(&request, 100, 100),
            Err(RenderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zero_height_is_invalid() {
        // Very wide source: 10 * (1/1000) * 0.5 rounds down to 0 rows
        let request = SizeRequest {
            width: Some(10),
            half_blocks: false,
            ..Default::default()
        };
        assert!(matches!(
            resolve_dimensions(&request, 1000, 1),
            Err(RenderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_non_positive_scale_is_invalid() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let request = SizeRequest {
                scale,
                ..Default::default()
            };
            assert!(matches!(
                resolve_dimensions(&request, 100, 100),
                Err(RenderError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_width_beyond_u32_is_invalid() {
        let request = SizeRequest {
            width: Some(3_000_000_000),
            scale: 2.0,
            ..Default::default()
        };
        let err = resolve_dimensions(&request, 100, 100).unwrap_err();
        assert!(matches!(err, RenderError::InvalidParameter(_)));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_huge_scale_is_invalid() {
        let request = SizeRequest {
            scale: 1e30,
            ..Default::default()
        };
        assert!(matches!(
            resolve_dimensions(&request, 640, 480),
            Err(RenderError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_pixel_limit() {
        // 8192 x 8192 is exactly the limit; one more row is over it
        let at_limit = SizeRequest {
            width: Some(8192),
            height: Some(8192),
            ..Default::default()
        };
        assert_eq!(resolve_dimensions(&at_limit, 1, 1).unwrap(), (8192, 8192));

        let over = SizeRequest {
            height: Some(8193),
            ..at_limit
        };
        let err = resolve_dimensions(&over, 1, 1).unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
    }

    #[test]
    fn test_explicit_zero_width_is_invalid() {
        let request = SizeRequest {
            width: Some(0),
            ..Default::default()
        };
        assert!(resolve_dimensions(&request, 100, 100).is_err());
    }
}
