//! The rendering pipeline: enhance, resolve size, resample, encode, emit.
//!
//! ```text
//! RasterImage -> enhance -> resample(resolved size) -> RenderMode -> lines
//! ```
//!
//! Everything up to and including resampling happens in [`Pipeline::prepare`],
//! so a bad configuration fails before a single line reaches the output.

use std::io::Write;

use crate::ascii::{resolve_dimensions, SizeRequest};
use crate::error::Result;
use crate::raster::{enhance, resample, Enhancement, RasterImage};
use crate::render::RenderMode;

/// Fully resolved rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Size inputs, including the half-block flag
    pub size: SizeRequest,
    /// Contrast, sharpness, and brightness factors
    pub enhancement: Enhancement,
    /// Emit 24-bit color escapes
    pub color: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size: SizeRequest::default(),
            enhancement: Enhancement::default(),
            color: true,
        }
    }
}

impl RenderSettings {
    /// The render mode these settings select.
    pub fn mode(&self) -> RenderMode {
        RenderMode::from_flags(self.color, self.size.half_blocks)
    }
}

/// A resampled image ready for emission.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    /// Final pixel grid, exactly the resolved size
    pub image: RasterImage,
    /// Width of the decoded source
    pub source_width: u32,
    /// Height of the decoded source
    pub source_height: u32,
    /// Mode used for every emitted line
    pub mode: RenderMode,
}

impl PreparedImage {
    /// Number of lines [`Pipeline::emit`] will write.
    pub fn line_count(&self) -> u32 {
        self.mode.line_count(self.image.height)
    }
}

/// Renders images to a line-oriented output stream.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    settings: RenderSettings,
}

impl Pipeline {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Enhance and resample `source` to the resolved output size.
    ///
    /// # Errors
    /// [`RenderError::InvalidParameter`](crate::error::RenderError::InvalidParameter)
    /// when the scale or enhancement factors are out of range, or when the
    /// resolved size has a zero dimension.
    pub fn prepare(&self, source: &RasterImage) -> Result<PreparedImage> {
        let (width, height) = resolve_dimensions(&self.settings.size, source.width, source.height)?;
        log::info!(
            "Resolved output {}x{} from source {}x{}",
            width,
            height,
            source.width,
            source.height
        );

        let enhanced = if self.settings.enhancement.is_identity() {
            source.clone()
        } else {
            enhance(source, &self.settings.enhancement)?
        };
        let image = resample(&enhanced, width, height)?;
        let mode = self.settings.mode();
        log::debug!("Render mode: {}", mode);

        Ok(PreparedImage {
            image,
            source_width: source.width,
            source_height: source.height,
            mode,
        })
    }

    /// Write every line of `prepared` to `out`, top to bottom.
    ///
    /// Each line is terminated with `\n`. Returns the number of lines written.
    pub fn emit<W: Write>(&self, prepared: &PreparedImage, out: &mut W) -> Result<usize> {
        let mut written = 0;
        for line in prepared.mode.lines(&prepared.image) {
            writeln!(out, "{}", line)?;
            written += 1;
        }
        out.flush()?;
        log::debug!("Emitted {} lines", written);
        Ok(written)
    }

    /// Prepare and emit in one step.
    pub fn render<W: Write>(&self, source: &RasterImage, out: &mut W) -> Result<usize> {
        let prepared = self.prepare(source)?;
        self.emit(&prepared, out)
    }

    /// Render into an in-memory string.
    pub fn render_to_string(&self, source: &RasterImage) -> Result<String> {
        let mut buffer = Vec::new();
        self.render(source, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| crate::error::RenderError::Internal(format!("non-UTF-8 output: {}", e)))
    }
}
