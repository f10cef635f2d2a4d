//! Decoding image files into [`RasterImage`]s.

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use super::types::RasterImage;
use crate::error::{RenderError, Result};

/// Decode the image at `path` into an RGB raster.
///
/// Any format the `image` crate recognizes by content is accepted (PNG,
/// JPEG, GIF, BMP, WebP, ...). Alpha is dropped; only the first frame of an
/// animated image is used.
///
/// # Errors
/// * [`RenderError::FileNotFound`] if `path` does not name an existing file
/// * [`RenderError::Decode`] if the file cannot be read or decoded
pub fn load(path: &Path) -> Result<RasterImage> {
    if !path.is_file() {
        return Err(RenderError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let decoded = image::ImageReader::open(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RenderError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => RenderError::Decode {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(e),
            },
        })?
        .with_guessed_format()
        .map_err(|e| RenderError::Decode {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|source| RenderError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        decoded.width(),
        decoded.height()
    );

    into_raster(decoded)
}

fn into_raster(decoded: DynamicImage) -> Result<RasterImage> {
    let (width, height) = decoded.dimensions();
    let rgb = decoded.to_rgb8();
    RasterImage::new(width, height, rgb.into_raw())
}
