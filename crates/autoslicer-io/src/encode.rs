//! Image encoding
//!
//! Sprites are always written as PNG: it is lossless and keeps the
//! alpha channel, regardless of the input format they were cut from.

use std::io::Cursor;
use std::path::Path;

use autoslicer_core::Raster;
use image::{ImageFormat, RgbaImage};

use crate::error::{IoError, IoResult};

fn map_encode_err(err: image::ImageError) -> IoError {
    match err {
        image::ImageError::IoError(io) => IoError::Io(io),
        other => IoError::EncodeError(other.to_string()),
    }
}

fn to_image_buffer(raster: &Raster) -> IoResult<RgbaImage> {
    if raster.is_empty() {
        return Err(IoError::EncodeError(format!(
            "cannot encode zero-area image ({}x{})",
            raster.width(),
            raster.height()
        )));
    }
    RgbaImage::from_raw(raster.width(), raster.height(), raster.data().to_vec()).ok_or_else(
        || IoError::EncodeError("pixel buffer does not match image dimensions".to_string()),
    )
}

/// Encode a raster as PNG into an in-memory buffer
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the raster has zero area or the
/// encoder fails.
pub fn encode_raster_png(raster: &Raster) -> IoResult<Vec<u8>> {
    let img = to_image_buffer(raster)?;
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)
        .map_err(map_encode_err)?;
    Ok(cursor.into_inner())
}

/// Write a raster to a PNG file
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the raster has zero area and
/// [`IoError::Io`] if the file cannot be written.
pub fn write_raster_png<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let img = to_image_buffer(raster)?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(map_encode_err)
}
