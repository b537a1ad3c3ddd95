//! Image decoding
//!
//! Decodes any format the `image` crate understands (PNG, JPEG, BMP,
//! GIF, WebP, ...) and converts the result to an RGBA8 [`Raster`].
//! Formats without an alpha channel come out fully opaque, which is
//! what routes them to background-distance masking downstream.

use std::path::Path;

use autoslicer_core::Raster;

use crate::error::{IoError, IoResult};

pub(crate) fn map_decode_err(err: image::ImageError) -> IoError {
    match err {
        image::ImageError::IoError(io) => IoError::Io(io),
        other => IoError::DecodeError(other.to_string()),
    }
}

/// Read an image file into a raster
///
/// The format is detected from the file content (with the extension as
/// a fallback).
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read and
/// [`IoError::DecodeError`] if its content cannot be decoded.
pub fn read_raster<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let img = image::open(path).map_err(map_decode_err)?;
    Ok(dynamic_to_raster(img))
}

/// Decode an in-memory image buffer into a raster
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] if the buffer is not a supported
/// image format.
pub fn decode_raster(bytes: &[u8]) -> IoResult<Raster> {
    let img = image::load_from_memory(bytes).map_err(map_decode_err)?;
    Ok(dynamic_to_raster(img))
}

fn dynamic_to_raster(img: image::DynamicImage) -> Raster {
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    // from_rgba8 won't fail: the buffer length matches by construction
    Raster::from_rgba8(width, height, rgba.into_raw()).unwrap()
}
