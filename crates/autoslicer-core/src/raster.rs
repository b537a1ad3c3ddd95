//! Raster - The RGBA pixel grid
//!
//! `Raster` is the fundamental image type of the slicer. It owns a
//! width x height grid of 8-bit RGBA samples stored row-major with the
//! origin at the top left.
//!
//! # Degenerate sizes
//!
//! Zero-area rasters (width or height 0) are valid. Every operation on
//! them is well defined and produces an empty result; they are never an
//! error by themselves.

use crate::bbox::BBox;
use crate::error::{Error, Result};

/// Number of samples per pixel (R, G, B, A)
pub const SAMPLES_PER_PIXEL: usize = 4;

/// An owned RGBA8 image
///
/// # Examples
///
/// ```
/// use autoslicer_core::Raster;
///
/// let mut raster = Raster::new(640, 480);
/// raster.set_rgba(10, 20, (255, 0, 0, 255)).unwrap();
/// assert_eq!(raster.get_rgba(10, 20), Some((255, 0, 0, 255)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    /// RGBA samples, row-major, 4 bytes per pixel
    data: Vec<u8>,
}

impl Raster {
    /// Create a new raster filled with transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * SAMPLES_PER_PIXEL;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Create a raster from an existing RGBA byte buffer
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBufferLength`] if `data.len()` is not
    /// exactly `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * SAMPLES_PER_PIXEL;
        if data.len() != expected {
            return Err(Error::InvalidBufferLength {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as a (width, height) pair
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check whether the raster covers zero pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get raw access to the RGBA byte buffer
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the raster and return its RGBA byte buffer
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * SAMPLES_PER_PIXEL
    }

    /// Get the RGBA value at (x, y)
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_rgba_unchecked(x, y))
    }

    /// Get the RGBA value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgba_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let i = self.offset(x, y);
        (
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    /// Get the alpha sample at (x, y) without bounds checking
    #[inline]
    pub fn alpha_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[self.offset(x, y) + 3]
    }

    /// Set the RGBA value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordsOutOfBounds`] if the coordinates are
    /// out of bounds.
    pub fn set_rgba(&mut self, x: u32, y: u32, rgba: (u8, u8, u8, u8)) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::CoordsOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_rgba_unchecked(x, y, rgba);
        Ok(())
    }

    /// Set the RGBA value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_rgba_unchecked(&mut self, x: u32, y: u32, (r, g, b, a): (u8, u8, u8, u8)) {
        let i = self.offset(x, y);
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
        self.data[i + 3] = a;
    }

    /// Fill the whole raster with one RGBA value
    pub fn fill(&mut self, (r, g, b, a): (u8, u8, u8, u8)) {
        for px in self.data.chunks_exact_mut(SAMPLES_PER_PIXEL) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = a;
        }
    }

    /// Get the minimum alpha sample across the whole raster
    ///
    /// Returns `None` for a zero-area raster.
    pub fn min_alpha(&self) -> Option<u8> {
        self.data
            .chunks_exact(SAMPLES_PER_PIXEL)
            .map(|px| px[3])
            .min()
    }

    /// Copy a rectangular sub-region into a new raster
    ///
    /// The returned raster owns its pixel buffer; it never aliases the
    /// source, so it outlives the source freely.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BoxOutOfBounds`] if `bounds` extends beyond the
    /// raster extent.
    pub fn crop(&self, bounds: &BBox) -> Result<Raster> {
        if !bounds.fits_within(self.width, self.height) {
            return Err(Error::BoxOutOfBounds {
                bounds: (bounds.x0, bounds.y0, bounds.x1, bounds.y1),
                width: self.width,
                height: self.height,
            });
        }

        let w = bounds.width();
        let h = bounds.height();
        let mut out = Vec::with_capacity(w as usize * h as usize * SAMPLES_PER_PIXEL);
        for y in bounds.y0..bounds.y1 {
            let start = self.offset(bounds.x0, y);
            let end = start + w as usize * SAMPLES_PER_PIXEL;
            out.extend_from_slice(&self.data[start..end]);
        }

        Ok(Raster {
            width: w,
            height: h,
            data: out,
        })
    }
}
