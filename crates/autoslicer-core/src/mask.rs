//! Mask - Boolean foreground/background classification
//!
//! A `Mask` mirrors the dimensions of the raster it was derived from.
//! `true` marks a foreground pixel (sprite candidate), `false` marks
//! background. Masks are produced once and read afterwards.

use crate::error::{Error, Result};

/// A width x height grid of booleans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// Create a new mask with every pixel classified as background
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
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

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the classification at (x, y)
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.bits[self.offset(x, y)])
    }

    /// Get the classification at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> bool {
        self.bits[self.offset(x, y)]
    }

    /// Set the classification at (x, y)
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordsOutOfBounds`] if the coordinates are
    /// out of bounds.
    pub fn set(&mut self, x: u32, y: u32, foreground: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::CoordsOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.offset(x, y);
        self.bits[i] = foreground;
        Ok(())
    }

    /// Set the classification at (x, y) without bounds checking
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, foreground: bool) {
        let i = self.offset(x, y);
        self.bits[i] = foreground;
    }

    /// Count the foreground pixels
    pub fn count_foreground(&self) -> u64 {
        self.bits.iter().filter(|&&b| b).count() as u64
    }

    /// Check whether the mask contains any foreground pixel
    pub fn any_foreground(&self) -> bool {
        self.bits.iter().any(|&b| b)
    }

    /// Raw access to the classification bits, row-major
    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}
