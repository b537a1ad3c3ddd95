//! BBox - Axis-aligned rectangle regions
//!
//! A `BBox` is stored as two corners, half-open on the high end:
//! `(x0, y0)` is the top-left pixel and `(x1, y1)` is one past the
//! bottom-right pixel. A valid box always covers at least one pixel.

use crate::error::{Error, Result};

/// An axis-aligned rectangle in pixel coordinates
///
/// This is a simple `Copy` type since it's small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BBox {
    /// Left x coordinate (inclusive)
    pub x0: u32,
    /// Top y coordinate (inclusive)
    pub y0: u32,
    /// Right x coordinate (exclusive)
    pub x1: u32,
    /// Bottom y coordinate (exclusive)
    pub y1: u32,
}

impl BBox {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBox`] if the box is inverted or covers
    /// no pixels (`x0 >= x1` or `y0 >= y1`).
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Result<Self> {
        if x0 >= x1 || y0 >= y1 {
            return Err(Error::InvalidBox { x0, y0, x1, y1 });
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Get the width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    /// Get the height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Get the area in pixels
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Check if this box fully contains another box
    pub fn contains_box(&self, other: &BBox) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Check if this box overlaps another
    pub fn overlaps(&self, other: &BBox) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    /// Compute the union (bounding box) of two boxes
    pub fn union(&self, other: &BBox) -> BBox {
        BBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Expand the box by a margin on all sides, clamped to a grid extent
    ///
    /// The low corner saturates at 0 and the high corner at the grid
    /// dimensions, so the result never leaves `[0, width) x [0, height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoslicer_core::BBox;
    ///
    /// let b = BBox::new(4, 4, 7, 7).unwrap();
    /// let padded = b.pad(2, 10, 10);
    /// assert_eq!(padded, BBox::new(2, 2, 9, 9).unwrap());
    ///
    /// // Clamped at the grid edges
    /// let b = BBox::new(0, 0, 3, 3).unwrap();
    /// assert_eq!(b.pad(5, 10, 10), BBox::new(0, 0, 8, 8).unwrap());
    /// ```
    pub fn pad(&self, margin: u32, width: u32, height: u32) -> BBox {
        BBox {
            x0: self.x0.saturating_sub(margin),
            y0: self.y0.saturating_sub(margin),
            x1: self.x1.saturating_add(margin).min(width),
            y1: self.y1.saturating_add(margin).min(height),
        }
    }

    /// Check if the box fits within a grid extent
    #[inline]
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x1 <= width && self.y1 <= height
    }
}
