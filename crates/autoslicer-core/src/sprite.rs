//! Sprite, SpriteList - Extracted sub-images
//!
//! A `Sprite` pairs a cropped raster with the bounding box it was cut
//! from, in the source image's coordinate space. `SpriteList` manages
//! an ordered collection of sprites; the order is an observable part of
//! the slicing contract (it drives output numbering).

use crate::bbox::BBox;
use crate::error::{Error, Result};
use crate::raster::Raster;

/// One extracted sprite
///
/// The pixel buffer is an exclusive copy; it stays valid after the
/// source raster is dropped or reused.
#[derive(Debug, Clone)]
pub struct Sprite {
    bounds: BBox,
    image: Raster,
}

impl Sprite {
    /// Create a sprite from a bounding box and its cropped pixels
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the raster dimensions do
    /// not match the box extent.
    pub fn new(bounds: BBox, image: Raster) -> Result<Self> {
        if image.dimensions() != (bounds.width(), bounds.height()) {
            return Err(Error::DimensionMismatch {
                expected: (bounds.width(), bounds.height()),
                actual: image.dimensions(),
            });
        }
        Ok(Self { bounds, image })
    }

    /// Get the bounding box in source-image coordinates
    #[inline]
    pub fn bounds(&self) -> BBox {
        self.bounds
    }

    /// Get the cropped pixels
    #[inline]
    pub fn image(&self) -> &Raster {
        &self.image
    }

    /// Get the sprite width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Get the sprite height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Consume the sprite and return its pixels
    pub fn into_image(self) -> Raster {
        self.image
    }
}

/// Ordered collection of sprites
#[derive(Debug, Clone, Default)]
pub struct SpriteList {
    sprites: Vec<Sprite>,
}

impl SpriteList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            sprites: Vec::new(),
        }
    }

    /// Create a list with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sprites: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of sprites
    #[inline]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Get a sprite by index
    pub fn get(&self, index: usize) -> Option<&Sprite> {
        self.sprites.get(index)
    }

    /// Append a sprite
    pub fn push(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Remove a sprite at index
    pub fn remove(&mut self, index: usize) -> Result<Sprite> {
        if index >= self.sprites.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.sprites.len(),
            });
        }
        Ok(self.sprites.remove(index))
    }

    /// Iterate over the sprites in order
    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    /// Collect the bounding boxes in sprite order
    pub fn bounds(&self) -> Vec<BBox> {
        self.sprites.iter().map(|s| s.bounds()).collect()
    }
}

impl FromIterator<Sprite> for SpriteList {
    fn from_iter<T: IntoIterator<Item = Sprite>>(iter: T) -> Self {
        Self {
            sprites: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SpriteList {
    type Item = Sprite;
    type IntoIter = std::vec::IntoIter<Sprite>;

    fn into_iter(self) -> Self::IntoIter {
        self.sprites.into_iter()
    }
}

impl<'a> IntoIterator for &'a SpriteList {
    type Item = &'a Sprite;
    type IntoIter = std::slice::Iter<'a, Sprite>;

    fn into_iter(self) -> Self::IntoIter {
        self.sprites.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite_at(x0: u32, y0: u32, w: u32, h: u32) -> Sprite {
        let bounds = BBox::new(x0, y0, x0 + w, y0 + h).unwrap();
        Sprite::new(bounds, Raster::new(w, h)).unwrap()
    }

    #[test]
    fn test_sprite_dimensions_must_match() {
        let bounds = BBox::new(0, 0, 4, 4).unwrap();
        assert!(Sprite::new(bounds, Raster::new(4, 4)).is_ok());
        assert!(Sprite::new(bounds, Raster::new(4, 5)).is_err());
    }

    #[test]
    fn test_sprite_list_order() {
        let mut list = SpriteList::new();
        list.push(sprite_at(0, 0, 2, 2));
        list.push(sprite_at(5, 5, 3, 3));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().bounds().x0, 0);
        assert_eq!(list.get(1).unwrap().bounds().x0, 5);

        let boxes = list.bounds();
        assert_eq!(boxes[1], BBox::new(5, 5, 8, 8).unwrap());
    }

    #[test]
    fn test_sprite_list_remove() {
        let mut list = SpriteList::new();
        list.push(sprite_at(0, 0, 2, 2));
        assert!(list.remove(1).is_err());
        assert!(list.remove(0).is_ok());
        assert!(list.is_empty());
    }
}
