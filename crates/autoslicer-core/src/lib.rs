//! autoslicer-core - Data structures for sprite extraction
//!
//! This crate holds the types shared by the rest of the workspace:
//!
//! - [`Raster`] - an owned RGBA8 pixel grid
//! - [`Mask`] - a boolean foreground/background grid
//! - [`BBox`] - a half-open axis-aligned rectangle
//! - [`Sprite`] / [`SpriteList`] - extracted sub-images with their
//!   source bounding boxes
//!
//! The core types never perform file I/O; decoding and encoding live in
//! `autoslicer-io`.
//!
//! # Example
//!
//! ```
//! use autoslicer_core::{BBox, Raster};
//!
//! let raster = Raster::new(640, 480);
//! let bounds = BBox::new(10, 10, 42, 42).unwrap();
//! let cropped = raster.crop(&bounds).unwrap();
//! assert_eq!(cropped.dimensions(), (32, 32));
//! ```

mod bbox;
mod error;
mod mask;
mod raster;
mod sprite;

pub use bbox::BBox;
pub use error::{Error, Result};
pub use mask::Mask;
pub use raster::{Raster, SAMPLES_PER_PIXEL};
pub use sprite::{Sprite, SpriteList};
