//! autoslicer-region - Masking and component slicing
//!
//! This crate implements the algorithmic core of the slicer:
//!
//! - **Foreground masking** - classify pixels by alpha or by distance
//!   from the background color
//! - **Connected component labeling** - group foreground pixels with
//!   union-find, numbered in discovery order
//! - **Slicing** - crop one padded sprite per component
//!
//! # Examples
//!
//! ```
//! use autoslicer_core::Raster;
//! use autoslicer_region::{MaskOptions, SliceOptions, build_mask, slice_sprites};
//!
//! // A transparent canvas with one opaque dot
//! let mut raster = Raster::new(32, 32);
//! raster.set_rgba(10, 10, (255, 0, 0, 255)).unwrap();
//!
//! let mask = build_mask(&raster, &MaskOptions::default());
//! let sprites = slice_sprites(&raster, &mask, &SliceOptions::default()).unwrap();
//! assert_eq!(sprites.len(), 1);
//! ```

pub mod conncomp;
pub mod error;
pub mod mask;
pub mod slice;

// Re-export core types
pub use autoslicer_core;

pub use error::{RegionError, RegionResult};

pub use mask::{
    DEFAULT_ALPHA_THRESHOLD, DEFAULT_COLOR_DISTANCE_THRESHOLD, MaskOptions, MaskStrategy,
    build_mask, select_strategy,
};

pub use conncomp::{Connectivity, LabelGrid, component_bounds, label_components};

pub use slice::{DEFAULT_PADDING, SliceOptions, slice_sprites};
