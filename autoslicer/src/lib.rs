//! Autoslicer - Sprite sheet auto-slicer
//!
//! Extracts individual sprites from a single composite image. Pixels
//! are classified as foreground or background, foreground pixels are
//! grouped into connected regions, and each region is cropped (with
//! padding) into its own image.
//!
//! # Overview
//!
//! The work happens in two sequential, pure steps:
//!
//! 1. mask construction ([`region::build_mask`]) - alpha-threshold
//!    classification, or distance from the background color when the
//!    sheet is fully opaque
//! 2. slicing ([`region::slice_sprites`]) - 4-connected component
//!    labeling in discovery order, padded bounding boxes, one cropped
//!    sprite per component
//!
//! # Example
//!
//! ```
//! use autoslicer::{Raster, SliceConfig, slice_image};
//!
//! let mut sheet = Raster::new(64, 64);
//! sheet.set_rgba(10, 10, (255, 0, 0, 255)).unwrap();
//! sheet.set_rgba(40, 40, (0, 255, 0, 255)).unwrap();
//!
//! let sprites = slice_image(&sheet, &SliceConfig::default()).unwrap();
//! assert_eq!(sprites.len(), 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use autoslicer_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use autoslicer_io as io;
pub use autoslicer_region as region;

use autoslicer_region::{MaskOptions, RegionResult, SliceOptions, build_mask, slice_sprites};

/// Combined configuration for a whole slicing run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliceConfig {
    /// Foreground classification thresholds
    pub mask: MaskOptions,
    /// Padding and connectivity
    pub slice: SliceOptions,
}

/// Run the full pipeline on one raster
///
/// Builds the foreground mask and slices the sheet in one call. The
/// mask is derived from the raster itself, so the dimensions always
/// agree and the only remaining failure modes are internal invariant
/// violations.
pub fn slice_image(raster: &Raster, config: &SliceConfig) -> RegionResult<SpriteList> {
    let mask = build_mask(raster, &config.mask);
    slice_sprites(raster, &mask, &config.slice)
}
