//! Sprite slicing
//!
//! Turns a raster plus its foreground mask into an ordered list of
//! cropped sprites: label the mask, compute each component's minimal
//! bounding box, pad and clamp it, and copy the covered pixels out of
//! the full-resolution raster.

use autoslicer_core::{Mask, Raster, Sprite, SpriteList};

use crate::conncomp::{Connectivity, component_bounds, label_components};
use crate::error::{RegionError, RegionResult};

/// Default margin added around each component before cropping
pub const DEFAULT_PADDING: u32 = 2;

/// Options controlling sprite extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceOptions {
    /// Margin in pixels added on every side of a component's bounding
    /// box, clamped to the image extent
    pub padding: u32,
    /// Connectivity rule used to group foreground pixels
    pub connectivity: Connectivity,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            connectivity: Connectivity::default(),
        }
    }
}

/// Extract one sprite per connected foreground component
///
/// Sprites are emitted in label order: sprite `i` corresponds to the
/// component whose first pixel is the `i + 1`-th encountered in a
/// row-major scan. Padded boxes may overlap; each component is still
/// emitted independently. An empty mask (or zero-area input) produces
/// an empty list, which is a valid result, not an error.
///
/// Cropping reads the raster, not the mask, so background pixels inside
/// a padded box are carried into the sprite with all four channels.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if the mask and raster
/// dimensions differ. This is the only failure mode.
///
/// # Examples
///
/// ```
/// use autoslicer_core::Raster;
/// use autoslicer_region::{MaskOptions, SliceOptions, build_mask, slice_sprites};
///
/// let mut raster = Raster::new(10, 10);
/// for y in 4..7 {
///     for x in 4..7 {
///         raster.set_rgba(x, y, (255, 255, 255, 255)).unwrap();
///     }
/// }
///
/// let mask = build_mask(&raster, &MaskOptions::default());
/// let sprites = slice_sprites(&raster, &mask, &SliceOptions::default()).unwrap();
/// assert_eq!(sprites.len(), 1);
/// assert_eq!(sprites.get(0).unwrap().bounds().x0, 2); // padded by 2
/// ```
pub fn slice_sprites(
    raster: &Raster,
    mask: &Mask,
    options: &SliceOptions,
) -> RegionResult<SpriteList> {
    if mask.dimensions() != raster.dimensions() {
        return Err(RegionError::DimensionMismatch {
            mask: mask.dimensions(),
            image: raster.dimensions(),
        });
    }

    let grid = label_components(mask, options.connectivity);
    let bounds = component_bounds(&grid);
    let (width, height) = raster.dimensions();

    let mut sprites = SpriteList::with_capacity(bounds.len());
    for component in bounds {
        let padded = component.pad(options.padding, width, height);
        let cropped = raster.crop(&padded).map_err(RegionError::Core)?;
        sprites.push(Sprite::new(padded, cropped).map_err(RegionError::Core)?);
    }
    Ok(sprites)
}
