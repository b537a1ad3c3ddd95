//! Foreground mask construction
//!
//! Classifies every pixel of a raster as foreground or background using
//! one of two mutually exclusive strategies, chosen automatically from
//! the alpha channel:
//!
//! - **Alpha threshold**: if any pixel is not fully opaque, a pixel is
//!   foreground iff its alpha is strictly greater than the threshold.
//! - **Background distance**: if the image is fully opaque everywhere,
//!   the pixel at (0, 0) is taken as the background color and a pixel is
//!   foreground iff its Euclidean RGB distance from it is strictly
//!   greater than the threshold.
//!
//! Both thresholds are heuristics inherited from the original tool and
//! kept as configurable defaults; changing them changes observable
//! output.

use autoslicer_core::{Mask, Raster};

/// Default alpha threshold: alpha must exceed this to count as foreground
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 32;

/// Default RGB distance threshold for fully opaque images
pub const DEFAULT_COLOR_DISTANCE_THRESHOLD: f64 = 30.0;

/// Thresholds controlling foreground classification
///
/// Passed per call rather than read from process-wide state, so rasters
/// with different thresholds can be processed concurrently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskOptions {
    /// Alpha strictly above this is foreground (alpha-threshold mode)
    pub alpha_threshold: u8,
    /// RGB distance strictly above this is foreground
    /// (background-distance mode); must be non-negative
    pub color_distance_threshold: f64,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            color_distance_threshold: DEFAULT_COLOR_DISTANCE_THRESHOLD,
        }
    }
}

/// Which classification rule applies to a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskStrategy {
    /// At least one pixel is not fully opaque: classify by alpha
    AlphaThreshold,
    /// Every pixel is fully opaque: classify by distance from the
    /// background color sampled at (0, 0)
    BackgroundDistance,
}

/// Pick the classification strategy for a raster
///
/// Alpha-threshold mode applies iff the minimum alpha across the raster
/// is below 255. A zero-area raster trivially reports alpha-threshold
/// mode; the resulting mask is empty either way.
pub fn select_strategy(raster: &Raster) -> MaskStrategy {
    match raster.min_alpha() {
        Some(a) if a == 255 => MaskStrategy::BackgroundDistance,
        _ => MaskStrategy::AlphaThreshold,
    }
}

/// Build the foreground mask for a raster
///
/// Pure function of the raster and the thresholds; the mask has the
/// raster's dimensions. A zero-area raster yields a zero-area mask.
///
/// # Examples
///
/// ```
/// use autoslicer_core::Raster;
/// use autoslicer_region::{MaskOptions, build_mask};
///
/// let mut raster = Raster::new(4, 4);
/// raster.set_rgba(2, 2, (255, 255, 255, 255)).unwrap();
///
/// let mask = build_mask(&raster, &MaskOptions::default());
/// assert_eq!(mask.get(2, 2), Some(true));
/// assert_eq!(mask.count_foreground(), 1);
/// ```
pub fn build_mask(raster: &Raster, options: &MaskOptions) -> Mask {
    match select_strategy(raster) {
        MaskStrategy::AlphaThreshold => alpha_mask(raster, options.alpha_threshold),
        MaskStrategy::BackgroundDistance => {
            background_distance_mask(raster, options.color_distance_threshold)
        }
    }
}

fn alpha_mask(raster: &Raster, threshold: u8) -> Mask {
    let (width, height) = raster.dimensions();
    let mut mask = Mask::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let a = raster.alpha_unchecked(x, y);
            mask.set_unchecked(x, y, a > threshold);
        }
    }
    mask
}

fn background_distance_mask(raster: &Raster, threshold: f64) -> Mask {
    let (width, height) = raster.dimensions();
    let mut mask = Mask::new(width, height);
    if raster.is_empty() {
        return mask;
    }

    let (bg_r, bg_g, bg_b, _) = raster.get_rgba_unchecked(0, 0);
    // Compare in squared space; per-channel differences fit in i32
    // (max squared sum is 3 * 255^2). Assumes a non-negative threshold.
    let threshold_sq = threshold * threshold;

    for y in 0..height {
        for x in 0..width {
            let (r, g, b, _) = raster.get_rgba_unchecked(x, y);
            let dr = i32::from(r) - i32::from(bg_r);
            let dg = i32::from(g) - i32::from(bg_g);
            let db = i32::from(b) - i32::from(bg_b);
            let dist_sq = dr * dr + dg * dg + db * db;
            mask.set_unchecked(x, y, f64::from(dist_sq) > threshold_sq);
        }
    }
    mask
}
