//! Slicing regression test
//!
//! End-to-end checks of the mask -> label -> crop pipeline on small
//! synthetic sheets, including the degenerate inputs the slicer must
//! accept without error.
//!
//! Run with:
//! ```
//! cargo test -p autoslicer-region --test slice_reg
//! ```

use autoslicer_core::{BBox, Raster};
use autoslicer_region::{
    MaskOptions, MaskStrategy, SliceOptions, build_mask, select_strategy, slice_sprites,
};

/// Paint an opaque white rectangle onto a raster
fn paint_block(raster: &mut Raster, x0: u32, y0: u32, x1: u32, y1: u32) {
    for y in y0..y1 {
        for x in x0..x1 {
            raster.set_rgba(x, y, (255, 255, 255, 255)).unwrap();
        }
    }
}

#[test]
fn fully_transparent_sheet_yields_nothing() {
    // 10x10, alpha = 0 everywhere
    let raster = Raster::new(10, 10);
    assert_eq!(select_strategy(&raster), MaskStrategy::AlphaThreshold);

    let mask = build_mask(&raster, &MaskOptions::default());
    assert_eq!(mask.count_foreground(), 0);

    let sprites = slice_sprites(&raster, &mask, &SliceOptions::default()).unwrap();
    assert!(sprites.is_empty());
}

#[test]
fn centered_block_padded_and_clamped() {
    // 3x3 opaque block at (4,4)-(6,6) on a 10x10 transparent canvas
    let mut raster = Raster::new(10, 10);
    paint_block(&mut raster, 4, 4, 7, 7);

    let mask = build_mask(&raster, &MaskOptions::default());
    let sprites = slice_sprites(&raster, &mask, &SliceOptions::default()).unwrap();

    assert_eq!(sprites.len(), 1);
    assert_eq!(sprites.get(0).unwrap().bounds(), BBox::new(2, 2, 9, 9).unwrap());
}

#[test]
fn diagonal_blocks_stay_separate() {
    // Two 2x2 blocks meeting only at one corner pixel pair
    let mut raster = Raster::new(10, 10);
    paint_block(&mut raster, 2, 2, 4, 4);
    paint_block(&mut raster, 4, 4, 6, 6);

    let mask = build_mask(&raster, &MaskOptions::default());
    let sprites = slice_sprites(&raster, &mask, &SliceOptions::default()).unwrap();
    assert_eq!(sprites.len(), 2);
}

#[test]
fn opaque_sheet_uses_background_distance() {
    // Fully opaque 5x5, uniform (10,10,10) except one pixel
    let mut raster = Raster::new(5, 5);
    raster.fill((10, 10, 10, 255));
    raster.set_rgba(2, 2, (200, 10, 10, 255)).unwrap();

    assert_eq!(select_strategy(&raster), MaskStrategy::BackgroundDistance);

    let mask = build_mask(&raster, &MaskOptions::default());
    assert_eq!(mask.count_foreground(), 1);

    let options = SliceOptions {
        padding: 0,
        ..SliceOptions::default()
    };
    let sprites = slice_sprites(&raster, &mask, &options).unwrap();
    assert_eq!(sprites.len(), 1);
    assert_eq!(sprites.get(0).unwrap().bounds(), BBox::new(2, 2, 3, 3).unwrap());
}

#[test]
fn zero_padding_never_goes_negative() {
    // Component spanning columns 0-2 of a 10-wide sheet
    let mut raster = Raster::new(10, 6);
    paint_block(&mut raster, 0, 2, 3, 5);

    let mask = build_mask(&raster, &MaskOptions::default());
    let options = SliceOptions {
        padding: 0,
        ..SliceOptions::default()
    };
    let sprites = slice_sprites(&raster, &mask, &options).unwrap();
    assert_eq!(sprites.len(), 1);
    assert_eq!(sprites.get(0).unwrap().bounds(), BBox::new(0, 2, 3, 5).unwrap());
}

#[test]
fn pipeline_is_idempotent() {
    let mut raster = Raster::new(16, 16);
    paint_block(&mut raster, 1, 1, 4, 4);
    paint_block(&mut raster, 8, 3, 12, 9);
    paint_block(&mut raster, 2, 10, 5, 14);

    let mask_a = build_mask(&raster, &MaskOptions::default());
    let mask_b = build_mask(&raster, &MaskOptions::default());
    assert_eq!(mask_a, mask_b);

    let sprites_a = slice_sprites(&raster, &mask_a, &SliceOptions::default()).unwrap();
    let sprites_b = slice_sprites(&raster, &mask_b, &SliceOptions::default()).unwrap();
    assert_eq!(sprites_a.len(), sprites_b.len());
    assert_eq!(sprites_a.bounds(), sprites_b.bounds());
    for (a, b) in sprites_a.iter().zip(sprites_b.iter()) {
        assert_eq!(a.image().data(), b.image().data());
    }
}

#[test]
fn padded_bounds_stay_inside_the_sheet() {
    let mut raster = Raster::new(12, 12);
    paint_block(&mut raster, 0, 0, 2, 2);
    paint_block(&mut raster, 10, 10, 12, 12);
    paint_block(&mut raster, 5, 0, 7, 1);

    let mask = build_mask(&raster, &MaskOptions::default());
    let options = SliceOptions {
        padding: 4,
        ..SliceOptions::default()
    };
    let sprites = slice_sprites(&raster, &mask, &options).unwrap();
    assert_eq!(sprites.len(), 3);
    for sprite in &sprites {
        assert!(sprite.bounds().fits_within(12, 12));
    }
}
