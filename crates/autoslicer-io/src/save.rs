//! Sprite persistence
//!
//! One PNG per sprite, numbered sequentially in list order with a
//! zero-padded 3-digit index starting at 0. The numbering mirrors the
//! slicer's component discovery order, so re-running the tool on the
//! same sheet always produces the same file names with the same
//! content.

use std::fs;
use std::path::{Path, PathBuf};

use autoslicer_core::SpriteList;

use crate::encode::write_raster_png;
use crate::error::IoResult;

/// Default directory sprites are written to
pub const DEFAULT_OUTPUT_DIR: &str = "sprites_output";

/// File name of the sprite at a given list index
pub fn sprite_file_name(index: usize) -> String {
    format!("sprite_{index:03}.png")
}

/// Write every sprite of a list to `out_dir`
///
/// The directory is created on demand, including parents. Returns the
/// written paths in sprite order.
///
/// # Errors
///
/// Returns [`crate::IoError::Io`] if the directory cannot be created
/// or a file cannot be written. Files already written before a failure
/// are left in place.
pub fn save_sprites<P: AsRef<Path>>(sprites: &SpriteList, out_dir: P) -> IoResult<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let mut paths = Vec::with_capacity(sprites.len());
    for (index, sprite) in sprites.iter().enumerate() {
        let path = out_dir.join(sprite_file_name(index));
        write_raster_png(sprite.image(), &path)?;
        paths.push(path);
    }
    Ok(paths)
}
