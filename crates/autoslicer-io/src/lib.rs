//! autoslicer-io - Image I/O for the sprite slicer
//!
//! Thin shell around the `image` crate: decode a sheet in any common
//! format into an RGBA8 [`Raster`](autoslicer_core::Raster), and write
//! extracted sprites back out as sequentially numbered PNGs. The
//! algorithmic crates never touch the file system; everything that does
//! lives here.

mod decode;
mod encode;
mod error;
mod save;

pub use decode::{decode_raster, read_raster};
pub use encode::{encode_raster_png, write_raster_png};
pub use error::{IoError, IoResult};
pub use save::{DEFAULT_OUTPUT_DIR, save_sprites, sprite_file_name};
