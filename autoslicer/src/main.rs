//! Batch entry point: decode a sheet, slice it, save the sprites.
//!
//! ```text
//! autoslicer <image> [out_dir]
//! ```
//!
//! Prints one line per written sprite. Finding no sprites is a warning,
//! not a failure; decode and write errors abort with a non-zero exit.

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use autoslicer::io::{DEFAULT_OUTPUT_DIR, read_raster, save_sprites};
use autoslicer::{SliceConfig, slice_image};

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("usage: autoslicer <image> [out_dir]");
    };
    let out_dir = args.next().unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
    if args.next().is_some() {
        bail!("usage: autoslicer <image> [out_dir]");
    }

    let sheet = read_raster(&input).with_context(|| format!("failed to load '{input}'"))?;
    let sprites = slice_image(&sheet, &SliceConfig::default())?;

    if sprites.is_empty() {
        eprintln!("no sprites detected in '{input}'");
        eprintln!("make sure the sheet has a transparent (alpha=0) or uniform background");
        return Ok(());
    }

    let paths = save_sprites(&sprites, &out_dir)
        .with_context(|| format!("failed to save sprites to '{out_dir}'"))?;

    println!("{} sprite(s) saved to '{out_dir}'", paths.len());
    for path in &paths {
        println!(" -> {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
