use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lumen_core::histogram::compute_histogram;
use lumen_core::io::image_io::load_image_with_info;

use crate::summary::print_histogram_stats;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let (buffer, info) = load_image_with_info(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:        {}", info.filename.display());
    println!("Dimensions:  {}x{}", info.width, info.height);
    println!("Color type:  {}", info.color_type);
    println!("Pixels:      {}", buffer.pixel_count());

    let histogram = compute_histogram(&buffer);
    print_histogram_stats(&histogram);

    Ok(())
}
