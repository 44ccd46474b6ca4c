use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use lumen_core::consts::{BRIGHTNESS_RANGE, CONTRAST_RANGE};
use lumen_core::io::image_io::load_image;
use lumen_core::pipeline::config::{PlotFormat, ViewConfig};
use lumen_core::pipeline::{render_views, write_views};
use tracing::warn;

use crate::summary::{print_render_summary, RenderedFile};

#[derive(Clone, Copy, ValueEnum)]
pub enum PlotFormatArg {
    Png,
    Svg,
}

impl From<PlotFormatArg> for PlotFormat {
    fn from(arg: PlotFormatArg) -> Self {
        match arg {
            PlotFormatArg::Png => PlotFormat::Png,
            PlotFormatArg::Svg => PlotFormat::Svg,
        }
    }
}

#[derive(Args)]
pub struct RenderArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// View config file (TOML); flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Brightness shift (-255 to 255)
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<i32>,

    /// Contrast (-100 to 100)
    #[arg(long, allow_negative_numbers = true)]
    pub contrast: Option<i32>,

    /// Longest side to scale images down to (0 = full size)
    #[arg(long)]
    pub max_size: Option<u32>,

    /// Histogram plot format
    #[arg(long, value_enum)]
    pub format: Option<PlotFormatArg>,

    /// Output directory
    #[arg(short, long, default_value = "views")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = build_config(args)?;
    warn_out_of_range(&config);

    let pb = if args.files.len() > 1 {
        let pb = ProgressBar::new(args.files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:30} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        Some(pb)
    } else {
        None
    };

    let mut rendered = Vec::with_capacity(args.files.len());
    for file in &args.files {
        if let Some(ref pb) = pb {
            pb.set_message(display_name(file));
        }

        let source =
            load_image(file).with_context(|| format!("Failed to load {}", file.display()))?;
        let set = render_views(&source, &config);
        let stem = file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        let paths = write_views(&set, &args.output, stem, config.histogram_format)
            .with_context(|| format!("Failed to write views for {}", file.display()))?;

        rendered.push(RenderedFile {
            input: file.clone(),
            width: set.source().width(),
            height: set.source().height(),
            outputs: paths.len(),
        });

        if let Some(ref pb) = pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    print_render_summary(&config, &args.output, &rendered);
    Ok(())
}

fn build_config(args: &RenderArgs) -> Result<ViewConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid view config")?
    } else {
        ViewConfig::default()
    };

    if let Some(b) = args.brightness {
        config.brightness = b;
    }
    if let Some(c) = args.contrast {
        config.contrast = c;
    }
    if let Some(size) = args.max_size {
        config.max_display_size = size;
    }
    if let Some(format) = args.format {
        config.histogram_format = format.into();
    }
    Ok(config)
}

/// Warn when a parameter lies outside its control's range. Pixels are clamped either way.
fn warn_out_of_range(config: &ViewConfig) {
    let (b_lo, b_hi) = BRIGHTNESS_RANGE;
    if !(b_lo..=b_hi).contains(&config.brightness) {
        warn!(
            brightness = config.brightness,
            "Brightness outside the usual {b_lo}..{b_hi} range"
        );
    }
    let (c_lo, c_hi) = CONTRAST_RANGE;
    if !(c_lo..=c_hi).contains(&config.contrast) {
        warn!(
            contrast = config.contrast,
            "Contrast outside the usual {c_lo}..{c_hi} range"
        );
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
