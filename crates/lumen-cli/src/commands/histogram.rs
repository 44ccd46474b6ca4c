use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use lumen_core::io::image_io::{fit_within, load_image, save_plot};
use lumen_core::pipeline::config::ViewConfig;
use lumen_core::pipeline::{render_view, ViewKind};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HistogramFormatArg {
    Png,
    Svg,
    Json,
}

impl HistogramFormatArg {
    fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }
}

#[derive(Args)]
pub struct HistogramArgs {
    /// Input image file
    pub file: PathBuf,

    /// View to take the histogram of: original, grayscale, brightness or contrast
    #[arg(long, default_value = "original", value_parser = parse_view)]
    pub view: ViewKind,

    /// Brightness shift for the brightness view (-255 to 255)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub brightness: i32,

    /// Contrast for the contrast view (-100 to 100)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub contrast: i32,

    /// Longest side to scale the image down to first (0 = full size)
    #[arg(long, default_value = "0")]
    pub max_size: u32,

    /// Output format
    #[arg(long, value_enum, default_value = "png")]
    pub format: HistogramFormatArg,

    /// Output file path (JSON goes to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_view(s: &str) -> std::result::Result<ViewKind, String> {
    s.parse::<ViewKind>().map_err(|e| e.to_string())
}

pub fn run(args: &HistogramArgs) -> Result<()> {
    let source = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let config = ViewConfig {
        brightness: args.brightness,
        contrast: args.contrast,
        max_display_size: args.max_size,
        ..Default::default()
    };
    let fitted = fit_within(&source, config.max_display_size);
    let view = render_view(&fitted, args.view, &config);

    if args.format == HistogramFormatArg::Json {
        let json = serde_json::to_string_pretty(&view.histogram)?;
        match args.output {
            Some(ref path) => {
                std::fs::write(path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Saved to {}", path.display());
            }
            None => println!("{json}"),
        }
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("histogram.{}", args.format.extension())));
    let path = path.with_extension(args.format.extension());

    save_plot(&view.plot, &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Saved to {}", path.display());

    Ok(())
}
