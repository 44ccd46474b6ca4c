mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lumen", about = "Image tone adjustment and histogram viewer")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image metadata and per-channel histogram statistics
    Info(commands::info::InfoArgs),
    /// Write original, grayscale, brightness and contrast views with histograms
    Render(commands::render::RenderArgs),
    /// Render a single histogram as PNG, SVG or JSON
    Histogram(commands::histogram::HistogramArgs),
    /// Print or save the default view config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Histogram(args) => commands::histogram::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
