use std::path::{Path, PathBuf};

use console::Style;
use lumen_core::histogram::{Channel, Histogram};
use lumen_core::pipeline::config::ViewConfig;
use lumen_core::pipeline::ViewKind;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

/// One input image processed by `lumen render`.
pub struct RenderedFile {
    pub input: PathBuf,
    pub width: u32,
    pub height: u32,
    pub outputs: usize,
}

pub fn print_render_summary(config: &ViewConfig, output_dir: &Path, files: &[RenderedFile]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Lumen Views"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(11)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output_dir.display())
    );
    if config.max_display_size == 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Fit"),
            s.disabled.apply_to("full size")
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Fit"),
            s.value.apply_to(format!("{} px", config.max_display_size))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Histograms"),
        s.method.apply_to(config.histogram_format)
    );
    println!();

    println!("  {}", s.header.apply_to("Views"));
    for kind in ViewKind::ALL {
        println!(
            "    {:<12}{}",
            s.label.apply_to(kind),
            s.method.apply_to(config.adjustment(kind))
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Images"));
    for (i, file) in files.iter().enumerate() {
        println!(
            "    {}. {}  {}  {}",
            s.label.apply_to(i + 1),
            s.path.apply_to(file.input.display()),
            s.value.apply_to(format!("{}x{}", file.width, file.height)),
            s.label.apply_to(format!("{} files", file.outputs))
        );
    }
    println!();
}

pub fn print_histogram_stats(histogram: &Histogram) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Histogram"));
    println!(
        "    {:<8}{:>6}{:>6}{:>9}{:>7}{:>9}",
        s.label.apply_to("Channel"),
        s.label.apply_to("Min"),
        s.label.apply_to("Max"),
        s.label.apply_to("Mean"),
        s.label.apply_to("Peak"),
        s.label.apply_to("Count"),
    );
    for channel in Channel::ALL {
        match histogram.channel_stats(channel) {
            Some(stats) => println!(
                "    {:<8}{:>6}{:>6}{:>9}{:>7}{:>9}",
                s.method.apply_to(channel),
                s.value.apply_to(stats.min),
                s.value.apply_to(stats.max),
                s.value.apply_to(format!("{:.1}", stats.mean)),
                s.value.apply_to(stats.peak_value),
                s.value.apply_to(stats.peak_count),
            ),
            None => println!(
                "    {:<8}{}",
                s.method.apply_to(channel),
                s.disabled.apply_to("no data")
            ),
        }
    }
    println!();
}
