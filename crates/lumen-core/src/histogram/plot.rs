//! Histogram rendering as a display list.
//!
//! A [`HistogramPlot`] is a fixed 256x150 surface described by draw commands.
//! It can be rasterized to an RGBA image or written out as SVG.

use image::Rgba;
use tracing::debug;

use crate::consts::{
    HISTOGRAM_BAR_ALPHA, HISTOGRAM_HEIGHT, HISTOGRAM_LABEL_BASELINE, HISTOGRAM_WIDTH,
};

use super::compute::{Channel, Histogram};

/// Surface background (#eee).
pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([238, 238, 238, 255]);

/// Axis label color (#555).
pub const LABEL_COLOR: Rgba<u8> = Rgba([85, 85, 85, 255]);

/// Placeholder message color (#888).
pub const PLACEHOLDER_COLOR: Rgba<u8> = Rgba([136, 136, 136, 255]);

/// Message shown when there is nothing to plot.
pub const NO_DATA_TEXT: &str = "no data";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Paint the whole surface.
    Fill { color: Rgba<u8> },
    /// One-unit-wide vertical stroke centered on `x`, from `top` down to `bottom`.
    VLine {
        x: f32,
        top: f32,
        bottom: f32,
        color: Rgba<u8>,
    },
    /// Text whose alphabetic baseline sits at `baseline`.
    Text {
        text: String,
        x: f32,
        baseline: f32,
        align: TextAlign,
        color: Rgba<u8>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistogramPlot {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    placeholder: bool,
}

impl HistogramPlot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// True when the source had no samples and a "no data" surface was drawn.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    fn no_data() -> Self {
        let (w, h) = (HISTOGRAM_WIDTH as f32, HISTOGRAM_HEIGHT as f32);
        Self {
            width: HISTOGRAM_WIDTH,
            height: HISTOGRAM_HEIGHT,
            commands: vec![
                DrawCommand::Fill {
                    color: BACKGROUND_COLOR,
                },
                DrawCommand::Text {
                    text: NO_DATA_TEXT.to_string(),
                    x: w / 2.0,
                    baseline: h / 2.0,
                    align: TextAlign::Center,
                    color: PLACEHOLDER_COLOR,
                },
            ],
            placeholder: true,
        }
    }
}

impl Channel {
    /// Translucent bar color for this channel.
    pub fn bar_color(self) -> Rgba<u8> {
        let a = (HISTOGRAM_BAR_ALPHA * 255.0).round() as u8;
        match self {
            Self::Red => Rgba([255, 0, 0, a]),
            Self::Green => Rgba([0, 128, 0, a]),
            Self::Blue => Rgba([0, 0, 255, a]),
        }
    }
}

/// Lay out a histogram as bars scaled to the tallest bucket.
///
/// Channels are drawn red, green, then blue, each bucket `i` at `x = i + 0.5`.
/// An empty histogram yields the placeholder surface instead of bars.
pub fn render_histogram(histogram: &Histogram) -> HistogramPlot {
    let max_frequency = histogram.max_frequency();
    if max_frequency == 0 {
        debug!("Empty histogram, rendering placeholder");
        return HistogramPlot::no_data();
    }

    let (w, h) = (HISTOGRAM_WIDTH as f32, HISTOGRAM_HEIGHT as f32);
    let max = max_frequency as f32;

    let mut commands = vec![DrawCommand::Fill {
        color: BACKGROUND_COLOR,
    }];

    for channel in Channel::ALL {
        let color = channel.bar_color();
        for (i, &count) in histogram.channel(channel).iter().enumerate() {
            if count == 0 {
                continue;
            }
            let bar_height = count as f32 / max * h;
            commands.push(DrawCommand::VLine {
                x: i as f32 + 0.5,
                top: h - bar_height,
                bottom: h,
                color,
            });
        }
    }

    commands.push(DrawCommand::Text {
        text: "0".to_string(),
        x: 0.0,
        baseline: HISTOGRAM_LABEL_BASELINE,
        align: TextAlign::Left,
        color: LABEL_COLOR,
    });
    commands.push(DrawCommand::Text {
        text: "255".to_string(),
        x: w,
        baseline: HISTOGRAM_LABEL_BASELINE,
        align: TextAlign::Right,
        color: LABEL_COLOR,
    });

    HistogramPlot {
        width: HISTOGRAM_WIDTH,
        height: HISTOGRAM_HEIGHT,
        commands,
        placeholder: false,
    }
}
