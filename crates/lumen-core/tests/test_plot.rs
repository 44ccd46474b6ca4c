#[allow(dead_code)]
mod common;

use approx::assert_relative_eq;

use lumen_core::buffer::PixelBuffer;
use lumen_core::histogram::plot::{BACKGROUND_COLOR, NO_DATA_TEXT};
use lumen_core::histogram::{
    compute_histogram, render_histogram, Channel, DrawCommand, TextAlign,
};

use common::{gradient_buffer, sample_buffer, solid_buffer};

fn vlines(cmds: &[DrawCommand]) -> Vec<(f32, f32, f32)> {
    cmds.iter()
        .filter_map(|c| match c {
            DrawCommand::VLine { x, top, bottom, .. } => Some((*x, *top, *bottom)),
            _ => None,
        })
        .collect()
}

fn texts(cmds: &[DrawCommand]) -> Vec<(String, TextAlign)> {
    cmds.iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, align, .. } => Some((text.clone(), *align)),
            _ => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Display list
// ---------------------------------------------------------------------------

#[test]
fn test_plot_fixed_size() {
    let plot = render_histogram(&compute_histogram(&gradient_buffer(40, 40)));
    assert_eq!(plot.width(), 256);
    assert_eq!(plot.height(), 150);
    assert!(!plot.is_placeholder());
}

#[test]
fn test_plot_starts_with_background() {
    let plot = render_histogram(&compute_histogram(&sample_buffer()));
    assert_eq!(
        plot.commands()[0],
        DrawCommand::Fill {
            color: BACKGROUND_COLOR
        }
    );
}

#[test]
fn test_plot_one_bar_per_nonzero_bucket() {
    let hist = compute_histogram(&gradient_buffer(20, 20));
    let nonzero: usize = Channel::ALL
        .iter()
        .map(|&c| hist.channel(c).iter().filter(|&&n| n > 0).count())
        .sum();
    let plot = render_histogram(&hist);
    assert_eq!(vlines(plot.commands()).len(), nonzero);
}

#[test]
fn test_plot_bars_scaled_to_max() {
    // Red: 3 at value 10, 1 at value 200. Green and blue constant (4 each).
    let buf = PixelBuffer::from_pixels(
        2,
        2,
        &[
            [10, 5, 5, 255],
            [10, 5, 5, 255],
            [10, 5, 5, 255],
            [200, 5, 5, 255],
        ],
    )
    .unwrap();
    let plot = render_histogram(&compute_histogram(&buf));
    let lines = vlines(plot.commands());

    // Red bars come first.
    let (x, top, bottom) = lines[0];
    assert_relative_eq!(x, 10.5);
    assert_relative_eq!(bottom, 150.0);
    assert_relative_eq!(top, 150.0 - 0.75 * 150.0);

    let (x, top, _) = lines[1];
    assert_relative_eq!(x, 200.5);
    assert_relative_eq!(top, 150.0 - 0.25 * 150.0);

    // Green at 5 holds the maximum and spans the full height.
    let (x, top, _) = lines[2];
    assert_relative_eq!(x, 5.5);
    assert_relative_eq!(top, 0.0);
}

#[test]
fn test_plot_channel_order_and_colors() {
    let plot = render_histogram(&compute_histogram(&solid_buffer(2, 2, [1, 2, 3, 255])));
    let colors: Vec<_> = plot
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::VLine { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(
        colors,
        vec![
            Channel::Red.bar_color(),
            Channel::Green.bar_color(),
            Channel::Blue.bar_color()
        ]
    );
    for c in colors {
        assert!(c[3] < 255, "bars should be translucent");
    }
}

#[test]
fn test_plot_axis_labels() {
    let plot = render_histogram(&compute_histogram(&sample_buffer()));
    let labels = texts(plot.commands());
    assert_eq!(
        labels,
        vec![
            ("0".to_string(), TextAlign::Left),
            ("255".to_string(), TextAlign::Right)
        ]
    );
}

#[test]
fn test_plot_empty_is_placeholder() {
    let plot = render_histogram(&compute_histogram(&PixelBuffer::empty()));
    assert!(plot.is_placeholder());
    assert_eq!(plot.width(), 256);
    assert_eq!(plot.height(), 150);
    assert!(vlines(plot.commands()).is_empty());
    assert_eq!(
        texts(plot.commands()),
        vec![(NO_DATA_TEXT.to_string(), TextAlign::Center)]
    );
}

// ---------------------------------------------------------------------------
// Raster
// ---------------------------------------------------------------------------

#[test]
fn test_rasterize_dimensions_and_background() {
    let img = render_histogram(&compute_histogram(&sample_buffer())).rasterize();
    assert_eq!(img.dimensions(), (256, 150));
    // Top-left corner is never covered by bars or labels in this sample.
    assert_eq!(img.get_pixel(128, 0).0, BACKGROUND_COLOR.0);
}

#[test]
fn test_rasterize_full_height_bar() {
    let img = render_histogram(&compute_histogram(&solid_buffer(3, 3, [60, 60, 60, 255])))
        .rasterize();
    // All three channels stack in column 60, red then green then blue.
    let top = img.get_pixel(60, 0);
    let bottom = img.get_pixel(60, 149);
    assert_eq!(top, bottom);
    assert!(top[2] > top[0], "blue drawn last should dominate: {:?}", top.0);
    assert_eq!(top[3], 255);
    // Neighbouring column is plain background.
    assert_eq!(img.get_pixel(61, 10).0, BACKGROUND_COLOR.0);
}

#[test]
fn test_rasterize_placeholder_has_text() {
    let img = render_histogram(&compute_histogram(&PixelBuffer::empty())).rasterize();
    let non_background = img.pixels().filter(|p| p.0 != BACKGROUND_COLOR.0).count();
    assert!(non_background > 0, "placeholder text should be drawn");
    // Nothing outside the middle band.
    for y in 0..60 {
        for x in 0..256 {
            assert_eq!(img.get_pixel(x, y).0, BACKGROUND_COLOR.0);
        }
    }
}

// ---------------------------------------------------------------------------
// SVG
// ---------------------------------------------------------------------------

#[test]
fn test_svg_structure() {
    let plot = render_histogram(&compute_histogram(&sample_buffer()));
    let svg = plot.to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("width=\"256\""));
    assert!(svg.contains("height=\"150\""));
    assert!(svg.contains("rgba(255, 0, 0, 0.70)"));
    assert!(svg.contains("rgba(0, 128, 0, 0.70)"));
    assert!(svg.contains("rgba(0, 0, 255, 0.70)"));
    assert!(svg.contains(">255</text>"));
    assert_eq!(svg.matches("<line").count(), vlines(plot.commands()).len());
}

#[test]
fn test_svg_placeholder() {
    let svg = render_histogram(&compute_histogram(&PixelBuffer::empty())).to_svg();
    assert!(svg.contains(NO_DATA_TEXT));
    assert!(svg.contains("text-anchor=\"middle\""));
    assert!(!svg.contains("<line"));
}
