use std::fmt::Write;

use image::Rgba;

use super::plot::{DrawCommand, HistogramPlot, TextAlign};

const LABEL_FONT: &str = "font-family=\"Arial, sans-serif\" font-size=\"10\"";

impl HistogramPlot {
    /// Serialize the display list as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width(), self.height());
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
        );
        for cmd in self.commands() {
            let _ = match cmd {
                DrawCommand::Fill { color } => writeln!(
                    out,
                    "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"{}\"/>",
                    css_color(*color)
                ),
                DrawCommand::VLine {
                    x,
                    top,
                    bottom,
                    color,
                } => writeln!(
                    out,
                    "  <line x1=\"{x}\" y1=\"{bottom}\" x2=\"{x}\" y2=\"{top}\" stroke=\"{}\" stroke-width=\"1\"/>",
                    css_color(*color)
                ),
                DrawCommand::Text {
                    text,
                    x,
                    baseline,
                    align,
                    color,
                } => writeln!(
                    out,
                    "  <text x=\"{x}\" y=\"{baseline}\" text-anchor=\"{}\" {LABEL_FONT} fill=\"{}\">{}</text>",
                    anchor(*align),
                    css_color(*color),
                    escape(text)
                ),
            };
        }
        out.push_str("</svg>\n");
        out
    }
}

fn css_color(c: Rgba<u8>) -> String {
    if c[3] == 255 {
        format!("rgb({}, {}, {})", c[0], c[1], c[2])
    } else {
        format!(
            "rgba({}, {}, {}, {:.2})",
            c[0],
            c[1],
            c[2],
            c[3] as f32 / 255.0
        )
    }
}

fn anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
