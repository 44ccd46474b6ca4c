use image::{Rgba, RgbaImage};

use super::glyphs::{is_set, text_width, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use super::plot::{DrawCommand, HistogramPlot, TextAlign};

impl HistogramPlot {
    /// Rasterize the display list onto a transparent RGBA surface.
    ///
    /// Strokes are composited source-over, so overlapping translucent bars mix.
    pub fn rasterize(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width(), self.height());
        for cmd in self.commands() {
            match cmd {
                DrawCommand::Fill { color } => {
                    for px in img.pixels_mut() {
                        blend(px, *color);
                    }
                }
                DrawCommand::VLine {
                    x,
                    top,
                    bottom,
                    color,
                } => draw_vline(&mut img, *x, *top, *bottom, *color),
                DrawCommand::Text {
                    text,
                    x,
                    baseline,
                    align,
                    color,
                } => draw_text(&mut img, text, *x, *baseline, *align, *color),
            }
        }
        img
    }
}

fn draw_vline(img: &mut RgbaImage, x: f32, top: f32, bottom: f32, color: Rgba<u8>) {
    let (w, h) = img.dimensions();
    let col = x.floor();
    if col < 0.0 || col >= w as f32 {
        return;
    }
    let y0 = top.round().clamp(0.0, h as f32) as u32;
    let y1 = bottom.round().clamp(0.0, h as f32) as u32;
    for y in y0..y1 {
        blend(img.get_pixel_mut(col as u32, y), color);
    }
}

fn draw_text(
    img: &mut RgbaImage,
    text: &str,
    x: f32,
    baseline: f32,
    align: TextAlign,
    color: Rgba<u8>,
) {
    let width = text_width(text) as f32;
    let left = match align {
        TextAlign::Left => x,
        TextAlign::Center => x - width / 2.0,
        TextAlign::Right => x - width,
    }
    .round() as i64;
    let top = baseline.round() as i64 - GLYPH_HEIGHT as i64;

    let (w, h) = img.dimensions();
    for (i, c) in text.chars().enumerate() {
        let origin = left + i as i64 * GLYPH_ADVANCE as i64;
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if !is_set(c, col, row) {
                    continue;
                }
                let px = origin + col as i64;
                let py = top + row as i64;
                if px < 0 || py < 0 || px >= w as i64 || py >= h as i64 {
                    continue;
                }
                blend(img.get_pixel_mut(px as u32, py as u32), color);
            }
        }
    }
}

/// Source-over compositing of `src` onto `dst`.
fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for c in 0..3 {
        let v = (src[c] as f32 * sa + dst[c] as f32 * da * (1.0 - sa)) / out_a;
        dst[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}
