use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::error::{LumenError, Result};
use crate::histogram::HistogramPlot;

/// Metadata about a decoded source image.
#[derive(Clone, Debug)]
pub struct SourceInfo {
    pub filename: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Color type of the file before conversion to RGBA8, e.g. `Rgb8`.
    pub color_type: String,
}

/// Decode any supported image file into an RGBA buffer.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    load_image_with_info(path).map(|(buffer, _)| buffer)
}

/// Decode an image file and report what it was before conversion.
pub fn load_image_with_info(path: &Path) -> Result<(PixelBuffer, SourceInfo)> {
    let img = image::open(path)?;
    let info = SourceInfo {
        filename: path.to_path_buf(),
        width: img.width(),
        height: img.height(),
        color_type: format!("{:?}", img.color()),
    };
    debug!(
        width = info.width,
        height = info.height,
        color = %info.color_type,
        "Decoded image"
    );
    Ok((PixelBuffer::from(img.to_rgba8()), info))
}

/// Save a buffer as 8-bit RGBA PNG.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    buffer
        .to_rgba_image()
        .save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a buffer, choosing the format from the file extension.
///
/// Formats without an alpha channel (JPEG) drop it. Unknown extensions fall back to PNG.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    match extension(path).as_deref() {
        Some("jpg" | "jpeg") => {
            let rgb = DynamicImage::ImageRgba8(buffer.to_rgba_image()).to_rgb8();
            rgb.save_with_format(path, ImageFormat::Jpeg)?;
            Ok(())
        }
        Some(ext) => match ImageFormat::from_extension(ext) {
            Some(format) => {
                buffer.to_rgba_image().save_with_format(path, format)?;
                Ok(())
            }
            None => save_png(buffer, path),
        },
        None => save_png(buffer, path),
    }
}

/// Save a histogram plot as SVG.
pub fn save_plot_svg(plot: &HistogramPlot, path: &Path) -> Result<()> {
    std::fs::write(path, plot.to_svg())?;
    Ok(())
}

/// Save a histogram plot, as SVG for `.svg` paths and as a PNG raster otherwise.
pub fn save_plot(plot: &HistogramPlot, path: &Path) -> Result<()> {
    match extension(path).as_deref() {
        Some("svg") => save_plot_svg(plot, path),
        Some("png") | None => {
            plot.rasterize().save_with_format(path, ImageFormat::Png)?;
            Ok(())
        }
        Some(other) => Err(LumenError::UnsupportedOutputFormat(other.to_string())),
    }
}

/// Scale `buffer` down so neither side exceeds `max_side`, keeping aspect ratio.
///
/// Never upscales. `max_side == 0` disables fitting.
pub fn fit_within(buffer: &PixelBuffer, max_side: u32) -> PixelBuffer {
    let (w, h) = (buffer.width(), buffer.height());
    if max_side == 0 || buffer.is_empty() || (w <= max_side && h <= max_side) {
        return buffer.clone();
    }

    let scale = (max_side as f64 / w as f64).min(max_side as f64 / h as f64);
    let new_w = ((w as f64 * scale).round() as u32).max(1);
    let new_h = ((h as f64 * scale).round() as u32).max(1);
    debug!(from_w = w, from_h = h, new_w, new_h, "Fitting image to display size");

    let resized = imageops::resize(&buffer.to_rgba_image(), new_w, new_h, FilterType::Triangle);
    PixelBuffer::from(resized)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
