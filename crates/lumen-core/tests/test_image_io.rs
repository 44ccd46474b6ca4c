#[allow(dead_code)]
mod common;

use lumen_core::buffer::PixelBuffer;
use lumen_core::error::LumenError;
use lumen_core::histogram::{compute_histogram, render_histogram};
use lumen_core::io::image_io::{
    fit_within, load_image, load_image_with_info, save_image, save_plot, save_plot_svg, save_png,
};

use common::{gradient_buffer, sample_buffer};

// ---------------------------------------------------------------------------
// PixelBuffer construction
// ---------------------------------------------------------------------------

#[test]
fn test_buffer_rejects_wrong_length() {
    let err = PixelBuffer::new(2, 2, vec![0; 15]).unwrap_err();
    assert!(matches!(
        err,
        LumenError::InvalidBufferLength {
            width: 2,
            height: 2,
            len: 15
        }
    ));
}

#[test]
fn test_buffer_accepts_zero_area() {
    let buf = PixelBuffer::new(0, 7, Vec::new()).unwrap();
    assert!(buf.is_empty());
    assert_eq!(buf.pixel_count(), 0);
}

#[test]
fn test_buffer_pixel_access() {
    let buf = sample_buffer();
    assert_eq!(buf.pixel(1, 0), Some([200, 100, 50, 255]));
    assert_eq!(buf.pixel(0, 1), Some([0, 0, 0, 255]));
    assert_eq!(buf.pixel(2, 0), None);
    assert_eq!(buf.pixel(0, 2), None);
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

#[test]
fn test_save_load_roundtrip_png() {
    let buf = gradient_buffer(6, 4);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");

    save_png(&buf, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded, buf);
}

#[test]
fn test_load_reports_source_info() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("info.png");
    save_png(&sample_buffer(), &path).unwrap();

    let (buf, info) = load_image_with_info(&path).unwrap();
    assert_eq!((info.width, info.height), (2, 2));
    assert_eq!(info.color_type, "Rgba8");
    assert_eq!(info.filename, path);
    assert_eq!(buf.pixel_count(), 4);
}

#[test]
fn test_load_missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_image(&dir.path().join("missing.png")).is_err());
}

#[test]
fn test_save_image_jpeg_drops_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.jpg");
    save_image(&gradient_buffer(8, 8), &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert_eq!((loaded.width(), loaded.height()), (8, 8));
    assert!(loaded.pixels().all(|px| px[3] == 255));
}

#[test]
fn test_save_image_unknown_extension_is_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.data");
    save_image(&sample_buffer(), &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_save_plot_png_and_svg() {
    let plot = render_histogram(&compute_histogram(&sample_buffer()));
    let dir = tempfile::tempdir().unwrap();

    let png = dir.path().join("hist.png");
    save_plot(&plot, &png).unwrap();
    let raster = load_image(&png).unwrap();
    assert_eq!((raster.width(), raster.height()), (256, 150));

    let svg = dir.path().join("hist.svg");
    save_plot(&plot, &svg).unwrap();
    let text = std::fs::read_to_string(&svg).unwrap();
    assert_eq!(text, plot.to_svg());

    let explicit = dir.path().join("explicit.xml");
    save_plot_svg(&plot, &explicit).unwrap();
    assert!(explicit.exists());
}

#[test]
fn test_save_plot_rejects_unknown_format() {
    let plot = render_histogram(&compute_histogram(&sample_buffer()));
    let dir = tempfile::tempdir().unwrap();
    let err = save_plot(&plot, &dir.path().join("hist.pdf")).unwrap_err();
    assert!(matches!(err, LumenError::UnsupportedOutputFormat(ref ext) if ext == "pdf"));
}

// ---------------------------------------------------------------------------
// fit_within
// ---------------------------------------------------------------------------

#[test]
fn test_fit_within_small_image_unchanged() {
    let buf = gradient_buffer(120, 80);
    assert_eq!(fit_within(&buf, 300), buf);
}

#[test]
fn test_fit_within_scales_landscape() {
    let buf = gradient_buffer(600, 200);
    let fitted = fit_within(&buf, 300);
    assert_eq!((fitted.width(), fitted.height()), (300, 100));
}

#[test]
fn test_fit_within_scales_portrait() {
    let buf = gradient_buffer(150, 900);
    let fitted = fit_within(&buf, 300);
    assert_eq!((fitted.width(), fitted.height()), (50, 300));
}

#[test]
fn test_fit_within_keeps_one_pixel_minimum() {
    let buf = gradient_buffer(1000, 2);
    let fitted = fit_within(&buf, 300);
    assert_eq!(fitted.width(), 300);
    assert_eq!(fitted.height(), 1);
}

#[test]
fn test_fit_within_zero_disables() {
    let buf = gradient_buffer(400, 400);
    assert_eq!(fit_within(&buf, 0), buf);
}

#[test]
fn test_fit_within_empty() {
    assert!(fit_within(&PixelBuffer::empty(), 300).is_empty());
}
