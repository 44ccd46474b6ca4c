use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::histogram::{compute_histogram, render_histogram};
use crate::io::image_io::{fit_within, save_plot, save_png};

use super::config::{PlotFormat, ViewConfig};
use super::types::{RenderedView, ViewKind, ViewSet};

/// Derive one view from an already-fitted source.
///
/// Nothing is cached: the transform, histogram and plot are rebuilt on every call.
pub fn render_view(source: &PixelBuffer, kind: ViewKind, config: &ViewConfig) -> RenderedView {
    let adjustment = config.adjustment(kind);
    let image = adjustment.apply(source);
    let histogram = compute_histogram(&image);
    let plot = render_histogram(&histogram);
    debug!(
        view = %kind,
        adjustment = %adjustment,
        max_frequency = histogram.max_frequency(),
        "View rendered"
    );
    RenderedView {
        kind,
        image,
        histogram,
        plot,
    }
}

/// Fit `source` to the display size and derive all four views from it.
pub fn render_views(source: &PixelBuffer, config: &ViewConfig) -> ViewSet {
    let fitted = fit_within(source, config.max_display_size);
    info!(
        width = fitted.width(),
        height = fitted.height(),
        brightness = config.brightness,
        contrast = config.contrast,
        "Rendering views"
    );

    let views = ViewKind::ALL
        .iter()
        .map(|&kind| render_view(&fitted, kind, config))
        .collect();

    ViewSet {
        source: fitted,
        views,
    }
}

impl ViewSet {
    /// Recompute a single view, e.g. after its slider moved.
    pub fn refresh(&mut self, kind: ViewKind, config: &ViewConfig) {
        let view = render_view(&self.source, kind, config);
        match self.views.iter_mut().find(|v| v.kind == kind) {
            Some(slot) => *slot = view,
            None => self.views.push(view),
        }
    }
}

/// Write every view as `<stem>_<view>.png` plus its histogram plot into `dir`.
///
/// Returns the written paths in view order, image before plot.
pub fn write_views(
    set: &ViewSet,
    dir: &Path,
    stem: &str,
    format: PlotFormat,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(set.len() * 2);
    for view in set.iter() {
        let slug = view.kind.slug();

        let image_path = dir.join(format!("{stem}_{slug}.png"));
        save_png(&view.image, &image_path)?;
        written.push(image_path);

        let plot_path = dir.join(format!("{stem}_{slug}_histogram.{}", format.extension()));
        save_plot(&view.plot, &plot_path)?;
        written.push(plot_path);
    }

    info!(dir = %dir.display(), files = written.len(), "Views saved");
    Ok(written)
}
