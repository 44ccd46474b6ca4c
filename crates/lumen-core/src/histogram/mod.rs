pub mod compute;
mod glyphs;
pub mod plot;
mod raster;
mod svg;

pub use compute::{compute_histogram, Channel, ChannelStats, Histogram};
pub use plot::{render_histogram, DrawCommand, HistogramPlot, TextAlign};
