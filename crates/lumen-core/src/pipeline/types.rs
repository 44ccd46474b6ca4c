use crate::buffer::PixelBuffer;
use crate::error::LumenError;
use crate::histogram::{Histogram, HistogramPlot};

/// Which derived rendering of the source image a view shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Original,
    Grayscale,
    Brightness,
    Contrast,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [
        ViewKind::Original,
        ViewKind::Grayscale,
        ViewKind::Brightness,
        ViewKind::Contrast,
    ];

    /// Lowercase name used in output file names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Grayscale => "grayscale",
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original => write!(f, "Original"),
            Self::Grayscale => write!(f, "Grayscale"),
            Self::Brightness => write!(f, "Brightness"),
            Self::Contrast => write!(f, "Contrast"),
        }
    }
}

impl std::str::FromStr for ViewKind {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.slug() == s)
            .ok_or_else(|| LumenError::Config(format!("unknown view '{s}'")))
    }
}

/// One derived image with its histogram and rendered plot.
#[derive(Clone, Debug)]
pub struct RenderedView {
    pub kind: ViewKind,
    pub image: PixelBuffer,
    pub histogram: Histogram,
    pub plot: HistogramPlot,
}

/// All four views derived from a single (display-fitted) source.
#[derive(Clone, Debug)]
pub struct ViewSet {
    pub(super) source: PixelBuffer,
    pub(super) views: Vec<RenderedView>,
}

impl ViewSet {
    /// The fitted source every view was derived from.
    pub fn source(&self) -> &PixelBuffer {
        &self.source
    }

    pub fn get(&self, kind: ViewKind) -> Option<&RenderedView> {
        self.views.iter().find(|v| v.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderedView> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
