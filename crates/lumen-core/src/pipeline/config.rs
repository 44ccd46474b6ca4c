use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAX_DISPLAY_SIZE;
use crate::error::LumenError;
use crate::filters::Adjustment;

use super::types::ViewKind;

/// Parameters for deriving the four views of an image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Additive brightness shift, typically -255..255.
    #[serde(default)]
    pub brightness: i32,
    /// Contrast setting, typically -100..100.
    #[serde(default)]
    pub contrast: i32,
    /// Longest side the source is scaled down to; 0 keeps full size.
    #[serde(default = "default_max_display_size")]
    pub max_display_size: u32,
    #[serde(default)]
    pub histogram_format: PlotFormat,
}

fn default_max_display_size() -> u32 {
    DEFAULT_MAX_DISPLAY_SIZE
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 0,
            max_display_size: DEFAULT_MAX_DISPLAY_SIZE,
            histogram_format: PlotFormat::default(),
        }
    }
}

impl ViewConfig {
    /// Return brightness and contrast to neutral, as after loading a new image.
    pub fn reset_adjustments(&mut self) {
        self.brightness = 0;
        self.contrast = 0;
    }

    /// The transform that produces `kind` under this config.
    pub fn adjustment(&self, kind: ViewKind) -> Adjustment {
        match kind {
            ViewKind::Original => Adjustment::Identity,
            ViewKind::Grayscale => Adjustment::Grayscale,
            ViewKind::Brightness => Adjustment::Brightness(self.brightness),
            ViewKind::Contrast => Adjustment::Contrast(self.contrast),
        }
    }
}

/// File format histogram plots are written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotFormat {
    #[default]
    Png,
    Svg,
}

impl PlotFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl std::fmt::Display for PlotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Svg => write!(f, "SVG"),
        }
    }
}

impl std::str::FromStr for PlotFormat {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            other => Err(LumenError::Config(format!(
                "unknown plot format '{other}' (expected png or svg)"
            ))),
        }
    }
}
