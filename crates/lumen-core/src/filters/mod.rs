pub mod brightness;
pub mod contrast;
pub mod grayscale;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// A single pixel transform with its parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjustment {
    Identity,
    Grayscale,
    Brightness(i32),
    Contrast(i32),
}

impl Adjustment {
    /// Apply to `buffer`, returning a new buffer of the same dimensions.
    pub fn apply(&self, buffer: &PixelBuffer) -> PixelBuffer {
        match *self {
            Self::Identity => buffer.clone(),
            Self::Grayscale => grayscale::grayscale(buffer),
            Self::Brightness(amount) => brightness::brightness(buffer, amount),
            Self::Contrast(amount) => contrast::contrast(buffer, amount),
        }
    }
}

impl std::fmt::Display for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identity => write!(f, "Identity"),
            Self::Grayscale => write!(f, "Grayscale"),
            Self::Brightness(b) => write!(f, "Brightness ({b:+})"),
            Self::Contrast(c) => write!(f, "Contrast ({c:+})"),
        }
    }
}
