use crate::buffer::PixelBuffer;
use crate::consts::{CONTRAST_EPSILON, CONTRAST_FACTOR_LIMIT, CONTRAST_PIVOT, CONTRAST_SCALE};

/// Multiplier applied around the pivot for a contrast setting in [-100, 100].
///
/// The setting is rescaled by 2.55 to roughly [-255, 255] first.
/// 0 yields ~1.0, positive values expand away from 128, negative values compress toward it.
pub fn contrast_factor(contrast: i32) -> f32 {
    let c = contrast as f32 * CONTRAST_SCALE;
    (CONTRAST_FACTOR_LIMIT * (c + 255.0))
        / (255.0 * (CONTRAST_FACTOR_LIMIT - c + CONTRAST_EPSILON))
}

/// Stretch or compress every color sample around 128.
///
/// Results are rounded to the nearest integer and clamped to [0, 255].
pub fn contrast(buffer: &PixelBuffer, contrast: i32) -> PixelBuffer {
    let factor = contrast_factor(contrast);
    buffer.map_channels(|v| stretch(v, factor))
}

fn stretch(v: u8, factor: f32) -> u8 {
    let out = factor * (v as f32 - CONTRAST_PIVOT) + CONTRAST_PIVOT;
    // A NaN from a degenerate factor casts to 0.
    out.round().clamp(0.0, 255.0) as u8
}
