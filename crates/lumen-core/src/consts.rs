/// Number of RGBA channels stored per pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Number of buckets in a per-channel histogram, one per 8-bit value.
pub const HISTOGRAM_BINS: usize = 256;

/// Width of a rendered histogram surface in display units.
pub const HISTOGRAM_WIDTH: u32 = 256;

/// Height of a rendered histogram surface in display units.
pub const HISTOGRAM_HEIGHT: u32 = 150;

/// Baseline of the "0" / "255" axis labels, measured from the top.
pub const HISTOGRAM_LABEL_BASELINE: f32 = 145.0;

/// Opacity of each channel's bars, so overlapping channels stay visible.
pub const HISTOGRAM_BAR_ALPHA: f32 = 0.7;

/// Pivot value the contrast stretch scales around.
pub const CONTRAST_PIVOT: f32 = 128.0;

/// Scale from the [-100, 100] contrast control to the internal [-255, 255] range.
pub const CONTRAST_SCALE: f32 = 2.55;

/// Numerator constant of the contrast-factor formula.
pub const CONTRAST_FACTOR_LIMIT: f32 = 259.0;

/// Keeps the contrast factor finite near its singularity at c' = 259.
pub const CONTRAST_EPSILON: f32 = 0.001;

/// Typical range of the brightness control.
pub const BRIGHTNESS_RANGE: (i32, i32) = (-255, 255);

/// Typical range of the contrast control.
pub const CONTRAST_RANGE: (i32, i32) = (-100, 100);

/// Longest side an image is scaled down to before views are derived.
pub const DEFAULT_MAX_DISPLAY_SIZE: u32 = 300;
