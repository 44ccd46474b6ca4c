use crate::buffer::PixelBuffer;

/// Shift every color sample by `amount`, clamped to [0, 255].
///
/// `amount` is typically in [-255, 255] but any value is accepted.
pub fn brightness(buffer: &PixelBuffer, amount: i32) -> PixelBuffer {
    buffer.map_channels(|v| (v as i32).saturating_add(amount).clamp(0, 255) as u8)
}
