use crate::buffer::PixelBuffer;

/// Replace R, G and B with their truncated average.
///
/// Gray pixels map to themselves, so applying this twice changes nothing.
pub fn grayscale(buffer: &PixelBuffer) -> PixelBuffer {
    buffer.map_rgb(|[r, g, b]| {
        let avg = ((r as u16 + g as u16 + b as u16) / 3) as u8;
        [avg, avg, avg]
    })
}
