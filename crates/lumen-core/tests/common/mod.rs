use lumen_core::buffer::PixelBuffer;

/// The 2x2 fixture: dark blue-ish, orange, black, white, all opaque.
pub const SAMPLE_PIXELS: [[u8; 4]; 4] = [
    [10, 20, 30, 255],
    [200, 100, 50, 255],
    [0, 0, 0, 255],
    [255, 255, 255, 255],
];

pub fn sample_buffer() -> PixelBuffer {
    PixelBuffer::from_pixels(2, 2, &SAMPLE_PIXELS).expect("2x2 fixture")
}

/// Buffer where every pixel is `px`.
pub fn solid_buffer(w: u32, h: u32, px: [u8; 4]) -> PixelBuffer {
    let pixels = vec![px; (w * h) as usize];
    PixelBuffer::from_pixels(w, h, &pixels).expect("solid buffer")
}

/// Buffer with a horizontal ramp on R, vertical ramp on G, a checker on B,
/// and alpha varying per pixel so alpha regressions show up.
pub fn gradient_buffer(w: u32, h: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            let r = (if w > 1 { x * 255 / (w - 1) } else { 0 }) as u8;
            let g = (if h > 1 { y * 255 / (h - 1) } else { 0 }) as u8;
            let b = if (x + y) % 2 == 0 { 40 } else { 220 };
            let a = ((x * 7 + y * 13) % 256) as u8;
            pixels.push([r, g, b, a]);
        }
    }
    PixelBuffer::from_pixels(w, h, &pixels).expect("gradient buffer")
}
