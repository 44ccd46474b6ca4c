use image::RgbaImage;

use crate::consts::RGBA_CHANNELS;
use crate::error::{LumenError, Result};

/// An 8-bit RGBA image.
/// Pixel data is row-major, four bytes per pixel, `len == width * height * 4`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, checking that the length matches the dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(RGBA_CHANNELS))
            .ok_or(LumenError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(LumenError::InvalidBufferLength {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer from a list of RGBA quadruples.
    pub fn from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> Result<Self> {
        let data = pixels.iter().flatten().copied().collect();
        Self::new(width, height, data)
    }

    /// A 0x0 buffer with no pixels.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / RGBA_CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over pixels as `[r, g, b, a]` slices.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(RGBA_CHANNELS)
    }

    /// Pixel at (x, y), or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * RGBA_CHANNELS;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Produce a new buffer by mapping each pixel's `[r, g, b]`.
    /// Alpha is copied through untouched.
    pub fn map_rgb<F>(&self, mut f: F) -> Self
    where
        F: FnMut([u8; 3]) -> [u8; 3],
    {
        let mut data = self.data.clone();
        for px in data.chunks_exact_mut(RGBA_CHANNELS) {
            let [r, g, b] = f([px[0], px[1], px[2]]);
            px[0] = r;
            px[1] = g;
            px[2] = b;
        }
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Produce a new buffer by mapping every R, G and B sample independently.
    pub fn map_channels<F>(&self, mut f: F) -> Self
    where
        F: FnMut(u8) -> u8,
    {
        self.map_rgb(|[r, g, b]| [f(r), f(g), f(b)])
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .expect("buffer size matches dimensions")
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}
