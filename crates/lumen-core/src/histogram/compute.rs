use serde::Serialize;

use crate::buffer::PixelBuffer;
use crate::consts::HISTOGRAM_BINS;

/// One of the three counted color channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Byte offset of this channel within an RGBA pixel.
    pub fn offset(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Green => write!(f, "Green"),
            Self::Blue => write!(f, "Blue"),
        }
    }
}

/// Per-channel frequency tables, 256 buckets each.
///
/// Every channel's buckets sum to the pixel count of the source buffer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Histogram {
    red: Vec<u32>,
    green: Vec<u32>,
    blue: Vec<u32>,
}

/// Summary of one channel's distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelStats {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
    /// Most frequent value (lowest one on ties).
    pub peak_value: u8,
    pub peak_count: u32,
}

/// Count every R, G and B sample of `buffer`. Alpha is ignored.
pub fn compute_histogram(buffer: &PixelBuffer) -> Histogram {
    let mut red = vec![0u32; HISTOGRAM_BINS];
    let mut green = vec![0u32; HISTOGRAM_BINS];
    let mut blue = vec![0u32; HISTOGRAM_BINS];

    for px in buffer.pixels() {
        red[px[0] as usize] += 1;
        green[px[1] as usize] += 1;
        blue[px[2] as usize] += 1;
    }

    Histogram { red, green, blue }
}

impl Histogram {
    pub fn channel(&self, channel: Channel) -> &[u32] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    pub fn count(&self, channel: Channel, value: u8) -> u32 {
        self.channel(channel)[value as usize]
    }

    /// Largest bucket across all three channels; 0 for an empty source.
    pub fn max_frequency(&self) -> u32 {
        Channel::ALL
            .iter()
            .flat_map(|&c| self.channel(c).iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Number of pixels that were counted.
    pub fn sample_count(&self) -> u64 {
        self.red.iter().map(|&n| n as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.max_frequency() == 0
    }

    pub fn channel_stats(&self, channel: Channel) -> Option<ChannelStats> {
        let bins = self.channel(channel);
        let total: u64 = bins.iter().map(|&n| n as u64).sum();
        if total == 0 {
            return None;
        }

        let min = bins.iter().position(|&n| n > 0)?;
        let max = bins.iter().rposition(|&n| n > 0)?;
        let weighted: u64 = bins
            .iter()
            .enumerate()
            .map(|(value, &n)| value as u64 * n as u64)
            .sum();

        let (peak_value, peak_count) = bins.iter().enumerate().fold(
            (0usize, 0u32),
            |best, (value, &n)| if n > best.1 { (value, n) } else { best },
        );

        Some(ChannelStats {
            min: min as u8,
            max: max as u8,
            mean: weighted as f64 / total as f64,
            peak_value: peak_value as u8,
            peak_count,
        })
    }
}
