//! # 1-Bit Conversion
//!
//! Grayscale to black/white, either with a fixed threshold or with 8x8
//! Bayer ordered dithering, then MSB-first bit packing.
//!
//! ```text
//! Grayscale:    White    Light    Medium    Dark    Black
//!               ░░░░░░   ░░▒░░░   ░▒░▒░▒   ▒▓▒▓▒▓   ██████
//! ```

use serde::Deserialize;

/// Bayer 8x8 threshold matrix, values 0-63
pub const BAYER8: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// How a gray level becomes a dot
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dithering {
    /// Print where darkness exceeds the given level (0.0-1.0)
    Threshold(f32),
    /// Ordered dithering with [`BAYER8`]
    #[default]
    Bayer,
}

impl Dithering {
    /// Whether the dot at (x, y) with the given darkness (0.0 = white,
    /// 1.0 = black) is printed.
    #[inline]
    pub fn should_print(self, x: usize, y: usize, darkness: f32) -> bool {
        match self {
            Self::Threshold(level) => darkness > level,
            // (v + 0.5) / 64 keeps black always printing and white never
            Self::Bayer => darkness > (BAYER8[y & 7][x & 7] as f32 + 0.5) / 64.0,
        }
    }
}

/// Pack a row of pixels (true = black) into bytes, MSB = leftmost.
///
/// The last byte is padded with white when the row is not a multiple of 8.
pub fn pack_row(pixels: &[bool], out: &mut Vec<u8>) {
    for chunk in pixels.chunks(8) {
        let byte = chunk
            .iter()
            .enumerate()
            .filter(|(_, black)| **black)
            .fold(0u8, |acc, (i, _)| acc | (0x80 >> i));
        out.push(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_row_8_pixels() {
        let mut out = Vec::new();
        pack_row(&[true, true, true, true, false, false, false, false], &mut out);
        assert_eq!(out, vec![0xF0]);
    }

    #[test]
    fn test_pack_row_padding() {
        let mut out = Vec::new();
        pack_row(&[true; 12], &mut out);
        assert_eq!(out, vec![0xFF, 0xF0]);
    }

    #[test]
    fn test_pack_row_empty() {
        let mut out = Vec::new();
        pack_row(&[], &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_bayer_extremes() {
        for y in 0..8 {
            for x in 0..8 {
                assert!(Dithering::Bayer.should_print(x, y, 1.0));
                assert!(!Dithering::Bayer.should_print(x, y, 0.0));
            }
        }
    }

    #[test]
    fn test_bayer_half_gray() {
        let count = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| Dithering::Bayer.should_print(x, y, 0.5))
            .count();
        assert_eq!(count, 32);
    }

    #[test]
    fn test_threshold() {
        let d = Dithering::Threshold(0.5);
        assert!(d.should_print(0, 0, 0.6));
        assert!(!d.should_print(0, 0, 0.5));
    }
}
