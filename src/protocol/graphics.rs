//! # ESC/POS Raster Graphics
//!
//! ## Print Raster Bit Image (GS v 0 m xL xH yL yH d1...dk)
//!
//! | Format  | Bytes |
//! |---------|-------|
//! | ASCII   | GS v 0 m xL xH yL yH d1...dk |
//! | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
//!
//! - `m`: scaling mode ([`RasterMode`])
//! - `xL, xH`: width, little-endian
//! - `yL, yH`: height in dots, little-endian
//! - `d1...dk`: bitmap, row by row, no padding or terminator
//!
//! ## Bit Packing
//!
//! Each byte holds 8 horizontal dots, bit 7 (MSB) leftmost, 1 = black.
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```

use serde::Deserialize;

use super::commands::GS;

/// Scaling mode `m` of `GS v 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RasterMode {
    #[default]
    Normal = 0,
    DoubleWidth = 1,
    DoubleHeight = 2,
    DoubleWidthAndHeight = 3,
}

/// The fixed 4-byte raster header; width and height follow it.
#[inline]
pub const fn raster_header(mode: RasterMode) -> [u8; 4] {
    [GS, b'v', b'0', mode as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_header() {
        assert_eq!(raster_header(RasterMode::Normal), [0x1D, 0x76, 0x30, 0]);
        assert_eq!(
            raster_header(RasterMode::DoubleWidthAndHeight),
            [0x1D, 0x76, 0x30, 3]
        );
    }
}
