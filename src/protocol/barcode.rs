//! # ESC/POS 1D Barcode Commands
//!
//! A barcode is printed with four setup commands followed by the print
//! command itself:
//!
//! | Step | Command | Meaning |
//! |------|---------|---------|
//! | 1 | GS H n | HRI position ([`Position`]) |
//! | 2 | GS f n | HRI font |
//! | 3 | GS h n | Bar height in dots |
//! | 4 | GS w n | Module width (2-6) |
//! | 5 | GS k m n d1...dn | Print, `m` = [`BarcodeType`], `n` = data length |
//!
//! The print command uses function B (`m` = 65-73), whose data is length
//! prefixed by one byte instead of NUL terminated.

use serde::Deserialize;

use super::commands::GS;
use super::text::Font;
use crate::error::EscposError;

/// Barcode symbology for `GS k m` (function B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BarcodeType {
    /// UPC-A (11-12 digits)
    UpcA = 65,
    /// UPC-E (6-8 digits)
    UpcE = 66,
    /// EAN-13 / JAN-13 (12-13 digits)
    Ean13 = 67,
    /// EAN-8 / JAN-8 (7-8 digits)
    Ean8 = 68,
    /// Code39 (A-Z, 0-9, space, -.$/%+)
    Code39 = 69,
    /// ITF (Interleaved 2 of 5, even digit count)
    Itf = 70,
    /// NW-7 / Codabar
    Nw7 = 71,
    Code93 = 72,
    /// Code128 (full ASCII, data starts with a code set selector)
    Code128 = 73,
}

/// HRI (Human Readable Interpretation) position for `GS H n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Position {
    NoText = 0,
    Above = 1,
    #[default]
    Below = 2,
    Both = 3,
}

/// # Select HRI Position (GS H n)
#[inline]
pub const fn hri_position(pos: Position) -> [u8; 3] {
    [GS, b'H', pos as u8]
}

/// # Select HRI Font (GS f n)
#[inline]
pub const fn hri_font(font: Font) -> [u8; 3] {
    [GS, b'f', font as u8]
}

/// # Set Bar Height (GS h n)
#[inline]
pub const fn height(dots: u8) -> [u8; 3] {
    [GS, b'h', dots]
}

/// # Set Module Width (GS w n)
#[inline]
pub const fn width(n: u8) -> [u8; 3] {
    [GS, b'w', n]
}

/// # Print Barcode (GS k m n d1...dn)
///
/// ## Errors
///
/// Fails with [`EscposError::BarcodeTooLong`] when `data` does not fit the
/// one-byte length field.
///
/// ```
/// use escpos_buffer::protocol::barcode::{print, BarcodeType};
///
/// let cmd = print(BarcodeType::Code39, b"AB")?;
/// assert_eq!(cmd, vec![0x1D, 0x6B, 69, 2, b'A', b'B']);
/// # Ok::<(), escpos_buffer::EscposError>(())
/// ```
pub fn print(barcode_type: BarcodeType, data: &[u8]) -> Result<Vec<u8>, EscposError> {
    let len = u8::try_from(data.len()).map_err(|_| EscposError::BarcodeTooLong(data.len()))?;

    let mut cmd = Vec::with_capacity(4 + data.len());
    cmd.push(GS);
    cmd.push(b'k');
    cmd.push(barcode_type as u8);
    cmd.push(len);
    cmd.extend_from_slice(data);
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_commands() {
        assert_eq!(hri_position(Position::Below), [0x1D, 0x48, 2]);
        assert_eq!(hri_font(Font::B), [0x1D, 0x66, 1]);
        assert_eq!(height(80), [0x1D, 0x68, 80]);
        assert_eq!(width(3), [0x1D, 0x77, 3]);
    }

    #[test]
    fn test_print_code39() {
        let cmd = print(BarcodeType::Code39, b"12345").unwrap();
        assert_eq!(cmd, vec![0x1D, 0x6B, 0x45, 5, b'1', b'2', b'3', b'4', b'5']);
    }

    #[test]
    fn test_print_max_length() {
        let data = vec![b'0'; 255];
        let cmd = print(BarcodeType::Code128, &data).unwrap();
        assert_eq!(cmd[3], 255);
        assert_eq!(cmd.len(), 4 + 255);
    }

    #[test]
    fn test_print_too_long() {
        let data = vec![b'0'; 256];
        let err = print(BarcodeType::Code128, &data).unwrap_err();
        assert!(matches!(err, EscposError::BarcodeTooLong(256)));
    }
}
