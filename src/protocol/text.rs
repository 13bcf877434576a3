//! # ESC/POS Text Styling Commands
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Parameter |
//! |-------|---------|-----------|
//! | Bold | ESC E n | 1 = on, 0 = off |
//! | Inverse | GS B n | 1 = white on black |
//! | Underline | ESC - n | [`Underline`] |
//! | Justification | ESC a n | [`Justification`] |
//! | Font | ESC M n | [`Font`] |
//! | Print mode | ESC ! n | [`TextMode`] |
//! | Color | ESC r n | [`Color`] |
//! | Code table | ESC t n | [`CodeTable`] |
//!
//! The printer keeps all of these until changed or until `ESC @`.

use serde::Deserialize;

use super::commands::{ESC, GS};

// ============================================================================
// PARAMETER ENUMS
// ============================================================================

/// Underline thickness for `ESC - n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Underline {
    #[default]
    NoUnderline = 0,
    OneDotThick = 1,
    TwoDotsThick = 2,
}

/// Line justification for `ESC a n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Justification {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// Character font for `ESC M n` (also the HRI font of barcodes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[repr(u8)]
pub enum Font {
    /// Font A: 12×24 dots
    #[default]
    A = 0,
    /// Font B: 9×17 dots
    B = 1,
}

/// Print mode for `ESC ! n`
///
/// `ESC !` is a bit field; bit 4 doubles height and bit 5 doubles width.
/// Selecting a mode also clears the bold and underline bits it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TextMode {
    #[default]
    Normal = 0x00,
    DualHeight = 0x10,
    DualWidth = 0x20,
    DualWidthAndHeight = 0x30,
}

/// Print color for `ESC r n` on two-color printers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    /// First color (black)
    #[default]
    Color1 = 0,
    /// Second color (usually red)
    Color2 = 1,
}

/// Character code table for `ESC t n`
///
/// Only the tables common to Epson-compatible firmware are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CodeTable {
    /// PC437: USA, Standard Europe
    #[default]
    Pc437 = 0,
    Katakana = 1,
    /// PC850: Multilingual
    Pc850 = 2,
    /// PC860: Portuguese
    Pc860 = 3,
    /// PC863: Canadian-French
    Pc863 = 4,
    /// PC865: Nordic
    Pc865 = 5,
    /// WPC1252: Windows Latin-1
    Wpc1252 = 16,
    /// PC866: Cyrillic #2
    Pc866 = 17,
    /// PC852: Latin 2
    Pc852 = 18,
    /// PC858: Euro
    Pc858 = 19,
}

// ============================================================================
// COMMANDS
// ============================================================================

/// # Emphasized Mode (ESC E n)
#[inline]
pub const fn bold(on: bool) -> [u8; 3] {
    [ESC, b'E', on as u8]
}

/// # White/Black Reverse Printing (GS B n)
#[inline]
pub const fn inverse(on: bool) -> [u8; 3] {
    [GS, b'B', on as u8]
}

/// # Underline Mode (ESC - n)
#[inline]
pub const fn underline(mode: Underline) -> [u8; 3] {
    [ESC, b'-', mode as u8]
}

/// # Select Justification (ESC a n)
///
/// Takes effect at the start of the next line.
#[inline]
pub const fn justification(mode: Justification) -> [u8; 3] {
    [ESC, b'a', mode as u8]
}

/// # Select Character Font (ESC M n)
#[inline]
pub const fn font(font: Font) -> [u8; 3] {
    [ESC, b'M', font as u8]
}

/// # Select Print Mode (ESC ! n)
#[inline]
pub const fn text_mode(mode: TextMode) -> [u8; 3] {
    [ESC, b'!', mode as u8]
}

/// # Select Print Color (ESC r n)
#[inline]
pub const fn color(color: Color) -> [u8; 3] {
    [ESC, b'r', color as u8]
}

/// # Select Character Code Table (ESC t n)
///
/// Bytes 0x80-0xFF of subsequent text are looked up in `table`. Pair it
/// with the matching text encoding (see [`crate::encoding`]).
#[inline]
pub const fn code_table(table: CodeTable) -> [u8; 3] {
    [ESC, b't', table as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(bold(true), [0x1B, 0x45, 1]);
        assert_eq!(bold(false), [0x1B, 0x45, 0]);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(inverse(true), [0x1D, 0x42, 1]);
        assert_eq!(inverse(false), [0x1D, 0x42, 0]);
    }

    #[test]
    fn test_underline() {
        assert_eq!(underline(Underline::NoUnderline), [0x1B, 0x2D, 0]);
        assert_eq!(underline(Underline::TwoDotsThick), [0x1B, 0x2D, 2]);
    }

    #[test]
    fn test_justification() {
        assert_eq!(justification(Justification::Center), [0x1B, 0x61, 1]);
        assert_eq!(justification(Justification::Right), [0x1B, 0x61, 2]);
    }

    #[test]
    fn test_font() {
        assert_eq!(font(Font::A), [0x1B, 0x4D, 0]);
        assert_eq!(font(Font::B), [0x1B, 0x4D, 1]);
    }

    #[test]
    fn test_text_mode() {
        assert_eq!(text_mode(TextMode::Normal), [0x1B, 0x21, 0x00]);
        assert_eq!(text_mode(TextMode::DualWidthAndHeight), [0x1B, 0x21, 0x30]);
    }

    #[test]
    fn test_color_and_code_table() {
        assert_eq!(color(Color::Color2), [0x1B, 0x72, 1]);
        assert_eq!(code_table(CodeTable::Wpc1252), [0x1B, 0x74, 16]);
    }
}
