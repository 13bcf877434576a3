//! # ESC/POS Printer Control Commands
//!
//! Initialization, paper feed, cutter and cash drawer commands.
//!
//! ## Escape Sequence Structure
//!
//! Every command in this crate is an opcode pair followed by a fixed number
//! of parameter bytes:
//!
//! - Two bytes: `ESC @`, `ESC 2`
//! - Three bytes: `ESC d n`, `GS V n`
//! - Variable: `GS k m n d1...dn`, `GS v 0 m xL xH yL yH d1...dk`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x0180 is sent as bytes `[0x80, 0x01]`

use serde::Deserialize;

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte (0x1B)
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix (0x1D)
///
/// Used for inverse printing, cutting, barcodes and raster graphics.
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// Pulse on/off time of the drawer kick, in units of 2 ms.
pub const DRAWER_PULSE: u8 = 10;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets modes to their power-on values.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ```
/// use escpos_buffer::protocol::commands;
///
/// assert_eq!(commands::init(), [0x1B, 0x40]);
/// ```
#[inline]
pub const fn init() -> [u8; 2] {
    [ESC, b'@']
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC d n  |
/// | Hex     | 1B 64 n  |
#[inline]
pub const fn feed(lines: u8) -> [u8; 3] {
    [ESC, b'd', lines]
}

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the line spacing to `n` motion units.
#[inline]
pub const fn line_spacing(n: u8) -> [u8; 3] {
    [ESC, b'3', n]
}

/// # Default Line Spacing (ESC 2)
///
/// Restores the printer's default line spacing (about 1/6 inch).
#[inline]
pub const fn line_spacing_default() -> [u8; 2] {
    [ESC, b'2']
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Cut Paper (GS V m)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V m   |
/// | Hex     | 1D 56 m  |
///
/// - `m = 0`: full cut
/// - `m = 1`: partial cut (leaves a small hinge uncut)
#[inline]
pub const fn cut(partial: bool) -> [u8; 3] {
    [GS, b'V', partial as u8]
}

// ============================================================================
// CASH DRAWER
// ============================================================================

/// Drawer kick-out connector pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DrawerPin {
    /// Drawer kick-out connector pin 2
    #[default]
    Pin2 = 0,
    /// Drawer kick-out connector pin 5
    Pin5 = 1,
}

/// # Generate Pulse (ESC p m t1 t2)
///
/// Kicks the cash drawer connected to `pin`.
///
/// | Format  | Bytes              |
/// |---------|--------------------|
/// | ASCII   | ESC p m t1 t2      |
/// | Hex     | 1B 70 m 0A 0A      |
///
/// The on time `t1` and off time `t2` are fixed at 10 units.
#[inline]
pub const fn open_drawer(pin: DrawerPin) -> [u8; 5] {
    [ESC, b'p', pin as u8, DRAWER_PULSE, DRAWER_PULSE]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), [0x1B, 0x40]);
    }

    #[test]
    fn test_feed() {
        assert_eq!(feed(0), [0x1B, 0x64, 0x00]);
        assert_eq!(feed(3), [0x1B, 0x64, 0x03]);
        assert_eq!(feed(255), [0x1B, 0x64, 0xFF]);
    }

    #[test]
    fn test_line_spacing() {
        assert_eq!(line_spacing(30), [0x1B, 0x33, 30]);
        assert_eq!(line_spacing_default(), [0x1B, 0x32]);
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut(false), [0x1D, 0x56, 0x00]);
        assert_eq!(cut(true), [0x1D, 0x56, 0x01]);
    }

    #[test]
    fn test_open_drawer() {
        assert_eq!(open_drawer(DrawerPin::Pin2), [0x1B, 0x70, 0, 10, 10]);
        assert_eq!(open_drawer(DrawerPin::Pin5), [0x1B, 0x70, 1, 10, 10]);
    }
}
