//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders. Each function returns the exact bytes of one
//! command; [`Printer`](crate::Printer) appends them to its buffer.
//!
//! ## Module Structure
//!
//! - [`commands`]: Init, feed, line spacing, cut, cash drawer
//! - [`text`]: Text attributes, print mode, code table
//! - [`barcode`]: 1D barcodes (`GS k`, function B)
//! - [`graphics`]: Raster bit images (`GS v 0`)
//!
//! ## Usage Example
//!
//! ```
//! use escpos_buffer::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::bold(true));
//! data.extend(b"TOTAL\n");
//! data.extend(text::bold(false));
//! data.extend(commands::cut(false));
//!
//! assert_eq!(data.len(), 2 + 3 + 6 + 3 + 3);
//! ```
//!
//! ## Protocol Reference
//!
//! Opcodes follow the Epson ESC/POS command reference; Star, Bixolon,
//! Xprinter and most other thermal printers accept the same subset.

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod text;
