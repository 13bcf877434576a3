//! # Print Jobs
//!
//! A print job is a JSON list of printer instructions, one object per
//! [`Printer`](crate::Printer) operation, tagged by `"op"`.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use escpos_buffer::{Printer, job::Job, printer::PrinterProfile, transport::MemorySink};
//!
//! let json = r#"{
//!     "encoding": "cp437",
//!     "instructions": [
//!         {"op": "init"},
//!         {"op": "justify", "mode": "center"},
//!         {"op": "line", "value": "Año nuevo"},
//!         {"op": "barcode", "code": "12345", "type": "code39"},
//!         {"op": "cut", "partial": true}
//!     ]
//! }"#;
//!
//! let job = Job::from_json(json)?;
//! let mut printer = Printer::new(Arc::new(MemorySink::new()));
//! job.apply(&mut printer, &PrinterProfile::default())?;
//! assert!(printer.pending().starts_with(&[0x1B, 0x40, 0x1B, 0x61, 0x01]));
//! # Ok::<(), escpos_buffer::EscposError>(())
//! ```
//!
//! ## Instructions
//!
//! | `op` | Fields |
//! |------|--------|
//! | `init`, `reset_to_default` | none |
//! | `feed` | `lines` |
//! | `bold`, `inverse` | `on` |
//! | `underline` | `mode`: `no_underline`, `one_dot_thick`, `two_dots_thick` |
//! | `justify` | `mode`: `left`, `center`, `right` |
//! | `font` | `font`: `A`, `B` |
//! | `cut` | `partial` (default false) |
//! | `open_drawer` | `pin`: `pin2` (default), `pin5` |
//! | `color` | `color`: `color1`, `color2` |
//! | `code_table` | `table`: `pc437`, `pc850`, `wpc1252`, ... |
//! | `text_mode` | `mode`: `normal`, `dual_height`, `dual_width`, `dual_width_and_height` |
//! | `line_spacing` | `spacing` (omit for default) |
//! | `text`, `line` | `value`, `encoding` (defaults to the job's) |
//! | `barcode` | `code`, `type`, `height` (80), `width` (2), `font` (A), `position` (below) |
//! | `image` | `path`, `mode` (normal), `dithering` (`bayer` or `{"threshold": 0.5}`) |

mod convert;
mod schema;

pub use schema::{Instruction, Job};
