//! # escpos-buffer - ESC/POS Command Encoder
//!
//! escpos-buffer turns printer instructions (bold, cut, barcode, raster
//! image, ...) into the byte-exact ESC/POS command stream thermal receipt
//! printers understand, and hands that stream to a transport. It provides:
//!
//! - **Command buffer**: append-only byte accumulator with drain-on-flush
//! - **Printer**: chaining command encoder, one method per capability
//! - **Collaborators**: named text encodings, image to raster conversion
//! - **Transports**: TCP (port 9100), character devices, in-memory
//! - **Print jobs**: JSON instruction lists replayed onto a printer
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use escpos_buffer::{
//!     Printer,
//!     protocol::barcode::{BarcodeType, Position},
//!     protocol::text::{Font, Justification},
//!     transport::NetworkSink,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), escpos_buffer::EscposError> {
//! let mut printer = Printer::new(Arc::new(NetworkSink::new("192.168.1.50")));
//! printer.open().await?;
//!
//! printer
//!     .init()
//!     .set_justification(Justification::Center)
//!     .set_bold(true)
//!     .write_line("RECEIPT", None)?
//!     .reset_to_default()
//!     .barcode("12345", BarcodeType::Code39, 80, 2, Font::A, Position::Below)?
//!     .feed(3)
//!     .cut(true);
//!
//! printer.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`buffer`] | Command byte buffer |
//! | [`printer`] | Command encoder and printer profiles |
//! | [`protocol`] | ESC/POS command byte builders |
//! | [`encoding`] | Named text encodings (cp437, cp1252, ...) |
//! | [`raster`] | Image to raster payload conversion |
//! | [`transport`] | Sinks the command stream is written to |
//! | [`job`] | JSON print jobs |
//! | [`error`] | Error types |

pub mod buffer;
pub mod encoding;
pub mod error;
pub mod job;
pub mod printer;
pub mod protocol;
pub mod raster;
pub mod transport;

// Re-exports for convenience
pub use buffer::CommandBuffer;
pub use error::EscposError;
pub use printer::Printer;
pub use transport::Sink;
