//! # Printer Transport Layer
//!
//! A [`Sink`] is where flushed command bytes go. The encoder only ever calls
//! `open`, `write` and `close`; connection management and retries are the
//! sink's business.
//!
//! ## Available Transports
//!
//! - [`MemorySink`]: records everything, for tests and dry runs
//! - [`NetworkSink`]: raw TCP, the usual port 9100 "JetDirect" socket
//! - [`DeviceSink`]: character devices (`/dev/usb/lp0`, `/dev/rfcomm0`, serial)
//!
//! [`Target`] picks one of the last two from a string.
//!
//! Sinks are shared with the encoder as `Arc<S>`, so every method takes
//! `&self` and implementations lock internally.

pub mod device;
pub mod memory;
pub mod network;
pub mod target;

use std::io;

use async_trait::async_trait;

pub use device::DeviceSink;
pub use memory::{MemorySink, SinkEvent};
pub use network::NetworkSink;
pub use target::Target;

/// Transport capability consumed by [`Printer`](crate::Printer)
#[async_trait]
pub trait Sink: Send + Sync {
    /// Establish the connection.
    async fn open(&self) -> io::Result<()>;

    /// Deliver one flushed command stream.
    async fn write(&self, data: Vec<u8>) -> io::Result<()>;

    /// Release the connection.
    async fn close(&self) -> io::Result<()>;
}

/// Error for writes attempted before `open` or after `close`.
pub(crate) fn not_connected() -> io::Error {
    io::Error::new(io::ErrorKind::NotConnected, "sink is not open")
}
