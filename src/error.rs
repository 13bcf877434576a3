//! # Error Types
//!
//! This module defines the error type shared by the buffer, the encoder,
//! the collaborators and the transports.

use std::io;

use thiserror::Error;

/// Main error type for escpos-buffer operations
#[derive(Debug, Error)]
pub enum EscposError {
    /// Text encoding requested with a name no encoder recognizes
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The image collaborator could not produce a raster payload
    #[error("Raster conversion failed: {0}")]
    RasterConversion(String),

    /// A numeric parameter does not fit its wire field
    #[error("Value out of range for {field}: {value}")]
    ValueOutOfRange { field: &'static str, value: u64 },

    /// Barcode data longer than the one-byte length prefix allows
    #[error("Barcode data is {0} bytes, maximum is 255")]
    BarcodeTooLong(usize),

    /// Sink failed to open
    #[error("Open failed: {0}")]
    Open(#[source] io::Error),

    /// Sink failed to write a flushed command stream
    #[error("Write failed: {0}")]
    Write(#[source] io::Error),

    /// Sink failed to close
    #[error("Close failed: {0}")]
    Close(#[source] io::Error),

    /// Unknown profile, target or other configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Malformed print job
    #[error("Invalid job: {0}")]
    Job(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
