//! # Printer
//!
//! [`Printer`] is the command encoder: one method per printer capability,
//! each appending its ESC/POS encoding to an internal [`CommandBuffer`] and
//! returning the printer for chaining. Nothing reaches the sink until
//! [`Printer::flush`] or [`Printer::close`].
//!
//! ```
//! use std::sync::Arc;
//! use escpos_buffer::{Printer, transport::MemorySink};
//! use escpos_buffer::protocol::text::Justification;
//!
//! let mut printer = Printer::new(Arc::new(MemorySink::new()));
//! printer
//!     .init()
//!     .set_justification(Justification::Center)
//!     .set_bold(true)
//!     .write_line("RECEIPT", None)?
//!     .reset_to_default()
//!     .feed(3)
//!     .cut(true);
//!
//! assert_eq!(&printer.pending()[..2], &[0x1B, 0x40]);
//! # Ok::<(), escpos_buffer::EscposError>(())
//! ```
//!
//! The printer does not track printer-side state. Setting bold twice sends
//! `ESC E 1` twice.
//!
//! ## Flushing
//!
//! `flush` drains the buffer when it is called and returns a future that
//! owns the drained bytes. The future does not borrow the printer, so more
//! commands can be queued while a write is in flight; they go out with the
//! next flush.

pub mod config;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use log::{debug, warn};

use crate::buffer::CommandBuffer;
use crate::error::EscposError;
use crate::protocol::barcode::{self, BarcodeType, Position};
use crate::protocol::commands::{self, DrawerPin, LF};
use crate::protocol::graphics::{self, RasterMode};
use crate::protocol::text::{self, CodeTable, Color, Font, Justification, TextMode, Underline};
use crate::raster::ToRaster;
use crate::transport::Sink;

pub use config::PrinterProfile;

/// ESC/POS command encoder bound to a sink
pub struct Printer<S: Sink + ?Sized> {
    buffer: CommandBuffer,
    sink: Arc<S>,
}

impl<S: Sink + ?Sized> fmt::Debug for Printer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("pending", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

impl<S: Sink + ?Sized> Printer<S> {
    pub fn new(sink: Arc<S>) -> Self {
        Self {
            buffer: CommandBuffer::new(),
            sink,
        }
    }

    /// Bytes queued since the last flush or clear.
    pub fn pending(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    // ========================================================================
    // SINK LIFECYCLE
    // ========================================================================

    pub async fn open(&mut self) -> Result<&mut Self, EscposError> {
        self.sink.open().await.map_err(EscposError::Open)?;
        debug!("sink opened");
        Ok(self)
    }

    /// Drain the buffer and write the drained bytes to the sink.
    ///
    /// The buffer is emptied before this returns; awaiting the future
    /// performs the write.
    pub fn flush(&mut self) -> impl Future<Output = Result<(), EscposError>> + Send + use<S> {
        let data = self.buffer.flush();
        let sink = Arc::clone(&self.sink);
        async move {
            let len = data.len();
            sink.write(data).await.map_err(EscposError::Write)?;
            debug!("flushed {} bytes", len);
            Ok(())
        }
    }

    /// Flush pending commands, then close the sink.
    ///
    /// The sink is closed even when the flush fails; the flush error is
    /// returned in that case.
    pub async fn close(mut self) -> Result<(), EscposError> {
        let flushed = self.flush().await;
        let closed = self.sink.close().await;

        match (flushed, closed) {
            (Err(e), Err(close_err)) => {
                warn!("close after failed flush also failed: {}", close_err);
                Err(e)
            }
            (Err(e), Ok(())) => Err(e),
            (Ok(()), Err(close_err)) => Err(EscposError::Close(close_err)),
            (Ok(()), Ok(())) => {
                debug!("sink closed");
                Ok(())
            }
        }
    }

    /// Drop pending commands without sending them.
    pub fn clear_buffer(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    // ========================================================================
    // PRINTER CONTROL
    // ========================================================================

    /// `ESC @`
    pub fn init(&mut self) -> &mut Self {
        self.buffer.write_bytes(&commands::init());
        self
    }

    /// `ESC d n`: print and feed `lines` lines.
    pub fn feed(&mut self, lines: u8) -> &mut Self {
        self.buffer.write_bytes(&commands::feed(lines));
        self
    }

    /// `GS V m`
    pub fn cut(&mut self, partial: bool) -> &mut Self {
        self.buffer.write_bytes(&commands::cut(partial));
        self
    }

    /// `ESC p m 10 10`
    pub fn open_drawer(&mut self, pin: DrawerPin) -> &mut Self {
        self.buffer.write_bytes(&commands::open_drawer(pin));
        self
    }

    /// `ESC 3 n`, or `ESC 2` (default spacing) for `None`.
    pub fn set_line_spacing(&mut self, spacing: Option<u8>) -> &mut Self {
        match spacing {
            Some(n) => self.buffer.write_bytes(&commands::line_spacing(n)),
            None => self.buffer.write_bytes(&commands::line_spacing_default()),
        }
        self
    }

    // ========================================================================
    // TEXT ATTRIBUTES
    // ========================================================================

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.buffer.write_bytes(&text::bold(bold));
        self
    }

    pub fn set_inverse(&mut self, inverse: bool) -> &mut Self {
        self.buffer.write_bytes(&text::inverse(inverse));
        self
    }

    pub fn set_underline(&mut self, mode: Underline) -> &mut Self {
        self.buffer.write_bytes(&text::underline(mode));
        self
    }

    pub fn set_justification(&mut self, mode: Justification) -> &mut Self {
        self.buffer.write_bytes(&text::justification(mode));
        self
    }

    pub fn set_font(&mut self, font: Font) -> &mut Self {
        self.buffer.write_bytes(&text::font(font));
        self
    }

    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.buffer.write_bytes(&text::color(color));
        self
    }

    pub fn set_code_table(&mut self, table: CodeTable) -> &mut Self {
        self.buffer.write_bytes(&text::code_table(table));
        self
    }

    pub fn set_text_mode(&mut self, mode: TextMode) -> &mut Self {
        self.buffer.write_bytes(&text::text_mode(mode));
        self
    }

    /// Return every text attribute to its default.
    ///
    /// Always emits six commands in this order: inverse off, bold off,
    /// no underline, left justification, normal text mode, font A.
    pub fn reset_to_default(&mut self) -> &mut Self {
        self.set_inverse(false)
            .set_bold(false)
            .set_underline(Underline::NoUnderline)
            .set_justification(Justification::Left)
            .set_text_mode(TextMode::Normal)
            .set_font(Font::A)
    }

    // ========================================================================
    // CONTENT
    // ========================================================================

    /// Queue `value`, encoded with `encoding` or as UTF-8 when `None`.
    pub fn text(&mut self, value: &str, encoding: Option<&str>) -> Result<&mut Self, EscposError> {
        match encoding {
            Some(name) => self.buffer.write_encoded_text(value, name)?,
            None => self.buffer.write_bytes(value.as_bytes()),
        }
        Ok(self)
    }

    /// Queue `value` followed by a line feed.
    pub fn write_line(
        &mut self,
        value: &str,
        encoding: Option<&str>,
    ) -> Result<&mut Self, EscposError> {
        self.text(value, encoding)?;
        self.buffer.write_byte(LF);
        Ok(self)
    }

    /// Print a 1D barcode.
    ///
    /// Emits HRI position, HRI font, height and module width, then
    /// `GS k m n d1...dn` with the bytes of `code`.
    ///
    /// ## Errors
    ///
    /// [`EscposError::BarcodeTooLong`] when `code` is over 255 bytes.
    /// Nothing is queued in that case.
    pub fn barcode(
        &mut self,
        code: &str,
        barcode_type: BarcodeType,
        height: u8,
        width: u8,
        font: Font,
        pos: Position,
    ) -> Result<&mut Self, EscposError> {
        let print = barcode::print(barcode_type, code.as_bytes())?;

        self.buffer.write_bytes(&barcode::hri_position(pos));
        self.buffer.write_bytes(&barcode::hri_font(font));
        self.buffer.write_bytes(&barcode::height(height));
        self.buffer.write_bytes(&barcode::width(width));
        self.buffer.write_bytes(&print);
        Ok(self)
    }

    /// Print a raster image with `GS v 0`.
    ///
    /// ## Errors
    ///
    /// Whatever `image` fails with, typically
    /// [`EscposError::RasterConversion`]. Nothing is queued in that case.
    pub fn raster<R: ToRaster + ?Sized>(
        &mut self,
        image: &R,
        mode: RasterMode,
    ) -> Result<&mut Self, EscposError> {
        let payload = image.to_raster()?;

        self.buffer.write_bytes(&graphics::raster_header(mode));
        self.buffer.write_u16_le(payload.width);
        self.buffer.write_u16_le(payload.height);
        self.buffer.write_bytes(&payload.bitmap);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterPayload;
    use crate::transport::MemorySink;

    fn printer() -> Printer<MemorySink> {
        Printer::new(Arc::new(MemorySink::new()))
    }

    struct Unconvertible;

    impl ToRaster for Unconvertible {
        fn to_raster(&self) -> Result<RasterPayload, EscposError> {
            Err(EscposError::RasterConversion("corrupt image".into()))
        }
    }

    fn bytes(op: impl FnOnce(&mut Printer<MemorySink>) -> &mut Printer<MemorySink>) -> Vec<u8> {
        let mut p = printer();
        op(&mut p);
        p.pending().to_vec()
    }

    #[test]
    fn test_debug_shows_pending_length() {
        let mut p = printer();
        p.init();
        assert_eq!(format!("{:?}", p), "Printer { pending: 2, .. }");
    }

    #[test]
    fn test_command_table() {
        assert_eq!(bytes(|p| p.init()), vec![0x1B, b'@']);
        assert_eq!(bytes(|p| p.feed(4)), vec![0x1B, b'd', 4]);
        assert_eq!(bytes(|p| p.set_bold(true)), vec![0x1B, b'E', 1]);
        assert_eq!(bytes(|p| p.set_bold(false)), vec![0x1B, b'E', 0]);
        assert_eq!(bytes(|p| p.set_inverse(true)), vec![0x1D, b'B', 1]);
        assert_eq!(
            bytes(|p| p.set_underline(Underline::OneDotThick)),
            vec![0x1B, b'-', 1]
        );
        assert_eq!(
            bytes(|p| p.set_justification(Justification::Right)),
            vec![0x1B, b'a', 2]
        );
        assert_eq!(bytes(|p| p.set_font(Font::B)), vec![0x1B, b'M', 1]);
        assert_eq!(bytes(|p| p.cut(false)), vec![0x1D, b'V', 0]);
        assert_eq!(bytes(|p| p.cut(true)), vec![0x1D, b'V', 1]);
        assert_eq!(
            bytes(|p| p.open_drawer(DrawerPin::Pin5)),
            vec![0x1B, b'p', 1, 10, 10]
        );
        assert_eq!(bytes(|p| p.set_color(Color::Color2)), vec![0x1B, b'r', 1]);
        assert_eq!(
            bytes(|p| p.set_code_table(CodeTable::Pc850)),
            vec![0x1B, b't', 2]
        );
        assert_eq!(
            bytes(|p| p.set_text_mode(TextMode::DualWidth)),
            vec![0x1B, b'!', 0x20]
        );
        assert_eq!(bytes(|p| p.set_line_spacing(Some(24))), vec![0x1B, b'3', 24]);
        assert_eq!(bytes(|p| p.set_line_spacing(None)), vec![0x1B, b'2']);
    }

    #[test]
    fn test_chaining_concatenates_in_order() {
        let mut p = printer();
        p.init().set_bold(true).feed(1).cut(true);
        assert_eq!(
            p.pending(),
            &[0x1B, b'@', 0x1B, b'E', 1, 0x1B, b'd', 1, 0x1D, b'V', 1]
        );
    }

    #[test]
    fn test_repeated_set_is_not_deduplicated() {
        let mut p = printer();
        p.set_bold(true).set_bold(true);
        assert_eq!(p.pending(), &[0x1B, b'E', 1, 0x1B, b'E', 1]);
    }

    #[test]
    fn test_reset_to_default() {
        let mut p = printer();
        p.set_bold(true).clear_buffer().reset_to_default();
        assert_eq!(
            p.pending(),
            &[
                0x1D, b'B', 0, //
                0x1B, b'E', 0, //
                0x1B, b'-', 0, //
                0x1B, b'a', 0, //
                0x1B, b'!', 0, //
                0x1B, b'M', 0,
            ]
        );
    }

    #[test]
    fn test_write_line() {
        let mut p = printer();
        p.write_line("Hi", None).unwrap();
        assert_eq!(p.pending(), b"Hi\n");
    }

    #[test]
    fn test_write_line_encoded() {
        let mut p = printer();
        p.write_line("Año", Some("cp437")).unwrap();
        assert_eq!(p.pending(), &[b'A', 0xA4, b'o', LF]);
    }

    #[test]
    fn test_text_defaults_to_utf8() {
        let mut p = printer();
        p.text("é", None).unwrap();
        assert_eq!(p.pending(), &[0xC3, 0xA9]);
    }

    #[test]
    fn test_unsupported_encoding() {
        let mut p = printer();
        let err = p.write_line("x", Some("martian")).unwrap_err();
        assert!(matches!(err, EscposError::UnsupportedEncoding(_)));
        assert!(p.pending().is_empty());
    }

    #[test]
    fn test_barcode() {
        let mut p = printer();
        p.barcode("12345", BarcodeType::Code39, 80, 2, Font::A, Position::Below)
            .unwrap();
        assert_eq!(
            p.pending(),
            &[
                0x1D, b'H', 2, //
                0x1D, b'f', 0, //
                0x1D, b'h', 80, //
                0x1D, b'w', 2, //
                0x1D, b'k', 69, 5, b'1', b'2', b'3', b'4', b'5',
            ]
        );
    }

    #[test]
    fn test_barcode_too_long_writes_nothing() {
        let mut p = printer();
        let code = "9".repeat(256);
        let err = p
            .barcode(&code, BarcodeType::Code128, 80, 2, Font::A, Position::Below)
            .unwrap_err();
        assert!(matches!(err, EscposError::BarcodeTooLong(256)));
        assert!(p.pending().is_empty());
    }

    #[test]
    fn test_raster() {
        let payload = RasterPayload::new(384, 100, vec![0x55; 4800]).unwrap();
        let mut p = printer();
        p.raster(&payload, RasterMode::Normal).unwrap();

        let bytes = p.pending();
        assert_eq!(&bytes[..8], &[0x1D, 0x76, 0x30, 0x00, 0x80, 0x01, 0x64, 0x00]);
        assert_eq!(bytes.len(), 8 + 4800);
        assert!(bytes[8..].iter().all(|b| *b == 0x55));
    }

    #[test]
    fn test_raster_failure_leaves_buffer() {
        let mut p = printer();
        p.init();
        let err = p.raster(&Unconvertible, RasterMode::Normal).unwrap_err();
        assert!(matches!(err, EscposError::RasterConversion(_)));
        assert_eq!(p.pending(), &[0x1B, b'@']);
    }

    #[test]
    fn test_clear_buffer() {
        let mut p = printer();
        p.init().feed(2).clear_buffer();
        assert!(p.pending().is_empty());
    }
}
