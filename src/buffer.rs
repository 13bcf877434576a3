//! # Command Buffer
//!
//! Append-only byte accumulator behind [`Printer`](crate::Printer). Bytes
//! are kept in write order; [`CommandBuffer::flush`] hands all of them out
//! at once and leaves the buffer empty.
//!
//! ```
//! use escpos_buffer::CommandBuffer;
//!
//! let mut buf = CommandBuffer::new();
//! buf.write_byte(0x1B);
//! buf.write_bytes(b"@");
//! buf.write_u16_le(300);
//!
//! assert_eq!(buf.flush(), vec![0x1B, 0x40, 0x2C, 0x01]);
//! assert!(buf.flush().is_empty());
//! ```

use crate::encoding::Encoding;
use crate::error::EscposError;

/// Initial capacity; a receipt of text and a logo rarely exceeds this.
const INITIAL_CAPACITY: usize = 1024;

/// Growable command byte buffer
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    data: Vec<u8>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append one byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.data.push(byte);
    }

    /// Append a byte sequence verbatim.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Append `value` low byte first.
    ///
    /// Wider integers must be narrowed with [`checked_u16`] first so an
    /// out-of-range dimension fails instead of wrapping.
    #[inline]
    pub fn write_u16_le(&mut self, value: u16) {
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    /// Append `text` encoded with the encoding called `encoding`.
    ///
    /// ## Errors
    ///
    /// [`EscposError::UnsupportedEncoding`] for an unknown name. Nothing is
    /// appended in that case.
    pub fn write_encoded_text(&mut self, text: &str, encoding: &str) -> Result<(), EscposError> {
        let encoding = Encoding::for_name(encoding)?;
        encoding.encode_into(text, &mut self.data);
        Ok(())
    }

    /// Take every byte written since the last flush or clear.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::replace(&mut self.data, Vec::with_capacity(INITIAL_CAPACITY))
    }

    /// Discard pending bytes.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Narrow `value` to a `u16` wire field named `field`.
///
/// ```
/// use escpos_buffer::buffer::checked_u16;
///
/// assert_eq!(checked_u16("height", 100u32)?, 100);
/// assert!(checked_u16("height", 70_000u32).is_err());
/// # Ok::<(), escpos_buffer::EscposError>(())
/// ```
pub fn checked_u16<T>(field: &'static str, value: T) -> Result<u16, EscposError>
where
    T: TryInto<u16> + Into<u64> + Copy,
{
    value
        .try_into()
        .map_err(|_| EscposError::ValueOutOfRange {
            field,
            value: value.into(),
        })
}
