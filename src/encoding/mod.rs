//! # Named Text Encodings
//!
//! Converts Unicode strings to the byte representation a printer expects for
//! its selected code table. Text written without an encoding goes out as
//! UTF-8.
//!
//! | Name (aliases) | Code table to select |
//! |----------------|----------------------|
//! | `utf8` | (printer dependent) |
//! | `ascii` | any |
//! | `latin1` (`iso88591`) | none standard, mostly WPC1252 |
//! | `cp437` (`ibm437`, `pc437`) | [`CodeTable::Pc437`](crate::protocol::text::CodeTable::Pc437) |
//! | `cp1252` (`windows1252`, `wpc1252`) | [`CodeTable::Wpc1252`](crate::protocol::text::CodeTable::Wpc1252) |
//!
//! Names are matched case-insensitively and ignore `-` and `_`, so
//! `"ISO-8859-1"` and `"windows_1252"` both resolve.
//!
//! Characters a single-byte encoding cannot represent are replaced with `?`
//! and logged at warn level. Unknown names fail with
//! [`EscposError::UnsupportedEncoding`].

mod tables;

use log::warn;

use crate::error::EscposError;

/// A resolved text encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Ascii,
    Latin1,
    Cp437,
    Cp1252,
}

impl Encoding {
    /// Resolve an encoding by name.
    ///
    /// ```
    /// use escpos_buffer::encoding::Encoding;
    ///
    /// assert_eq!(Encoding::for_name("IBM437")?, Encoding::Cp437);
    /// assert!(Encoding::for_name("klingon").is_err());
    /// # Ok::<(), escpos_buffer::EscposError>(())
    /// ```
    pub fn for_name(name: &str) -> Result<Self, EscposError> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "utf8" => Ok(Self::Utf8),
            "ascii" | "usascii" => Ok(Self::Ascii),
            "latin1" | "iso88591" => Ok(Self::Latin1),
            "cp437" | "ibm437" | "pc437" => Ok(Self::Cp437),
            "cp1252" | "windows1252" | "wpc1252" => Ok(Self::Cp1252),
            _ => Err(EscposError::UnsupportedEncoding(name.to_string())),
        }
    }

    /// Encode `text`, appending the bytes to `out`.
    pub fn encode_into(self, text: &str, out: &mut Vec<u8>) {
        match self {
            Self::Utf8 => out.extend_from_slice(text.as_bytes()),
            Self::Ascii => encode_single_byte(text, out, self, |_| None),
            Self::Latin1 => encode_single_byte(text, out, self, |ch| {
                u8::try_from(ch as u32).ok().filter(|b| *b >= 0x80)
            }),
            Self::Cp437 => encode_single_byte(text, out, self, |ch| upper_half(&tables::CP437, ch)),
            Self::Cp1252 => {
                encode_single_byte(text, out, self, |ch| upper_half(&tables::CP1252, ch))
            }
        }
    }

    /// Encode `text` into a new byte vector.
    pub fn encode(self, text: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len());
        self.encode_into(text, &mut out);
        out
    }
}

/// Encode `text` with the encoding called `name`.
///
/// ```
/// use escpos_buffer::encoding;
///
/// assert_eq!(encoding::encode("Año", "cp437")?, vec![0x41, 0xA4, 0x6F]);
/// # Ok::<(), escpos_buffer::EscposError>(())
/// ```
pub fn encode(text: &str, name: &str) -> Result<Vec<u8>, EscposError> {
    Ok(Encoding::for_name(name)?.encode(text))
}

/// ASCII passes through; everything else goes through `lookup`.
fn encode_single_byte(
    text: &str,
    out: &mut Vec<u8>,
    encoding: Encoding,
    lookup: impl Fn(char) -> Option<u8>,
) {
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch as u8);
        } else if let Some(byte) = lookup(ch) {
            out.push(byte);
        } else {
            warn!(
                "{:?}: unmapped character '{}' (U+{:04X}), replacing with '?'",
                encoding, ch, ch as u32
            );
            out.push(b'?');
        }
    }
}

fn upper_half(table: &[char; 128], ch: char) -> Option<u8> {
    if ch == tables::UNDEFINED {
        return None;
    }
    table
        .iter()
        .position(|c| *c == ch)
        .map(|i| 0x80 + i as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_normalization() {
        assert_eq!(Encoding::for_name("UTF-8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::for_name("ISO-8859-1").unwrap(), Encoding::Latin1);
        assert_eq!(Encoding::for_name("windows_1252").unwrap(), Encoding::Cp1252);
        assert_eq!(Encoding::for_name("PC437").unwrap(), Encoding::Cp437);
    }

    #[test]
    fn test_unknown_name() {
        let err = Encoding::for_name("ebcdic").unwrap_err();
        assert!(matches!(err, EscposError::UnsupportedEncoding(ref n) if n == "ebcdic"));
    }

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(encode("é", "utf8").unwrap(), vec![0xC3, 0xA9]);
    }

    #[test]
    fn test_ascii_replaces_non_ascii() {
        assert_eq!(encode("né", "ascii").unwrap(), vec![b'n', b'?']);
    }

    #[test]
    fn test_latin1() {
        assert_eq!(encode("Café", "latin1").unwrap(), vec![0x43, 0x61, 0x66, 0xE9]);
        assert_eq!(encode("€", "latin1").unwrap(), vec![b'?']);
    }

    #[test]
    fn test_cp437() {
        assert_eq!(encode("ñÑ¿", "cp437").unwrap(), vec![0xA4, 0xA5, 0xA8]);
        assert_eq!(encode("┌──┐", "cp437").unwrap(), vec![0xDA, 0xC4, 0xC4, 0xBF]);
        assert_eq!(encode("°±²", "cp437").unwrap(), vec![0xF8, 0xF1, 0xFD]);
        assert_eq!(encode("\u{00A0}", "cp437").unwrap(), vec![0xFF]);
    }

    #[test]
    fn test_cp1252() {
        assert_eq!(encode("€", "cp1252").unwrap(), vec![0x80]);
        assert_eq!(encode("é", "cp1252").unwrap(), vec![0xE9]);
        assert_eq!(encode("\u{FFFD}", "cp1252").unwrap(), vec![b'?']);
    }

    #[test]
    fn test_unmapped_becomes_question_mark() {
        assert_eq!(encode("★", "cp437").unwrap(), vec![b'?']);
    }
}
