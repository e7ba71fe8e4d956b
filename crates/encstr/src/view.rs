use std::{borrow::Cow, fmt};

use bstr::BStr;

use crate::{
    encoding::{Encoding, NATIVE_ENCODING},
    error::{EncodingError, Result},
    options::{Strictness, WideWidth},
    tables::CodepointTables,
    transcode,
    wide::WideBuffer,
};

/// Borrowed bytes tagged with their encoding.
///
/// Nothing is converted until a particular representation is asked for:
/// [`native`](Self::native), [`utf8`](Self::utf8),
/// [`windows1252`](Self::windows1252) or [`as_wide`](Self::as_wide). Each of
/// those returns a fresh buffer; the borrowed bytes are never touched.
///
/// Two views compare equal when they hold the same text, whatever their
/// encodings:
///
/// ```rust
/// use encstr::EncodedTextView;
///
/// let utf8 = EncodedTextView::from_utf8("café".as_bytes());
/// let w1252 = EncodedTextView::from_windows1252(b"caf\xE9");
/// assert_eq!(utf8, w1252);
/// ```
#[derive(Clone, Copy)]
pub enum EncodedTextView<'a> {
    /// UTF-8 bytes.
    Utf8(&'a [u8]),
    /// Windows-1252 bytes.
    Windows1252(&'a [u8]),
}

impl<'a> EncodedTextView<'a> {
    /// Borrows `bytes` as text in `encoding`.
    ///
    /// [`Encoding::Native`] is resolved to [`NATIVE_ENCODING`] here.
    ///
    /// # Errors
    ///
    /// [`EncodingError::UnsupportedEncoding`] for the wide encodings.
    pub fn new(bytes: &'a [u8], encoding: Encoding) -> Result<Self> {
        match encoding.resolve() {
            Encoding::Utf8 => Ok(Self::Utf8(bytes)),
            Encoding::Windows1252 => Ok(Self::Windows1252(bytes)),
            other => Err(EncodingError::UnsupportedEncoding(other)),
        }
    }

    /// Borrows UTF-8 bytes. They are not validated.
    #[must_use]
    pub const fn from_utf8(bytes: &'a [u8]) -> Self {
        Self::Utf8(bytes)
    }

    /// Borrows Windows-1252 bytes.
    #[must_use]
    pub const fn from_windows1252(bytes: &'a [u8]) -> Self {
        Self::Windows1252(bytes)
    }

    /// Borrows bytes in the platform's native encoding.
    #[must_use]
    pub const fn from_native(bytes: &'a [u8]) -> Self {
        match NATIVE_ENCODING {
            Encoding::Windows1252 => Self::Windows1252(bytes),
            _ => Self::Utf8(bytes),
        }
    }

    /// The encoding of the borrowed bytes; never [`Encoding::Native`].
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        match self {
            Self::Utf8(_) => Encoding::Utf8,
            Self::Windows1252(_) => Encoding::Windows1252,
        }
    }

    /// The borrowed bytes, as stored.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        match *self {
            Self::Utf8(bytes) | Self::Windows1252(bytes) => bytes,
        }
    }

    /// Length in bytes of the stored encoding.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// `true` if no bytes are borrowed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// `true` if the bytes are already in the native encoding.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.encoding() == NATIVE_ENCODING
    }

    /// The text as bytes in `target`, borrowing when no conversion is
    /// needed.
    ///
    /// # Errors
    ///
    /// See [`transcode::convert_bytes`].
    pub fn to_encoding(&self, target: Encoding, strictness: Strictness) -> Result<Cow<'a, [u8]>> {
        transcode::convert_bytes(self.as_bytes(), self.encoding(), target, strictness)
    }

    /// The text in the platform's native encoding, converting lossily if
    /// needed.
    ///
    /// # Errors
    ///
    /// [`EncodingError::MalformedEncoding`] if UTF-8 bytes have to be
    /// converted and are not well formed.
    pub fn native(&self) -> Result<Vec<u8>> {
        self.to_encoding(Encoding::Native, Strictness::Lossy)
            .map(Cow::into_owned)
    }

    /// The text as UTF-8. UTF-8 bytes are copied as they are.
    #[must_use]
    pub fn utf8(&self) -> Vec<u8> {
        match *self {
            Self::Utf8(bytes) => bytes.to_vec(),
            Self::Windows1252(bytes) => transcode::windows1252_to_utf8(bytes, Strictness::Lossy),
        }
    }

    /// The text as Windows-1252, converting lossily if needed.
    ///
    /// # Errors
    ///
    /// [`EncodingError::MalformedEncoding`] if the UTF-8 bytes are not well
    /// formed.
    pub fn windows1252(&self) -> Result<Vec<u8>> {
        self.to_encoding(Encoding::Windows1252, Strictness::Lossy)
            .map(Cow::into_owned)
    }

    /// The text as wide code units.
    ///
    /// # Errors
    ///
    /// [`EncodingError::MalformedEncoding`] if the UTF-8 bytes are not valid.
    pub fn as_wide(&self, width: WideWidth) -> Result<WideBuffer> {
        Ok(match width {
            WideWidth::Utf16 => WideBuffer::Utf16(self.utf16()?),
            WideWidth::Utf32 => WideBuffer::Utf32(self.utf32()?),
        })
    }

    /// The text as the platform's wide string: UTF-16 on Windows, UTF-32
    /// elsewhere.
    ///
    /// # Errors
    ///
    /// As [`as_wide`](Self::as_wide).
    pub fn wide(&self) -> Result<WideBuffer> {
        self.as_wide(WideWidth::native())
    }

    /// The text as UTF-16.
    ///
    /// # Errors
    ///
    /// As [`as_wide`](Self::as_wide).
    pub fn utf16(&self) -> Result<Vec<u16>> {
        match *self {
            Self::Utf8(bytes) => transcode::utf8_to_utf16(bytes),
            Self::Windows1252(bytes) => Ok(transcode::windows1252_to_utf16(
                bytes,
                Strictness::Lossy,
            )),
        }
    }

    /// The text as UTF-32.
    ///
    /// # Errors
    ///
    /// As [`as_wide`](Self::as_wide).
    pub fn utf32(&self) -> Result<Vec<u32>> {
        match *self {
            Self::Utf8(bytes) => transcode::utf8_to_utf32(bytes),
            Self::Windows1252(bytes) => Ok(transcode::windows1252_to_utf32(
                bytes,
                Strictness::Lossy,
            )),
        }
    }

    /// The text as a Rust string, with U+FFFD for malformed UTF-8.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        match *self {
            Self::Utf8(bytes) => String::from_utf8_lossy(bytes),
            Self::Windows1252(bytes) => {
                let tables = CodepointTables::get();
                Cow::Owned(
                    bytes
                        .iter()
                        .map(|&b| tables.forward_char(b, Strictness::Lossy))
                        .collect(),
                )
            }
        }
    }
}

/// Encoding-oblivious comparison shared by every `PartialEq` impl in the
/// crate.
pub(crate) fn same_text(lhs: EncodedTextView<'_>, rhs: EncodedTextView<'_>) -> bool {
    if lhs.encoding() == rhs.encoding() && lhs.as_bytes() == rhs.as_bytes() {
        return true;
    }
    match (lhs.native(), rhs.native()) {
        (Ok(l), Ok(r)) => l == r,
        _ => false,
    }
}

impl<'a> From<&'a str> for EncodedTextView<'a> {
    fn from(s: &'a str) -> Self {
        Self::Utf8(s.as_bytes())
    }
}

impl PartialEq<EncodedTextView<'_>> for EncodedTextView<'_> {
    fn eq(&self, other: &EncodedTextView<'_>) -> bool {
        same_text(*self, *other)
    }
}

impl PartialEq<str> for EncodedTextView<'_> {
    fn eq(&self, other: &str) -> bool {
        same_text(*self, EncodedTextView::from(other))
    }
}

impl PartialEq<&str> for EncodedTextView<'_> {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<EncodedTextView<'_>> for &str {
    fn eq(&self, other: &EncodedTextView<'_>) -> bool {
        other == self
    }
}

impl fmt::Debug for EncodedTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Utf8(_) => "Utf8",
            Self::Windows1252(_) => "Windows1252",
        };
        f.debug_tuple(name).field(&BStr::new(self.as_bytes())).finish()
    }
}

impl fmt::Display for EncodedTextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAFE_UTF8: &[u8] = "café".as_bytes();
    const CAFE_1252: &[u8] = b"caf\xE9";

    #[test]
    fn native_resolves_at_construction() {
        let v = EncodedTextView::new(b"abc", Encoding::Native).unwrap();
        assert_eq!(v.encoding(), NATIVE_ENCODING);
        assert!(v.is_native());
        assert_eq!(EncodedTextView::from_native(b"abc").encoding(), NATIVE_ENCODING);
    }

    #[test]
    fn wide_tags_are_rejected() {
        assert_eq!(
            EncodedTextView::new(b"", Encoding::Utf16).unwrap_err(),
            EncodingError::UnsupportedEncoding(Encoding::Utf16)
        );
        assert!(EncodedTextView::new(b"", Encoding::Utf32).is_err());
    }

    #[test]
    fn native_copies_when_tag_matches() {
        let v = EncodedTextView::from_native(b"plain");
        assert_eq!(v.native().unwrap(), b"plain");
    }

    #[test]
    fn native_converts_the_other_encoding() {
        match NATIVE_ENCODING {
            Encoding::Utf8 => {
                let v = EncodedTextView::from_windows1252(CAFE_1252);
                assert_eq!(v.native().unwrap(), CAFE_UTF8);
            }
            _ => {
                let v = EncodedTextView::from_utf8(CAFE_UTF8);
                assert_eq!(v.native().unwrap(), CAFE_1252);
            }
        }
    }

    #[test]
    fn explicit_representations() {
        for v in [
            EncodedTextView::from_utf8(CAFE_UTF8),
            EncodedTextView::from_windows1252(CAFE_1252),
        ] {
            assert_eq!(v.utf8(), CAFE_UTF8);
            assert_eq!(v.windows1252().unwrap(), CAFE_1252);
            assert_eq!(
                v.utf16().unwrap(),
                "café".encode_utf16().collect::<Vec<_>>()
            );
            assert_eq!(v.utf32().unwrap(), [0x63, 0x61, 0x66, 0xE9]);
            assert_eq!(v.to_string_lossy(), "café");
        }
    }

    #[test]
    fn as_wide_honours_width() {
        let v = EncodedTextView::from_windows1252(b"\x80");
        assert_eq!(
            v.as_wide(WideWidth::Utf16).unwrap(),
            WideBuffer::Utf16(vec![0x20AC])
        );
        assert_eq!(
            v.as_wide(WideWidth::Utf32).unwrap(),
            WideBuffer::Utf32(vec![0x20AC])
        );
        assert_eq!(v.wide().unwrap().width(), WideWidth::native());
    }

    #[test]
    fn malformed_utf8_surfaces_from_conversions() {
        let v = EncodedTextView::from_utf8(&[b'a', 0xC2]);
        assert!(v.windows1252().unwrap_err().is_malformed());
        assert!(v.utf16().unwrap_err().is_malformed());
        // copying UTF-8 out does not validate
        assert_eq!(v.utf8(), [b'a', 0xC2]);
        assert_eq!(v.to_string_lossy(), "a\u{FFFD}");
    }

    #[test]
    fn equality_is_encoding_oblivious() {
        let utf8 = EncodedTextView::from_utf8(CAFE_UTF8);
        let w1252 = EncodedTextView::from_windows1252(CAFE_1252);
        assert_eq!(utf8, w1252);
        assert_eq!(w1252, utf8);
        assert_eq!(w1252, "café");
        assert_eq!("café", w1252);
        assert_ne!(utf8, EncodedTextView::from_windows1252(b"cafe"));
    }

    #[test]
    fn same_malformed_bytes_compare_equal() {
        let a = EncodedTextView::from_utf8(&[0xC2]);
        let b = EncodedTextView::from_utf8(&[0xC2]);
        assert_eq!(a, b);
    }

    #[test]
    fn debug_and_display() {
        let v = EncodedTextView::from_windows1252(CAFE_1252);
        assert!(format!("{v:?}").starts_with(r#"Windows1252("caf"#));
        assert_eq!(v.to_string(), "café");
        let v = EncodedTextView::from("naïve");
        assert_eq!(format!("{v:?}"), r#"Utf8("naïve")"#);
    }
}
