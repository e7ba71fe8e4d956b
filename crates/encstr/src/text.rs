use std::{borrow::Cow, fmt};

use bstr::BStr;

use crate::{
    encoding::{Encoding, NATIVE_ENCODING},
    error::{EncodingError, Result},
    options::{Strictness, WideWidth},
    transcode,
    view::{EncodedTextView, same_text},
    wide::WideBuffer,
};

/// Owned bytes tagged with their encoding.
///
/// The bytes are kept exactly as given; conversions go through
/// [`view`](Self::view) and produce new buffers. Replacing the content
/// ([`assign`](Self::assign), [`reset`](Self::reset)) swaps the whole buffer
/// and its tag.
///
/// Wide input ([`from_utf16`](Self::from_utf16),
/// [`from_utf32`](Self::from_utf32)) is converted to UTF-8 for storage.
///
/// ```rust
/// use encstr::{EncodedText, Encoding};
///
/// let a = EncodedText::from_windows1252(b"\x80 100".to_vec());
/// let b = EncodedText::from("€ 100");
/// assert_eq!(a, b);
/// assert_eq!(a.utf8(), "€ 100".as_bytes());
/// assert_eq!(b.windows1252().unwrap(), b"\x80 100");
/// assert_eq!(a.encoding(), Encoding::Windows1252);
/// ```
#[derive(Clone)]
pub struct EncodedText {
    bytes: Vec<u8>,
    // never `Native` or wide
    encoding: Encoding,
}

impl EncodedText {
    /// Takes `bytes` as text in `encoding`.
    ///
    /// # Errors
    ///
    /// [`EncodingError::UnsupportedEncoding`] for the wide encodings; use
    /// [`from_utf16`](Self::from_utf16) or [`from_utf32`](Self::from_utf32).
    pub fn new(bytes: impl Into<Vec<u8>>, encoding: Encoding) -> Result<Self> {
        match encoding.resolve() {
            encoding @ (Encoding::Utf8 | Encoding::Windows1252) => Ok(Self {
                bytes: bytes.into(),
                encoding,
            }),
            other => Err(EncodingError::UnsupportedEncoding(other)),
        }
    }

    /// Takes UTF-8 bytes. They are not validated.
    pub fn from_utf8(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            encoding: Encoding::Utf8,
        }
    }

    /// Takes Windows-1252 bytes.
    pub fn from_windows1252(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            encoding: Encoding::Windows1252,
        }
    }

    /// Takes bytes in the platform's native encoding.
    pub fn from_native(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            encoding: NATIVE_ENCODING,
        }
    }

    /// Converts UTF-16 to UTF-8 and stores that.
    ///
    /// # Errors
    ///
    /// [`EncodingError::MalformedEncoding`] for unpaired surrogates.
    pub fn from_utf16(units: &[u16]) -> Result<Self> {
        transcode::utf16_to_utf8(units).map(Self::from_utf8)
    }

    /// Converts UTF-32 to UTF-8 and stores that.
    ///
    /// # Errors
    ///
    /// [`EncodingError::MalformedEncoding`] for units that are not Unicode
    /// scalar values.
    pub fn from_utf32(units: &[u32]) -> Result<Self> {
        transcode::utf32_to_utf8(units).map(Self::from_utf8)
    }

    /// Converts wide text to UTF-8 and stores that.
    ///
    /// # Errors
    ///
    /// As [`WideBuffer::to_utf8`].
    pub fn from_wide(wide: &WideBuffer) -> Result<Self> {
        wide.to_utf8().map(Self::from_utf8)
    }

    /// A view over the stored bytes.
    #[must_use]
    pub fn view(&self) -> EncodedTextView<'_> {
        match self.encoding {
            Encoding::Windows1252 => EncodedTextView::Windows1252(&self.bytes),
            _ => EncodedTextView::Utf8(&self.bytes),
        }
    }

    /// The encoding of the stored bytes; never [`Encoding::Native`].
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The stored bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Gives up the stored bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Length in bytes of the stored encoding.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if no bytes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Replaces the content with `bytes` in `encoding`.
    ///
    /// # Errors
    ///
    /// [`EncodingError::UnsupportedEncoding`] for the wide encodings; the
    /// content is left as it was.
    pub fn assign(&mut self, bytes: impl Into<Vec<u8>>, encoding: Encoding) -> Result<()> {
        *self = Self::new(bytes, encoding)?;
        Ok(())
    }

    /// Replaces the content with a copy of `view`.
    pub fn assign_view(&mut self, view: EncodedTextView<'_>) {
        *self = Self::from(view);
    }

    /// Empties the text, keeping its encoding.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Empties the text and re-tags it with the native encoding.
    pub fn reset(&mut self) {
        self.bytes = Vec::new();
        self.encoding = NATIVE_ENCODING;
    }

    /// The same text stored in `target`.
    ///
    /// # Errors
    ///
    /// As [`transcode::convert_bytes`]; under [`Strictness::Strict`] that
    /// includes characters `target` cannot hold.
    pub fn transcode_to(&self, target: Encoding, strictness: Strictness) -> Result<Self> {
        let bytes = self.view().to_encoding(target, strictness)?.into_owned();
        Self::new(bytes, target)
    }

    /// See [`EncodedTextView::native`].
    ///
    /// # Errors
    ///
    /// As [`EncodedTextView::native`].
    pub fn native(&self) -> Result<Vec<u8>> {
        self.view().native()
    }

    /// See [`EncodedTextView::utf8`].
    #[must_use]
    pub fn utf8(&self) -> Vec<u8> {
        self.view().utf8()
    }

    /// See [`EncodedTextView::windows1252`].
    ///
    /// # Errors
    ///
    /// As [`EncodedTextView::windows1252`].
    pub fn windows1252(&self) -> Result<Vec<u8>> {
        self.view().windows1252()
    }

    /// See [`EncodedTextView::as_wide`].
    ///
    /// # Errors
    ///
    /// As [`EncodedTextView::as_wide`].
    pub fn as_wide(&self, width: WideWidth) -> Result<WideBuffer> {
        self.view().as_wide(width)
    }

    /// See [`EncodedTextView::wide`].
    ///
    /// # Errors
    ///
    /// As [`EncodedTextView::wide`].
    pub fn wide(&self) -> Result<WideBuffer> {
        self.view().wide()
    }

    /// See [`EncodedTextView::utf16`].
    ///
    /// # Errors
    ///
    /// As [`EncodedTextView::utf16`].
    pub fn utf16(&self) -> Result<Vec<u16>> {
        self.view().utf16()
    }

    /// See [`EncodedTextView::utf32`].
    ///
    /// # Errors
    ///
    /// As [`EncodedTextView::utf32`].
    pub fn utf32(&self) -> Result<Vec<u32>> {
        self.view().utf32()
    }

    /// See [`EncodedTextView::to_string_lossy`].
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.view().to_string_lossy()
    }
}

impl Default for EncodedText {
    fn default() -> Self {
        Self::from_native(Vec::new())
    }
}

impl From<EncodedTextView<'_>> for EncodedText {
    fn from(view: EncodedTextView<'_>) -> Self {
        Self {
            bytes: view.as_bytes().to_vec(),
            encoding: view.encoding(),
        }
    }
}

impl From<&str> for EncodedText {
    fn from(s: &str) -> Self {
        Self::from_utf8(s)
    }
}

impl From<String> for EncodedText {
    fn from(s: String) -> Self {
        Self::from_utf8(s)
    }
}

impl<'a> From<&'a EncodedText> for EncodedTextView<'a> {
    fn from(text: &'a EncodedText) -> Self {
        text.view()
    }
}

impl PartialEq for EncodedText {
    fn eq(&self, other: &Self) -> bool {
        same_text(self.view(), other.view())
    }
}

impl PartialEq<EncodedTextView<'_>> for EncodedText {
    fn eq(&self, other: &EncodedTextView<'_>) -> bool {
        same_text(self.view(), *other)
    }
}

impl PartialEq<EncodedText> for EncodedTextView<'_> {
    fn eq(&self, other: &EncodedText) -> bool {
        same_text(*self, other.view())
    }
}

impl PartialEq<str> for EncodedText {
    fn eq(&self, other: &str) -> bool {
        self.view() == *other
    }
}

impl PartialEq<&str> for EncodedText {
    fn eq(&self, other: &&str) -> bool {
        self.view() == **other
    }
}

impl fmt::Debug for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedText")
            .field("encoding", &self.encoding)
            .field("bytes", &BStr::new(&self.bytes))
            .finish()
    }
}

impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::Error as _};

    use super::EncodedText;
    use crate::transcode;

    /// Serialized as a UTF-8 string whatever the stored encoding.
    impl Serialize for EncodedText {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let utf8 = self.utf8();
            let s = transcode::validate_utf8(&utf8).map_err(S::Error::custom)?;
            serializer.serialize_str(s)
        }
    }

    /// Deserialized from a string, stored as UTF-8.
    impl<'de> Deserialize<'de> for EncodedText {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            String::deserialize(deserializer).map(EncodedText::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_bytes_verbatim() {
        let t = EncodedText::new(b"caf\xE9".to_vec(), Encoding::Windows1252).unwrap();
        assert_eq!(t.as_bytes(), b"caf\xE9");
        assert_eq!(t.encoding(), Encoding::Windows1252);
        assert_eq!(t.len(), 4);
        assert_eq!(t.view().as_bytes().as_ptr(), t.as_bytes().as_ptr());
    }

    #[test]
    fn native_tag_is_resolved() {
        let t = EncodedText::new("x", Encoding::Native).unwrap();
        assert_eq!(t.encoding(), NATIVE_ENCODING);
        assert_eq!(EncodedText::default().encoding(), NATIVE_ENCODING);
        assert!(EncodedText::default().is_empty());
    }

    #[test]
    fn wide_input_is_stored_as_utf8() {
        let utf16: Vec<u16> = "gªrçon".encode_utf16().collect();
        let t = EncodedText::from_utf16(&utf16).unwrap();
        assert_eq!(t.encoding(), Encoding::Utf8);
        assert_eq!(t.as_bytes(), "gªrçon".as_bytes());

        let t = EncodedText::from_utf32(&[0x67, 0xAA, 0x72, 0xE7, 0x6F, 0x6E]).unwrap();
        assert_eq!(t, "gªrçon");

        let t = EncodedText::from_wide(&WideBuffer::Utf16(utf16)).unwrap();
        assert_eq!(t, "gªrçon");

        assert!(EncodedText::from_utf16(&[0xD800]).is_err());
        assert_eq!(
            EncodedText::new(Vec::<u8>::new(), Encoding::Utf32).unwrap_err(),
            EncodingError::UnsupportedEncoding(Encoding::Utf32)
        );
    }

    #[test]
    fn assign_and_reset_retag() {
        let mut t = EncodedText::from("abc");
        t.assign(b"\x80".to_vec(), Encoding::Windows1252).unwrap();
        assert_eq!(t.encoding(), Encoding::Windows1252);
        assert_eq!(t, "€");

        assert!(t.assign(vec![1u8, 2], Encoding::Utf16).is_err());
        assert_eq!(t.as_bytes(), b"\x80", "failed assign keeps the old value");

        t.assign_view(EncodedTextView::from_utf8(b"xyz"));
        assert_eq!(t.encoding(), Encoding::Utf8);
        assert_eq!(t.as_bytes(), b"xyz");

        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.encoding(), Encoding::Utf8);

        t.assign(b"\xE9".to_vec(), Encoding::Windows1252).unwrap();
        t.reset();
        assert!(t.is_empty());
        assert_eq!(t.encoding(), NATIVE_ENCODING);
    }

    #[test]
    fn transcode_to_changes_storage() {
        let t = EncodedText::from("€uro");
        let w = t.transcode_to(Encoding::Windows1252, Strictness::Strict).unwrap();
        assert_eq!(w.encoding(), Encoding::Windows1252);
        assert_eq!(w.as_bytes(), b"\x80uro");
        assert_eq!(w, t);

        let smile = EncodedText::from("\u{263A}");
        assert!(
            smile
                .transcode_to(Encoding::Windows1252, Strictness::Strict)
                .unwrap_err()
                .is_unmappable()
        );
        assert!(smile.transcode_to(Encoding::Utf16, Strictness::Lossy).is_err());
    }

    #[test]
    fn equality_across_owned_and_borrowed() {
        let owned = EncodedText::from_windows1252(b"caf\xE9".to_vec());
        let view = EncodedTextView::from("café");
        assert_eq!(owned, view);
        assert_eq!(view, owned);
        assert_eq!(owned, EncodedText::from(view));
        assert_ne!(owned, EncodedText::from("cafe"));
    }

    #[test]
    fn debug_and_display() {
        let t = EncodedText::from("café");
        assert_eq!(
            format!("{t:?}"),
            r#"EncodedText { encoding: Utf8, bytes: "café" }"#
        );
        assert_eq!(t.to_string(), "café");
        assert_eq!(
            EncodedText::from_windows1252(b"\x93hi\x94".to_vec()).to_string(),
            "\u{201C}hi\u{201D}"
        );
    }
}
