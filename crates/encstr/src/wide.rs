use crate::{
    encoding::Encoding,
    error::Result,
    options::WideWidth,
    transcode,
};

/// Text as 16- or 32-bit code units.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WideBuffer {
    /// UTF-16 code units.
    Utf16(Vec<u16>),
    /// UTF-32 code units.
    Utf32(Vec<u32>),
}

impl WideBuffer {
    /// Width of the code units held.
    #[must_use]
    pub fn width(&self) -> WideWidth {
        match self {
            Self::Utf16(_) => WideWidth::Utf16,
            Self::Utf32(_) => WideWidth::Utf32,
        }
    }

    /// [`Encoding::Utf16`] or [`Encoding::Utf32`].
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        match self {
            Self::Utf16(_) => Encoding::Utf16,
            Self::Utf32(_) => Encoding::Utf32,
        }
    }

    /// Number of code units.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Utf16(units) => units.len(),
            Self::Utf32(units) => units.len(),
        }
    }

    /// `true` if there are no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The UTF-16 units, if that is what this holds.
    #[must_use]
    pub fn as_utf16(&self) -> Option<&[u16]> {
        match self {
            Self::Utf16(units) => Some(units),
            Self::Utf32(_) => None,
        }
    }

    /// The UTF-32 units, if that is what this holds.
    #[must_use]
    pub fn as_utf32(&self) -> Option<&[u32]> {
        match self {
            Self::Utf32(units) => Some(units),
            Self::Utf16(_) => None,
        }
    }

    /// Encodes the units as UTF-8.
    ///
    /// # Errors
    ///
    /// [`EncodingError::MalformedEncoding`](crate::EncodingError::MalformedEncoding)
    /// for unpaired surrogates or out-of-range UTF-32 units.
    pub fn to_utf8(&self) -> Result<Vec<u8>> {
        match self {
            Self::Utf16(units) => transcode::utf16_to_utf8(units),
            Self::Utf32(units) => transcode::utf32_to_utf8(units),
        }
    }

    /// Decodes the units into a `String`, replacing anything malformed with
    /// U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        match self {
            Self::Utf16(units) => String::from_utf16_lossy(units),
            Self::Utf32(units) => units
                .iter()
                .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect(),
        }
    }
}

impl From<Vec<u16>> for WideBuffer {
    fn from(units: Vec<u16>) -> Self {
        Self::Utf16(units)
    }
}

impl From<Vec<u32>> for WideBuffer {
    fn from(units: Vec<u32>) -> Self {
        Self::Utf32(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_the_variant() {
        let w = WideBuffer::from(vec![0x67u16, 0xAA]);
        assert_eq!(w.width(), WideWidth::Utf16);
        assert_eq!(w.encoding(), Encoding::Utf16);
        assert_eq!(w.len(), 2);
        assert_eq!(w.as_utf16(), Some(&[0x67, 0xAA][..]));
        assert_eq!(w.as_utf32(), None);

        let w = WideBuffer::from(Vec::<u32>::new());
        assert!(w.is_empty());
        assert_eq!(w.width(), WideWidth::Utf32);
    }

    #[test]
    fn to_utf8_and_lossy_string() {
        let w = WideBuffer::Utf32(vec![0x67, 0xAA, 0x72, 0xE7, 0x6F, 0x6E]);
        assert_eq!(w.to_utf8().unwrap(), "gªrçon".as_bytes());
        assert_eq!(w.to_string_lossy(), "gªrçon");

        let bad = WideBuffer::Utf16(vec![0x61, 0xD800]);
        assert!(bad.to_utf8().unwrap_err().is_malformed());
        assert_eq!(bad.to_string_lossy(), "a\u{FFFD}");
    }
}
