/// How a conversion treats characters the target encoding cannot represent.
///
/// Chosen per call; there is no global mode.
///
/// # Examples
///
/// ```rust
/// use encstr::{Strictness, transcode};
///
/// // U+263A WHITE SMILING FACE has no Windows-1252 byte.
/// let smile = "\u{263A}".as_bytes();
/// assert_eq!(
///     transcode::utf8_to_windows1252(smile, Strictness::Lossy).unwrap(),
///     b"\x7F"
/// );
/// assert!(transcode::utf8_to_windows1252(smile, Strictness::Strict).is_err());
/// ```
///
/// # Default
///
/// [`Strictness::Lossy`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strictness {
    /// Replace unmappable characters with a placeholder and succeed.
    ///
    /// Going to Windows-1252, a two-byte UTF-8 sequence with no mapping is
    /// copied through unchanged (the behaviour of the Win32 wide-string
    /// APIs); anything else becomes DEL (`0x7F`). Going from Windows-1252,
    /// the five undefined bytes become the C1 control with the same value.
    #[default]
    Lossy,

    /// Fail with [`EncodingError::UnmappableCharacter`](crate::EncodingError::UnmappableCharacter)
    /// on the first unmappable character.
    ///
    /// Going from Windows-1252 nothing can fail, so the undefined bytes are
    /// replaced by U+FFFD REPLACEMENT CHARACTER instead.
    Strict,
}

impl Strictness {
    /// `true` for [`Strictness::Strict`].
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl From<bool> for Strictness {
    /// `true` means strict.
    fn from(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Lossy }
    }
}

/// Code unit width requested from
/// [`EncodedTextView::as_wide`](crate::EncodedTextView::as_wide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WideWidth {
    /// 16-bit units, UTF-16.
    Utf16,
    /// 32-bit units, UTF-32.
    Utf32,
}

impl WideWidth {
    /// The width of the platform's wide strings: 16 bits on Windows, 32
    /// elsewhere.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) { Self::Utf16 } else { Self::Utf32 }
    }
}
