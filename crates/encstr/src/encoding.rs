use std::fmt;

/// The text encodings this crate converts between.
///
/// `Native` is an alias resolved at build time: Windows-1252 on Windows (or
/// with the `native-windows1252` feature), UTF-8 everywhere else. Stored
/// text never carries the `Native` tag; it is resolved on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// Whatever plain byte strings carry on this platform.
    Native,
    /// UTF-8.
    Utf8,
    /// Windows code page 1252, a superset of ISO-8859-1.
    Windows1252,
    /// UTF-16 code units.
    Utf16,
    /// UTF-32 code units.
    Utf32,
}

/// The concrete encoding [`Encoding::Native`] stands for.
#[cfg(any(windows, feature = "native-windows1252"))]
pub const NATIVE_ENCODING: Encoding = Encoding::Windows1252;

/// The concrete encoding [`Encoding::Native`] stands for.
#[cfg(not(any(windows, feature = "native-windows1252")))]
pub const NATIVE_ENCODING: Encoding = Encoding::Utf8;

impl Encoding {
    /// Replaces [`Encoding::Native`] with [`NATIVE_ENCODING`]; every other
    /// value is returned unchanged.
    #[must_use]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Native => NATIVE_ENCODING,
            other => other,
        }
    }

    /// `true` if text in this encoding is a sequence of code units wider
    /// than a byte.
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Utf16 | Self::Utf32)
    }

    /// The conventional label of the encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.resolve() {
            Self::Utf8 => "UTF-8",
            Self::Windows1252 => "Windows-1252",
            Self::Utf16 => "UTF-16",
            Self::Utf32 => "UTF-32",
            Self::Native => unreachable!(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
