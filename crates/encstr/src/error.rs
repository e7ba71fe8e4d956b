use thiserror::Error;

use crate::encoding::Encoding;

/// Result alias used by every fallible conversion in this crate.
pub type Result<T, E = EncodingError> = std::result::Result<T, E>;

/// Failure to convert text between encodings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The input is not well formed for its declared encoding.
    #[error("malformed {encoding} input at offset {offset}: {reason}")]
    MalformedEncoding {
        /// Encoding the input claimed to be in.
        encoding: Encoding,
        /// Offset of the offending unit, in code units of `encoding`.
        offset: usize,
        /// What was wrong with it.
        reason: Malformed,
    },

    /// The input is well formed but has no representation in `target`.
    ///
    /// Only returned under [`Strictness::Strict`](crate::Strictness::Strict).
    #[error("character at offset {offset} cannot be represented in {target}")]
    UnmappableCharacter {
        /// Encoding the conversion was producing.
        target: Encoding,
        /// Offset of the character in the input, in code units.
        offset: usize,
    },

    /// Byte-backed text was asked to store a wide encoding.
    #[error("{0} text cannot be stored as bytes")]
    UnsupportedEncoding(Encoding),
}

/// Why an input sequence was rejected as malformed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// A multi-byte sequence ran past the end of the input.
    #[error("sequence truncated at end of input")]
    Truncated,
    /// A byte that should continue a sequence lacks its high bit.
    #[error("invalid continuation byte 0x{0:02X}")]
    InvalidContinuation(u8),
    /// Rejected by full UTF-8 validation.
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
    /// A UTF-16 surrogate without its partner.
    #[error("unpaired surrogate 0x{0:04X}")]
    UnpairedSurrogate(u16),
    /// A UTF-32 unit outside the Unicode scalar range.
    #[error("0x{0:X} is not a Unicode scalar value")]
    InvalidScalar(u32),
}

impl EncodingError {
    pub(crate) fn malformed(encoding: Encoding, offset: usize, reason: Malformed) -> Self {
        Self::MalformedEncoding {
            encoding,
            offset,
            reason,
        }
    }

    pub(crate) fn unmappable(target: Encoding, offset: usize) -> Self {
        Self::UnmappableCharacter { target, offset }
    }

    /// `true` for [`EncodingError::MalformedEncoding`].
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedEncoding { .. })
    }

    /// `true` for [`EncodingError::UnmappableCharacter`].
    #[must_use]
    pub fn is_unmappable(&self) -> bool {
        matches!(self, Self::UnmappableCharacter { .. })
    }
}
