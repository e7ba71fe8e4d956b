//! Scanner: splits UTF-8 bytes into raw scalar sequences.
//!
//! What it does
//! - Reads one encoded scalar (1 to 4 bytes) per step and hands back the raw
//!   bytes, not a decoded `char`. Callers compare the raw sequence against
//!   the reverse Windows-1252 table, so decoding would only be undone again.
//! - The lead byte decides the length: below `0x80` one byte, from `0x80` two,
//!   from `0xE0` three, from `0xF0` four.
//!
//! Scope
//! - Only the *shape* of continuation bytes is checked (each must be
//!   `>= 0x80`). Over-long forms, surrogate code points and values beyond
//!   U+10FFFF pass through; they simply never match a table entry.
//! - Running out of input inside a sequence, or a continuation byte without
//!   its high bit, is [`Malformed`] and ends the scan.
//!
//! Example
//! ```rust
//! use encstr::scanner::Utf8Scanner;
//!
//! let seqs: Vec<&[u8]> = Utf8Scanner::new("a€".as_bytes())
//!     .map(|r| r.unwrap().1)
//!     .collect();
//! assert_eq!(seqs, [&b"a"[..], &[0xE2, 0x82, 0xAC][..]]);
//! ```

use crate::{
    encoding::Encoding,
    error::{EncodingError, Malformed, Result},
};

/// Length of the sequence introduced by `lead`.
#[inline]
#[must_use]
pub const fn sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xF0..=0xFF => 4,
        0xE0..=0xEF => 3,
        _ => 2,
    }
}

/// Consumes the scalar starting at `*pos` and returns its raw bytes.
///
/// On success `*pos` is moved past the sequence. On failure it is left at
/// the start of the offending sequence.
///
/// # Errors
///
/// [`EncodingError::MalformedEncoding`] if the sequence is cut short by the
/// end of `bytes` (or `*pos` is already there), or if a continuation byte is
/// below `0x80`.
pub fn next_scalar<'a>(bytes: &'a [u8], pos: &mut usize) -> Result<&'a [u8]> {
    let start = *pos;
    let Some(&lead) = bytes.get(start) else {
        return Err(EncodingError::malformed(
            Encoding::Utf8,
            start,
            Malformed::Truncated,
        ));
    };

    let len = sequence_len(lead);
    for at in start + 1..start + len {
        match bytes.get(at) {
            None => {
                return Err(EncodingError::malformed(
                    Encoding::Utf8,
                    start,
                    Malformed::Truncated,
                ));
            }
            // continuation bytes are 10xxxxxx
            Some(&b) if b < 0x80 => {
                return Err(EncodingError::malformed(
                    Encoding::Utf8,
                    at,
                    Malformed::InvalidContinuation(b),
                ));
            }
            Some(_) => {}
        }
    }

    *pos = start + len;
    Ok(&bytes[start..start + len])
}

/// Iterator over the raw scalar sequences of a UTF-8 buffer.
///
/// Yields `(offset, bytes)` pairs. After the first error it yields nothing
/// more.
#[derive(Debug, Clone)]
pub struct Utf8Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Utf8Scanner<'a> {
    /// Starts scanning at the beginning of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            failed: false,
        }
    }

    /// Offset of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

impl<'a> Iterator for Utf8Scanner<'a> {
    type Item = Result<(usize, &'a [u8])>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }
        let start = self.pos;
        match next_scalar(self.bytes, &mut self.pos) {
            Ok(seq) => Some(Ok((start, seq))),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let rest = self.bytes.len() - self.pos;
        (rest.div_ceil(4), Some(rest))
    }
}

impl core::iter::FusedIterator for Utf8Scanner<'_> {}
