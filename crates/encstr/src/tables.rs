//! Windows-1252 code point tables.
//!
//! The forward table maps each of the 256 byte values to a Unicode character
//! and its UTF-8 encoding:
//! - `0x00..=0x7F` are ASCII and map to themselves.
//! - `0x80..=0x9F` hold 27 named characters (EURO SIGN, curly quotes, dashes,
//!   ...) taken from the Unicode consortium's `CP1252.TXT`. The other five
//!   positions ([`UNDEFINED`]) have no assignment and fall back to the C1
//!   control with the same value.
//! - `0xA0..=0xFF` coincide with ISO-8859-1 and are encoded with the usual
//!   bit twiddling.
//!
//! The reverse tables are derived from the forward one: first UTF-16 (every
//! target lies in the Basic Multilingual Plane, so one unit per byte), then
//! UTF-8 by re-encoding each UTF-16 key. Since both are inversions they
//! cannot disagree with the forward mapping.
//!
//! All tables are built once, on first use, behind a [`LazyLock`], and are
//! read-only afterwards.

use std::{collections::HashMap, sync::LazyLock};

use crate::options::Strictness;

/// Windows-1252 bytes with no Unicode assignment.
pub const UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// `true` if `byte` is one of the five [`UNDEFINED`] Windows-1252 positions.
#[must_use]
pub const fn is_undefined(byte: u8) -> bool {
    matches!(byte, 0x81 | 0x8D | 0x8F | 0x90 | 0x9D)
}

/// DEL, the last-resort placeholder when converting to Windows-1252.
pub const PLACEHOLDER: u8 = 0x7F;

/// UTF-8 encoding of U+FFFD REPLACEMENT CHARACTER.
const REPLACEMENT_UTF8: &[u8] = "\u{FFFD}".as_bytes();

/// The named characters of `0x80..=0x9F`.
const C1_NAMED: [(u8, char); 27] = [
    (0x80, '\u{20AC}'), // EURO SIGN
    (0x82, '\u{201A}'), // SINGLE LOW-9 QUOTATION MARK
    (0x83, '\u{0192}'), // LATIN SMALL LETTER F WITH HOOK
    (0x84, '\u{201E}'), // DOUBLE LOW-9 QUOTATION MARK
    (0x85, '\u{2026}'), // HORIZONTAL ELLIPSIS
    (0x86, '\u{2020}'), // DAGGER
    (0x87, '\u{2021}'), // DOUBLE DAGGER
    (0x88, '\u{02C6}'), // MODIFIER LETTER CIRCUMFLEX ACCENT
    (0x89, '\u{2030}'), // PER MILLE SIGN
    (0x8A, '\u{0160}'), // LATIN CAPITAL LETTER S WITH CARON
    (0x8B, '\u{2039}'), // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
    (0x8C, '\u{0152}'), // LATIN CAPITAL LIGATURE OE
    (0x8E, '\u{017D}'), // LATIN CAPITAL LETTER Z WITH CARON
    (0x91, '\u{2018}'), // LEFT SINGLE QUOTATION MARK
    (0x92, '\u{2019}'), // RIGHT SINGLE QUOTATION MARK
    (0x93, '\u{201C}'), // LEFT DOUBLE QUOTATION MARK
    (0x94, '\u{201D}'), // RIGHT DOUBLE QUOTATION MARK
    (0x95, '\u{2022}'), // BULLET
    (0x96, '\u{2013}'), // EN DASH
    (0x97, '\u{2014}'), // EM DASH
    (0x98, '\u{02DC}'), // SMALL TILDE
    (0x99, '\u{2122}'), // TRADE MARK SIGN
    (0x9A, '\u{0161}'), // LATIN SMALL LETTER S WITH CARON
    (0x9B, '\u{203A}'), // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
    (0x9C, '\u{0153}'), // LATIN SMALL LIGATURE OE
    (0x9E, '\u{017E}'), // LATIN SMALL LETTER Z WITH CARON
    (0x9F, '\u{0178}'), // LATIN CAPITAL LETTER Y WITH DIAERESIS
];

/// A UTF-8 sequence of at most four bytes, stored inline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Utf8Seq {
    bytes: [u8; 4],
    len: u8,
}

impl Utf8Seq {
    fn from_char(ch: char) -> Self {
        let mut bytes = [0; 4];
        #[allow(clippy::cast_possible_truncation)]
        let len = ch.encode_utf8(&mut bytes).len() as u8;
        Self { bytes, len }
    }

    fn latin1(byte: u8) -> Self {
        debug_assert!(byte >= 0x80);
        let b1 = 0xC2 + u8::from(byte > 0xBF);
        let b2 = (byte & 0x3F) + 0x80;
        Self {
            bytes: [b1, b2, 0, 0],
            len: 2,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }
}

/// The forward and reverse Windows-1252 lookup tables.
#[derive(Debug)]
pub struct CodepointTables {
    to_char: [char; 256],
    to_utf8: [Utf8Seq; 256],
    from_utf16: HashMap<u16, u8>,
    from_utf8: HashMap<Box<[u8]>, u8>,
}

static TABLES: LazyLock<CodepointTables> = LazyLock::new(CodepointTables::build);

impl CodepointTables {
    /// The process-wide tables, built on first call.
    pub fn get() -> &'static Self {
        &TABLES
    }

    fn build() -> Self {
        let mut to_char = ['\0'; 256];
        let mut to_utf8 = [Utf8Seq::default(); 256];

        for byte in 0..=u8::MAX {
            let i = usize::from(byte);
            to_char[i] = char::from(byte);
            to_utf8[i] = if byte.is_ascii() {
                Utf8Seq {
                    bytes: [byte, 0, 0, 0],
                    len: 1,
                }
            } else {
                Utf8Seq::latin1(byte)
            };
        }
        for (byte, ch) in C1_NAMED {
            to_char[usize::from(byte)] = ch;
            to_utf8[usize::from(byte)] = Utf8Seq::from_char(ch);
        }

        let mut from_utf16 = HashMap::with_capacity(256);
        for (byte, ch) in (0..=u8::MAX).zip(to_char) {
            let mut units = [0; 2];
            let units = ch.encode_utf16(&mut units);
            debug_assert_eq!(units.len(), 1, "{ch:?} is outside the BMP");
            from_utf16.insert(units[0], byte);
        }
        debug_assert_eq!(from_utf16.len(), 256);

        let mut from_utf8 = HashMap::with_capacity(from_utf16.len());
        for (&unit, &byte) in &from_utf16 {
            for ch in char::decode_utf16([unit]).flatten() {
                let seq = Utf8Seq::from_char(ch);
                from_utf8.insert(Box::from(seq.as_bytes()), byte);
            }
        }
        debug_assert_eq!(from_utf8.len(), 256);

        log::debug!(
            "built Windows-1252 tables ({} UTF-16 keys, {} UTF-8 keys)",
            from_utf16.len(),
            from_utf8.len()
        );

        Self {
            to_char,
            to_utf8,
            from_utf16,
            from_utf8,
        }
    }

    /// The character `byte` stands for.
    ///
    /// Undefined bytes map to the C1 control of the same value under
    /// [`Strictness::Lossy`] and to U+FFFD under [`Strictness::Strict`].
    #[must_use]
    pub fn forward_char(&self, byte: u8, strictness: Strictness) -> char {
        if strictness.is_strict() && is_undefined(byte) {
            char::REPLACEMENT_CHARACTER
        } else {
            self.to_char[usize::from(byte)]
        }
    }

    /// The UTF-8 encoding of `byte`, with the same policy as
    /// [`forward_char`](Self::forward_char).
    #[must_use]
    pub fn forward_utf8(&self, byte: u8, strictness: Strictness) -> &[u8] {
        if strictness.is_strict() && is_undefined(byte) {
            REPLACEMENT_UTF8
        } else {
            self.to_utf8[usize::from(byte)].as_bytes()
        }
    }

    /// The Windows-1252 byte whose UTF-8 encoding is exactly `seq`.
    ///
    /// Undefined bytes are found too (through their C1 control); callers
    /// decide whether to accept them.
    #[must_use]
    pub fn reverse_utf8(&self, seq: &[u8]) -> Option<u8> {
        self.from_utf8.get(seq).copied()
    }

    /// The Windows-1252 byte for a single UTF-16 code unit.
    #[must_use]
    pub fn reverse_utf16(&self, unit: u16) -> Option<u8> {
        self.from_utf16.get(&unit).copied()
    }

    /// The Windows-1252 byte for `ch`, if it has one.
    #[must_use]
    pub fn reverse_char(&self, ch: char) -> Option<u8> {
        u16::try_from(u32::from(ch))
            .ok()
            .and_then(|unit| self.reverse_utf16(unit))
    }
}
