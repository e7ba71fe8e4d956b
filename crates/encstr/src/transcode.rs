//! Conversion functions between the supported encodings.
//!
//! Everything that involves Windows-1252 takes a [`Strictness`]; the pure
//! Unicode transcodings (UTF-8 <-> UTF-16/UTF-32) have nothing unmappable
//! and only fail on malformed input.
//!
//! Offsets in errors are in code units of the *input*.

use std::borrow::Cow;

use crate::{
    encoding::Encoding,
    error::{EncodingError, Malformed, Result},
    options::Strictness,
    scanner::Utf8Scanner,
    tables::{CodepointTables, PLACEHOLDER, is_undefined},
};

/// Windows-1252 to UTF-8. Never fails.
///
/// Undefined bytes become their C1 control (`C2 xx`) when lossy and
/// U+FFFD when strict.
#[must_use]
pub fn windows1252_to_utf8(bytes: &[u8], strictness: Strictness) -> Vec<u8> {
    let tables = CodepointTables::get();
    let mut out = Vec::with_capacity(bytes.len() + bytes.len() / 2);
    for (offset, &b) in bytes.iter().enumerate() {
        if strictness.is_strict() && is_undefined(b) {
            log::trace!("undefined byte 0x{b:02X} at offset {offset} decoded as U+FFFD");
        }
        out.extend_from_slice(tables.forward_utf8(b, strictness));
    }
    out
}

/// UTF-8 to Windows-1252.
///
/// Each scalar is looked up in the reverse table. A character that has no
/// Windows-1252 byte, or that maps to one of the undefined bytes, is an
/// error when strict. When lossy, a two-byte sequence is copied through
/// unchanged and anything longer becomes DEL (`0x7F`).
///
/// # Errors
///
/// - [`EncodingError::MalformedEncoding`] for truncated sequences or bad
///   continuation bytes, regardless of `strictness`.
/// - [`EncodingError::UnmappableCharacter`] under [`Strictness::Strict`].
pub fn utf8_to_windows1252(bytes: &[u8], strictness: Strictness) -> Result<Vec<u8>> {
    let tables = CodepointTables::get();
    let mut out = Vec::with_capacity(bytes.len());
    for scalar in Utf8Scanner::new(bytes) {
        let (offset, seq) = scalar?;
        match tables.reverse_utf8(seq) {
            Some(b) if !is_undefined(b) => out.push(b),
            _ if strictness.is_strict() => {
                return Err(EncodingError::unmappable(Encoding::Windows1252, offset));
            }
            _ if seq.len() == 2 => {
                log::trace!("passing unmappable UTF-8 {seq:02X?} at offset {offset} through");
                out.extend_from_slice(seq);
            }
            _ => {
                log::debug!("replacing unmappable UTF-8 {seq:02X?} at offset {offset} with DEL");
                out.push(PLACEHOLDER);
            }
        }
    }
    Ok(out)
}

/// Windows-1252 to UTF-16. Never fails; same policy as
/// [`windows1252_to_utf8`].
#[must_use]
pub fn windows1252_to_utf16(bytes: &[u8], strictness: Strictness) -> Vec<u16> {
    let tables = CodepointTables::get();
    let mut out = Vec::with_capacity(bytes.len());
    let mut buf = [0; 2];
    for &b in bytes {
        let ch = tables.forward_char(b, strictness);
        out.extend_from_slice(ch.encode_utf16(&mut buf));
    }
    out
}

/// Windows-1252 to UTF-32. Never fails; same policy as
/// [`windows1252_to_utf8`].
#[must_use]
pub fn windows1252_to_utf32(bytes: &[u8], strictness: Strictness) -> Vec<u32> {
    let tables = CodepointTables::get();
    bytes
        .iter()
        .map(|&b| u32::from(tables.forward_char(b, strictness)))
        .collect()
}

/// UTF-16 to Windows-1252, one code unit at a time.
///
/// Each unit is looked up in the reverse UTF-16 table; surrogates never
/// match, so a surrogate pair becomes two DELs when lossy and a lone
/// surrogate is just another unmappable unit. A unit landing on an
/// undefined byte is emitted as that byte when lossy.
///
/// # Errors
///
/// [`EncodingError::UnmappableCharacter`] under [`Strictness::Strict`],
/// with the offset of the first unit that has no byte.
pub fn utf16_to_windows1252(units: &[u16], strictness: Strictness) -> Result<Vec<u8>> {
    let tables = CodepointTables::get();
    let mut out = Vec::with_capacity(units.len());
    for (offset, &unit) in units.iter().enumerate() {
        let found = tables.reverse_utf16(unit);
        push_unit_as_windows1252(found, u32::from(unit), offset, strictness, &mut out)?;
    }
    Ok(out)
}

/// UTF-32 to Windows-1252, one unit at a time with the same rules as
/// [`utf16_to_windows1252`]. Units outside the Basic Multilingual Plane
/// or beyond U+10FFFF have no byte.
///
/// # Errors
///
/// [`EncodingError::UnmappableCharacter`] under [`Strictness::Strict`].
pub fn utf32_to_windows1252(units: &[u32], strictness: Strictness) -> Result<Vec<u8>> {
    let tables = CodepointTables::get();
    let mut out = Vec::with_capacity(units.len());
    for (offset, &unit) in units.iter().enumerate() {
        let found = u16::try_from(unit)
            .ok()
            .and_then(|unit| tables.reverse_utf16(unit));
        push_unit_as_windows1252(found, unit, offset, strictness, &mut out)?;
    }
    Ok(out)
}

fn push_unit_as_windows1252(
    found: Option<u8>,
    unit: u32,
    offset: usize,
    strictness: Strictness,
    out: &mut Vec<u8>,
) -> Result<()> {
    match found {
        Some(b) if !is_undefined(b) => out.push(b),
        _ if strictness.is_strict() => {
            return Err(EncodingError::unmappable(Encoding::Windows1252, offset));
        }
        Some(b) => {
            log::trace!("passing undefined unit 0x{unit:04X} at offset {offset} through");
            out.push(b);
        }
        None => {
            log::debug!("replacing unmappable unit 0x{unit:04X} at offset {offset} with DEL");
            out.push(PLACEHOLDER);
        }
    }
    Ok(())
}

fn utf32_char(unit: u32, offset: usize) -> Result<char> {
    char::from_u32(unit).ok_or(EncodingError::malformed(
        Encoding::Utf32,
        offset,
        Malformed::InvalidScalar(unit),
    ))
}

/// Validates `bytes` as UTF-8.
///
/// # Errors
///
/// [`EncodingError::MalformedEncoding`] at the first invalid byte.
pub fn validate_utf8(bytes: &[u8]) -> Result<&str> {
    core::str::from_utf8(bytes).map_err(|e| {
        let reason = match e.error_len() {
            None => Malformed::Truncated,
            Some(_) => Malformed::InvalidUtf8,
        };
        EncodingError::malformed(Encoding::Utf8, e.valid_up_to(), reason)
    })
}

/// UTF-16 to UTF-8.
///
/// # Errors
///
/// [`EncodingError::MalformedEncoding`] for an unpaired surrogate.
pub fn utf16_to_utf8(units: &[u16]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(units.len());
    let mut buf = [0; 4];
    let mut offset = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        let ch = decoded.map_err(|e| {
            EncodingError::malformed(
                Encoding::Utf16,
                offset,
                Malformed::UnpairedSurrogate(e.unpaired_surrogate()),
            )
        })?;
        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        offset += ch.len_utf16();
    }
    Ok(out)
}

/// UTF-8 to UTF-16.
///
/// # Errors
///
/// [`EncodingError::MalformedEncoding`] if `bytes` is not valid UTF-8.
pub fn utf8_to_utf16(bytes: &[u8]) -> Result<Vec<u16>> {
    Ok(validate_utf8(bytes)?.encode_utf16().collect())
}

/// UTF-32 to UTF-8.
///
/// # Errors
///
/// [`EncodingError::MalformedEncoding`] for a unit that is not a Unicode
/// scalar value.
pub fn utf32_to_utf8(units: &[u32]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(units.len());
    let mut buf = [0; 4];
    for (offset, &unit) in units.iter().enumerate() {
        let ch = utf32_char(unit, offset)?;
        out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    }
    Ok(out)
}

/// UTF-8 to UTF-32.
///
/// # Errors
///
/// [`EncodingError::MalformedEncoding`] if `bytes` is not valid UTF-8.
pub fn utf8_to_utf32(bytes: &[u8]) -> Result<Vec<u32>> {
    Ok(validate_utf8(bytes)?.chars().map(u32::from).collect())
}

/// Converts between the byte encodings (`Native`, `Utf8`, `Windows1252`).
///
/// Borrows the input when `from` and `to` resolve to the same encoding.
///
/// # Errors
///
/// - [`EncodingError::UnsupportedEncoding`] if either side is a wide
///   encoding.
/// - Whatever [`utf8_to_windows1252`] returns.
pub fn convert_bytes(
    bytes: &[u8],
    from: Encoding,
    to: Encoding,
    strictness: Strictness,
) -> Result<Cow<'_, [u8]>> {
    match (from.resolve(), to.resolve()) {
        (wide @ (Encoding::Utf16 | Encoding::Utf32), _)
        | (_, wide @ (Encoding::Utf16 | Encoding::Utf32)) => {
            Err(EncodingError::UnsupportedEncoding(wide))
        }
        (from, to) if from == to => Ok(Cow::Borrowed(bytes)),
        (Encoding::Windows1252, _) => Ok(Cow::Owned(windows1252_to_utf8(bytes, strictness))),
        _ => utf8_to_windows1252(bytes, strictness).map(Cow::Owned),
    }
}
