//! Encoded strings: text that remembers its encoding.
//!
//! Byte strings show up in four flavours: the platform's native encoding
//! (UTF-8 on POSIX, Windows-1252 on Windows), explicit UTF-8, explicit
//! Windows-1252, and UTF-16/UTF-32 "wide" strings. [`EncodedText`] and
//! [`EncodedTextView`] hold bytes together with their encoding and convert
//! only when a specific representation is asked for.
//!
//! The conversions themselves live in [`transcode`]. Anything going to
//! Windows-1252 takes a [`Strictness`]: lossy conversions substitute a
//! placeholder for characters the code page cannot hold, strict ones fail
//! with [`EncodingError::UnmappableCharacter`]. Malformed input always fails
//! with [`EncodingError::MalformedEncoding`].
//!
//! ```rust
//! use encstr::{EncodedText, EncodedTextView, Strictness, transcode};
//!
//! // 0x80 is the EURO SIGN in Windows-1252.
//! let utf8 = transcode::windows1252_to_utf8(b"\x80", Strictness::Lossy);
//! assert_eq!(utf8, [0xE2, 0x82, 0xAC]);
//! assert_eq!(
//!     transcode::utf8_to_windows1252(&utf8, Strictness::Strict).unwrap(),
//!     b"\x80"
//! );
//!
//! // Same text, different encodings: equal.
//! let text = EncodedText::from("café");
//! assert_eq!(text, EncodedTextView::from_windows1252(b"caf\xE9"));
//! ```

mod encoding;
mod error;
mod options;
pub mod scanner;
pub mod tables;
mod text;
pub mod transcode;
mod view;
mod wide;

#[cfg(test)]
mod tests;

pub use encoding::{Encoding, NATIVE_ENCODING};
pub use error::{EncodingError, Malformed, Result};
pub use options::{Strictness, WideWidth};
pub use tables::CodepointTables;
pub use text::EncodedText;
pub use view::EncodedTextView;
pub use wide::WideBuffer;
