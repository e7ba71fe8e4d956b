#![expect(missing_docs)]

use encstr::{EncodedText, Encoding, Strictness, WideWidth};

#[test]
fn serializes_as_a_utf8_string() {
    let text = EncodedText::from_windows1252(b"\x80 caf\xE9".to_vec());
    assert_eq!(serde_json::to_string(&text).unwrap(), r#""€ café""#);
}

#[test]
fn deserializes_into_utf8() {
    let text: EncodedText = serde_json::from_str(r#""naïve""#).unwrap();
    assert_eq!(text.encoding(), Encoding::Utf8);
    assert_eq!(text, "naïve");
}

#[test]
fn malformed_utf8_does_not_serialize() {
    let text = EncodedText::from_utf8(b"\xC3".to_vec());
    let err = serde_json::to_string(&text).unwrap_err();
    assert!(err.to_string().contains("malformed UTF-8"), "{err}");
}

#[test]
fn options_serialize_by_name() {
    assert_eq!(serde_json::to_string(&Encoding::Windows1252).unwrap(), r#""Windows1252""#);
    let s: Strictness = serde_json::from_str(r#""Strict""#).unwrap();
    assert_eq!(s, Strictness::Strict);
    assert_eq!(serde_json::to_string(&WideWidth::Utf16).unwrap(), r#""Utf16""#);
    let w: WideWidth = serde_json::from_str(r#""Utf32""#).unwrap();
    assert_eq!(w, WideWidth::Utf32);
}
