#![no_main]

use arbitrary::Arbitrary;
use encstr::{EncodedText, EncodedTextView, Strictness, transcode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Input<'a> {
    Utf8 { bytes: &'a [u8], strict: bool },
    Windows1252 { bytes: &'a [u8], strict: bool },
    Utf16(Vec<u16>),
    Utf32(Vec<u32>),
}

fuzz_target!(|input: Input<'_>| {
    match input {
        Input::Utf8 { bytes, strict } => {
            let strictness = Strictness::from(strict);
            match transcode::utf8_to_windows1252(bytes, strictness) {
                Ok(cp1252) => {
                    assert!(cp1252.len() <= bytes.len());
                    if core::str::from_utf8(bytes).is_ok() && strictness.is_strict() {
                        assert_eq!(EncodedTextView::from_windows1252(&cp1252), EncodedTextView::from_utf8(bytes));
                    }
                }
                Err(e) => {
                    assert!(e.is_malformed() || strictness.is_strict(), "{e}");
                }
            }
        }
        Input::Windows1252 { bytes, strict } => {
            let strictness = Strictness::from(strict);
            let utf8 = transcode::windows1252_to_utf8(bytes, strictness);
            let s = core::str::from_utf8(&utf8).expect("forward conversion yields UTF-8");
            assert_eq!(s.chars().count(), bytes.len());
            let back = transcode::utf8_to_windows1252(&utf8, Strictness::Lossy)
                .expect("lossy reverse of well-formed UTF-8");
            assert!(back.len() <= utf8.len());
            let _ = EncodedText::from_windows1252(bytes.to_vec()).to_string();
        }
        Input::Utf16(units) => {
            let lossy = transcode::utf16_to_windows1252(&units, Strictness::Lossy)
                .expect("lossy UTF-16 conversion never fails");
            assert_eq!(lossy.len(), units.len());
            if let Ok(utf8) = transcode::utf16_to_utf8(&units) {
                assert_eq!(transcode::utf8_to_utf16(&utf8).unwrap(), units);
            }
        }
        Input::Utf32(units) => {
            let lossy = transcode::utf32_to_windows1252(&units, Strictness::Lossy)
                .expect("lossy UTF-32 conversion never fails");
            assert_eq!(lossy.len(), units.len());
            if let Ok(text) = EncodedText::from_utf32(&units) {
                assert_eq!(text.utf32().unwrap(), units);
                assert!(text.windows1252().is_ok());
            }
        }
    }
});
