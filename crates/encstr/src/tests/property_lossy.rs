use quickcheck::QuickCheck;

use super::{arbitrary::Utf8ish, quickcheck_tests};
use crate::{Strictness, scanner::Utf8Scanner, transcode};

#[test]
fn lossy_never_reports_unmappable_for_well_formed_input() {
    fn prop(input: String) -> bool {
        transcode::utf8_to_windows1252(input.as_bytes(), Strictness::Lossy)
            .is_ok_and(|out| out.len() <= input.len())
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(String) -> bool);
}

#[test]
fn lossy_fails_exactly_when_the_scanner_does() {
    fn prop(input: Utf8ish) -> bool {
        let scanned = Utf8Scanner::new(&input.0).collect::<Result<Vec<_>, _>>();
        let converted = transcode::utf8_to_windows1252(&input.0, Strictness::Lossy);
        match (scanned, converted) {
            (Ok(_), Ok(_)) => true,
            (Err(a), Err(b)) => a == b && b.is_malformed(),
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Utf8ish) -> bool);
}

#[test]
fn strict_errors_are_one_of_two_kinds() {
    fn prop(input: Utf8ish) -> bool {
        match transcode::utf8_to_windows1252(&input.0, Strictness::Strict) {
            Ok(out) => out.len() <= input.0.len(),
            Err(e) => e.is_malformed() != e.is_unmappable(),
        }
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Utf8ish) -> bool);
}

#[test]
fn scanner_splits_valid_text_into_chars() {
    fn prop(input: String) -> bool {
        let Ok(seqs) = Utf8Scanner::new(input.as_bytes()).collect::<Result<Vec<_>, _>>() else {
            return false;
        };
        seqs.len() == input.chars().count()
            && seqs
                .iter()
                .zip(input.char_indices())
                .all(|((offset, seq), (at, ch))| *offset == at && *seq == ch.to_string().as_bytes())
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(String) -> bool);
}

#[test]
fn lossy_wide_conversion_keeps_one_byte_per_unit() {
    fn prop(utf16: Vec<u16>, utf32: Vec<u32>) -> bool {
        let a = transcode::utf16_to_windows1252(&utf16, Strictness::Lossy);
        let b = transcode::utf32_to_windows1252(&utf32, Strictness::Lossy);
        a.is_ok_and(|out| out.len() == utf16.len()) && b.is_ok_and(|out| out.len() == utf32.len())
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u16>, Vec<u32>) -> bool);
}
