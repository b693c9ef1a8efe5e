/*
 * properties.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Property-based tests for citation resolution.
 */

use proptest::prelude::*;
use scripture_refs::{BookCode, ParsedReference, normalize, parse_references};

/// Fragments that show up in real citation text, glued together at random.
fn citation_soup() -> impl Strategy<Value = String> {
    let fragments = vec![
        "创", "出", "启示录", "约翰一书", "Gen", "exo", "1 Cor", "Xyz", "请看", " ", "　", ":",
        "：", ",", "，", ";", "；", "-", "—", "–", "至", "第", "章", "节", "一", "二", "三", "十",
        "百", "0", "1", "2", "3", "9", "12", "176",
    ];
    prop::collection::vec(prop::sample::select(fragments), 0..16).prop_map(|parts| parts.concat())
}

fn book() -> impl Strategy<Value = BookCode> {
    prop::sample::select(BookCode::ALL.to_vec())
}

/// Chinese numeral spelling for 1..=99.
fn chinese_numeral(n: u32) -> String {
    const DIGITS: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
    match (n / 10, n % 10) {
        (0, ones) => DIGITS[ones as usize].to_string(),
        (1, ones) => format!("十{}", DIGITS[ones as usize]),
        (tens, ones) => format!("{}十{}", DIGITS[tens as usize], DIGITS[ones as usize]),
    }
}

fn assert_well_formed(reference: &ParsedReference) {
    assert!(reference.chapter >= 1);
    assert!(!reference.verses.is_empty());
    assert!(reference.verses[0] >= 1);
    assert!(
        reference.verses.windows(2).all(|w| w[0] < w[1]),
        "verses not strictly ascending: {:?}",
        reference.verses
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_normalize_is_idempotent(s in any::<String>()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_is_idempotent_on_citation_text(s in citation_soup()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_parsed_references_are_well_formed(s in citation_soup()) {
        for reference in parse_references(&s) {
            assert_well_formed(&reference);
        }
    }

    #[test]
    fn test_arbitrary_input_never_panics(s in any::<String>()) {
        for reference in parse_references(&s) {
            assert_well_formed(&reference);
        }
    }

    #[test]
    fn test_ascii_range_citation(
        book in book(),
        chapter in 1u32..150,
        start in 1u32..100,
        len in 0u32..10,
    ) {
        let end = start + len;
        let text = format!("{} {}:{}-{}", book.code(), chapter, start, end);
        let refs = parse_references(&text);
        prop_assert_eq!(refs, vec![ParsedReference {
            book,
            chapter,
            verses: (start..=end).collect(),
        }]);
    }

    #[test]
    fn test_chinese_citation(
        book in book(),
        chapter in 1u32..100,
        verse in 1u32..100,
    ) {
        let text = format!("{} {}:{}", book.names().cn, chinese_numeral(chapter), verse);
        let refs = parse_references(&text);
        prop_assert_eq!(refs, vec![ParsedReference {
            book,
            chapter,
            verses: vec![verse],
        }]);
    }

    #[test]
    fn test_backwards_range_is_dropped(
        book in book(),
        start in 2u32..100,
        back in 1u32..50,
    ) {
        let end = start.saturating_sub(back).max(1);
        prop_assume!(end < start);
        let text = format!("{} 1:{}-{}", book.code(), start, end);
        prop_assert!(parse_references(&text).is_empty());
    }
}

#[test]
fn test_chinese_numeral_helper() {
    assert_eq!(chinese_numeral(1), "一");
    assert_eq!(chinese_numeral(10), "十");
    assert_eq!(chinese_numeral(11), "十一");
    assert_eq!(chinese_numeral(20), "二十");
    assert_eq!(chinese_numeral(99), "九十九");
}
