/*
 * matcher.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Citation pattern scanning.
//!
//! The matcher finds the raw shape of a citation in normalized text:
//!
//! ```text
//! <book> <chapter> <separator> <verses>
//!  创      一                    1-3
//!  Gen     1          :          1-3
//!  1 Cor   13         :          4
//! ```
//!
//! It mostly does not decide whether the pieces are meaningful. Book
//! resolution and numeral conversion happen in the assembler, which drops
//! candidates that fail. Matches never overlap; scanning resumes right after
//! the end of the previous match whether or not that match was usable.
//!
//! The one exception is an ordinal book (`3 Rev`) that names no book. The
//! digit is then stray text, and scanning restarts at the bare name so that
//! `chapter 3 Rev 1:1` still yields `Rev 1:1`.

use crate::books;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Citation pattern.
///
/// - `book`: either an ordinal 1-3 followed by Latin letters (`1Cor`,
///   `2 Ki`), or a greedy run of Latin letters and CJK ideographs. The run
///   backtracks character by character when the rest of the pattern does not
///   fit, which is what splits `启一1` into `启` + `一` + `1`.
/// - `chapter`: ASCII digits or Chinese numerals.
/// - separator: any run of whitespace and colons, possibly empty.
/// - `verses`: ASCII digits with an optional `-`/whitespace second number,
///   or Chinese numerals with an optional `至`/`-` second numeral.
///
/// `[0-9]` is spelled out because `\d` matches every Unicode digit.
static CITATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<book>[1-3] ?[A-Za-z]+|[A-Za-z\x{4e00}-\x{9fa5}]+)",
        r"\s*",
        r"(?P<chapter>[0-9]+|[一二三四五六七八九十]+)",
        r"[\s:]*",
        r"(?P<verses>[0-9]+(?:[\s-][0-9]+)?|[一二三四五六七八九十]+(?:[至-][一二三四五六七八九十]+)?)",
    ))
    .expect("Invalid regex pattern for citations")
});

/// The unresolved pieces of one citation candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCitation<'a> {
    pub book: &'a str,
    pub chapter: &'a str,
    pub verses: &'a str,
    /// Byte range of the whole match in the scanned text.
    pub span: Range<usize>,
}

/// Offset of the letters in an ordinal book token that resolves to nothing.
fn stray_ordinal(book: &str) -> Option<usize> {
    if !book.starts_with(['1', '2', '3']) || books::resolve(book).is_some() {
        return None;
    }
    book.find(|c: char| c.is_ascii_alphabetic())
}

/// Scan normalized text for citation candidates, left to right.
pub fn find_citations(text: &str) -> impl Iterator<Item = RawCitation<'_>> {
    let mut at = 0;
    std::iter::from_fn(move || {
        while at <= text.len() {
            let caps = CITATION_PATTERN.captures_at(text, at)?;
            let whole = caps.get(0)?;
            let book = caps.name("book")?;
            if let Some(letters) = stray_ordinal(book.as_str()) {
                at = book.start() + letters;
                continue;
            }
            at = whole.end();
            return Some(RawCitation {
                book: book.as_str(),
                chapter: caps.name("chapter")?.as_str(),
                verses: caps.name("verses")?.as_str(),
                span: whole.range(),
            });
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples(text: &str) -> Vec<(&str, &str, &str)> {
        find_citations(text)
            .map(|c| (c.book, c.chapter, c.verses))
            .collect()
    }

    #[test]
    fn test_english_citation() {
        assert_eq!(triples("Gen 1:1-3"), vec![("Gen", "1", "1-3")]);
        assert_eq!(triples("Gen1:1"), vec![("Gen", "1", "1")]);
        assert_eq!(triples("Gen 1 1"), vec![("Gen", "1", "1")]);
    }

    #[test]
    fn test_chinese_book_backtracks_into_numeral_chapter() {
        assert_eq!(triples("启一1"), vec![("启", "一", "1")]);
        assert_eq!(triples("创一1-3"), vec![("创", "一", "1-3")]);
        assert_eq!(triples("约翰一书1:9"), vec![("约翰一书", "1", "9")]);
    }

    #[test]
    fn test_chinese_verse_range() {
        assert_eq!(triples("创 一 一至三"), vec![("创", "一", "一至三")]);
        assert_eq!(triples("创一:一-三"), vec![("创", "一", "一-三")]);
    }

    #[test]
    fn test_multiple_citations_in_order() {
        assert_eq!(
            triples("创1:1, Ex 2:2; Rev 1:1"),
            vec![("创", "1", "1"), ("Ex", "2", "2"), ("Rev", "1", "1")]
        );
    }

    #[test]
    fn test_numbered_english_books() {
        assert_eq!(triples("1 Cor 13:4-7"), vec![("1 Cor", "13", "4-7")]);
        assert_eq!(triples("2Ki 3:3"), vec![("2Ki", "3", "3")]);
    }

    #[test]
    fn test_unknown_ordinal_restarts_at_book_name() {
        assert_eq!(triples("chapter 3 Rev 1:1"), vec![("Rev", "1", "1")]);
        assert_eq!(triples("v1 Gen 2:3"), vec![("Gen", "2", "3")]);
        let spans: Vec<_> = find_citations("Gen 1:1-2 3 Exo 2:2")
            .map(|c| c.span)
            .collect();
        assert_eq!(spans, vec![0..9, 12..19]);
    }

    #[test]
    fn test_whitespace_second_verse_is_captured() {
        assert_eq!(triples("Gen 1:1 3"), vec![("Gen", "1", "1 3")]);
    }

    #[test]
    fn test_unknown_words_still_match_shape() {
        // Shape only: resolution happens later.
        assert_eq!(triples("Xyz 1:1"), vec![("Xyz", "1", "1")]);
    }

    #[test]
    fn test_spans_do_not_overlap() {
        let text = "Gen 1:1 Exo 2:2";
        let spans: Vec<_> = find_citations(text).map(|c| c.span).collect();
        assert_eq!(spans, vec![0..7, 8..15]);
    }

    #[test]
    fn test_no_citation() {
        assert!(triples("no references here").is_empty());
        assert!(triples("").is_empty());
        assert!(triples("12:3").is_empty());
    }
}
