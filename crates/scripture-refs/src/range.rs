//! Verse range expansion.
//!
//! A verse token is either a single numeral or two numerals joined by `-` or
//! `至`. The token expands to nothing when:
//!
//! - a part is not a convertible numeral of at least 1,
//! - the range runs backwards (`end < start`),
//! - or it spans more than [`MAX_RANGE_SPAN`] verses.
//!
//! The span cap only bounds allocation. No chapter in the canon comes near it,
//! so any range it rejects already cites verses that no store holds.

use crate::numeral::convert;

/// Longest span a single range may expand to. The longest chapter in the
/// canon (Psalm 119) has 176 verses.
pub const MAX_RANGE_SPAN: u32 = 200;

fn verse_number(token: &str) -> Option<u32> {
    convert(token.trim()).filter(|v| *v >= 1)
}

/// Expand a verse-range token into explicit verse numbers.
///
/// `"3"` expands to `[3]`, `"1-3"` and `"一至三"` to `[1, 2, 3]`. A range that
/// does not split into exactly two convertible numbers, runs backwards or
/// exceeds [`MAX_RANGE_SPAN`] expands to nothing; partial ranges are never
/// salvaged.
pub fn expand(token: &str) -> Vec<u32> {
    if token.contains(['-', '至']) {
        let mut parts = token.split(['-', '至']);
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return Vec::new();
        };
        let (Some(start), Some(end)) = (verse_number(start), verse_number(end)) else {
            return Vec::new();
        };
        if end < start || end - start >= MAX_RANGE_SPAN {
            return Vec::new();
        }
        (start..=end).collect()
    } else {
        verse_number(token).into_iter().collect()
    }
}
