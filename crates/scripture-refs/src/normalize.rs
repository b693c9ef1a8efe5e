//! Punctuation normalization applied before citation matching.
//!
//! Citations arrive typed on Chinese keyboards, pasted from documents or
//! recognized by OCR, so the same reference shows up with fullwidth colons,
//! assorted dashes and chapter/verse marker characters. [`normalize`] folds
//! all of them into the ASCII shapes the matcher expects.

/// Map one character to its normalized replacement.
///
/// `None` removes the character.
fn fold(c: char) -> Option<char> {
    match c {
        // Ordinal prefix, as in 第三章
        '第' => None,
        // Chapter and verse markers become token separators
        '章' | '节' => Some(' '),
        '\u{3000}' => Some(' '),
        '\u{2010}'..='\u{2015}' | '\u{2212}' => Some('-'),
        // Fullwidth ASCII block: ：，；－ and fullwidth digits/letters
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0),
        _ => Some(c),
    }
}

/// Rewrite raw input into canonical punctuation.
///
/// Every output character lies outside the set of characters that get
/// rewritten, so the function is idempotent.
pub fn normalize(input: &str) -> String {
    input.chars().filter_map(fold).collect()
}
