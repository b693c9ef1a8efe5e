/*
 * reference.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Assembly of structured references from raw text.

use crate::books::{self, BookCode};
use crate::matcher::{RawCitation, find_citations};
use crate::normalize::normalize;
use crate::numeral;
use crate::range;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved citation: one book, one chapter and the verses cited in it.
///
/// `verses` is non-empty and strictly ascending. Chapter and verse numbers
/// are at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReference {
    pub book: BookCode,
    pub chapter: u32,
    pub verses: Vec<u32>,
}

impl ParsedReference {
    /// Retrieval key of every cited verse, in verse order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.verses
            .iter()
            .map(|verse| verse_key(self.book, self.chapter, *verse))
    }
}

/// Retrieval key for one verse: `"<code> <chapter>:<verse>"`.
pub fn verse_key(book: BookCode, chapter: u32, verse: u32) -> String {
    format!("{} {}:{}", book.code(), chapter, verse)
}

impl fmt::Display for ParsedReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:", self.book, self.chapter)?;
        match (self.verses.first(), self.verses.last()) {
            (Some(first), Some(last)) if first != last => write!(f, "{}-{}", first, last),
            (Some(first), _) => write!(f, "{}", first),
            (None, _) => Ok(()),
        }
    }
}

/// Resolve one raw citation, or explain why it was dropped.
fn assemble(raw: &RawCitation<'_>) -> Result<ParsedReference, &'static str> {
    let book = books::resolve(raw.book.trim()).ok_or("unknown book")?;
    let chapter = numeral::convert(raw.chapter)
        .filter(|c| *c >= 1)
        .ok_or("bad chapter")?;
    let verses = range::expand(raw.verses);
    if verses.is_empty() {
        return Err("bad verse range");
    }
    Ok(ParsedReference {
        book,
        chapter,
        verses,
    })
}

/// Parse every citation in free-form text.
///
/// Candidates with an unknown book, an unusable chapter or an invalid verse
/// range are skipped. The result follows the order of appearance and is
/// empty when nothing usable was found.
pub fn parse_references(input: &str) -> Vec<ParsedReference> {
    let text = normalize(input);
    find_citations(&text)
        .filter_map(|raw| match assemble(&raw) {
            Ok(reference) => Some(reference),
            Err(reason) => {
                tracing::debug!(
                    book = raw.book,
                    chapter = raw.chapter,
                    verses = raw.verses,
                    reason,
                    "Dropping citation candidate"
                );
                None
            }
        })
        .collect()
}
