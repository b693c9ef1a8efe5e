//! Verse records produced by retrieval.

use crate::store::VerseText;
use scripture_refs::{BookCode, verse_key};
use serde::{Deserialize, Serialize};

/// Placeholder text for a verse the store does not have.
pub fn placeholder(verse: u32) -> String {
    format!("(Verse {} not found in database)", verse)
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// One retrieved verse with its bilingual text and book names.
///
/// `id` is the retrieval key (`"Gen 1:1"`). When the store has no text for
/// the key, both text fields hold [`placeholder`] and the record is marked
/// missing. Only missing records carry `"missing": true` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseRecord {
    pub id: String,
    pub book_ref: BookCode,
    pub book_cn: String,
    pub book_en: String,
    pub chapter: u32,
    pub verse: u32,
    pub text_cn: String,
    pub text_en: String,
    #[serde(default, skip_serializing_if = "is_false")]
    missing: bool,
}

impl VerseRecord {
    pub fn new(book: BookCode, chapter: u32, verse: u32, text: Option<VerseText>) -> Self {
        let names = book.names();
        let missing = text.is_none();
        let VerseText { text_cn, text_en } = text.unwrap_or_else(|| VerseText {
            text_cn: placeholder(verse),
            text_en: placeholder(verse),
        });
        Self {
            id: verse_key(book, chapter, verse),
            book_ref: book,
            book_cn: names.cn.to_string(),
            book_en: names.en.to_string(),
            chapter,
            verse,
            text_cn,
            text_en,
            missing,
        }
    }

    /// True when the store had no text for this verse.
    pub fn is_placeholder(&self) -> bool {
        self.missing
    }
}
