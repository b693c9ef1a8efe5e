/*
 * store.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The verse store abstraction and its in-memory implementation.
 */

use crate::error::{Result, StoreError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Bundled sample corpus.
const SAMPLE_JSON: &str = include_str!("../data/sample.json");

/// Bilingual text of one verse.
///
/// The field names follow the corpus export format (`rcvCn`/`rcvEn`);
/// `textCn`/`textEn` are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseText {
    #[serde(rename = "rcvCn", alias = "textCn")]
    pub text_cn: String,
    #[serde(rename = "rcvEn", alias = "textEn")]
    pub text_en: String,
}

impl VerseText {
    pub fn new(text_cn: impl Into<String>, text_en: impl Into<String>) -> Self {
        Self {
            text_cn: text_cn.into(),
            text_en: text_en.into(),
        }
    }
}

/// Read-only key-value access to verse text.
///
/// Keys have the form `"<BookCode> <chapter>:<verse>"`. Implementations must
/// tolerate repeated and concurrent lookups. `Ok(None)` means the verse is not
/// in the corpus; `Err` is reserved for faults that prevent serving any
/// request.
#[async_trait]
pub trait VerseStore: Send + Sync {
    async fn lookup(&self, key: &str) -> Result<Option<VerseText>>;
}

/// Verse store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    verses: HashMap<String, VerseText>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object mapping keys to verse text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let verses: HashMap<String, VerseText> = serde_json::from_str(json)?;
        Ok(Self { verses })
    }

    /// Load a JSON corpus file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let verses: HashMap<String, VerseText> =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %path.display(), verses = verses.len(), "Loaded verse store");
        Ok(Self { verses })
    }

    /// The small corpus bundled with the crate (Gen 1:1-3, Exo 2:2, Rev 1:1).
    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_JSON)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: VerseText) {
        self.verses.insert(key.into(), text);
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, VerseText)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, VerseText)>>(iter: I) -> Self {
        Self {
            verses: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[async_trait]
impl VerseStore for MemoryStore {
    async fn lookup(&self, key: &str) -> Result<Option<VerseText>> {
        Ok(self.verses.get(key).cloned())
    }
}
