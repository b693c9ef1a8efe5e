/*
 * retrieve.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Ordered retrieval of verse records.
//!
//! Output order is always: references in input order, verses ascending within
//! each reference. Duplicate verses coming from different references are
//! kept, since each one reflects a separate citation in the input.

use crate::error::Result;
use crate::record::VerseRecord;
use crate::store::VerseStore;
use futures::future::try_join_all;
use scripture_refs::{BookCode, ParsedReference, parse_references, verse_key};

/// Every (book, chapter, verse) triple in retrieval order.
fn verse_triples(refs: &[ParsedReference]) -> impl Iterator<Item = (BookCode, u32, u32)> + '_ {
    refs.iter().flat_map(|reference| {
        reference
            .verses
            .iter()
            .map(move |verse| (reference.book, reference.chapter, *verse))
    })
}

async fn fetch<S: VerseStore + ?Sized>(
    store: &S,
    book: BookCode,
    chapter: u32,
    verse: u32,
) -> Result<VerseRecord> {
    let key = verse_key(book, chapter, verse);
    let text = store.lookup(&key).await?;
    if text.is_none() {
        tracing::debug!(key = %key, "Verse not found, using placeholder");
    }
    Ok(VerseRecord::new(book, chapter, verse, text))
}

/// Look up every cited verse, one at a time.
///
/// Missing verses become placeholder records; only store faults fail the
/// batch.
pub async fn retrieve<S: VerseStore + ?Sized>(
    store: &S,
    refs: &[ParsedReference],
) -> Result<Vec<VerseRecord>> {
    let mut records = Vec::new();
    for (book, chapter, verse) in verse_triples(refs) {
        records.push(fetch(store, book, chapter, verse).await?);
    }
    Ok(records)
}

/// Like [`retrieve`], but issues all lookups at once.
///
/// The records come back in the same order [`retrieve`] produces.
pub async fn retrieve_concurrent<S: VerseStore + ?Sized>(
    store: &S,
    refs: &[ParsedReference],
) -> Result<Vec<VerseRecord>> {
    try_join_all(
        verse_triples(refs).map(|(book, chapter, verse)| fetch(store, book, chapter, verse)),
    )
    .await
}

/// Parse `text` and retrieve every verse it cites.
///
/// An empty result means no usable citation was found.
pub async fn find_verses<S: VerseStore + ?Sized>(
    store: &S,
    text: &str,
) -> Result<Vec<VerseRecord>> {
    let refs = parse_references(text);
    tracing::debug!(references = refs.len(), "Parsed citations");
    retrieve(store, &refs).await
}
