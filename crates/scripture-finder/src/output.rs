//! Rendering of results to stdout.

use crate::config::OutputFormat;
use anyhow::Result;
use scripture_refs::ParsedReference;
use scripture_store::VerseRecord;

/// Plain listing: a header with both book names, then the Chinese and
/// English text. Records are separated by a blank line.
pub fn render_text(records: &[VerseRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "{} {}:{} | {} {}:{}\n{}\n{}",
                r.book_cn, r.chapter, r.verse, r.book_en, r.chapter, r.verse, r.text_cn, r.text_en
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_records(records: &[VerseRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(records)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

pub fn render_references(refs: &[ParsedReference], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(refs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(refs)?),
    }
}
