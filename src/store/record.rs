//! JSONL persistence for the document store
//!
//! One JSON object per line, tagged by `kind`:
//!
//! ```text
//! {"kind":"document","id":"doc-001","filename":"manual.pdf",...}
//! {"kind":"page","documentId":"doc-001","pageNumber":1,"pageText":"[TITLE]...[/TITLE]"}
//! {"kind":"synonym","term":"继电器","synonyms":["Relay"]}
//! ```
//!
//! Writes go to a `.tmp` sibling, are synced, then renamed over the target,
//! so a crash leaves either the old file or the new one.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{Document, DocumentPage, StoreResult, SynonymEntry};

/// One line of the store file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreRecord {
    Document(Document),
    Page(DocumentPage),
    Synonym(SynonymEntry),
}

/// Read every well-formed record; a missing file reads as empty
pub fn read_records(path: &Path) -> StoreResult<Vec<StoreRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let mut records = Vec::new();

    for (line_number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<StoreRecord>(line) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!(
                "Skipping unreadable line {} in {}: {}",
                line_number + 1,
                path.display(),
                e
            ),
        }
    }

    Ok(records)
}

/// Atomically replace the file with the given records
pub fn write_records<'a, I>(path: &Path, records: I) -> StoreResult<()>
where
    I: IntoIterator<Item = &'a StoreRecord>,
{
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(&temp_path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;
    Ok(())
}
