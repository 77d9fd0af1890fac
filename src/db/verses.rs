use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::models::VerseRecord;

/// Read every verse from the `scriptures` table (or view). Rows come back in
/// whatever order SQLite scans them; the tree builder does not depend on it
/// beyond verse order inside a chapter.
pub fn fetch_verse_records(conn: &Connection) -> Result<Vec<VerseRecord>> {
    let mut stmt = conn
        .prepare(
            "SELECT volume_title, book_title, book_short_title, chapter_number,
                    verse_number, verse_title, verse_short_title, scripture_text
             FROM scriptures",
        )
        .context("failed to prepare scriptures query")?;

    let records = stmt
        .query_map([], |row| {
            Ok(VerseRecord {
                volume_title: row.get(0)?,
                book_title: row.get(1)?,
                book_short_title: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                chapter_number: row.get(3)?,
                verse_number: row.get::<_, Option<u32>>(4)?.unwrap_or_default(),
                verse_title: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                verse_short_title: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
                scripture_text: row.get(7)?,
            })
        })
        .context("failed to iterate scriptures")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect scriptures")?;

    Ok(records)
}

/// Parse a JSON array of verse objects.
pub fn read_json_records(path: &Path) -> Result<Vec<VerseRecord>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open JSON dataset {}", path.display()))?;
    let records = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse JSON dataset {}", path.display()))?;
    Ok(records)
}
