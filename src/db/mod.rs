//! Dataset loading, split by source format.

mod connection;
mod verses;

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing::info;

use crate::models::VerseRecord;

pub use connection::{data_dir, default_dataset_path, open_dataset};
pub use verses::{fetch_verse_records, read_json_records};

/// Load verse records from a JSON or SQLite dataset, picking the reader by
/// file extension.
pub fn load_verse_records(path: &Path) -> Result<Vec<VerseRecord>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let records = match extension.as_deref() {
        Some("json") => read_json_records(path)?,
        Some("sqlite" | "sqlite3" | "db") => {
            let conn = open_dataset(path)?;
            fetch_verse_records(&conn)?
        }
        _ => {
            return Err(anyhow!(
                "unsupported dataset format for {} (expected .json or .sqlite)",
                path.display()
            ))
        }
    };

    info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::{params, Connection};
    use std::fs;
    use tempfile::tempdir;

    const JSON_DATASET: &str = r#"[
        {
            "volume_title": "New Testament",
            "book_title": "Matthew",
            "book_short_title": "Matt.",
            "chapter_number": 5,
            "verse_number": 3,
            "verse_title": "Matthew 5:3",
            "verse_short_title": "Matt. 5:3",
            "scripture_text": "Blessed are the poor in spirit"
        },
        {
            "volume_title": "New Testament",
            "book_title": "Matthew",
            "chapter_number": 5,
            "scripture_text": "Blessed are they that mourn"
        }
    ]"#;

    fn seed_sqlite(path: &Path) {
        let conn = Connection::open(path).unwrap();
        conn.execute(
            "CREATE TABLE scriptures (
                volume_title TEXT NOT NULL,
                book_title TEXT NOT NULL,
                book_short_title TEXT,
                chapter_number INTEGER NOT NULL,
                verse_number INTEGER,
                verse_title TEXT,
                verse_short_title TEXT,
                scripture_text TEXT NOT NULL
            )",
            [],
        )
        .unwrap();
        let rows = [
            ("Old Testament", "Genesis", "Gen.", 1, 1, "In the beginning"),
            ("Old Testament", "Genesis", "Gen.", 1, 2, "And the earth"),
            ("Book of Mormon", "1 Nephi", "1 Ne.", 1, 1, "I, Nephi"),
        ];
        for (volume, book, short, chapter, verse, text) in rows {
            conn.execute(
                "INSERT INTO scriptures VALUES (?1, ?2, ?3, ?4, ?5, NULL, NULL, ?6)",
                params![volume, book, short, chapter, verse, text],
            )
            .unwrap();
        }
    }

    #[test]
    fn loads_json_with_optional_display_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scriptures.json");
        fs::write(&path, JSON_DATASET).unwrap();

        let records = load_verse_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].book_short_title, "Matt.");
        assert_eq!(records[1].book_short_title, "");
        assert_eq!(records[1].scripture_text, "Blessed are they that mourn");
    }

    #[test]
    fn loads_sqlite_and_tolerates_null_titles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scriptures.sqlite");
        seed_sqlite(&path);

        let records = load_verse_records(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].volume_title, "Old Testament");
        assert_eq!(records[2].book_title, "1 Nephi");
        assert_eq!(records[2].verse_title, "");
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scriptures.csv");
        fs::write(&path, "").unwrap();

        let err = load_verse_records(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported dataset format"));
    }

    #[test]
    fn missing_sqlite_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_verse_records(&dir.path().join("absent.sqlite")).unwrap_err();
        assert!(err.to_string().contains("dataset not found"));
    }

    #[test]
    fn malformed_json_reports_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_verse_records(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
