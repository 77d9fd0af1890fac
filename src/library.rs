//! Turns the flat verse list into the Volume → Book → Chapter tree.
//!
//! Volumes and books keep the order in which they were first encountered;
//! only chapters get sorted.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::models::{Book, Chapter, Volume, VerseRecord};

/// Insertion-ordered map keyed by name.
struct OrderedGroups<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> OrderedGroups<V> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn entry(&mut self, key: &str) -> &mut V {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.to_string(), position);
                self.entries.push((key.to_string(), V::default()));
                position
            }
        };
        &mut self.entries[position].1
    }

    fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V: Default> Default for OrderedGroups<V> {
    fn default() -> Self {
        Self::new()
    }
}

type ChapterGroups = BTreeMap<u32, Vec<String>>;
type BookGroups = OrderedGroups<ChapterGroups>;

/// Group verse records into the scripture tree.
///
/// Never fails: an empty input gives an empty tree. Ids on the produced nodes
/// are 1-based positions meant for list keys only.
pub fn build_volumes<'a, I>(records: I) -> Vec<Volume>
where
    I: IntoIterator<Item = &'a VerseRecord>,
{
    let mut volumes: OrderedGroups<BookGroups> = OrderedGroups::new();
    let mut record_count = 0usize;

    for record in records {
        volumes
            .entry(&record.volume_title)
            .entry(&record.book_title)
            .entry(record.chapter_number)
            .or_default()
            .push(record.scripture_text.clone());
        record_count += 1;
    }

    let volumes: Vec<Volume> = volumes
        .into_entries()
        .into_iter()
        .enumerate()
        .map(|(volume_idx, (name, books))| Volume {
            id: volume_idx + 1,
            name,
            books: books
                .into_entries()
                .into_iter()
                .enumerate()
                .map(|(book_idx, (name, chapters))| Book {
                    id: book_idx + 1,
                    name,
                    chapters: chapters
                        .into_iter()
                        .enumerate()
                        .map(|(chapter_idx, (number, verses))| Chapter {
                            id: chapter_idx + 1,
                            number,
                            verses,
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    debug!(
        records = record_count,
        volumes = volumes.len(),
        "built scripture tree"
    );
    volumes
}

/// Aggregate counts over a built tree, shown in the header and logged at
/// startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibraryStats {
    pub volumes: usize,
    pub books: usize,
    pub chapters: usize,
    pub verses: usize,
}

impl LibraryStats {
    pub fn of(volumes: &[Volume]) -> Self {
        let mut stats = Self {
            volumes: volumes.len(),
            ..Self::default()
        };
        for book in volumes.iter().flat_map(|v| &v.books) {
            stats.books += 1;
            stats.chapters += book.chapters.len();
            stats.verses += book.chapters.iter().map(|c| c.verses.len()).sum::<usize>();
        }
        stats
    }
}
