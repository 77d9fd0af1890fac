//! Domain models for the scripture tree and the locations that point into it.
//! The flat `VerseRecord` mirrors one row of the source dataset; everything
//! else is produced from those rows once at startup and never mutated.

use std::fmt;

use serde::Deserialize;

/// One verse as it appears in the dataset. Only the volume title, book title,
/// chapter number and text feed the tree; the remaining columns are kept so
/// views can show short titles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerseRecord {
    pub volume_title: String,
    pub book_title: String,
    #[serde(default)]
    pub book_short_title: String,
    pub chapter_number: u32,
    /// Carried through from the dataset but never used for ordering. A verse's
    /// number is its position within the chapter.
    #[serde(default)]
    pub verse_number: u32,
    #[serde(default)]
    pub verse_title: String,
    #[serde(default)]
    pub verse_short_title: String,
    pub scripture_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Top-level grouping such as "Old Testament".
pub struct Volume {
    /// Positional list key (1-based, emission order). Not a lookup key.
    pub id: usize,
    pub name: String,
    /// Books in the order they were first seen in the dataset.
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Positional list key within the volume.
    pub id: usize,
    pub name: String,
    /// Chapters sorted by ascending number.
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Positional list key within the book.
    pub id: usize,
    pub number: u32,
    /// Verse texts in dataset order; verse `n` lives at index `n - 1`.
    pub verses: Vec<String>,
}

impl Chapter {
    /// Look up a verse by its 1-based number.
    pub fn verse(&self, number: u32) -> Option<&str> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.verses.get(index).map(String::as_str)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A navigable position parsed from an address. The names are still in slug
/// form; resolution against the tree turns them back into nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptureLocation {
    pub volume_name: String,
    pub book_name: String,
    pub chapter_number: u32,
    /// `None` when the address carried no verse segment. `Some(vec![])` when it
    /// did but none of its tokens were valid.
    pub verse_numbers: Option<Vec<u32>>,
}

/// Positions of a volume, book and chapter inside the tree. The UI keeps its
/// selection in this form so it always points at the shared nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreePath {
    pub volume: usize,
    pub book: usize,
    pub chapter: usize,
}

/// Successful resolution of a location: borrowed nodes plus their positions.
#[derive(Debug, Clone, Copy)]
pub struct LocationMatch<'a> {
    pub volume: &'a Volume,
    pub book: &'a Book,
    pub chapter: &'a Chapter,
    pub path: TreePath,
}
