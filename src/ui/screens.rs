use crate::models::TreePath;
use crate::pages::Page;

/// Cursor within one of the navigation lists.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListCursor {
    pub(crate) selected: usize,
}

impl ListCursor {
    pub(crate) fn at(selected: usize) -> Self {
        Self { selected }
    }

    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max = len as isize - 1;
        let new = (self.selected as isize + offset).clamp(0, max);
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }
}

/// The four reader panes, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pane {
    Volumes,
    Books,
    Chapters,
    Verses,
}

impl Pane {
    pub(crate) fn title(self) -> &'static str {
        match self {
            Pane::Volumes => "Volumes",
            Pane::Books => "Books",
            Pane::Chapters => "Chapters",
            Pane::Verses => "Verses",
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Pane::Volumes | Pane::Books => Pane::Volumes,
            Pane::Chapters => Pane::Books,
            Pane::Verses => Pane::Chapters,
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Pane::Volumes => Pane::Books,
            Pane::Books => Pane::Chapters,
            Pane::Chapters | Pane::Verses => Pane::Verses,
        }
    }
}

/// Committed volume/book/chapter choice, as positions into the tree.
/// Choosing a parent always clears the levels below it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Selection {
    pub(crate) volume: Option<usize>,
    pub(crate) book: Option<usize>,
    pub(crate) chapter: Option<usize>,
}

impl Selection {
    pub(crate) fn select_volume(&mut self, volume: usize) {
        self.volume = Some(volume);
        self.book = None;
        self.chapter = None;
    }

    pub(crate) fn select_book(&mut self, book: usize) {
        if self.volume.is_some() {
            self.book = Some(book);
            self.chapter = None;
        }
    }

    pub(crate) fn select_chapter(&mut self, chapter: usize) {
        if self.book.is_some() {
            self.chapter = Some(chapter);
        }
    }

    pub(crate) fn path(&self) -> Option<TreePath> {
        Some(TreePath {
            volume: self.volume?,
            book: self.book?,
            chapter: self.chapter?,
        })
    }
}

impl From<TreePath> for Selection {
    fn from(path: TreePath) -> Self {
        Self {
            volume: Some(path.volume),
            book: Some(path.book),
            chapter: Some(path.chapter),
        }
    }
}

/// A content page being read.
pub(crate) struct PageScreen {
    pub(crate) page: Page,
    pub(crate) scroll: u16,
}

impl PageScreen {
    pub(crate) fn new(page: Page) -> Self {
        Self { page, scroll: 0 }
    }

    pub(crate) fn max_scroll(&self) -> u16 {
        let lines = self.page.body.lines().count();
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub(crate) fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = next as u16;
    }
}
