//! Static content pages addressed as `#/pages/<slug>`. Pages are markdown
//! files on disk, shown as lightly styled text.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Page not found.")]
    NotFound { slug: String },
    #[error("Invalid page name: {0:?}")]
    InvalidSlug(String),
    #[error("No pages directory configured.")]
    NoDirectory,
    #[error("Failed to read page {slug}")]
    Io {
        slug: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub slug: String,
    /// First `# ` heading, or the slug when the page has none.
    pub title: String,
    pub body: String,
}

impl Page {
    fn from_markdown(slug: &str, body: String) -> Self {
        let title = body
            .lines()
            .find_map(|line| line.strip_prefix("# "))
            .map(|heading| heading.trim().to_string())
            .unwrap_or_else(|| slug.to_string());
        Self {
            slug: slug.to_string(),
            title,
            body,
        }
    }
}

/// Reads pages from a single directory. A store without a directory answers
/// every lookup with [`PageError::NoDirectory`].
#[derive(Debug, Clone, Default)]
pub struct PageStore {
    dir: Option<PathBuf>,
}

impl PageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn empty() -> Self {
        Self { dir: None }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    pub fn load(&self, slug: &str) -> Result<Page, PageError> {
        validate_slug(slug)?;
        let dir = self.dir.as_ref().ok_or(PageError::NoDirectory)?;
        let path = dir.join(format!("{slug}.md"));
        debug!(path = %path.display(), "loading page");

        match fs::read_to_string(&path) {
            Ok(body) => Ok(Page::from_markdown(slug, body)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(PageError::NotFound {
                slug: slug.to_string(),
            }),
            Err(source) => Err(PageError::Io {
                slug: slug.to_string(),
                source,
            }),
        }
    }
}

fn validate_slug(slug: &str) -> Result<(), PageError> {
    let valid = !slug.is_empty()
        && slug != "."
        && !slug.contains("..")
        && !slug.contains(['/', '\\'])
        && !slug.chars().any(char::is_control);
    if valid {
        Ok(())
    } else {
        Err(PageError::InvalidSlug(slug.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_page_and_takes_title_from_heading() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("about.md"),
            "Intro line\n\n# About This Reader\n\nBody text.\n",
        )
        .unwrap();

        let page = PageStore::new(dir.path()).load("about").unwrap();
        assert_eq!(page.slug, "about");
        assert_eq!(page.title, "About This Reader");
        assert!(page.body.contains("Body text."));
    }

    #[test]
    fn title_falls_back_to_slug() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.md"), "## Only a subheading\n").unwrap();

        let page = PageStore::new(dir.path()).load("notes").unwrap();
        assert_eq!(page.title, "notes");
    }

    #[test]
    fn missing_page_reads_as_not_found() {
        let dir = tempdir().unwrap();
        let err = PageStore::new(dir.path()).load("missing").unwrap_err();
        assert!(matches!(err, PageError::NotFound { ref slug } if slug == "missing"));
        assert_eq!(err.to_string(), "Page not found.");
    }

    #[test]
    fn traversal_is_rejected() {
        let dir = tempdir().unwrap();
        let store = PageStore::new(dir.path());
        for slug in ["..", "../secret", "a/b", "a\\b", ""] {
            assert!(
                matches!(store.load(slug), Err(PageError::InvalidSlug(_))),
                "{slug:?} should be rejected"
            );
        }
    }

    #[test]
    fn store_without_directory() {
        let err = PageStore::empty().load("about").unwrap_err();
        assert!(matches!(err, PageError::NoDirectory));
    }
}
