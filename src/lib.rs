//! Core library surface for the Scripture Reader TUI.
//!
//! The tree builder and the address codec are plain functions with no I/O;
//! everything that touches disk or the terminal lives in `db`, `pages`,
//! `config`, `logging` and `ui`.
pub mod config;
pub mod db;
pub mod library;
pub mod location;
pub mod logging;
pub mod models;
pub mod pages;
pub mod ui;

/// Dataset loading used by `main.rs` at startup.
pub use db::{default_dataset_path, load_verse_records};

/// Flat-to-tree grouping.
pub use library::{build_volumes, LibraryStats};

/// Address parsing, resolution and formatting.
pub use location::{
    format_fragment, parse_fragment, parse_route, parse_verse_numbers, resolve, resolve_location,
    slugify, Route,
};

pub use models::{Book, Chapter, LocationMatch, ScriptureLocation, TreePath, VerseRecord, Volume};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
