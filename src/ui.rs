//! Ratatui front end: a four-pane reader (volumes, books, chapters, verses)
//! with an address line that mirrors the current selection.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
