//! Binary entry point: load settings and the dataset, build the tree once,
//! then either print a location or hand the tree to the reader UI.
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use scripture_reader::config::Settings;
use scripture_reader::db::data_dir;
use scripture_reader::logging::init_tracing;
use scripture_reader::pages::PageStore;
use scripture_reader::{
    build_volumes, default_dataset_path, load_verse_records, parse_fragment, resolve_location,
    run_app, App, LibraryStats, LocationMatch, Volume,
};

#[derive(Parser, Debug)]
#[command(name = "scripture-reader", version, about = "Read scriptures in the terminal")]
struct Cli {
    /// Address to open, e.g. `#/new-testament/matthew/5/3-5`.
    location: Option<String>,

    /// Dataset file (`.json` or `.sqlite`).
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Directory of markdown pages reachable as `#/pages/<slug>`.
    #[arg(long)]
    pages: Option<PathBuf>,

    /// Print the location to stdout instead of starting the reader.
    #[arg(long, requires = "location")]
    print: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let settings = Settings::new(&cwd).context("failed to load settings")?;

    let log_dir = match &settings.log_dir {
        Some(dir) => dir.clone(),
        None => data_dir()?.join("logs"),
    };
    let _guard = init_tracing(&log_dir, &settings.log_filter)?;

    let dataset = match cli.dataset.or(settings.dataset) {
        Some(path) => path,
        None => default_dataset_path()?,
    };
    let records = load_verse_records(&dataset)?;
    let volumes = build_volumes(&records);
    drop(records);

    let stats = LibraryStats::of(&volumes);
    info!(
        volumes = stats.volumes,
        books = stats.books,
        chapters = stats.chapters,
        verses = stats.verses,
        "scripture tree ready"
    );

    if cli.print {
        let fragment = cli.location.as_deref().unwrap_or_default();
        let printed = print_location(&volumes, fragment, &mut io::stdout().lock())?;
        return Ok(if printed {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let pages = match cli.pages.or(settings.pages_dir) {
        Some(dir) => PageStore::new(dir),
        None => PageStore::new(data_dir()?.join("pages")),
    };
    if let Some(dir) = pages.dir() {
        info!(pages = %dir.display(), "content pages");
    }

    let mut app = App::new(volumes, pages);
    if let Some(fragment) = cli.location.as_deref() {
        if !app.navigate(fragment) {
            info!(fragment, "start location ignored");
        }
    }
    run_app(&mut app)?;
    Ok(ExitCode::SUCCESS)
}

/// Write a chapter (or just the addressed verses) as plain text. Returns
/// `false` when the address does not parse or resolve.
fn print_location<W: Write>(volumes: &[Volume], fragment: &str, out: &mut W) -> Result<bool> {
    let Some(location) = parse_fragment(fragment) else {
        error!(fragment, "address did not parse");
        eprintln!("Not a scripture address: {fragment}");
        return Ok(false);
    };
    let Some(LocationMatch { book, chapter, .. }) = resolve_location(volumes, &location) else {
        error!(fragment, "address did not resolve");
        eprintln!("No scripture found at {fragment}");
        return Ok(false);
    };

    let wanted = match location.verse_numbers {
        Some(verses) if !verses.is_empty() => verses,
        _ => (1..=chapter.verses.len() as u32).collect(),
    };
    writeln!(out, "{} {}", book.name, chapter.number)?;
    for number in wanted {
        if let Some(text) = chapter.verse(number) {
            writeln!(out, "{number}. {text}")?;
        }
    }
    Ok(true)
}
