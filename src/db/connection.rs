use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::{Connection, OpenFlags};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".scripture-reader";
/// Dataset file looked up inside the data directory when nothing is configured.
const DEFAULT_DATASET_NAME: &str = "lds-scriptures.json";

/// Open a SQLite dataset without write access. The dataset is shipped input,
/// so a missing file is an error rather than an empty database.
pub fn open_dataset(path: &Path) -> Result<Connection> {
    if !path.exists() {
        return Err(anyhow!("dataset not found at {}", path.display()));
    }

    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .with_context(|| format!("failed to open SQLite dataset {}", path.display()))
}

/// Resolve the application data directory inside the user's home.
pub fn data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

/// Where the dataset is expected when neither the CLI nor the settings name one.
pub fn default_dataset_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(DEFAULT_DATASET_NAME))
}
