use std::path::{Path, PathBuf};

use config::{Config, ConfigError as ExternalConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

/// Settings file looked up in the working directory.
const PROJECT_CONFIG_FILE: &str = "scripture-reader.toml";
/// Prefix for environment overrides, e.g. `SCRIPTURE_READER_DATASET`.
const ENV_PREFIX: &str = "SCRIPTURE_READER";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration build/deserialize error")]
    Config(#[from] ExternalConfigError),
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Dataset file (`.json` or `.sqlite`). Falls back to the data directory.
    pub dataset: Option<PathBuf>,
    /// Directory holding `<slug>.md` content pages.
    pub pages_dir: Option<PathBuf>,
    /// Directory for the rolling log file.
    pub log_dir: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset: None,
            pages_dir: None,
            log_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Layer the user config file, the project file in `project_root`, and the
    /// environment, later sources winning.
    pub fn new(project_root: &Path) -> Result<Self, ConfigError> {
        let user_config_file = ProjectDirs::from("", "", "scripture-reader")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"));

        Self::load_from_paths(project_root, user_config_file.as_deref(), true)
    }

    fn load_from_paths(
        project_root: &Path,
        user_config_path: Option<&Path>,
        read_env: bool,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = user_config_path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        builder = builder.add_source(
            File::from(project_root.join(PROJECT_CONFIG_FILE))
                .format(FileFormat::Toml)
                .required(false),
        );

        if read_env {
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));
        }

        let config = builder.build()?;
        let settings = config.try_deserialize()?;
        Ok(settings)
    }
}
