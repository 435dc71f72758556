//! Global configuration at ~/.config/veloria/config.toml

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{VeloriaError, VeloriaResult};
use crate::i18n::Lang;

static DEFAULT_DATA_DIR: &str = "~/.veloria";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

fn default_remember_me() -> bool {
    true
}

fn is_true(b: &bool) -> bool {
    *b
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VeloriaConfig {
    /// Where the durable key-value files live.
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Forces the UI language instead of the saved preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Default for `login` when `--remember` is not given.
    #[serde(default = "default_remember_me", skip_serializing_if = "is_true")]
    pub remember_me: bool,
}

impl Default for VeloriaConfig {
    fn default() -> Self {
        VeloriaConfig {
            data_dir: default_data_dir(),
            language: None,
            remember_me: true,
        }
    }
}

impl VeloriaConfig {
    pub fn config_path() -> VeloriaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| VeloriaError::Config("Could not determine config directory".into()))?
            .join("veloria");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, creating a commented default on first run.
    /// `VELORIA_*` environment variables override file values.
    pub fn load() -> VeloriaResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Environment::with_prefix("VELORIA").try_parsing(true))
            .build()
            .map_err(|e| VeloriaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| VeloriaError::Config(e.to_string()))
    }

    /// Load from an explicit file, without environment overrides.
    pub fn load_from(path: &Path) -> VeloriaResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| VeloriaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| VeloriaError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> VeloriaResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| VeloriaError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| VeloriaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a config file with all options commented out.
    pub fn create_default_config(path: &Path) -> VeloriaResult<()> {
        let contents = format!(
            "\
# veloria configuration

# Where clients, bookings and services are stored:
# data_dir = \"{}\"

# Interface language (\"ru\" or \"en\"); detected from the system when unset:
# language = \"ru\"

# Keep the login across runs:
# remember_me = true
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| VeloriaError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| VeloriaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    /// The data directory as written, keeping `~`.
    pub fn display_path(&self) -> &Path {
        &self.data_dir
    }

    /// Configured language, ignoring values that are not supported.
    pub fn language(&self) -> Option<Lang> {
        self.language.as_deref().and_then(Lang::parse)
    }
}
