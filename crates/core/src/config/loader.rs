use crate::config::types::{ConfigFile, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config file.
    ///
    /// An explicit `config_path` must exist. Without one, the default path is
    /// tried and defaults are used when nothing is there.
    ///
    /// # Errors
    ///
    /// [`ConfigFileError`] when the file is missing or unreadable, is not
    /// valid TOML, or declares an unsupported version.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigFileError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = default_config_path();
                if !p.exists() {
                    debug!("no config at {}, using defaults", p.display());
                    return Ok(ResolvedConfig::default());
                }
                p
            }
        };

        if !path.exists() {
            return Err(ConfigFileError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigFileError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigFileError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigFileError::BadVersion(cf.version));
        }

        Self::resolve(path, cf)
    }

    fn resolve(path: PathBuf, cf: ConfigFile) -> Result<ResolvedConfig, ConfigFileError> {
        let attributes = cf
            .attributes
            .iter()
            .map(|(name, value)| {
                let name = name.strip_prefix("data-").unwrap_or(name);
                (format!("data-{name}"), value.as_attribute())
            })
            .collect();

        // Resolve log file path if present
        let mut logging = cf.logging;
        if let Some(file) = logging.file.take() {
            logging.file = Some(expand_path(&file.to_string_lossy())?);
        }

        Ok(ResolvedConfig { source: Some(path), attributes, logging })
    }
}

#[must_use]
pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("datepicker").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("datepicker").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigFileError> {
    let expanded = full(input).map_err(|_| ConfigFileError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
