use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    /// Host attributes, keyed without the `data-` prefix.
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// TOML lets flags be written as booleans; hosts only ever see strings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Flag(bool),
}

impl AttributeValue {
    #[must_use]
    pub fn as_attribute(&self) -> String {
        match self {
            AttributeValue::Text(s) => s.clone(),
            AttributeValue::Flag(b) => b.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// The file the configuration came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
    /// Host attributes with their full `data-` names.
    pub attributes: BTreeMap<String, String>,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
