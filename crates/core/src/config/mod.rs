//! Configuration: widget options read from host attributes, and the TOML
//! file a host application uses to supply those attributes and its logging
//! settings.

pub mod loader;
pub mod options;
pub mod types;

pub use loader::{ConfigFileError, ConfigLoader};
pub use options::{ConfigError, WidgetOptions};
pub use types::{AttributeValue, ConfigFile, LoggingConfig, ResolvedConfig};
