mod config;
mod error;

/// File name looked up in the working directory and the repository root.
pub const CONFIG_FILE_NAME: &str = ".affected-tests.toml";

pub use config::{ToolConfig, load_config, parse_config, read_config};
pub use error::ConfigError;

pub type Result<T> = std::result::Result<T, ConfigError>;
