use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::{CONFIG_FILE_NAME, Result};

/// Contents of `.affected-tests.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolConfig {
    base_branch: Option<String>,
    command: Option<String>,
}

impl ToolConfig {
    /// Configured base branch, ignoring blank values.
    #[must_use]
    pub fn base_branch(&self) -> Option<&str> {
        self.base_branch
            .as_deref()
            .map(str::trim)
            .filter(|branch| !branch.is_empty())
    }

    /// Configured test command split on whitespace, ignoring blank values.
    #[must_use]
    pub fn command(&self) -> Option<Vec<String>> {
        let tokens: Vec<String> = self
            .command
            .as_deref()?
            .split_whitespace()
            .map(String::from)
            .collect();

        (!tokens.is_empty()).then_some(tokens)
    }
}

/// # Errors
///
/// Returns [`ConfigError::Parse`] if `content` is not a valid config document.
pub fn parse_config(content: &str, path: &Path) -> Result<ToolConfig> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// # Errors
///
/// Returns [`ConfigError::Read`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is malformed.
pub fn read_config(path: &Path) -> Result<ToolConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

/// Loads the first readable, well-formed config file found in `dirs`.
///
/// Missing, unreadable and malformed files are skipped.
pub fn load_config<'a, I>(dirs: I) -> Option<ToolConfig>
where
    I: IntoIterator<Item = &'a Path>,
{
    for dir in dirs {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            continue;
        }

        match read_config(&path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                return Some(config);
            }
            Err(e) => debug!(path = %path.display(), error = %e, "ignoring config"),
        }
    }

    None
}
