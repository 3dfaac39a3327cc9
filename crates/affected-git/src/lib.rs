mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::{DiffScope, FileChange, FileStatus};

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, GitError>;

/// Remote consulted when a base branch is not available locally.
pub const DEFAULT_REMOTE: &str = "origin";

/// # Errors
///
/// Returns [`GitError::NotARepository`] if the path is not inside a git work tree.
pub fn repository_root(path: &Path) -> Result<PathBuf> {
    Ok(Repository::open(path)?.root().to_path_buf())
}

/// # Errors
///
/// Returns an error if the path is not a git repository or if HEAD is detached.
pub fn current_branch(path: &Path) -> Result<String> {
    Repository::open(path)?.current_branch()
}
