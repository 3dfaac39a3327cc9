use std::path::{Path, PathBuf};

use affected_git::{DiffScope, FileChange};

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if `start_path` is not inside a git work tree.
    fn repository_root(&self, start_path: &Path) -> Result<PathBuf>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or HEAD is detached.
    fn current_branch(&self, repo_root: &Path) -> Result<String>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the lookup fails.
    fn branch_exists(&self, repo_root: &Path, name: &str) -> Result<bool>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the lookup fails.
    fn remote_branch_exists(&self, repo_root: &Path, remote: &str, name: &str) -> Result<bool>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the diff fails.
    fn changed_files(&self, repo_root: &Path, scope: &DiffScope) -> Result<Vec<FileChange>>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or status check fails.
    fn untracked_files(&self, repo_root: &Path) -> Result<Vec<PathBuf>>;
}
