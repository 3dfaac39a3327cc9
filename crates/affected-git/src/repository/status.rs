use std::path::PathBuf;

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::DetachedHead`] if HEAD is not on a branch.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.inner.head()?;

        if !head.is_branch() {
            return Err(GitError::DetachedHead);
        }

        head.shorthand()
            .map(String::from)
            .ok_or(GitError::DetachedHead)
    }

    /// Untracked, non-ignored files, descending into untracked directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the git status operation fails.
    pub fn untracked_files(&self) -> Result<Vec<PathBuf>> {
        let statuses = self.inner.statuses(Some(
            git2::StatusOptions::new()
                .include_untracked(true)
                .recurse_untracked_dirs(true)
                .include_ignored(false)
                .exclude_submodules(true),
        ))?;

        Ok(statuses
            .iter()
            .filter(|entry| entry.status().contains(git2::Status::WT_NEW))
            .filter_map(|entry| entry.path().map(PathBuf::from))
            .collect())
    }
}
