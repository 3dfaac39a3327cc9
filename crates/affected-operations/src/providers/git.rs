use std::path::{Path, PathBuf};

use affected_git::{DiffScope, FileChange, Repository};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn repository_root(&self, start_path: &Path) -> Result<PathBuf> {
        Ok(affected_git::repository_root(start_path)?)
    }

    fn current_branch(&self, repo_root: &Path) -> Result<String> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.current_branch()?)
    }

    fn branch_exists(&self, repo_root: &Path, name: &str) -> Result<bool> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.branch_exists(name)?)
    }

    fn remote_branch_exists(&self, repo_root: &Path, remote: &str, name: &str) -> Result<bool> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.remote_branch_exists(remote, name)?)
    }

    fn changed_files(&self, repo_root: &Path, scope: &DiffScope) -> Result<Vec<FileChange>> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.changed_files(scope)?)
    }

    fn untracked_files(&self, repo_root: &Path) -> Result<Vec<PathBuf>> {
        let repo = Repository::open(repo_root)?;
        Ok(repo.untracked_files()?)
    }
}
