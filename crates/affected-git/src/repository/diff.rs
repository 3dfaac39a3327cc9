use std::path::PathBuf;

use crate::{DiffScope, FileChange, FileStatus, GitError, Result};

use super::Repository;

impl Repository {
    /// Lists files changed within `scope`, with rename and copy detection.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if a merge-base reference cannot be
    /// resolved, [`GitError::NoMergeBase`] if it shares no history with HEAD,
    /// or any underlying git error.
    pub fn changed_files(&self, scope: &DiffScope) -> Result<Vec<FileChange>> {
        let mut diff = match scope {
            DiffScope::WorkingTree => {
                let mut opts = git2::DiffOptions::new();
                opts.include_untracked(false);
                self.inner.diff_index_to_workdir(None, Some(&mut opts))?
            }
            DiffScope::Index => {
                let head_tree = self.head_tree()?;
                self.inner
                    .diff_tree_to_index(head_tree.as_ref(), None, None)?
            }
            DiffScope::MergeBase(base) => {
                let base_tree = self.merge_base_tree(base)?;
                let head_tree = self.resolve_tree("HEAD")?;
                self.inner
                    .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?
            }
        };

        let mut find_opts = git2::DiffFindOptions::new();
        find_opts.renames(true);
        find_opts.copies(true);
        diff.find_similar(Some(&mut find_opts))?;

        let mut changes = Vec::new();

        for delta in diff.deltas() {
            let status = match delta.status() {
                git2::Delta::Added => FileStatus::Added,
                git2::Delta::Deleted => FileStatus::Deleted,
                git2::Delta::Modified => FileStatus::Modified,
                git2::Delta::Renamed => FileStatus::Renamed,
                git2::Delta::Copied => FileStatus::Copied,
                _ => continue,
            };

            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(PathBuf::from)
                .ok_or(GitError::MissingDeltaPath)?;

            let mut change = FileChange::new(path, status);

            if status == FileStatus::Renamed || status == FileStatus::Copied {
                if let Some(old_path) = delta.old_file().path() {
                    change = change.with_old_path(old_path.to_path_buf());
                }
            }

            changes.push(change);
        }

        Ok(changes)
    }

    /// Tree of HEAD, or `None` while the current branch has no commits yet.
    fn head_tree(&self) -> Result<Option<git2::Tree<'_>>> {
        match self.inner.head() {
            Ok(head) => Ok(Some(head.peel_to_tree()?)),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn merge_base_tree(&self, base: &str) -> Result<git2::Tree<'_>> {
        let base_commit = self
            .inner
            .revparse_single(base)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|_| GitError::RefNotFound {
                refspec: base.to_string(),
            })?;
        let head_commit = self.inner.head()?.peel_to_commit()?;

        let merge_base = self
            .inner
            .merge_base(base_commit.id(), head_commit.id())
            .map_err(|_| GitError::NoMergeBase {
                base: base.to_string(),
            })?;

        Ok(self.inner.find_commit(merge_base)?.tree()?)
    }

    fn resolve_tree(&self, refspec: &str) -> Result<git2::Tree<'_>> {
        let obj = self
            .inner
            .revparse_single(refspec)
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })?;

        obj.peel_to_tree().map_err(|_| GitError::RefNotFound {
            refspec: refspec.to_string(),
        })
    }
}
