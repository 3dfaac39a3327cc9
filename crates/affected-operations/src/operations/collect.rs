use std::path::Path;

use affected_git::{DEFAULT_REMOTE, DiffScope};
use indexmap::IndexSet;
use tracing::debug;

use crate::traits::GitProvider;
use crate::{ChangeSources, RunContext};

/// Gathers changed paths from the enabled change sources.
pub struct ChangeCollector<'a, G> {
    git: &'a G,
}

impl<'a, G: GitProvider> ChangeCollector<'a, G> {
    #[must_use]
    pub fn new(git: &'a G) -> Self {
        Self { git }
    }

    /// Repository-relative paths changed by the enabled sources, deduplicated
    /// in first-seen order: unstaged, untracked, staged, committed.
    ///
    /// Deleted files are never included; renames contribute their new path.
    /// A failing query contributes nothing and the remaining sources still run.
    #[must_use]
    pub fn collect(&self, context: &RunContext, sources: ChangeSources) -> IndexSet<String> {
        let mut paths = IndexSet::new();

        if sources.unstaged {
            paths.extend(self.changes(context, &DiffScope::WorkingTree));
            paths.extend(self.untracked(context));
        }

        if sources.staged {
            paths.extend(self.changes(context, &DiffScope::Index));
        }

        if sources.committed {
            if let Some(base) = self.committed_base(context) {
                paths.extend(self.changes(context, &DiffScope::MergeBase(base)));
            }
        }

        paths.retain(|path| !path.is_empty());
        debug!(count = paths.len(), "collected changed paths");
        paths
    }

    fn changes(&self, context: &RunContext, scope: &DiffScope) -> Vec<String> {
        match self.git.changed_files(&context.repo_root, scope) {
            Ok(changes) => changes
                .into_iter()
                .filter(|change| change.status.is_runnable())
                .map(|change| path_string(&change.path))
                .collect(),
            Err(e) => {
                debug!(?scope, error = %e, "change query failed, skipping source");
                Vec::new()
            }
        }
    }

    fn untracked(&self, context: &RunContext) -> Vec<String> {
        match self.git.untracked_files(&context.repo_root) {
            Ok(paths) => paths.iter().map(|path| path_string(path)).collect(),
            Err(e) => {
                debug!(error = %e, "untracked query failed, skipping source");
                Vec::new()
            }
        }
    }

    /// Reference to diff committed changes against, or `None` when the
    /// current branch is the base branch or the base cannot be found.
    fn committed_base(&self, context: &RunContext) -> Option<String> {
        let root = &context.repo_root;
        let base = &context.base_branch;

        match self.git.current_branch(root) {
            Ok(current) if current == *base => {
                debug!(%base, "on base branch, skipping committed changes");
                return None;
            }
            Ok(_) => {}
            Err(e) => debug!(error = %e, "current branch unknown, comparing against base"),
        }

        if self.git.branch_exists(root, base).unwrap_or(false) {
            return Some(base.clone());
        }

        if self
            .git
            .remote_branch_exists(root, DEFAULT_REMOTE, base)
            .unwrap_or(false)
        {
            return Some(format!("{DEFAULT_REMOTE}/{base}"));
        }

        debug!(%base, "base branch not found, skipping committed changes");
        None
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
