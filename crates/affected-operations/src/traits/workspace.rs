use std::path::Path;

use affected_core::PathProbe;

/// Read-only view of files in the repository work tree.
pub trait Workspace: Send + Sync {
    fn exists(&self, repo_root: &Path, relative: &Path) -> bool;

    /// Contents of a small text file, `None` when missing or unreadable.
    fn read_to_string(&self, repo_root: &Path, relative: &Path) -> Option<String>;
}

/// Adapts a [`Workspace`] rooted at one repository to a [`PathProbe`].
pub struct WorkspaceProbe<'a, W: ?Sized> {
    workspace: &'a W,
    repo_root: &'a Path,
}

impl<'a, W: Workspace + ?Sized> WorkspaceProbe<'a, W> {
    #[must_use]
    pub fn new(workspace: &'a W, repo_root: &'a Path) -> Self {
        Self {
            workspace,
            repo_root,
        }
    }
}

impl<W: Workspace + ?Sized> PathProbe for WorkspaceProbe<'_, W> {
    fn exists(&self, relative: &Path) -> bool {
        self.workspace.exists(self.repo_root, relative)
    }
}
