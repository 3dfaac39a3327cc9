use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
}

impl FileStatus {
    /// Whether a file with this status can still be handed to a test runner.
    ///
    /// Deleted files are never runnable, so a removed test is never scheduled.
    #[must_use]
    pub fn is_runnable(self) -> bool {
        matches!(
            self,
            Self::Added | Self::Copied | Self::Modified | Self::Renamed
        )
    }
}

/// Which pair of snapshots a change query compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffScope {
    /// Index against the working tree (unstaged edits).
    WorkingTree,
    /// HEAD against the index (staged edits).
    Index,
    /// Merge base of the given reference and HEAD against HEAD, i.e. `base...HEAD`.
    MergeBase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub status: FileStatus,
    pub old_path: Option<PathBuf>,
}

impl FileChange {
    #[must_use]
    pub fn new(path: PathBuf, status: FileStatus) -> Self {
        Self {
            path,
            status,
            old_path: None,
        }
    }

    #[must_use]
    pub fn with_old_path(mut self, old_path: PathBuf) -> Self {
        self.old_path = Some(old_path);
        self
    }
}
