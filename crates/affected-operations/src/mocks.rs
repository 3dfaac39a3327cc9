use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use affected_git::{DiffScope, FileChange, GitError};

use crate::traits::{CommandRunner, GitProvider, RunReporter, Workspace};
use crate::{OperationError, Result, TestCommand};

pub struct MockGitProvider {
    root: Option<PathBuf>,
    branch: Option<String>,
    local_branches: HashSet<String>,
    remote_branches: HashSet<String>,
    working_tree: Vec<FileChange>,
    index: Vec<FileChange>,
    committed: Vec<FileChange>,
    untracked: Vec<PathBuf>,
    failing: HashSet<&'static str>,
    queried_scopes: Mutex<Vec<DiffScope>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Some(PathBuf::from("/mock/repo")),
            branch: Some("feature".to_string()),
            local_branches: HashSet::from(["main".to_string()]),
            remote_branches: HashSet::new(),
            working_tree: Vec::new(),
            index: Vec::new(),
            committed: Vec::new(),
            untracked: Vec::new(),
            failing: HashSet::new(),
            queried_scopes: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_root(mut self, root: &Path) -> Self {
        self.root = Some(root.to_path_buf());
        self
    }

    #[must_use]
    pub fn not_a_repository() -> Self {
        Self {
            root: None,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = Some(branch.to_string());
        self
    }

    #[must_use]
    pub fn detached(mut self) -> Self {
        self.branch = None;
        self
    }

    #[must_use]
    pub fn with_local_branches(mut self, branches: &[&str]) -> Self {
        self.local_branches = branches.iter().map(|b| (*b).to_string()).collect();
        self
    }

    /// Branches present under the default remote, given without the remote prefix.
    #[must_use]
    pub fn with_remote_branches(mut self, branches: &[&str]) -> Self {
        self.remote_branches = branches.iter().map(|b| (*b).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_working_tree_changes(mut self, changes: Vec<FileChange>) -> Self {
        self.working_tree = changes;
        self
    }

    #[must_use]
    pub fn with_index_changes(mut self, changes: Vec<FileChange>) -> Self {
        self.index = changes;
        self
    }

    #[must_use]
    pub fn with_committed_changes(mut self, changes: Vec<FileChange>) -> Self {
        self.committed = changes;
        self
    }

    #[must_use]
    pub fn with_untracked(mut self, paths: &[&str]) -> Self {
        self.untracked = paths.iter().map(PathBuf::from).collect();
        self
    }

    /// Makes a query fail: `"working-tree"`, `"index"`, `"merge-base"` or `"untracked"`.
    #[must_use]
    pub fn failing(mut self, query: &'static str) -> Self {
        self.failing.insert(query);
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn queried_scopes(&self) -> Vec<DiffScope> {
        self.queried_scopes.lock().expect("lock poisoned").clone()
    }

    fn check(&self, query: &'static str) -> Result<()> {
        if self.failing.contains(query) {
            return Err(GitError::RefNotFound {
                refspec: query.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn repository_root(&self, start_path: &Path) -> Result<PathBuf> {
        self.root.clone().ok_or_else(|| {
            GitError::NotARepository {
                path: start_path.to_path_buf(),
            }
            .into()
        })
    }

    fn current_branch(&self, _repo_root: &Path) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| GitError::DetachedHead.into())
    }

    fn branch_exists(&self, _repo_root: &Path, name: &str) -> Result<bool> {
        Ok(self.local_branches.contains(name))
    }

    fn remote_branch_exists(&self, _repo_root: &Path, remote: &str, name: &str) -> Result<bool> {
        Ok(remote == affected_git::DEFAULT_REMOTE && self.remote_branches.contains(name))
    }

    fn changed_files(&self, _repo_root: &Path, scope: &DiffScope) -> Result<Vec<FileChange>> {
        self.queried_scopes
            .lock()
            .expect("lock poisoned")
            .push(scope.clone());

        match scope {
            DiffScope::WorkingTree => {
                self.check("working-tree")?;
                Ok(self.working_tree.clone())
            }
            DiffScope::Index => {
                self.check("index")?;
                Ok(self.index.clone())
            }
            DiffScope::MergeBase(_) => {
                self.check("merge-base")?;
                Ok(self.committed.clone())
            }
        }
    }

    fn untracked_files(&self, _repo_root: &Path) -> Result<Vec<PathBuf>> {
        self.check("untracked")?;
        Ok(self.untracked.clone())
    }
}

pub struct MockWorkspace {
    files: HashMap<PathBuf, String>,
}

impl MockWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_files(mut self, paths: &[&str]) -> Self {
        for path in paths {
            self.files.insert(PathBuf::from(path), String::new());
        }
        self
    }

    #[must_use]
    pub fn with_file_content(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl Default for MockWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace for MockWorkspace {
    fn exists(&self, _repo_root: &Path, relative: &Path) -> bool {
        self.files.contains_key(relative)
    }

    fn read_to_string(&self, _repo_root: &Path, relative: &Path) -> Option<String> {
        self.files.get(relative).cloned()
    }
}

/// Clones share recorded runs and queued exit codes.
#[derive(Clone)]
pub struct MockCommandRunner {
    exit_codes: Arc<Mutex<VecDeque<Result<i32>>>>,
    runs: Arc<Mutex<Vec<(Vec<String>, PathBuf)>>>,
}

impl MockCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            exit_codes: Arc::new(Mutex::new(VecDeque::new())),
            runs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Exit codes returned by successive runs; runs beyond the list succeed.
    #[must_use]
    pub fn with_exit_codes(self, codes: &[i32]) -> Self {
        self.exit_codes
            .lock()
            .expect("lock poisoned")
            .extend(codes.iter().map(|code| Ok(*code)));
        self
    }

    /// Makes the next run fail to start.
    #[must_use]
    pub fn with_spawn_failure(self) -> Self {
        self.exit_codes
            .lock()
            .expect("lock poisoned")
            .push_back(Err(OperationError::EmptyCommand));
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn runs(&self) -> Vec<Vec<String>> {
        self.runs
            .lock()
            .expect("lock poisoned")
            .iter()
            .map(|(args, _)| args.clone())
            .collect()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn run_dirs(&self) -> Vec<PathBuf> {
        self.runs
            .lock()
            .expect("lock poisoned")
            .iter()
            .map(|(_, cwd)| cwd.clone())
            .collect()
    }
}

impl Default for MockCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, command: &TestCommand, cwd: &Path) -> Result<i32> {
        self.runs
            .lock()
            .expect("lock poisoned")
            .push((command.args().to_vec(), cwd.to_path_buf()));

        self.exit_codes
            .lock()
            .expect("lock poisoned")
            .pop_front()
            .unwrap_or(Ok(0))
    }
}

/// Clones share the announced command lines.
#[derive(Clone)]
pub struct MockReporter {
    announced: Arc<Mutex<Vec<String>>>,
}

impl MockReporter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            announced: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn announced(&self) -> Vec<String> {
        self.announced.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunReporter for MockReporter {
    fn command(&self, command: &TestCommand) {
        self.announced
            .lock()
            .expect("lock poisoned")
            .push(command.to_string());
    }
}

pub fn modified(path: &str) -> FileChange {
    FileChange::new(PathBuf::from(path), affected_git::FileStatus::Modified)
}

pub fn added(path: &str) -> FileChange {
    FileChange::new(PathBuf::from(path), affected_git::FileStatus::Added)
}

pub fn deleted(path: &str) -> FileChange {
    FileChange::new(PathBuf::from(path), affected_git::FileStatus::Deleted)
}

pub fn renamed(from: &str, to: &str) -> FileChange {
    FileChange::new(PathBuf::from(to), affected_git::FileStatus::Renamed)
        .with_old_path(PathBuf::from(from))
}
