use std::path::{Path, PathBuf};

use affected_config::ToolConfig;
use affected_git::DEFAULT_REMOTE;
use tracing::debug;

use crate::traits::GitProvider;
use crate::{OperationError, Result, RunContext};

/// Base branches tried in order when neither an option nor the config names one.
pub const BASE_BRANCH_CANDIDATES: [&str; 3] = ["main", "master", "develop"];

/// Picks the base branch: explicit option, then config, then the first
/// candidate that exists locally or on the default remote, then the first
/// candidate. Never fails; the result may name a branch that does not exist.
#[must_use]
pub fn resolve_base_branch<G: GitProvider>(
    git: &G,
    repo_root: &Path,
    explicit: Option<&str>,
    configured: Option<&str>,
) -> String {
    let named = [explicit, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|branch| !branch.is_empty());
    if let Some(branch) = named {
        return branch.to_string();
    }

    let found = BASE_BRANCH_CANDIDATES.into_iter().find(|candidate| {
        git.branch_exists(repo_root, candidate).unwrap_or(false)
            || git
                .remote_branch_exists(repo_root, DEFAULT_REMOTE, candidate)
                .unwrap_or(false)
    });

    match found {
        Some(branch) => branch.to_string(),
        None => {
            debug!(
                default = BASE_BRANCH_CANDIDATES[0],
                "no candidate base branch found"
            );
            BASE_BRANCH_CANDIDATES[0].to_string()
        }
    }
}

/// Root of the git work tree containing `start_path`.
///
/// # Errors
///
/// Returns [`OperationError::NotARepository`] if `start_path` is not inside a
/// git work tree.
pub fn locate_repository<G: GitProvider>(git: &G, start_path: &Path) -> Result<PathBuf> {
    git.repository_root(start_path).map_err(|e| {
        debug!(error = %e, path = %start_path.display(), "repository lookup failed");
        OperationError::NotARepository {
            path: start_path.to_path_buf(),
        }
    })
}

/// Builds the run context for `start_path` inside the work tree at `repo_root`.
#[must_use]
pub fn build_context<G: GitProvider>(
    git: &G,
    start_path: &Path,
    repo_root: PathBuf,
    explicit_base: Option<&str>,
    config: Option<&ToolConfig>,
) -> RunContext {
    let base_branch = resolve_base_branch(
        git,
        &repo_root,
        explicit_base,
        config.and_then(ToolConfig::base_branch),
    );
    debug!(base = %base_branch, root = %repo_root.display(), "resolved run context");

    RunContext {
        working_dir: start_path.to_path_buf(),
        repo_root,
        base_branch,
    }
}
