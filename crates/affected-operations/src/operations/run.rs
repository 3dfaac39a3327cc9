use std::path::Path;

use affected_config::{ToolConfig, load_config};
use affected_core::resolve;
use tracing::debug;

use super::{
    ChangeCollector, DispatchMode, DispatchReport, Dispatcher, build_context, locate_repository,
};
use crate::traits::{CommandRunner, GitProvider, RunReporter, Workspace, WorkspaceProbe};
use crate::{ChangeSources, Result};

#[derive(Debug, Default)]
pub struct RunInput {
    pub base: Option<String>,
    pub sources: ChangeSources,
    /// Runner command replacing detection, already split into arguments.
    pub command: Option<Vec<String>>,
    pub print_only: bool,
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// No changed or inferred test files.
    NothingToRun,
    /// Print-only mode: every resolved test file, spec convention first.
    Listed(Vec<String>),
    Dispatched(DispatchReport),
}

pub struct RunOperation<G, W, C, R> {
    git_provider: G,
    workspace: W,
    runner: C,
    reporter: R,
}

impl<G, W, C, R> RunOperation<G, W, C, R>
where
    G: GitProvider,
    W: Workspace,
    C: CommandRunner,
    R: RunReporter,
{
    pub fn new(git_provider: G, workspace: W, runner: C, reporter: R) -> Self {
        Self {
            git_provider,
            workspace,
            runner,
            reporter,
        }
    }

    /// # Errors
    ///
    /// Returns [`crate::OperationError::NotARepository`] if `start_path` is not
    /// inside a git work tree.
    pub fn execute(&self, start_path: &Path, input: &RunInput) -> Result<RunOutcome> {
        let repo_root = locate_repository(&self.git_provider, start_path)?;
        let config = load_config(config_dirs(start_path, &repo_root));

        let context = build_context(
            &self.git_provider,
            start_path,
            repo_root,
            input.base.as_deref(),
            config.as_ref(),
        );

        let paths = ChangeCollector::new(&self.git_provider).collect(&context, input.sources);
        let probe = WorkspaceProbe::new(&self.workspace, &context.repo_root);
        let resolved = resolve(&paths, &probe);

        if resolved.is_empty() {
            return Ok(RunOutcome::NothingToRun);
        }

        if input.print_only {
            return Ok(RunOutcome::Listed(
                resolved.iter().map(String::from).collect(),
            ));
        }

        let command = input
            .command
            .clone()
            .filter(|command| !command.is_empty())
            .or_else(|| config.as_ref().and_then(ToolConfig::command));
        debug!(?command, "command override");

        let mode = if input.dry_run {
            DispatchMode::DryRun
        } else {
            DispatchMode::Execute
        };

        let dispatcher = Dispatcher::new(&self.workspace, &self.runner, &self.reporter);
        let report = dispatcher.dispatch(&context, &resolved, command.as_deref(), mode);

        Ok(RunOutcome::Dispatched(report))
    }
}

fn config_dirs<'a>(start_path: &'a Path, repo_root: &'a Path) -> Vec<&'a Path> {
    if start_path == repo_root {
        vec![start_path]
    } else {
        vec![start_path, repo_root]
    }
}
