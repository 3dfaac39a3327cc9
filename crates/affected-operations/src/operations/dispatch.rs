use std::path::Path;

use affected_core::{Convention, Execution, ResolvedTests};
use tracing::{debug, warn};

use crate::traits::{CommandRunner, RunReporter, Workspace};
use crate::{RunContext, TestCommand};

/// Exit code recorded for a command that could not be started, as a shell would.
const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

const RSPEC: &[&str] = &["bundle", "exec", "rspec"];
const RAILS_BINSTUB: &str = "bin/rails";
const RAILS_TEST: &[&str] = &["bin/rails", "test"];
const BUNDLED_RAILS_TEST: &[&str] = &["bundle", "exec", "rails", "test"];
const RUBY_SINGLE_FILE: &[&str] = &["bundle", "exec", "ruby", "-Itest"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    Execute,
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub commands: Vec<TestCommand>,
    /// Last non-zero exit code of the executed commands, 0 if all passed.
    pub exit_code: i32,
}

/// Turns resolved test files into runner commands and executes them.
pub struct Dispatcher<'a, W, C, R> {
    workspace: &'a W,
    runner: &'a C,
    reporter: &'a R,
}

impl<'a, W, C, R> Dispatcher<'a, W, C, R>
where
    W: Workspace,
    C: CommandRunner,
    R: RunReporter,
{
    #[must_use]
    pub fn new(workspace: &'a W, runner: &'a C, reporter: &'a R) -> Self {
        Self {
            workspace,
            runner,
            reporter,
        }
    }

    /// Commands for every convention with files, spec convention first.
    ///
    /// `command_override` replaces runner detection: its arguments followed by
    /// the convention's files form one command per convention.
    #[must_use]
    pub fn plan(
        &self,
        repo_root: &Path,
        resolved: &ResolvedTests,
        command_override: Option<&[String]>,
    ) -> Vec<TestCommand> {
        let mut commands = Vec::new();

        for convention in Convention::ALL {
            let files = resolved.files(convention);
            if files.is_empty() {
                continue;
            }

            if let Some(custom) = command_override {
                commands.push(batched(convention, custom, files));
                continue;
            }

            match convention.spec().execution {
                Execution::Batched => commands.push(batched(convention, RSPEC, files)),
                Execution::RunnerOrPerFile => match self.detect_runner(repo_root) {
                    Some(runner) => commands.push(batched(convention, runner, files)),
                    None => commands.extend(
                        files
                            .iter()
                            .map(|file| batched(convention, RUBY_SINGLE_FILE, [file])),
                    ),
                },
            }
        }

        commands
    }

    /// Announces and, unless dry-running, executes every planned command.
    ///
    /// Commands keep running after a failure; the report carries the last
    /// non-zero exit code.
    pub fn dispatch(
        &self,
        context: &RunContext,
        resolved: &ResolvedTests,
        command_override: Option<&[String]>,
        mode: DispatchMode,
    ) -> DispatchReport {
        let commands = self.plan(&context.repo_root, resolved, command_override);
        let mut exit_code = 0;

        for command in &commands {
            self.reporter.command(command);

            if mode == DispatchMode::DryRun {
                continue;
            }

            let code = match self.runner.run(command, &context.repo_root) {
                Ok(code) => code,
                Err(e) => {
                    warn!(%command, error = %e, "failed to run test command");
                    SPAWN_FAILURE_EXIT_CODE
                }
            };

            if code != 0 {
                exit_code = code;
            }
        }

        DispatchReport {
            commands,
            exit_code,
        }
    }

    /// Batch runner for the test convention, if the project has one.
    fn detect_runner(&self, repo_root: &Path) -> Option<&'static [&'static str]> {
        if self.workspace.exists(repo_root, Path::new(RAILS_BINSTUB)) {
            debug!("found {RAILS_BINSTUB}, batching minitest files");
            return Some(RAILS_TEST);
        }

        let lockfile = self
            .workspace
            .read_to_string(repo_root, Path::new("Gemfile.lock"));
        let gemfile = self.workspace.read_to_string(repo_root, Path::new("Gemfile"));

        if lockfile.as_deref().is_some_and(lockfile_has_railties)
            || gemfile.as_deref().is_some_and(gemfile_has_rails)
        {
            debug!("bundle references rails, batching minitest files");
            return Some(BUNDLED_RAILS_TEST);
        }

        debug!("no rails runner found, running minitest files one by one");
        None
    }
}

fn batched<A, F>(convention: Convention, prefix: &[A], files: F) -> TestCommand
where
    A: AsRef<str>,
    F: IntoIterator,
    F::Item: AsRef<str>,
{
    let args = prefix
        .iter()
        .map(|arg| arg.as_ref().to_string())
        .chain(files.into_iter().map(|file| file.as_ref().to_string()))
        .collect();
    TestCommand::new(convention, args)
}

fn lockfile_has_railties(lockfile: &str) -> bool {
    lockfile
        .lines()
        .map(str::trim)
        .any(|line| line == "railties" || line.starts_with("railties "))
}

fn gemfile_has_rails(gemfile: &str) -> bool {
    gemfile.lines().map(str::trim).any(|line| {
        line.strip_prefix("gem")
            .map(str::trim_start)
            .is_some_and(|rest| {
                rest.starts_with("\"rails\"")
                    || rest.starts_with("'rails'")
                    || rest.starts_with("\"railties\"")
                    || rest.starts_with("'railties'")
            })
    })
}
