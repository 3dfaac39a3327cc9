use std::fmt;
use std::path::PathBuf;

use affected_core::Convention;

/// Which kinds of changes are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeSources {
    /// Working tree edits and untracked files.
    pub unstaged: bool,
    /// Index edits.
    pub staged: bool,
    /// Commits on the current branch since it forked from the base branch.
    pub committed: bool,
}

impl Default for ChangeSources {
    fn default() -> Self {
        Self {
            unstaged: true,
            staged: true,
            committed: true,
        }
    }
}

/// Per-invocation environment shared by every step of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub working_dir: PathBuf,
    pub repo_root: PathBuf,
    pub base_branch: String,
}

/// A test runner invocation for the files of one convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCommand {
    convention: Convention,
    args: Vec<String>,
}

impl TestCommand {
    #[must_use]
    pub fn new(convention: Convention, args: Vec<String>) -> Self {
        Self { convention, args }
    }

    #[must_use]
    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Full argument vector, program first.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for TestCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.args.iter().map(|arg| shell_escape(arg)).collect();
        f.write_str(&rendered.join(" "))
    }
}

fn shell_escape(input: &str) -> String {
    if !input.is_empty()
        && input
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '/' | ':' | '='))
    {
        return input.to_string();
    }
    let mut escaped = String::from("'");
    for ch in input.chars() {
        if ch == '\'' {
            escaped.push_str("'\"'\"'");
        } else {
            escaped.push(ch);
        }
    }
    escaped.push('\'');
    escaped
}
