use std::path::Path;

use crate::{Result, TestCommand};

pub trait CommandRunner: Send + Sync {
    /// Runs `command` in `cwd` to completion and returns its exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started.
    fn run(&self, command: &TestCommand, cwd: &Path) -> Result<i32>;
}
