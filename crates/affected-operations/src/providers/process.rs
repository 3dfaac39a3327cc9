use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::traits::CommandRunner;
use crate::{OperationError, Result, TestCommand};

/// Exit code reported for a child that ended without one (killed by a signal).
const NO_EXIT_CODE: i32 = 1;

/// Runs commands as child processes inheriting stdio.
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, command: &TestCommand, cwd: &Path) -> Result<i32> {
        let (program, args) = command
            .args()
            .split_first()
            .ok_or(OperationError::EmptyCommand)?;

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|source| OperationError::CommandSpawn {
                program: program.clone(),
                source,
            })?;

        debug!(%command, ?status, "command finished");
        Ok(status.code().unwrap_or(NO_EXIT_CODE))
    }
}
