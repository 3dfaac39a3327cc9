use std::process::ExitCode;

use affected_operations::TestCommand;
use affected_operations::traits::RunReporter;

pub(crate) const NOTHING_TO_RUN: &str = "No changed/added test files detected.";

/// Prints each command line on stdout before it runs.
pub(crate) struct StdoutReporter;

impl RunReporter for StdoutReporter {
    fn command(&self, command: &TestCommand) {
        println!("{command}");
    }
}

/// Maps an aggregated child exit code onto the process exit code.
///
/// Codes outside `1..=255` that are still failures become 1.
pub(crate) fn exit_code(code: i32) -> ExitCode {
    if code == 0 {
        return ExitCode::SUCCESS;
    }

    u8::try_from(code)
        .ok()
        .filter(|code| *code != 0)
        .map_or(ExitCode::FAILURE, ExitCode::from)
}
