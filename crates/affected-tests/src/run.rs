use std::path::Path;
use std::process::ExitCode;

use affected_operations::ChangeSources;
use affected_operations::operations::{RunInput, RunOperation, RunOutcome};
use affected_operations::providers::{
    FileSystemWorkspace, Git2Provider, ProcessCommandRunner,
};

use crate::Cli;
use crate::error::Result;
use crate::output::{NOTHING_TO_RUN, StdoutReporter, exit_code};

pub(crate) fn run(cli: &Cli, start_path: &Path) -> Result<ExitCode> {
    let operation = RunOperation::new(
        Git2Provider::new(),
        FileSystemWorkspace::new(),
        ProcessCommandRunner::new(),
        StdoutReporter,
    );

    let outcome = operation.execute(start_path, &input_from(cli))?;

    match outcome {
        RunOutcome::NothingToRun => {
            println!("{NOTHING_TO_RUN}");
            Ok(ExitCode::SUCCESS)
        }
        RunOutcome::Listed(paths) => {
            for path in paths {
                println!("{path}");
            }
            Ok(ExitCode::SUCCESS)
        }
        RunOutcome::Dispatched(report) => Ok(exit_code(report.exit_code)),
    }
}

fn input_from(cli: &Cli) -> RunInput {
    RunInput {
        base: cli.base.clone(),
        sources: ChangeSources {
            unstaged: !cli.no_unstaged,
            staged: !cli.no_staged,
            committed: !cli.no_committed,
        },
        command: cli
            .command
            .as_deref()
            .map(|command| command.split_whitespace().map(String::from).collect()),
        print_only: cli.print,
        dry_run: cli.dry_run,
    }
}
