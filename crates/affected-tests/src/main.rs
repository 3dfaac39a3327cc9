mod error;
mod logging;
mod output;
mod run;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "affected-tests")]
#[command(version)]
#[command(
    about = "Run only the tests affected by uncommitted, staged and branch changes",
    long_about = None
)]
struct Cli {
    /// Directory to run from (default: current directory)
    #[arg(long = "path", short = 'C')]
    path: Option<PathBuf>,

    /// Base branch to compare committed changes against
    #[arg(long, value_name = "BRANCH")]
    base: Option<String>,

    /// Include changes committed since the base branch (default)
    #[arg(long, overrides_with = "no_committed")]
    committed: bool,

    /// Ignore changes committed since the base branch
    #[arg(long, overrides_with = "committed")]
    no_committed: bool,

    /// Ignore staged changes
    #[arg(long)]
    no_staged: bool,

    /// Ignore unstaged and untracked changes
    #[arg(long)]
    no_unstaged: bool,

    /// Command to run instead of the detected runner; test files are appended
    #[arg(long = "cmd", value_name = "CMD")]
    command: Option<String>,

    /// Only print the affected test files
    #[arg(short, long)]
    print: bool,

    /// Print the commands without running them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Log change detection details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let start_path = match resolve_start_path(cli.path.clone()) {
        Ok(path) => path,
        Err(e) => {
            print_error(&e);
            return e.exit_code();
        }
    };

    match run::run(&cli, &start_path) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            e.exit_code()
        }
    }
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
