use std::process::ExitCode;

use affected_operations::OperationError;
use thiserror::Error;

/// Exit code used when not run inside a git work tree.
const NOT_A_REPOSITORY_EXIT_CODE: u8 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),
}

impl CliError {
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::Operation(OperationError::NotARepository { .. }) => {
                ExitCode::from(NOT_A_REPOSITORY_EXIT_CODE)
            }
            _ => ExitCode::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
