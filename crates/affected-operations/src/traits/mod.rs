mod command_runner;
mod git_provider;
mod reporter;
mod workspace;

pub use command_runner::CommandRunner;
pub use git_provider::GitProvider;
pub use reporter::RunReporter;
pub use workspace::{Workspace, WorkspaceProbe};
