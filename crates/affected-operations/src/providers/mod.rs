mod git;
mod process;
mod workspace;

pub use git::Git2Provider;
pub use process::ProcessCommandRunner;
pub use workspace::FileSystemWorkspace;
