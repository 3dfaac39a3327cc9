mod collect;
mod context;
mod dispatch;
mod run;

pub use collect::ChangeCollector;
pub use context::{
    BASE_BRANCH_CANDIDATES, build_context, locate_repository, resolve_base_branch,
};
pub use dispatch::{DispatchMode, DispatchReport, Dispatcher};
pub use run::{RunInput, RunOperation, RunOutcome};
