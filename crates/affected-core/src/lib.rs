mod convention;
mod inference;
mod resolver;

pub use convention::{Convention, ConventionSpec, Execution};
pub use inference::{CandidateTier, infer_candidates};
pub use resolver::{PathProbe, ResolvedTests, resolve};
