use std::path::Path;

use indexmap::IndexSet;
use tracing::debug;

use crate::{Convention, infer_candidates};

/// Filesystem existence check used to gate inferred test paths.
pub trait PathProbe {
    /// Whether the repository-relative `relative` path exists.
    fn exists(&self, relative: &Path) -> bool;
}

/// Test files to run, one deduplicated order-stable set per convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedTests {
    spec: IndexSet<String>,
    test: IndexSet<String>,
}

impl ResolvedTests {
    #[must_use]
    pub fn files(&self, convention: Convention) -> &IndexSet<String> {
        match convention {
            Convention::Spec => &self.spec,
            Convention::Test => &self.test,
        }
    }

    /// Adds `path` to the set of `convention`; returns `false` if already present.
    pub fn insert(&mut self, convention: Convention, path: String) -> bool {
        match convention {
            Convention::Spec => self.spec.insert(path),
            Convention::Test => self.test.insert(path),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spec.is_empty() && self.test.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spec.len() + self.test.len()
    }

    /// All resolved paths, spec convention first, each in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.spec.iter().chain(self.test.iter()).map(String::as_str)
    }
}

/// Maps changed paths to the test files each convention should run.
///
/// Test files of a convention are taken as-is. Other paths go through
/// [`infer_candidates`], and only candidates `probe` reports as existing are
/// kept. The two conventions are resolved independently over the same input.
pub fn resolve<I, S>(paths: I, probe: &impl PathProbe) -> ResolvedTests
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths: Vec<S> = paths.into_iter().collect();
    let mut resolved = ResolvedTests::default();

    for convention in Convention::ALL {
        for path in &paths {
            let path = path.as_ref();

            if convention.is_test_path(path) {
                resolved.insert(convention, path.to_string());
                continue;
            }

            for tier in infer_candidates(convention, path) {
                let existing: Vec<String> = tier
                    .into_iter()
                    .filter(|candidate| probe.exists(Path::new(candidate)))
                    .collect();

                if existing.is_empty() {
                    continue;
                }

                debug!(%convention, source = path, tests = ?existing, "inferred tests");
                for candidate in existing {
                    resolved.insert(convention, candidate);
                }
                break;
            }
        }
    }

    resolved
}
