use std::fmt;

/// How the files of one convention are handed to a runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    /// Every file goes into a single invocation.
    Batched,
    /// A single invocation through the framework runner when one is
    /// available, one invocation per file otherwise.
    RunnerOrPerFile,
}

/// Layout data for one test convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConventionSpec {
    /// Top-level directory holding the test files.
    pub root: &'static str,
    /// Suffix every test file stem ends with.
    pub suffix: &'static str,
    /// Directory (under `root`) for request/integration style tests.
    pub request_dir: &'static str,
    pub execution: Execution,
}

const SPEC: ConventionSpec = ConventionSpec {
    root: "spec",
    suffix: "_spec",
    request_dir: "requests",
    execution: Execution::Batched,
};

const TEST: ConventionSpec = ConventionSpec {
    root: "test",
    suffix: "_test",
    request_dir: "integration",
    execution: Execution::RunnerOrPerFile,
};

/// The two supported test-file conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Convention {
    /// `spec/**/*_spec.rb`, run by RSpec.
    Spec,
    /// `test/**/*_test.rb`, run by Minitest.
    Test,
}

impl Convention {
    pub const ALL: [Self; 2] = [Self::Spec, Self::Test];

    #[must_use]
    pub fn spec(self) -> &'static ConventionSpec {
        match self {
            Self::Spec => &SPEC,
            Self::Test => &TEST,
        }
    }

    #[must_use]
    pub fn framework(self) -> &'static str {
        match self {
            Self::Spec => "rspec",
            Self::Test => "minitest",
        }
    }

    /// Whether `path` is a test file of this convention: it lives under the
    /// convention root and its file stem ends with the convention suffix.
    #[must_use]
    pub fn is_test_path(self, path: &str) -> bool {
        let spec = self.spec();
        let Some(rest) = path
            .strip_prefix(spec.root)
            .and_then(|rest| rest.strip_prefix('/'))
        else {
            return false;
        };

        let file_name = rest.rsplit('/').next().unwrap_or(rest);
        let stem = file_name
            .rsplit_once('.')
            .map_or(file_name, |(stem, _)| stem);

        stem.len() > spec.suffix.len() && stem.ends_with(spec.suffix)
    }

    /// Whether `path` is a test file of any convention.
    #[must_use]
    pub fn is_any_test_path(path: &str) -> bool {
        Self::ALL.iter().any(|convention| convention.is_test_path(path))
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.framework())
    }
}
