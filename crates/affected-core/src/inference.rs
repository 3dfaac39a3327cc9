use crate::Convention;

const MODELS: &str = "app/models/";
const CONTROLLERS: &str = "app/controllers/";
const LIB: &str = "lib/";
const CONTROLLER_SUFFIX: &str = "_controller";

/// A group of equally ranked candidate test paths.
///
/// Every existing candidate of the first tier with at least one existing
/// candidate is kept; later tiers are only consulted when an earlier one
/// produced nothing.
pub type CandidateTier = Vec<String>;

/// Source file split into directory, stem and extension.
struct SourceFile<'a> {
    dir: Option<&'a str>,
    stem: &'a str,
    ext: Option<&'a str>,
}

impl<'a> SourceFile<'a> {
    fn parse(relative: &'a str) -> Option<Self> {
        let (dir, file_name) = match relative.rsplit_once('/') {
            Some((dir, file_name)) => (Some(dir), file_name),
            None => (None, relative),
        };

        let (stem, ext) = match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
            _ => (file_name, None),
        };

        if stem.is_empty() {
            return None;
        }

        Some(Self { dir, stem, ext })
    }

    fn test_path(&self, convention: Convention, area: &str, stem: &str) -> String {
        let spec = convention.spec();
        let mut path = format!("{}/{area}/", spec.root);
        if let Some(dir) = self.dir {
            path.push_str(dir);
            path.push('/');
        }
        path.push_str(stem);
        path.push_str(spec.suffix);
        if let Some(ext) = self.ext {
            path.push('.');
            path.push_str(ext);
        }
        path
    }
}

/// Candidate test paths for a source file, in priority tiers.
///
/// Returns no tiers for paths outside `app/models`, `app/controllers` and
/// `lib`, and for test files of either convention.
#[must_use]
pub fn infer_candidates(convention: Convention, path: &str) -> Vec<CandidateTier> {
    if Convention::is_any_test_path(path) {
        return Vec::new();
    }

    if let Some(source) = path.strip_prefix(MODELS).and_then(SourceFile::parse) {
        return vec![vec![source.test_path(convention, "models", source.stem)]];
    }

    if let Some(source) = path.strip_prefix(CONTROLLERS).and_then(SourceFile::parse) {
        return controller_candidates(convention, &source);
    }

    if let Some(source) = path.strip_prefix(LIB).and_then(SourceFile::parse) {
        return vec![vec![source.test_path(convention, "lib", source.stem)]];
    }

    Vec::new()
}

fn controller_candidates(convention: Convention, source: &SourceFile<'_>) -> Vec<CandidateTier> {
    let request_dir = convention.spec().request_dir;

    let (name, controller_stem) = match source.stem.strip_suffix(CONTROLLER_SUFFIX) {
        Some(name) if !name.is_empty() => (name, source.stem.to_string()),
        _ => (source.stem, format!("{}{CONTROLLER_SUFFIX}", source.stem)),
    };

    let mut requests = vec![source.test_path(convention, request_dir, name)];
    let with_suffix = source.test_path(convention, request_dir, source.stem);
    if !requests.contains(&with_suffix) {
        requests.push(with_suffix);
    }

    let fallback = vec![source.test_path(convention, "controllers", &controller_stem)];

    vec![requests, fallback]
}
