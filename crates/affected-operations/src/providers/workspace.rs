use std::path::Path;

use crate::traits::Workspace;

/// [`Workspace`] backed by the real filesystem.
pub struct FileSystemWorkspace;

impl FileSystemWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace for FileSystemWorkspace {
    fn exists(&self, repo_root: &Path, relative: &Path) -> bool {
        repo_root.join(relative).exists()
    }

    fn read_to_string(&self, repo_root: &Path, relative: &Path) -> Option<String> {
        std::fs::read_to_string(repo_root.join(relative)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn exists_is_relative_to_root() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::create_dir_all(dir.path().join("spec/models"))?;
        fs::write(dir.path().join("spec/models/user_spec.rb"), "")?;
        let workspace = FileSystemWorkspace::new();

        assert!(workspace.exists(dir.path(), Path::new("spec/models/user_spec.rb")));
        assert!(!workspace.exists(dir.path(), Path::new("spec/models/post_spec.rb")));
        Ok(())
    }

    #[test]
    fn read_missing_file_is_none() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("Gemfile"), "gem \"rails\"\n")?;
        let workspace = FileSystemWorkspace::new();

        assert_eq!(
            workspace.read_to_string(dir.path(), Path::new("Gemfile")),
            Some("gem \"rails\"\n".to_string())
        );
        assert_eq!(
            workspace.read_to_string(dir.path(), Path::new("Gemfile.lock")),
            None
        );
        Ok(())
    }
}
