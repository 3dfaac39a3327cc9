use crate::Result;

use super::Repository;

impl Repository {
    /// Whether `refs/heads/<name>` exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch lookup fails for a reason other than
    /// the branch being absent or the name being invalid.
    pub fn branch_exists(&self, name: &str) -> Result<bool> {
        self.find_branch(name, git2::BranchType::Local)
    }

    /// Whether `refs/remotes/<remote>/<name>` exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch lookup fails for a reason other than
    /// the branch being absent or the name being invalid.
    pub fn remote_branch_exists(&self, remote: &str, name: &str) -> Result<bool> {
        self.find_branch(&format!("{remote}/{name}"), git2::BranchType::Remote)
    }

    fn find_branch(&self, name: &str, kind: git2::BranchType) -> Result<bool> {
        match self.inner.find_branch(name, kind) {
            Ok(_) => Ok(true),
            Err(e)
                if matches!(
                    e.code(),
                    git2::ErrorCode::NotFound | git2::ErrorCode::InvalidSpec
                ) =>
            {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}
