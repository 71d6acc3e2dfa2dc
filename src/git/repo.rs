// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository discovery and staging status.

use crate::error::{GitCcError, GitError, Result};
use git2::{Repository as Git2Repo, Status, StatusOptions};
use std::path::{Path, PathBuf};

/// Whether a commit can be made right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// At least one change is staged.
    Ready,
    /// Nothing is staged; `untracked` tells whether `git add` would help.
    NothingStaged { untracked: bool },
}

/// Wrapper around git2::Repository.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open the repository containing `path`, searching parent directories.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitCcError::Git(GitError::NotARepository)
            } else {
                GitCcError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| {
                GitCcError::Git(GitError::OpenFailed {
                    message: "Repository has no working directory (bare repository)".to_string(),
                })
            })?
            .to_path_buf();

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get a reference to the inner git2 repository.
    pub fn inner(&self) -> &Git2Repo {
        &self.inner
    }

    /// Root of the working tree.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Check the index for staged changes.
    pub fn readiness(&self) -> Result<Readiness> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(false)
            .include_ignored(false);

        let statuses = self.inner.statuses(Some(&mut opts)).map_err(|e| {
            GitCcError::Git(GitError::StatusFailed {
                message: e.message().to_string(),
            })
        })?;

        let staged = Status::INDEX_NEW
            | Status::INDEX_MODIFIED
            | Status::INDEX_DELETED
            | Status::INDEX_RENAMED
            | Status::INDEX_TYPECHANGE;

        let mut untracked = false;
        for entry in statuses.iter() {
            let status = entry.status();
            if status.intersects(staged) {
                return Ok(Readiness::Ready);
            }
            if status.contains(Status::WT_NEW) {
                untracked = true;
            }
        }

        Ok(Readiness::NothingStaged { untracked })
    }
}

/// Open the repository for `path` and require staged changes.
pub fn preflight(path: &Path) -> Result<Repository> {
    let repo = Repository::discover(path)?;
    tracing::debug!("Root directory of Git repository: {}", repo.workdir().display());

    match repo.readiness()? {
        Readiness::Ready => Ok(repo),
        Readiness::NothingStaged { untracked } => {
            Err(GitCcError::Git(GitError::NothingStaged { untracked }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        let repo = Repository::discover(dir.path()).unwrap();
        (dir, repo)
    }

    fn stage(repo: &Repository, name: &str) {
        let mut index = repo.inner().index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::discover(dir.path());
        assert!(matches!(
            result,
            Err(GitCcError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let (dir, _repo) = create_test_repo();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let repo = Repository::discover(&nested).unwrap();
        assert_eq!(
            repo.workdir().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_empty_repo_has_nothing_staged() {
        let (_dir, repo) = create_test_repo();
        assert_eq!(
            repo.readiness().unwrap(),
            Readiness::NothingStaged { untracked: false }
        );
    }

    #[test]
    fn test_untracked_only() {
        let (dir, repo) = create_test_repo();
        fs::write(dir.path().join("new.txt"), "hello").unwrap();

        assert_eq!(
            repo.readiness().unwrap(),
            Readiness::NothingStaged { untracked: true }
        );
        assert!(matches!(
            preflight(dir.path()),
            Err(GitCcError::Git(GitError::NothingStaged { untracked: true }))
        ));
    }

    #[test]
    fn test_staged_file_is_ready() {
        let (dir, repo) = create_test_repo();
        fs::write(dir.path().join("new.txt"), "hello").unwrap();
        stage(&repo, "new.txt");

        assert_eq!(repo.readiness().unwrap(), Readiness::Ready);
        assert!(preflight(dir.path()).is_ok());
    }
}
