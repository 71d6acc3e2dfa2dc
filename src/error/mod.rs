// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for git-cc.
//!
//! Only precondition failures and a failed downstream commit are allowed to
//! end the process abnormally. Session-state failures are absorbed inside
//! [`crate::session::SessionStore`] and never reach the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for "not a git repository".
pub const EXIT_NOT_A_REPOSITORY: i32 = 1;
/// Exit code for "nothing staged".
pub const EXIT_NOTHING_STAGED: i32 = 2;
/// Exit code for a failed `git commit`.
pub const EXIT_COMMIT_FAILED: i32 = 3;
/// Exit code when the user interrupts a prompt.
pub const EXIT_CANCELLED: i32 = 130;
/// Exit code for everything else.
pub const EXIT_FAILURE: i32 = 1;

/// The main error type for git-cc operations.
#[derive(Error, Debug)]
pub enum GitCcError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("{0}")]
    Git(#[from] GitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,
}

impl From<dialoguer::Error> for GitCcError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                GitCcError::Cancelled
            }
            other => GitCcError::Ui(other.to_string()),
        }
    }
}

impl GitCcError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            GitCcError::Git(GitError::NotARepository) => EXIT_NOT_A_REPOSITORY,
            GitCcError::Git(GitError::NothingStaged { .. }) => EXIT_NOTHING_STAGED,
            GitCcError::Git(GitError::CommitFailed { .. }) => EXIT_COMMIT_FAILED,
            GitCcError::Cancelled => EXIT_CANCELLED,
            _ => EXIT_FAILURE,
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("No commit types available (use_defaults is off and custom_commit_types is empty)")]
    NoCommitTypes,
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("not a git repository (or any of the parent directories): .git")]
    NotARepository,

    #[error("{}", nothing_staged_message(.untracked))]
    NothingStaged { untracked: bool },

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to read repository status: {message}")]
    StatusFailed { message: String },

    #[error("git commit failed{}", exit_suffix(.code))]
    CommitFailed { code: Option<i32> },

    #[error("Failed to run git: {message}")]
    SpawnFailed { message: String },
}

fn nothing_staged_message(untracked: &bool) -> &'static str {
    if *untracked {
        "nothing added to commit but untracked files present (use \"git add\" to track)"
    } else {
        "nothing added to commit"
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit status {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

/// Session state (swap file) errors.
///
/// These are produced by the low-level read/write helpers and collapsed at
/// the store boundary, and have no `GitCcError` variant.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed session state in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode session state: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for git-cc operations.
pub type Result<T> = std::result::Result<T, GitCcError>;
