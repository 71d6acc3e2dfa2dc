// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! git-cc - Interactive Conventional Commits composer
//!
//! Walks the user through a short questionnaire and hands the resulting
//! Conventional Commit message to `git commit`.
//!
//! # Features
//!
//! - **Configurable choices**: built-in commit types plus project-specific
//!   types and scopes from `.git-cc.toml`
//! - **Resumable sessions**: answers are saved after every question and
//!   offered again as defaults if the run is aborted or the commit fails
//! - **Deterministic rendering**: `type(scope)!: subject`, optional body and
//!   `BREAKING CHANGE:` footer
//!
//! # Example
//!
//! ```
//! use git_cc::commit::CommitMessage;
//! use git_cc::session::AnswerSet;
//!
//! let answers = AnswerSet {
//!     commit_type: "feat".to_string(),
//!     scope: "api".to_string(),
//!     short_description: "add health endpoint".to_string(),
//!     ..AnswerSet::default()
//! };
//!
//! assert_eq!(CommitMessage::render(&answers), "feat(api): add health endpoint");
//! ```

// Module declarations
pub mod choices;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod session;

// Re-exports for convenience
pub use config::GitCcConfig;
pub use error::{GitCcError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of git-cc.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The build timestamp (if available).
    pub const BUILD_TIMESTAMP: Option<&str> = option_env!("VERGEN_BUILD_TIMESTAMP");

    /// Value vergen emits when it cannot determine a field.
    const PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

    /// Get the line printed by `--version`.
    pub fn version_line() -> String {
        format!(
            "version: {}, commit: {}, built at {}",
            VERSION,
            known(GIT_SHA).unwrap_or("none"),
            known(BUILD_TIMESTAMP).unwrap_or("unknown")
        )
    }

    fn known(value: Option<&'static str>) -> Option<&'static str> {
        value.filter(|v| !v.is_empty() && *v != PLACEHOLDER)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_version_line() {
            let line = version_line();
            assert!(line.starts_with(&format!("version: {},", VERSION)));
            assert!(line.contains("commit: "));
            assert!(line.contains("built at "));
            assert!(!line.contains(PLACEHOLDER));
        }

        #[test]
        fn test_placeholder_is_unknown() {
            assert_eq!(known(Some(PLACEHOLDER)), None);
            assert_eq!(known(Some("")), None);
            assert_eq!(known(None), None);
            assert_eq!(known(Some("1a2b3c4")), Some("1a2b3c4"));
        }
    }
}
