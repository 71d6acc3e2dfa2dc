// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// git-cc - compose Conventional Commits interactively
///
/// Asks for the commit type, scope, description and breaking-change details,
/// then runs `git commit` with the assembled message. Answers are kept in
/// `.git-cc.swp` until the commit succeeds, so an aborted run can be resumed.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "git-cc")]
#[command(author = "Eshan Roy")]
#[command(about = "Interactive Conventional Commits composer", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Show version information
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Enable debug logging (also enabled by DEBUG=true)
    #[arg(short, long)]
    pub debug: bool,

    /// Path to configuration file (default: .git-cc.toml in the repository root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the message instead of committing; the saved session is kept
    #[arg(long)]
    pub dry_run: bool,

    /// Discard any saved session and start from empty answers
    #[arg(long)]
    pub fresh: bool,
}

impl Cli {
    /// Whether debug logging was requested by flag or by `DEBUG=true`.
    pub fn debug_enabled(&self) -> bool {
        self.debug || debug_env(std::env::var("DEBUG").ok().as_deref())
    }
}

fn debug_env(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Cli::parse_from(["git-cc"]);
        assert!(!args.version);
        assert!(!args.dry_run);
        assert!(!args.fresh);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_flags() {
        let args = Cli::parse_from(["git-cc", "--dry-run", "--fresh", "-c", "cc.toml"]);
        assert!(args.dry_run);
        assert!(args.fresh);
        assert_eq!(args.config, Some(PathBuf::from("cc.toml")));
    }

    #[test]
    fn test_debug_env() {
        assert!(debug_env(Some("true")));
        assert!(debug_env(Some("TRUE")));
        assert!(!debug_env(Some("1")));
        assert!(!debug_env(None));
    }

    #[test]
    fn test_version_flag() {
        assert!(Cli::parse_from(["git-cc", "--version"]).version);
        assert!(Cli::parse_from(["git-cc", "-v"]).version);
    }
}
