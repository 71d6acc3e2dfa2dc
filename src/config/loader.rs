// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, GitCcError, Result};
use std::path::{Path, PathBuf};

use super::schema::GitCcConfig;

/// Configuration file name looked up in the repository root.
pub const CONFIG_FILE: &str = ".git-cc.toml";

/// YAML file names read by earlier releases. They are no longer parsed.
pub const LEGACY_CONFIG_FILES: [&str; 2] = [".git-cc.yaml", ".git-cc.yml"];

/// Environment variable overriding `use_defaults`.
pub const USE_DEFAULTS_ENV: &str = "GIT_CC_USE_DEFAULTS";

/// Find the configuration file for a repository.
///
/// The repository root wins over the per-user file in the config directory.
pub fn find_config_file(repo_root: &Path) -> Option<PathBuf> {
    let repo_config = repo_root.join(CONFIG_FILE);
    if repo_config.is_file() {
        return Some(repo_config);
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join("git-cc").join("config.toml");
        if user_config.is_file() {
            return Some(user_config);
        }
    }

    None
}

/// Find a YAML configuration left in the repository root.
pub fn find_legacy_config_file(repo_root: &Path) -> Option<PathBuf> {
    LEGACY_CONFIG_FILES
        .iter()
        .map(|name| repo_root.join(name))
        .find(|path| path.is_file())
}

/// Load configuration for a repository.
///
/// A missing file yields the defaults. A file that exists but cannot be
/// parsed is reported and ignored.
pub fn load_config(repo_root: &Path) -> Result<GitCcConfig> {
    let config = match find_config_file(repo_root) {
        Some(path) => match load_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring configuration file {}: {}", path.display(), e);
                GitCcConfig::default()
            }
        },
        None => {
            if let Some(legacy) = find_legacy_config_file(repo_root) {
                tracing::warn!(
                    "{} is not read any more, move its settings to {} (using defaults)",
                    legacy.display(),
                    CONFIG_FILE
                );
            } else {
                tracing::debug!("No configuration file found, using defaults");
            }
            GitCcConfig::default()
        }
    };

    Ok(apply_env_overrides(config, std::env::var(USE_DEFAULTS_ENV).ok()))
}

/// Load configuration from a specific path. Any failure is fatal.
pub fn load_config_from(path: &Path) -> Result<GitCcConfig> {
    let config = load_file(path)?;
    Ok(apply_env_overrides(config, std::env::var(USE_DEFAULTS_ENV).ok()))
}

fn load_file(path: &Path) -> Result<GitCcConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(GitCcError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GitCcError::Config(ConfigError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<GitCcConfig> {
    toml::from_str(content).map_err(|e| {
        GitCcError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Apply the `GIT_CC_USE_DEFAULTS` override, if it holds a recognisable boolean.
pub fn apply_env_overrides(mut config: GitCcConfig, use_defaults: Option<String>) -> GitCcConfig {
    if let Some(raw) = use_defaults {
        match parse_bool(&raw) {
            Some(value) => config.use_defaults = value,
            None => tracing::warn!("Ignoring {}={:?}: not a boolean", USE_DEFAULTS_ENV, raw),
        }
    }
    config
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, GitCcConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
use_defaults = false
custom_commit_types = ["release", "deps"]
scopes = ["api", "cli"]
"#;
        let config = parse_config(toml).unwrap();
        assert!(!config.use_defaults);
        assert_eq!(config.custom_commit_types, vec!["release", "deps"]);
        assert_eq!(config.scopes, vec!["api", "cli"]);
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(parse_config("scopes = \"api\"").is_err());
    }

    #[test]
    fn test_load_from_repo_root() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "scopes = [\"core\"]\n").unwrap();

        let config = load_file(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.scopes, vec!["core"]);
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = TempDir::new().unwrap();
        let result = load_file(&dir.path().join("nope.toml"));
        assert!(matches!(
            result,
            Err(GitCcError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_legacy_yaml_is_detected() {
        let dir = TempDir::new().unwrap();
        assert!(find_legacy_config_file(dir.path()).is_none());

        let legacy = dir.path().join(".git-cc.yaml");
        std::fs::write(&legacy, "scopes:\n  - api\n").unwrap();
        assert_eq!(find_legacy_config_file(dir.path()), Some(legacy.clone()));

        // Detected only, never loaded.
        assert_ne!(find_config_file(dir.path()), Some(legacy));
    }

    #[test]
    fn test_env_override() {
        let config = apply_env_overrides(GitCcConfig::default(), Some("false".to_string()));
        assert!(!config.use_defaults);

        let config = apply_env_overrides(config, Some("1".to_string()));
        assert!(config.use_defaults);

        let config = apply_env_overrides(config, Some("maybe".to_string()));
        assert!(config.use_defaults);

        let config = apply_env_overrides(config, None);
        assert!(config.use_defaults);
    }
}
