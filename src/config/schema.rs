// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structure that can be loaded from `.git-cc.toml`.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// The main configuration structure for git-cc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitCcConfig {
    /// Whether the built-in commit types (and the `none` scope) are offered.
    pub use_defaults: bool,

    /// Extra commit types, appended after the built-ins.
    pub custom_commit_types: Vec<String>,

    /// Selectable scopes. When empty the scope is typed in freely.
    pub scopes: Vec<String>,
}

impl Default for GitCcConfig {
    fn default() -> Self {
        Self {
            use_defaults: true,
            custom_commit_types: Vec::new(),
            scopes: Vec::new(),
        }
    }
}

impl GitCcConfig {
    /// Load configuration for the repository rooted at `repo_root`.
    pub fn load(repo_root: &Path) -> crate::error::Result<Self> {
        super::loader::load_config(repo_root)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}
