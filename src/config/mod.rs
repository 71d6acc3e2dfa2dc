// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for git-cc.
//!
//! This module handles loading `.git-cc.toml`, applying environment
//! overrides, and the built-in commit types.

pub mod default;
mod loader;
mod schema;

pub use default::{DEFAULT_COMMIT_TYPES, NONE_SCOPE};
pub use loader::{find_config_file, load_config, load_config_from, parse_config, CONFIG_FILE};
pub use schema::*;
