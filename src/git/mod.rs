// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Preconditions (repository present, changes staged) are checked with git2;
//! the commit itself is made by the git binary.

pub mod commands;
mod repo;

pub use commands::commit_with_message;
pub use repo::{preflight, Readiness, Repository};
