// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for git-cc.
//!
//! This module handles command-line argument parsing and dispatch.

pub mod args;
mod dispatch;

pub use args::Cli;
pub use dispatch::run;
