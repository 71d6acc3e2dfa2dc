// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module: the questionnaire, message rendering and preview.

mod builder;
mod message;
mod preview;
mod prompter;

pub use builder::{CommitBuilder, Step};
pub use message::{CommitMessage, BREAKING_CHANGE_PREFIX};
pub use preview::CommitPreview;
pub use prompter::{DialoguerPrompter, Prompter};
