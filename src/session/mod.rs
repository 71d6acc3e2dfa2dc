// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Resumable session state.
//!
//! Answers are written to a swap file in the repository root after every
//! step and removed once the commit succeeds.

mod answers;
mod store;

pub use answers::AnswerSet;
pub use store::{SessionStore, STATE_VERSION, SWAP_FILE};
