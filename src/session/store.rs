// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Swap-file persistence for interrupted sessions.

use std::cell::Cell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::StateError;

use super::answers::AnswerSet;

/// Swap file name, relative to the repository root.
pub const SWAP_FILE: &str = ".git-cc.swp";

/// Current on-disk format version.
pub const STATE_VERSION: u32 = 1;

/// On-disk envelope. Answer fields sit beside `version` at the top level.
#[derive(Debug, Serialize, Deserialize)]
struct SwapFile {
    #[serde(default)]
    version: u32,
    #[serde(flatten)]
    answers: AnswerSet,
}

/// Reads and writes the swap file.
///
/// `load` never fails and `save`/`clear` only report problems through
/// tracing, so a broken swap file cannot abort a session.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    warned: Cell<bool>,
}

impl SessionStore {
    /// Create a store backed by an explicit file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            warned: Cell::new(false),
        }
    }

    /// Create a store for the swap file of the repository at `root`.
    pub fn for_repo(root: &Path) -> Self {
        Self::new(root.join(SWAP_FILE))
    }

    /// Path of the swap file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the previous answers, or an empty set if there are none.
    pub fn load(&self) -> AnswerSet {
        match self.try_load() {
            Ok(Some(answers)) => answers,
            Ok(None) => {
                tracing::debug!("No session state at {}", self.path.display());
                AnswerSet::default()
            }
            Err(e) => {
                tracing::debug!("Discarding unreadable session state: {}", e);
                AnswerSet::default()
            }
        }
    }

    /// Load the previous answers, distinguishing "absent" from "unreadable".
    pub fn try_load(&self) -> Result<Option<AnswerSet>, StateError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StateError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let swap: SwapFile = serde_json::from_str(&content).map_err(|e| StateError::Decode {
            path: self.path.clone(),
            source: e,
        })?;

        if swap.version > STATE_VERSION {
            tracing::debug!(
                "Session state version {} is newer than {}, reading known fields only",
                swap.version,
                STATE_VERSION
            );
        }

        Ok(Some(swap.answers))
    }

    /// Persist the answers, replacing any previous content.
    ///
    /// The first failure in a run is logged as a warning, later ones at
    /// debug level.
    pub fn save(&self, answers: &AnswerSet) {
        if let Err(e) = self.try_save(answers) {
            if self.warned.replace(true) {
                tracing::debug!("Session state not saved: {}", e);
            } else {
                tracing::warn!("Session state not saved, this run cannot be resumed: {}", e);
            }
        }
    }

    /// Persist the answers atomically.
    ///
    /// The content is written to a temporary file in the same directory and
    /// renamed over the swap file, so readers see either the old or the new
    /// content.
    pub fn try_save(&self, answers: &AnswerSet) -> Result<(), StateError> {
        let swap = SwapFile {
            version: STATE_VERSION,
            answers: answers.clone(),
        };
        let mut content = serde_json::to_string_pretty(&swap).map_err(StateError::Encode)?;
        content.push('\n');

        let write_err = |source: std::io::Error| StateError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = NamedTempFile::new_in(self.dir()).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;
        file.as_file().sync_all().map_err(write_err)?;
        file.persist(&self.path).map_err(|e| write_err(e.error))?;

        tracing::debug!("Saved session state to {}", self.path.display());
        Ok(())
    }

    /// Remove the swap file. A missing file is not an error.
    pub fn clear(&self) {
        if let Err(e) = self.try_clear() {
            tracing::warn!("Failed to remove {}: {}", self.path.display(), e);
        }
    }

    /// Remove the swap file, reporting failures other than "not found".
    pub fn try_clear(&self) -> std::io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Removed session state {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
