// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hand the rendered message to `git commit`.

use crate::error::{GitCcError, GitError, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run `git commit -F <file>` in `workdir` with the given message.
///
/// Going through the git binary keeps hooks, signing and editor settings
/// working. Output is inherited so git's own diagnostics reach the user
/// unchanged.
pub fn commit_with_message(workdir: &Path, message: &str) -> Result<()> {
    commit_with_program("git", workdir, message)
}

/// Same as [`commit_with_message`] with an explicit git executable.
pub fn commit_with_program(program: &str, workdir: &Path, message: &str) -> Result<()> {
    let mut file = tempfile::Builder::new()
        .prefix("commitMessage")
        .tempfile()?;
    file.write_all(message.as_bytes())?;
    file.flush()?;

    tracing::debug!("temp file: {}", file.path().display());

    let status = Command::new(program)
        .arg("commit")
        .arg("-F")
        .arg(file.path())
        .current_dir(workdir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            GitCcError::Git(GitError::SpawnFailed {
                message: format!("{}: {}", program, e),
            })
        })?;

    if !status.success() {
        return Err(GitCcError::Git(GitError::CommitFailed {
            code: status.code(),
        }));
    }

    Ok(())
}
