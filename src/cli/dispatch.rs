// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::path::Path;

use console::{style, Term};

use crate::choices::ChoiceSet;
use crate::commit::{CommitBuilder, CommitMessage, CommitPreview, DialoguerPrompter, Prompter};
use crate::config::GitCcConfig;
use crate::error::Result;
use crate::git;
use crate::session::{SessionStore, SWAP_FILE};

use super::args::Cli;

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    if cli.version {
        println!("{}", crate::version::version_line());
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let mut prompter = DialoguerPrompter::new();
    run_with(&cli, &cwd, &mut prompter)
}

/// Compose and commit from `cwd`, asking through `prompter`.
pub(crate) fn run_with(cli: &Cli, cwd: &Path, prompter: &mut dyn Prompter) -> Result<()> {
    // Nothing is asked unless there is something to commit.
    let repo = git::preflight(cwd)?;
    let root = repo.workdir().to_path_buf();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        GitCcConfig::load_from(config_path)?
    } else {
        GitCcConfig::load(&root)?
    };
    tracing::debug!("Configuration: {:?}", config);

    let choices = ChoiceSet::from_config(&config);
    let store = SessionStore::for_repo(&root);
    tracing::debug!("Session state: {}", store.path().display());

    if cli.fresh {
        store.clear();
    }

    let restored = store.load();
    if !restored.is_empty() {
        Term::stderr().write_line(&format!(
            "{} Restored previous session from {}",
            style("⚠").yellow(),
            SWAP_FILE
        ))?;
    }

    let answers = CommitBuilder::new(prompter, &choices, &store, restored).run()?;

    let message = CommitMessage::from(&answers);
    let text = message.format();
    tracing::debug!("Commit message:\n{}", text);

    CommitPreview::new(&message).print();

    if cli.dry_run {
        println!("{}", text);
        return Ok(());
    }

    // The swap file survives a failed commit so the next run can resume.
    git::commit_with_message(&root, &text)?;
    store.clear();

    Ok(())
}
