// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The "ask the user" capability used by the questionnaire.

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Editor, Input, Select};

use crate::error::Result;

/// Visible rows in a select list.
const SELECT_MAX_LENGTH: usize = 20;

/// Asks the user for a single value.
///
/// Every method receives the value to pre-select or pre-fill, which is how
/// restored answers reach the user.
pub trait Prompter {
    /// Pick one of `items`, starting at index `default`.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Single line of free text.
    fn input(&mut self, prompt: &str, default: &str) -> Result<String>;

    /// Multi-line free text.
    fn multiline(&mut self, prompt: &str, default: &str) -> Result<String>;

    /// Yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter built on dialoguer.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl DialoguerPrompter {
    /// Create a prompter drawing on stderr.
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .max_length(SELECT_MAX_LENGTH)
            .interact_on(&self.term)?;
        Ok(selection)
    }

    fn input(&mut self, prompt: &str, default: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(default)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(value)
    }

    fn multiline(&mut self, prompt: &str, default: &str) -> Result<String> {
        self.term.write_line(&format!(
            "{} {} {}",
            style("?").yellow(),
            style(prompt).bold(),
            style("(save and close the editor to continue)").dim()
        ))?;

        match Editor::new().extension(".md").edit(default) {
            Ok(Some(text)) => Ok(text),
            // Closed without saving: keep what was there.
            Ok(None) => Ok(default.to_string()),
            Err(e) => {
                tracing::debug!("Editor unavailable, falling back to inline input: {}", e);
                self.input(prompt, default)
            }
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let value = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_on(&self.term)?;
        Ok(value)
    }
}
