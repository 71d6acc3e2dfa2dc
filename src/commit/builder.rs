// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive commit builder.
//!
//! Drives the questionnaire one step at a time. Restored answers become the
//! defaults of each question, and the answer set is saved after every step so
//! an interrupted run can be resumed by simply running again.

use crate::choices::ChoiceSet;
use crate::config::NONE_SCOPE;
use crate::error::{ConfigError, GitCcError, Result};
use crate::session::{AnswerSet, SessionStore};

use super::prompter::Prompter;

/// A question in the commit questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SelectType,
    SelectOrEnterScope,
    ShortDescription,
    LongDescription,
    BreakingChangeFlag,
    BreakingChangeNote,
    Done,
}

impl Step {
    /// The step following this one, given the answers so far.
    pub fn next(self, answers: &AnswerSet) -> Step {
        match self {
            Step::SelectType => Step::SelectOrEnterScope,
            Step::SelectOrEnterScope => Step::ShortDescription,
            Step::ShortDescription => Step::LongDescription,
            Step::LongDescription => Step::BreakingChangeFlag,
            Step::BreakingChangeFlag if answers.breaking_change => Step::BreakingChangeNote,
            Step::BreakingChangeFlag => Step::Done,
            Step::BreakingChangeNote => Step::Done,
            Step::Done => Step::Done,
        }
    }
}

/// Interactive commit builder.
pub struct CommitBuilder<'a> {
    prompter: &'a mut dyn Prompter,
    choices: &'a ChoiceSet,
    store: &'a SessionStore,
    answers: AnswerSet,
}

impl<'a> CommitBuilder<'a> {
    /// Create a new commit builder seeded with restored answers.
    pub fn new(
        prompter: &'a mut dyn Prompter,
        choices: &'a ChoiceSet,
        store: &'a SessionStore,
        restored: AnswerSet,
    ) -> Self {
        Self {
            prompter,
            choices,
            store,
            answers: restored,
        }
    }

    /// Run every applicable step and return the completed answers.
    pub fn run(mut self) -> Result<AnswerSet> {
        if self.choices.commit_types().is_empty() {
            return Err(GitCcError::Config(ConfigError::NoCommitTypes));
        }

        let mut step = Step::SelectType;
        while step != Step::Done {
            self.ask(step)?;
            self.store.save(&self.answers);
            step = step.next(&self.answers);
        }

        Ok(self.answers)
    }

    fn ask(&mut self, step: Step) -> Result<()> {
        match step {
            Step::SelectType => {
                self.answers.commit_type = self.prompt_type()?;
            }
            Step::SelectOrEnterScope => {
                self.answers.scope = self.prompt_scope()?;
            }
            Step::ShortDescription => {
                let subject = self
                    .prompter
                    .input("Short Description", &self.answers.short_description)?;
                self.answers.short_description = subject.trim().to_string();
            }
            Step::LongDescription => {
                let body = self.prompter.multiline(
                    "Long Description (optional)",
                    &self.answers.long_description,
                )?;
                self.answers.long_description = body.trim().to_string();
            }
            Step::BreakingChangeFlag => {
                self.answers.breaking_change = self
                    .prompter
                    .confirm("Breaking Change", self.answers.breaking_change)?;
            }
            Step::BreakingChangeNote => {
                let note = self
                    .prompter
                    .input("Breaking Change Note", &self.answers.breaking_change_note)?;
                self.answers.breaking_change_note = note.trim().to_string();
            }
            Step::Done => {}
        }
        Ok(())
    }

    /// Prompt for commit type.
    fn prompt_type(&mut self) -> Result<String> {
        let types = self.choices.commit_types();

        // Restored type if it is still offered, otherwise the first entry.
        let default_idx = position_of(types, &self.answers.commit_type).unwrap_or(0);

        let selection = self
            .prompter
            .select("Commit Type", types, default_idx)?;

        Ok(types[selection].clone())
    }

    /// Prompt for scope.
    fn prompt_scope(&mut self) -> Result<String> {
        if self.choices.has_scope_list() {
            let scopes = self.choices.scopes();
            let default_idx = position_of(scopes, &self.answers.scope)
                .or_else(|| position_of(scopes, NONE_SCOPE))
                .unwrap_or(0);

            let selection = self.prompter.select("Scope", scopes, default_idx)?;
            Ok(scopes[selection].clone())
        } else {
            let scope = self
                .prompter
                .input("Scope (optional)", &self.answers.scope)?;
            Ok(scope.trim().to_string())
        }
    }
}

fn position_of(items: &[String], value: &str) -> Option<usize> {
    if value.is_empty() {
        return None;
    }
    items.iter().position(|item| item == value)
}
