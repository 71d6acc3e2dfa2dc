// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message rendering.

use crate::config::NONE_SCOPE;
use crate::session::AnswerSet;

/// Footer prefix for breaking changes.
pub const BREAKING_CHANGE_PREFIX: &str = "BREAKING CHANGE: ";

/// A commit message ready to be rendered.
///
/// Built from an [`AnswerSet`], keeping only the parts that will actually
/// appear in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// Commit type (feat, fix, etc.).
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Optional body.
    pub body: Option<String>,
    /// Optional breaking change note.
    pub breaking_note: Option<String>,
    /// Whether this is a breaking change.
    pub is_breaking: bool,
}

impl CommitMessage {
    /// Create a new commit message.
    pub fn new(commit_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            scope: None,
            subject: subject.into(),
            body: None,
            breaking_note: None,
            is_breaking: false,
        }
    }

    /// Set the scope. Empty and `none` mean no scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        self.scope = if scope.is_empty() || scope == NONE_SCOPE {
            None
        } else {
            Some(scope)
        };
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = if body.is_empty() { None } else { Some(body) };
        self
    }

    /// Set the breaking flag.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.is_breaking = breaking;
        self
    }

    /// Set the breaking change note.
    pub fn with_breaking_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.breaking_note = if note.is_empty() { None } else { Some(note) };
        self
    }

    /// Render an answer set directly.
    pub fn render(answers: &AnswerSet) -> String {
        Self::from(answers).format()
    }

    /// Format the commit message as a string.
    pub fn format(&self) -> String {
        let mut result = self.header();

        // Body
        if let Some(ref body) = self.body {
            result.push_str("\n\n");
            result.push_str(body);
        }

        // Footer
        if let Some(note) = self.footer_note() {
            result.push_str("\n\n");
            result.push_str(BREAKING_CHANGE_PREFIX);
            result.push_str(note);
        }

        result
    }

    /// Get the first line (header) of the commit message.
    pub fn header(&self) -> String {
        let mut result = String::new();
        result.push_str(&self.commit_type);

        if let Some(ref scope) = self.scope {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        if self.is_breaking {
            result.push('!');
        }

        result.push_str(": ");
        result.push_str(&self.subject);

        result
    }

    /// The note rendered in the footer, only when the change is breaking.
    pub fn footer_note(&self) -> Option<&str> {
        if self.is_breaking {
            self.breaking_note.as_deref()
        } else {
            None
        }
    }
}

impl From<&AnswerSet> for CommitMessage {
    fn from(answers: &AnswerSet) -> Self {
        Self::new(answers.commit_type.as_str(), answers.short_description.as_str())
            .with_scope(answers.scope.as_str())
            .with_body(answers.long_description.as_str())
            .with_breaking(answers.breaking_change)
            .with_breaking_note(answers.breaking_change_note.as_str())
    }
}
