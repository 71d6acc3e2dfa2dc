// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message preview.

use console::{measure_text_width, style, truncate_str, Term};

use super::message::{CommitMessage, BREAKING_CHANGE_PREFIX};

/// Inner width of the preview box.
const BOX_WIDTH: usize = 62;

/// Commit preview renderer.
pub struct CommitPreview<'a> {
    message: &'a CommitMessage,
}

impl<'a> CommitPreview<'a> {
    /// Create a new preview for a commit message.
    pub fn new(message: &'a CommitMessage) -> Self {
        Self { message }
    }

    /// Print the preview to stderr.
    pub fn print(&self) {
        let term = Term::stderr();
        if let Err(e) = self.render(&term) {
            tracing::debug!("Failed to print preview: {}", e);
        }
    }

    /// Render the preview to a terminal.
    fn render(&self, term: &Term) -> std::io::Result<()> {
        term.write_line(&format!(
            "{}",
            style("┌─ Commit Preview ─────────────────────────────────────────────┐").dim()
        ))?;

        self.write_row(term, &self.format_header())?;

        if let Some(ref body) = self.message.body {
            self.write_row(term, "")?;
            for line in body.lines() {
                self.write_row(term, &style(line).dim().to_string())?;
            }
        }

        if let Some(note) = self.message.footer_note() {
            self.write_row(term, "")?;
            let footer = format!(
                "{}{}",
                style(BREAKING_CHANGE_PREFIX).red().bold(),
                note
            );
            self.write_row(term, &footer)?;
        }

        term.write_line(&format!(
            "{}",
            style("└──────────────────────────────────────────────────────────────┘").dim()
        ))?;

        Ok(())
    }

    fn write_row(&self, term: &Term, content: &str) -> std::io::Result<()> {
        term.write_line(&self.format_row(content))
    }

    /// One boxed row. Content wider than the box is cut with an ellipsis.
    fn format_row(&self, content: &str) -> String {
        let content = truncate_str(content, BOX_WIDTH - 1, "…");
        format!(
            "{} {}{}",
            style("│").dim(),
            content,
            self.padding(measure_text_width(&content))
        )
    }

    /// Format the header with syntax highlighting.
    fn format_header(&self) -> String {
        let mut result = String::new();
        let commit_type = self.message.commit_type.as_str();

        // Type (colored)
        let type_style = match commit_type {
            "feat" => style(commit_type).green().bold(),
            "fix" => style(commit_type).red().bold(),
            "docs" => style(commit_type).blue().bold(),
            "refactor" => style(commit_type).yellow().bold(),
            "build" | "ci" => style(commit_type).cyan().bold(),
            "chore" => style(commit_type).magenta().bold(),
            _ => style(commit_type).white().bold(),
        };
        result.push_str(&type_style.to_string());

        // Scope
        if let Some(ref scope) = self.message.scope {
            result.push_str(&format!("({})", style(scope).cyan()));
        }

        // Breaking indicator
        if self.message.is_breaking {
            result.push_str(&style("!").red().bold().to_string());
        }

        result.push_str(": ");
        result.push_str(&self.message.subject);

        result
    }

    /// Create padding to align the right border.
    fn padding(&self, content_len: usize) -> String {
        let padding_needed = BOX_WIDTH.saturating_sub(content_len + 1);
        format!("{}{}", " ".repeat(padding_needed), style("│").dim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn test_format_header() {
        let message = CommitMessage::new("feat", "add feature").with_scope("core");
        let preview = CommitPreview::new(&message);
        let header = strip_ansi_codes(&preview.format_header()).to_string();
        assert_eq!(header, "feat(core): add feature");
    }

    #[test]
    fn test_format_header_breaking() {
        let message = CommitMessage::new("feat", "change").with_breaking(true);
        let preview = CommitPreview::new(&message);
        let header = strip_ansi_codes(&preview.format_header()).to_string();
        assert_eq!(header, message.header());
    }

    #[test]
    fn test_padding_aligns_border() {
        let message = CommitMessage::new("fix", "x");
        let preview = CommitPreview::new(&message);
        let row = format!("│ {}{}", "abc", preview.padding(3));
        assert_eq!(measure_text_width(&row), BOX_WIDTH + 2);
    }

    #[test]
    fn test_long_row_stays_inside_box() {
        let message = CommitMessage::new("docs", "x");
        let preview = CommitPreview::new(&message);

        let long = "word ".repeat(40);
        let row = preview.format_row(&style(&long).dim().to_string());
        assert_eq!(measure_text_width(&row), BOX_WIDTH + 2);
        assert!(strip_ansi_codes(&row).contains('…'));

        let short = preview.format_row("short");
        assert_eq!(measure_text_width(&short), BOX_WIDTH + 2);
    }
}
