//! Diagnostic formatting for better error messages
//!
//! This module provides utilities for formatting errors with source
//! line context for the CLI.

use super::CodeGoError;
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic {
    error: CodeGoError,
    source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: impl Into<CodeGoError>) -> Self {
        Self {
            error: error.into(),
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: impl Into<CodeGoError>, source: &str) -> Self {
        Self {
            error: error.into(),
            source: Some(source.to_string()),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        // Error header
        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(&self.error.to_string());
        output.push('\n');

        // Location and source context
        if let Some(line) = self.error.line() {
            output.push_str(&format!("  {} line {}\n", "-->".blue().bold(), line));

            if let Some(ref source) = self.source {
                output.push_str(&self.format_source_context(source, line));
            }
        }

        output
    }

    /// Format source code context around the error line
    fn format_source_context(&self, source: &str, line: usize) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();

        if line == 0 || line > lines.len() {
            return output;
        }

        let line_idx = line - 1;
        let line_num_width = (line + 1).to_string().len();

        // Show previous line if available
        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        // Show error line
        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx].red()
        ));

        // Show next line if available
        if line_idx + 1 < lines.len() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx + 2, width = line_num_width).blue(),
                lines[line_idx + 1]
            ));
        }

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
