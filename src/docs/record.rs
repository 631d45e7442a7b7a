// Fri Oct 16 2026 - Alex

use serde::Serialize;
use std::borrow::Cow;
use std::io::{self, Write};

/// Parsed `{summary, usage, help}` triple from a command's header comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentationRecord {
    pub summary: String,
    pub usage: String,
    pub help: String,
}

impl DocumentationRecord {
    pub fn absent() -> Self {
        Self::default()
    }

    /// A record with neither summary nor usage documents nothing.
    pub fn is_absent(&self) -> bool {
        self.summary.is_empty() && self.usage.is_empty()
    }

    pub fn help_text(&self) -> &str {
        if self.help.is_empty() {
            &self.summary
        } else {
            &self.help
        }
    }

    pub fn usage_text<'a>(&'a self, program: &str, command: &str) -> Cow<'a, str> {
        if self.usage.is_empty() {
            Cow::Owned(format!("Usage: {} {}", program, command))
        } else {
            Cow::Borrowed(&self.usage)
        }
    }

    pub fn write_usage<W: Write>(&self, out: &mut W, program: &str, command: &str) -> io::Result<()> {
        writeln!(out, "{}", self.usage_text(program, command))
    }

    pub fn write_help<W: Write>(&self, out: &mut W, program: &str, command: &str) -> io::Result<()> {
        self.write_usage(out, program, command)?;

        let help = self.help_text();
        if !help.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", help)?;
            writeln!(out)?;
        }
        Ok(())
    }
}
