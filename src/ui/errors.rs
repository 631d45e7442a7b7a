// Fri Oct 16 2026 - Alex

use colored::Colorize;
use std::error::Error;
use std::io::{self, Write};

/// Formats errors as `<program>: <message>` for the error stream.
pub struct ErrorDisplay {
    program: String,
    color_enabled: bool,
}

impl ErrorDisplay {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            color_enabled: colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.color_enabled = false;
        self
    }

    fn prefix(&self) -> String {
        let prefix = format!("{}:", self.program);
        if self.color_enabled {
            prefix.red().bold().to_string()
        } else {
            prefix
        }
    }

    pub fn format_message(&self, message: &str) -> String {
        format!("{} {}", self.prefix(), message)
    }

    pub fn format(&self, error: &dyn Error) -> String {
        let mut output = self.format_message(&error.to_string());

        let mut source = error.source();
        let mut depth = 1;

        while let Some(cause) = source {
            let arrow = if self.color_enabled {
                "→".yellow().to_string()
            } else {
                "->".to_string()
            };
            output.push_str(&format!("\n  {} Caused by: {}", arrow, cause));
            source = cause.source();
            depth += 1;

            if depth > 10 {
                output.push_str("\n  ... (cause chain truncated)");
                break;
            }
        }

        output
    }

    pub fn write<W: Write>(&self, out: &mut W, error: &dyn Error) -> io::Result<()> {
        writeln!(out, "{}", self.format(error))
    }

    pub fn print(&self, error: &dyn Error) {
        eprintln!("{}", self.format(error));
    }

    pub fn format_warning(&self, message: &str) -> String {
        if self.color_enabled {
            format!("{} {} {}", self.prefix(), "warning:".yellow().bold(), message)
        } else {
            format!("{} warning: {}", self.prefix(), message)
        }
    }

    pub fn warn<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        writeln!(out, "{}", self.format_warning(message))
    }
}
