// Fri Oct 16 2026 - Alex

use super::command::CommandLocator;
use super::error::HelpError;
use crate::config::Config;
use crate::docs::{DocExtractor, DocumentationRecord};
use clap::Parser;
use log::debug;
use std::io::Write;

pub const BUILTIN_COMMANDS: &[&str] = &["help", "run", "version"];

const HELP_DOC: &str = "\
# Summary: Display help for a command
# Usage: {program} help [--usage|--json] [<command>]
#
# Parses the documentation comment at the top of a command and prints
# its usage and help text. With --usage only the usage block is shown,
# with --json the whole record is printed as a JSON object.
";

#[derive(Parser, Debug)]
#[command(name = "help", disable_help_flag = true, disable_version_flag = true)]
pub struct HelpArgs {
    /// Print only the usage block
    #[arg(long, conflicts_with = "json")]
    pub usage: bool,

    /// Print the documentation record as JSON
    #[arg(long, requires = "command")]
    pub json: bool,

    pub command: Option<String>,
}

pub struct HelpCommand<'a> {
    config: &'a Config,
    locator: &'a CommandLocator,
    extractor: DocExtractor,
}

impl<'a> HelpCommand<'a> {
    pub fn new(config: &'a Config, locator: &'a CommandLocator) -> Self {
        Self {
            config,
            locator,
            extractor: DocExtractor::new(),
        }
    }

    /// `help` documents itself when no `help` file is installed.
    pub fn documentation_for(&self, name: &str) -> Result<DocumentationRecord, HelpError> {
        let command = self.locator.lookup(name);
        if command.exists {
            return Ok(self.extractor.document_file(&command.path)?);
        }
        if name == "help" {
            return Ok(self
                .extractor
                .document(&HELP_DOC.replace("{program}", &self.config.program)));
        }
        Err(HelpError::UnknownCommand(name.to_string()))
    }

    pub fn print_summaries<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let program = &self.config.program;
        let width = BUILTIN_COMMANDS.iter().map(|name| name.len()).max().unwrap_or(0);

        writeln!(out, "{}", self.config.version_line())?;
        writeln!(out, "Usage: {} <command> [<args>]", program)?;
        writeln!(out)?;
        writeln!(out, "Some useful {} commands are:", program)?;
        for name in BUILTIN_COMMANDS {
            let summary = match self.documentation_for(name) {
                Ok(record) => record.summary,
                Err(e) => {
                    debug!("no summary for `{}': {}", name, e);
                    String::new()
                }
            };
            writeln!(out, "{}", format!("   {:<width$}   {}", name, summary).trim_end())?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "See `{} help <command>' for information on a specific command.",
            program
        )?;
        Ok(())
    }

    pub fn print_help<W: Write>(&self, out: &mut W, name: &str) -> Result<(), HelpError> {
        let record = self.documentation_for(name)?;
        if record.is_absent() {
            return Err(HelpError::Undocumented(name.to_string()));
        }
        record.write_help(out, &self.config.program, name)?;
        Ok(())
    }

    /// Prints nothing for undocumented commands.
    pub fn print_usage<W: Write>(&self, out: &mut W, name: &str) -> Result<(), HelpError> {
        let record = self.documentation_for(name)?;
        if !record.is_absent() {
            record.write_usage(out, &self.config.program, name)?;
        }
        Ok(())
    }

    pub fn print_json<W: Write>(&self, out: &mut W, name: &str) -> Result<(), HelpError> {
        let record = self.documentation_for(name)?;
        serde_json::to_writer_pretty(&mut *out, &record).map_err(std::io::Error::from)?;
        writeln!(out)?;
        Ok(())
    }
}
