// Fri Oct 16 2026 - Alex

use super::command::CommandLocator;
use super::error::{DispatchError, DispatchResult, HelpError};
use super::handoff::Handoff;
use super::help::{HelpArgs, HelpCommand};
use crate::config::Config;
use crate::ui::ErrorDisplay;
use clap::Parser;
use log::debug;
use std::ffi::OsString;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed { status: i32 },
    Handoff(Handoff),
}

impl Outcome {
    fn success() -> Self {
        Outcome::Completed { status: 0 }
    }
}

pub struct Dispatcher<'a> {
    config: &'a Config,
    locator: CommandLocator,
    display: ErrorDisplay,
}

impl<'a> Dispatcher<'a> {
    /// Validates the installation layout and makes sure the user data
    /// directory exists. A missing installation directory is fatal; a user
    /// data directory that cannot be created only warns.
    pub fn new(config: &'a Config) -> DispatchResult<Self> {
        config.validate()?;
        let display = ErrorDisplay::new(config.program.clone());
        if let Err(e) = config.ensure_user_home() {
            let message = format!("could not create {}: {}", config.user_home.display(), e);
            display.warn(&mut io::stderr(), &message)?;
        }

        Ok(Self {
            config,
            locator: CommandLocator::new(config),
            display,
        })
    }

    pub fn with_display(mut self, display: ErrorDisplay) -> Self {
        self.display = display;
        self
    }

    /// Only the first argument is interpreted; the rest reach the command
    /// byte for byte.
    pub fn run<O, E>(&self, args: &[OsString], out: &mut O, err: &mut E) -> DispatchResult<Outcome>
    where
        O: Write,
        E: Write,
    {
        let (first, rest) = match args.split_first() {
            Some((first, rest)) => (first.to_string_lossy(), rest),
            None => (Default::default(), &[][..]),
        };
        debug!("dispatching `{}' with {} argument(s)", first, rest.len());

        match &*first {
            "" | "-h" | "--help" => self.summaries(out),
            name if name == self.config.program => self.summaries(out),
            "-v" | "--version" => {
                writeln!(out, "{}", self.config.version_line())?;
                Ok(Outcome::success())
            }
            "--usage" => self.help(args, out, err),
            "help" => self.help(rest, out, err),
            name => {
                let command = self.locator.find(name)?;
                Ok(Outcome::Handoff(Handoff {
                    program: command.path,
                    args: rest.to_vec(),
                    env: self.config.exported_env(),
                }))
            }
        }
    }

    fn summaries<O: Write>(&self, out: &mut O) -> DispatchResult<Outcome> {
        HelpCommand::new(self.config, &self.locator).print_summaries(out)?;
        Ok(Outcome::success())
    }

    fn help<O, E>(&self, args: &[OsString], out: &mut O, err: &mut E) -> DispatchResult<Outcome>
    where
        O: Write,
        E: Write,
    {
        let argv = std::iter::once(OsString::from("help")).chain(args.iter().cloned());
        let parsed =
            HelpArgs::try_parse_from(argv).map_err(|e| DispatchError::Usage(clap_message(&e)))?;
        let help = HelpCommand::new(self.config, &self.locator);

        let Some(name) = parsed.command.as_deref() else {
            if parsed.usage {
                writeln!(out, "Usage: {} <command> [<args>]", self.config.program)?;
                return Ok(Outcome::success());
            }
            return self.summaries(out);
        };

        let result = if parsed.json {
            help.print_json(out, name)
        } else if parsed.usage {
            help.print_usage(out, name)
        } else {
            help.print_help(out, name)
        };

        match result {
            Ok(()) => Ok(Outcome::success()),
            Err(e @ HelpError::Undocumented(_)) => {
                self.display.write(err, &e)?;
                Ok(Outcome::Completed { status: 1 })
            }
            Err(HelpError::UnknownCommand(name)) => Err(DispatchError::UnknownCommand(name)),
            Err(HelpError::Io(e)) => Err(DispatchError::Io(e)),
        }
    }
}

fn clap_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first = rendered.lines().next().unwrap_or("invalid arguments");
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
