// Fri Oct 16 2026 - Alex

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod handoff;
pub mod help;

pub use command::{is_valid_name, Command, CommandLayer, CommandLocator, CommandSource};
pub use dispatcher::{Dispatcher, Outcome};
pub use error::{DispatchError, DispatchResult, HandoffError, HelpError};
pub use handoff::Handoff;
pub use help::{HelpArgs, HelpCommand, BUILTIN_COMMANDS};

