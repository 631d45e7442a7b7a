// Fri Oct 16 2026 - Alex
#![feature(io_error_more)]

pub mod config;
pub mod dispatch;
pub mod docs;
pub mod path;
pub mod ui;

pub use config::{Config, ConfigError, EnvSnapshot};
pub use dispatch::{Dispatcher, DispatchError, Handoff, Outcome};
pub use docs::{DocExtractor, DocumentationRecord};
pub use path::{PathError, PathResolver, ResolvedPath};
