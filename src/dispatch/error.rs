// Fri Oct 16 2026 - Alex

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no such command `{0}'")]
    UnknownCommand(String),
    #[error("{0}")]
    Usage(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HelpError {
    #[error("no documentation for `{0}'")]
    Undocumented(String),
    #[error("no such command `{0}'")]
    UnknownCommand(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HandoffError {
    #[error("{}: command not found", .0.display())]
    NotFound(PathBuf),
    #[error("{}: permission denied", .0.display())]
    PermissionDenied(PathBuf),
    #[error("failed to run {}: {source}", .program.display())]
    Io {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HandoffError {
    /// Shell conventions: 127 when the program is missing, 126 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            HandoffError::NotFound(_) => 127,
            HandoffError::PermissionDenied(_) | HandoffError::Io { .. } => 126,
        }
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;
