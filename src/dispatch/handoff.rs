// Fri Oct 16 2026 - Alex

use super::error::HandoffError;
use log::debug;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// Everything needed to transfer control to a located command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub env: Vec<(String, PathBuf)>,
}

impl Handoff {
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    /// Runs the command with inherited stdio and returns its exit status.
    /// Nothing in the caller should depend on running after this.
    pub fn execute(&self) -> Result<i32, HandoffError> {
        debug!("handing off to {}", self.command_line());

        let status = Command::new(&self.program)
            .args(&self.args)
            .envs(self.env.iter().map(|(key, value)| (key, value)))
            .status()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => HandoffError::NotFound(self.program.clone()),
                io::ErrorKind::PermissionDenied => {
                    HandoffError::PermissionDenied(self.program.clone())
                }
                _ => HandoffError::Io {
                    program: self.program.clone(),
                    source,
                },
            })?;

        Ok(exit_code(status))
    }
}

pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
