// Fri Oct 16 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid argument: {}: {reason}", .path.display())]
    InvalidArgument { path: PathBuf, reason: &'static str },
    #[error("Too many levels of symbolic links ({hops}): {}", .path.display())]
    SymlinkLoop { path: PathBuf, hops: usize },
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PathError {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => PathError::NotFound(path),
            _ => PathError::Io { path, source },
        }
    }
}

pub type PathResult<T> = Result<T, PathError>;
