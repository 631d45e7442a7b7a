// Fri Oct 16 2026 - Alex

use super::error::{PathError, PathResult};
use log::trace;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_HOPS: usize = 64;

/// An absolute path with every symlink and `.`/`..` segment resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|name| name.to_str())
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Canonicalizes files and directories without touching the process working
/// directory.
///
/// Directories are canonicalized directly. A file is canonicalized by
/// canonicalizing its parent directory and re-attaching the file name, then
/// following the file itself while it is a symlink. Relative link targets are
/// interpreted against the directory holding the link.
#[derive(Debug, Clone)]
pub struct PathResolver {
    max_hops: usize,
}

impl PathResolver {
    pub fn new() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
        }
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub fn resolve(&self, path: impl AsRef<Path>) -> PathResult<ResolvedPath> {
        let path = path.as_ref();

        if path.is_dir() {
            return self.canonical_dir(path).map(ResolvedPath);
        }

        let mut current = self.canonical_entry(path)?;
        let mut hops = 0;

        loop {
            let metadata = fs::symlink_metadata(&current)
                .map_err(|e| self.io_error(&current, e))?;
            if !metadata.file_type().is_symlink() {
                break;
            }

            hops += 1;
            if hops > self.max_hops {
                return Err(PathError::SymlinkLoop {
                    path: path.to_path_buf(),
                    hops: self.max_hops,
                });
            }

            let target = fs::read_link(&current).map_err(|e| self.io_error(&current, e))?;
            trace!("symlink {} -> {}", current.display(), target.display());

            // `current` always has a canonical parent at this point.
            let next = if target.is_absolute() {
                target
            } else {
                current.parent().unwrap_or_else(|| Path::new("/")).join(target)
            };

            if next.is_dir() {
                return self.canonical_dir(&next).map(ResolvedPath);
            }
            current = self.canonical_entry(&next)?;
        }

        trace!("resolved {} to {}", path.display(), current.display());
        Ok(ResolvedPath(current))
    }

    pub fn resolve_dir(&self, path: impl AsRef<Path>) -> PathResult<ResolvedPath> {
        let resolved = self.resolve(path.as_ref())?;
        if !resolved.as_path().is_dir() {
            return Err(PathError::InvalidArgument {
                path: path.as_ref().to_path_buf(),
                reason: "not a directory",
            });
        }
        Ok(resolved)
    }

    pub fn resolve_file(&self, path: impl AsRef<Path>) -> PathResult<ResolvedPath> {
        let resolved = self.resolve(path.as_ref())?;
        if resolved.as_path().is_dir() {
            return Err(PathError::InvalidArgument {
                path: path.as_ref().to_path_buf(),
                reason: "is a directory",
            });
        }
        Ok(resolved)
    }

    fn canonical_dir(&self, dir: &Path) -> PathResult<PathBuf> {
        let dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };

        let canonical = fs::canonicalize(dir).map_err(|e| self.io_error(dir, e))?;
        if !canonical.is_dir() {
            return Err(PathError::InvalidArgument {
                path: dir.to_path_buf(),
                reason: "not a directory",
            });
        }
        Ok(canonical)
    }

    fn canonical_entry(&self, path: &Path) -> PathResult<PathBuf> {
        // `foo/..` has no file name; it only gets here when it does not exist.
        let name = path
            .file_name()
            .ok_or_else(|| PathError::NotFound(path.to_path_buf()))?;
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(self.canonical_dir(parent)?.join(name))
    }

    /// ELOOP from the OS means a cycle somewhere in an ancestor directory.
    fn io_error(&self, path: &Path, source: io::Error) -> PathError {
        if source.kind() == io::ErrorKind::FilesystemLoop {
            return PathError::SymlinkLoop {
                path: path.to_path_buf(),
                hops: self.max_hops,
            };
        }
        PathError::from_io(path, source)
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

pub fn resolve(path: impl AsRef<Path>) -> PathResult<ResolvedPath> {
    PathResolver::new().resolve(path)
}
