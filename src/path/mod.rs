// Fri Oct 16 2026 - Alex

pub mod error;
pub mod resolver;

pub use error::{PathError, PathResult};
pub use resolver::{resolve, PathResolver, ResolvedPath, DEFAULT_MAX_HOPS};
