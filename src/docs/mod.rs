// Fri Oct 16 2026 - Alex

pub mod extractor;
pub mod parser;
pub mod record;

pub use extractor::{extract_comment_block, extract_from_reader, CommentBlock, COMMENT_MARKER};
pub use parser::{classify, parse, LineKind, ParseState, USAGE_CONTINUATION_INDENT};
pub use record::DocumentationRecord;

use log::debug;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Pulls a [`DocumentationRecord`] out of a command's leading comment block.
/// Every call re-reads the source; nothing is cached.
#[derive(Debug, Clone)]
pub struct DocExtractor {
    marker: char,
}

impl DocExtractor {
    pub fn new() -> Self {
        Self {
            marker: COMMENT_MARKER,
        }
    }

    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    pub fn extract<'a>(&self, source: &'a str) -> CommentBlock<std::str::Lines<'a>> {
        CommentBlock::new(source.lines(), self.marker)
    }

    pub fn document(&self, source: &str) -> DocumentationRecord {
        parse(self.extract(source))
    }

    pub fn document_file(&self, path: &Path) -> io::Result<DocumentationRecord> {
        let file = File::open(path)?;
        let record = parse(extract_from_reader(BufReader::new(file), self.marker));
        debug!(
            "documentation for {}: {}",
            path.display(),
            if record.is_absent() { "absent" } else { "present" }
        );
        Ok(record)
    }
}

impl Default for DocExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_document_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("build");
        fs::write(
            &path,
            "#!/usr/bin/env bash\n# Summary: Build it\n# Usage: strap build\nset -e\n",
        )
        .unwrap();

        let record = DocExtractor::new().document_file(&path).unwrap();
        assert_eq!(record.summary, "Build it");
        assert_eq!(record.usage, "Usage: strap build");
        assert!(record.help.is_empty());
    }

    #[test]
    fn test_custom_marker() {
        let extractor = DocExtractor::new().with_marker(';');
        let record = extractor.document("; Summary: lisp style\n(defun x ())\n");
        assert_eq!(record.summary, "lisp style");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = DocExtractor::new()
            .document_file(&tmp.path().join("missing"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
