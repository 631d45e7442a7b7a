// Fri Oct 16 2026 - Alex

use std::io::BufRead;

pub const COMMENT_MARKER: char = '#';

/// Lazily yields the leading comment block of a source text with the marker
/// stripped. A bare marker line comes out as a single space.
///
/// Scanning stops at the first line that is not a comment, so a block is
/// never read past the end of the header. A `#!` interpreter line at the very
/// top is skipped without ending the block.
pub struct CommentBlock<I> {
    lines: I,
    marker: char,
    started: bool,
    finished: bool,
}

impl<I, S> CommentBlock<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I, marker: char) -> Self {
        Self {
            lines,
            marker,
            started: false,
            finished: false,
        }
    }
}

impl<I, S> Iterator for CommentBlock<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        loop {
            let Some(line) = self.lines.next() else {
                self.finished = true;
                return None;
            };
            let line = line.as_ref();

            if !self.started {
                self.started = true;
                if line.starts_with("#!") {
                    continue;
                }
            }

            return match strip_marker(line, self.marker) {
                Some(stripped) => Some(stripped),
                None => {
                    self.finished = true;
                    None
                }
            };
        }
    }
}

fn strip_marker(line: &str, marker: char) -> Option<String> {
    let rest = line.strip_prefix(marker)?;
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    if rest.is_empty() {
        Some(" ".to_string())
    } else {
        Some(rest.to_string())
    }
}

pub fn extract_comment_block(source: &str) -> CommentBlock<std::str::Lines<'_>> {
    CommentBlock::new(source.lines(), COMMENT_MARKER)
}

/// Same as [`extract_comment_block`] but reads line by line from `reader`.
/// Invalid UTF-8 is replaced rather than rejected so compiled commands simply
/// produce an empty block.
pub fn extract_from_reader<R: BufRead>(
    reader: R,
    marker: char,
) -> CommentBlock<impl Iterator<Item = String>> {
    let lines = reader
        .split(b'\n')
        .map_while(Result::ok)
        .map(|bytes| {
            let mut line = String::from_utf8_lossy(&bytes).into_owned();
            if line.ends_with('\r') {
                line.pop();
            }
            line
        });
    CommentBlock::new(lines, marker)
}
