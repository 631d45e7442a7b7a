// Fri Oct 16 2026 - Alex

use super::record::DocumentationRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum indentation that keeps a line inside a `Usage:` block.
pub const USAGE_CONTINUATION_INDENT: usize = 7;

static SUMMARY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Summary:(.*)$").expect("summary pattern is valid"));
static USAGE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Usage:").expect("usage pattern is valid"));
static USAGE_CONTINUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(\s*$| {{{}}})", USAGE_CONTINUATION_INDENT))
        .expect("continuation pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    Normal,
    InUsage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Summary(&'a str),
    Usage,
    UsageContinuation,
    Help,
}

/// Classifies one block line given the current state. Pure, so the
/// continuation rule can be checked on its own.
pub fn classify(line: &str, state: ParseState) -> LineKind<'_> {
    if let Some(caps) = SUMMARY_LINE.captures(line) {
        let rest = caps.get(1).map_or("", |m| m.as_str());
        return LineKind::Summary(rest.strip_prefix(' ').unwrap_or(rest));
    }
    if USAGE_LINE.is_match(line) {
        return LineKind::Usage;
    }
    if state == ParseState::InUsage && USAGE_CONTINUATION.is_match(line) {
        return LineKind::UsageContinuation;
    }
    LineKind::Help
}

pub fn parse<I, S>(lines: I) -> DocumentationRecord
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ParseState::Normal;
    let mut summary = String::new();
    let mut usage = String::new();
    let mut help = String::new();

    for line in lines {
        let line = line.as_ref();
        state = match classify(line, state) {
            LineKind::Summary(rest) => {
                summary = rest.to_string();
                ParseState::Normal
            }
            LineKind::Usage | LineKind::UsageContinuation => {
                usage.push('\n');
                usage.push_str(line);
                ParseState::InUsage
            }
            LineKind::Help => {
                help.push('\n');
                help.push_str(line);
                ParseState::Normal
            }
        };
    }

    let usage = trim_blank_lines(&usage);
    if usage.is_empty() && summary.is_empty() {
        return DocumentationRecord::absent();
    }

    DocumentationRecord {
        summary,
        usage,
        help: trim_blank_lines(&help),
    }
}

fn trim_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let is_blank = |line: &&str| line.trim().is_empty();

    let Some(first) = lines.iter().position(|l| !is_blank(l)) else {
        return String::new();
    };
    let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);

    lines[first..=last].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::extractor::extract_comment_block;

    #[test]
    fn test_parse_summary_usage_and_help() {
        let source = "# Summary: builds the project\n# Usage: tool build [-f]\n#\n# Builds the project.\n";
        let record = parse(extract_comment_block(source));

        assert_eq!(record.summary, "builds the project");
        assert_eq!(record.usage, "Usage: tool build [-f]");
        assert_eq!(record.help, "Builds the project.");
    }

    #[test]
    fn test_parse_without_comments_is_absent() {
        let record = parse(extract_comment_block("echo 'no docs'\n"));
        assert!(record.is_absent());
        assert_eq!(record, DocumentationRecord::absent());
    }

    #[test]
    fn test_parse_help_only_is_absent() {
        let record = parse(extract_comment_block("# Just a note\n# about nothing\n"));
        assert!(record.is_absent());
        assert!(record.help.is_empty());
    }

    #[test]
    fn test_parse_multiline_usage() {
        let source = concat!(
            "# Usage: tool run <task>\n",
            "#        tool run --list\n",
            "#\n",
            "#        tool run --all\n",
            "# Runs a task.\n",
            "#   not usage anymore\n",
        );
        let record = parse(extract_comment_block(source));

        assert_eq!(
            record.usage,
            "Usage: tool run <task>\n       tool run --list\n \n       tool run --all"
        );
        assert_eq!(record.help, "Runs a task.\n  not usage anymore");
        assert!(record.summary.is_empty());
    }

    #[test]
    fn test_short_indent_ends_usage() {
        let source = "# Usage: tool x\n#       six spaces\n";
        let record = parse(extract_comment_block(source));

        assert_eq!(record.usage, "Usage: tool x");
        assert_eq!(record.help, "      six spaces");
    }

    #[test]
    fn test_summary_resets_usage_state() {
        let lines = ["Usage: a", "Summary: later", "        indented help"];
        let record = parse(lines);

        assert_eq!(record.usage, "Usage: a");
        assert_eq!(record.summary, "later");
        assert_eq!(record.help, "        indented help");
    }

    #[test]
    fn test_summary_strips_exactly_one_space() {
        assert_eq!(classify("Summary:  two", ParseState::Normal), LineKind::Summary(" two"));
        assert_eq!(classify("Summary:none", ParseState::Normal), LineKind::Summary("none"));
        assert_eq!(classify("Summary:", ParseState::InUsage), LineKind::Summary(""));
    }

    #[test]
    fn test_classify_continuation_needs_usage_state() {
        let indented = "        more usage";
        assert_eq!(classify(indented, ParseState::InUsage), LineKind::UsageContinuation);
        assert_eq!(classify(indented, ParseState::Normal), LineKind::Help);
        assert_eq!(classify(" ", ParseState::InUsage), LineKind::UsageContinuation);
        assert_eq!(classify("  Usage: x", ParseState::Normal), LineKind::Help);
    }

    #[test]
    fn test_trim_blank_lines() {
        assert_eq!(trim_blank_lines("\n \nkeep\n\n inner\n \n"), "keep\n\n inner");
        assert_eq!(trim_blank_lines("\n \n"), "");
    }
}
