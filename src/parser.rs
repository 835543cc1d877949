use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{CorpusErrorKind, PslError, Result};
use crate::types::Rule;

/// Comment marker for corpus lines
pub const COMMENT_PREFIX: &str = "//";

/// Wildcard marker, stripped before indexing
pub const WILDCARD_PREFIX: &str = "*.";

/// Exception rule marker. Exception rules are not supported and are skipped.
pub const EXCEPTION_PREFIX: char = '!';

/// Parse a single corpus line.
///
/// Returns `None` for blank lines, comments and exception rules.
/// A leading `*.` is stripped, so `*.ck` yields the same rule as `ck`.
pub fn parse_rule_line(line: &str) -> Option<Rule> {
    let line = line.trim();

    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return None;
    }

    if line.starts_with(EXCEPTION_PREFIX) {
        log::trace!("Skipping exception rule: {}", line);
        return None;
    }

    // A bare "*." leaves nothing to index
    Rule::new(line.strip_prefix(WILDCARD_PREFIX).unwrap_or(line))
}

/// Parse corpus rules from text.
pub fn parse_rules(text: &str) -> Vec<Rule> {
    parse_lines(text.lines())
}

/// Parse corpus rules from a sequence of lines.
pub fn parse_lines<I, S>(lines: I) -> Vec<Rule>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_rule_line(line.as_ref()))
        .collect()
}

/// Parse corpus rules from a buffered reader.
///
/// Any read error aborts the parse; no partial rule list is returned.
pub fn parse_rules_from_reader<R: BufRead>(reader: R) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| read_error(e, line_num + 1))?;
        if let Some(rule) = parse_rule_line(&line) {
            rules.push(rule);
        }
    }

    Ok(rules)
}

/// Parse corpus rules from a file.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<Rule>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        PslError::corpus(
            CorpusErrorKind::FileError,
            format!("Failed to open corpus file '{}': {}", path.display(), e),
        )
    })?;
    parse_rules_from_reader(BufReader::new(file))
}

fn read_error(e: io::Error, line_num: usize) -> PslError {
    let kind = match e.kind() {
        io::ErrorKind::InvalidData => CorpusErrorKind::InvalidData,
        _ => CorpusErrorKind::FileError,
    };
    PslError::corpus(
        kind,
        format!("Failed to read corpus at line {}: {}", line_num, e),
    )
}
