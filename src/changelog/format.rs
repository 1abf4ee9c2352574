//! Extraction of numbered changelog items from commit subjects.
//!
//! Commit subjects in the projects this tool targets carry their release notes
//! inline as numbered lists, e.g. `1. Fix login 2. Add export`. Every subject
//! that starts with a digit is split on the `N.` markers, each piece is
//! trimmed, temporary items are dropped, and the remainder is deduplicated and
//! renumbered across the whole range.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

/// Leading token that marks an item as temporary ("临时").
///
/// Temporary items never appear in the changelog.
pub const TEMPORARY_MARKER: &str = "临时";

/// Delimiter between numbered items on one subject line.
static ITEM_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.").expect("item delimiter pattern is valid"));

/// A single numbered changelog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    /// 1-based position in the changelog.
    pub index: usize,
    /// Trimmed item text.
    pub text: String,
}

impl fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}. {}", self.index, self.text)
    }
}

/// Accumulates entries for a single formatting pass.
///
/// Holds the set of texts already accepted and the running index, so
/// deduplication spans every line pushed into the same builder.
#[derive(Debug, Default)]
pub struct ChangelogBuilder {
    seen: HashSet<String>,
    entries: Vec<ChangelogEntry>,
}

impl ChangelogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one commit subject line.
    ///
    /// Lines that do not start with a digit (after optional whitespace) are
    /// ignored.
    pub fn push_line(&mut self, line: &str) {
        if !is_numbered_line(line) {
            return;
        }

        for fragment in ITEM_DELIMITER.split(line) {
            self.push_fragment(fragment);
        }
    }

    /// Feed one raw fragment. Returns `true` if it became a new entry.
    fn push_fragment(&mut self, fragment: &str) -> bool {
        let text = trim_fragment(fragment);

        if text.is_empty() || is_temporary(text) || self.seen.contains(text) {
            return false;
        }

        self.seen.insert(text.to_string());
        self.entries.push(ChangelogEntry {
            index: self.entries.len() + 1,
            text: text.to_string(),
        });
        true
    }

    pub fn finish(self) -> Vec<ChangelogEntry> {
        self.entries
    }
}

/// Extract the deduplicated, numbered entries from raw `git log` output.
pub fn collect_entries(logs: &str) -> Vec<ChangelogEntry> {
    let mut builder = ChangelogBuilder::new();
    for line in logs.split('\n') {
        builder.push_line(line);
    }
    builder.finish()
}

/// Format raw `git log` output into rendered changelog lines (`"  1. text"`).
pub fn format_changelog(logs: &str) -> Vec<String> {
    collect_entries(logs)
        .iter()
        .map(ChangelogEntry::to_string)
        .collect()
}

/// Join rendered changelog lines with newlines.
pub fn render(lines: &[String]) -> String {
    lines.join("\n")
}

/// A line holds changelog items when its first non-whitespace char is a digit.
fn is_numbered_line(line: &str) -> bool {
    line.trim_start_matches(|c: char| c.is_ascii_whitespace())
        .starts_with(|c: char| c.is_ascii_digit())
}

/// Strip leading whitespace/digits and trailing whitespace.
fn trim_fragment(fragment: &str) -> &str {
    fragment
        .trim_start_matches(|c: char| c.is_ascii_whitespace() || c.is_ascii_digit())
        .trim_end_matches(|c: char| c.is_ascii_whitespace())
}

fn is_temporary(text: &str) -> bool {
    text.starts_with(TEMPORARY_MARKER)
}
