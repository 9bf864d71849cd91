//! Section splitting
//!
//! Splits a markdown document into sections keyed by their level-2 heading.

use std::collections::BTreeMap;

/// Heading marker that opens a new section
pub const HEADING_MARKER: &str = "## ";

/// Section bodies keyed by lowercased, trimmed heading title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    sections: BTreeMap<String, String>,
}

impl SectionMap {
    /// Get the body of a section by key
    ///
    /// Keys are stored lowercased, so `key` should already be lowercase.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.sections.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sections.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    fn commit(&mut self, key: String, lines: &[&str]) {
        // A heading followed by no lines at all is dropped
        if lines.is_empty() {
            return;
        }
        self.sections.insert(key, lines.join("\n").trim().to_string());
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Parse a markdown document into sections
///
/// Line endings are normalized first, so CRLF and CR documents split the
/// same way as LF ones. Only lines starting with `## ` open a section.
/// Text before the first heading is discarded. A later heading with the
/// same title replaces the earlier body.
pub fn parse_sections(content: &str) -> SectionMap {
    let content = normalize_newlines(content);
    let mut map = SectionMap::default();
    let mut current: Option<String> = None;
    let mut lines: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        if let Some(title) = line.strip_prefix(HEADING_MARKER) {
            if let Some(key) = current.take() {
                map.commit(key, &lines);
            }
            current = Some(title.trim().to_lowercase());
            lines.clear();
        } else if current.is_some() {
            lines.push(line);
        }
    }

    if let Some(key) = current {
        map.commit(key, &lines);
    }

    map
}
