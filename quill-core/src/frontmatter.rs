//! Line-oriented front matter.
//!
//! A document may open with a block of `key: value` lines fenced by `---`:
//!
//! ```text
//! ---
//! type: poetry
//! title: My Poem
//! date: 2025-01-10
//! ---
//! The poem itself.
//! ```
//!
//! This is deliberately not YAML. Each line is split on its first colon and
//! both halves are trimmed; anything else on a line is taken verbatim.

use std::collections::BTreeMap;

const DELIMITER: &str = "---";

/// Key/value pairs from a front matter block. Later duplicates win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    fields: BTreeMap<String, String>,
}

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Like [`Metadata::get`], but treats an empty value as missing.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Split `content` into its front matter and the remaining body.
///
/// Without a complete leading block (opening and closing `---` lines) the
/// metadata is empty and the body is the whole input, untouched.
pub fn extract_frontmatter(content: &str) -> (Metadata, &str) {
    let Some(after_open) = strip_delimiter_line(content) else {
        return (Metadata::default(), content);
    };

    let mut metadata = Metadata::default();
    let mut rest = after_open;

    loop {
        let (line, next, last) = match rest.find('\n') {
            Some(end) => (&rest[..end], &rest[end + 1..], false),
            None => (rest, "", true),
        };
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line == DELIMITER {
            return (metadata, next);
        }

        // Ran out of input before the closing fence.
        if last {
            return (Metadata::default(), content);
        }

        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if !key.is_empty() {
                metadata.insert(key, value.trim());
            }
        }

        rest = next;
    }
}

/// Returns the text after an opening `---` line, if the content starts with one.
fn strip_delimiter_line(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field() {
        let (meta, body) = extract_frontmatter("---\nkey: value\n---\nBODY");
        assert_eq!(meta.get("key"), Some("value"));
        assert_eq!(meta.len(), 1);
        assert_eq!(body, "BODY");
    }

    #[test]
    fn test_full_block() {
        let doc = "---\ntype: poetry\ntitle: My Poem\ndate: 2025-01-10\n---\n# Heading\n\nText\n";
        let (meta, body) = extract_frontmatter(doc);
        assert_eq!(meta.get("type"), Some("poetry"));
        assert_eq!(meta.get("title"), Some("My Poem"));
        assert_eq!(meta.get("date"), Some("2025-01-10"));
        assert_eq!(body, "# Heading\n\nText\n");
    }

    #[test]
    fn test_no_frontmatter() {
        let doc = "# Just markdown\n";
        let (meta, body) = extract_frontmatter(doc);
        assert!(meta.is_empty());
        assert_eq!(body, doc);
    }

    #[test]
    fn test_unclosed_block_is_left_alone() {
        let doc = "---\ntitle: Dangling\nno closing fence";
        let (meta, body) = extract_frontmatter(doc);
        assert!(meta.is_empty());
        assert_eq!(body, doc);
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        let (meta, _) = extract_frontmatter("---\ntitle: Time: A Poem\n---\n");
        assert_eq!(meta.get("title"), Some("Time: A Poem"));
    }

    #[test]
    fn test_lines_without_colon_are_ignored() {
        let (meta, body) = extract_frontmatter("---\njust words\ntitle: Kept\n: orphan\n---\nbody");
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("title"), Some("Kept"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_closing_fence_at_end_of_input() {
        let (meta, body) = extract_frontmatter("---\ntitle: Empty\n---");
        assert_eq!(meta.get("title"), Some("Empty"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_crlf_line_endings() {
        let (meta, body) = extract_frontmatter("---\r\ntype: stories\r\ntitle: Night\r\n---\r\nOnce.");
        assert_eq!(meta.get("type"), Some("stories"));
        assert_eq!(meta.get("title"), Some("Night"));
        assert_eq!(body, "Once.");
    }

    #[test]
    fn test_empty_value_is_missing() {
        let (meta, _) = extract_frontmatter("---\ntitle:\n---\n");
        assert_eq!(meta.get("title"), Some(""));
        assert_eq!(meta.get_non_empty("title"), None);
    }

    #[test]
    fn test_later_duplicate_wins() {
        let (meta, _) = extract_frontmatter("---\ntitle: One\ntitle: Two\n---\n");
        assert_eq!(meta.get("title"), Some("Two"));
    }
}
