use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::Category;

/// One rendered document, as listed on archives and in the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub title: String,
    pub url: String,
    pub display_date: String,
}

/// Rendered documents grouped by category, in the order they were rendered.
///
/// Lives for a single generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentIndex {
    entries: BTreeMap<Category, Vec<IndexEntry>>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category, entry: IndexEntry) {
        self.entries.entry(category).or_default().push(entry);
    }

    /// Whether a page at `url` has already been recorded.
    pub fn contains_url(&self, url: &str) -> bool {
        self.entries.values().flatten().any(|e| e.url == url)
    }

    pub fn entries(&self, category: Category) -> &[IndexEntry] {
        self.entries.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All entries, category by category.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &IndexEntry)> {
        self.entries
            .iter()
            .flat_map(|(category, entries)| entries.iter().map(move |e| (*category, e)))
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
