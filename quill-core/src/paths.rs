use std::path::PathBuf;

use crate::category::Category;

/// Where a rendered document lives, on disk and on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPath {
    /// Relative to the output root, e.g. `poetry/my-poem.html`.
    pub relative: PathBuf,
    /// Public URL, e.g. `/poetry/my-poem.html`.
    pub url: String,
}

/// The slug is kept as-is on disk and percent-encoded in the URL, so titles
/// with `?`, `#` or `%` still link to their own page.
pub fn resolve(category: Category, title: &str) -> OutputPath {
    let folder = category.folder();
    let slug = slugify(title);

    OutputPath {
        url: format!("/{folder}/{}.html", urlencoding::encode(&slug)),
        relative: PathBuf::from(format!("{folder}/{slug}.html")),
    }
}

/// Lowercase the title and join its words with single hyphens.
///
/// Path separators become hyphens too, so a slug never leaves its folder.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .replace(['/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_poetry() {
        let out = resolve(Category::Poetry, "My Poem");
        assert_eq!(out.relative, PathBuf::from("poetry/my-poem.html"));
        assert_eq!(out.url, "/poetry/my-poem.html");
    }

    #[test]
    fn test_resolve_story() {
        let out = resolve(Category::Stories, "The Long  Walk Home");
        assert_eq!(out.relative, PathBuf::from("stories/the-long-walk-home.html"));
        assert_eq!(out.url, "/stories/the-long-walk-home.html");
    }

    #[test]
    fn test_url_is_percent_encoded() {
        let out = resolve(Category::Poetry, "Why?");
        assert_eq!(out.relative, PathBuf::from("poetry/why?.html"));
        assert_eq!(out.url, "/poetry/why%3F.html");

        let out = resolve(Category::Stories, "100% #True");
        assert_eq!(out.relative, PathBuf::from("stories/100%-#true.html"));
        assert_eq!(out.url, "/stories/100%25-%23true.html");

        let out = resolve(Category::Poetry, "Salt & Pepper");
        assert_eq!(out.url, "/poetry/salt-%26-pepper.html");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Tabs\tand\nnewlines "), "tabs-and-newlines");
        assert_eq!(slugify("Already-Hyphenated"), "already-hyphenated");
        assert_eq!(slugify("Either/Or"), "either-or");
        assert_eq!(slugify("Ça Va"), "ça-va");
    }
}
