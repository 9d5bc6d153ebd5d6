use std::path::{Path, PathBuf};

use log::info;
use tera::Context;

use crate::category::Category;
use crate::index::IndexEntry;
use crate::page::{RenderError, write_file};
use crate::template::{ARCHIVE_TEMPLATE, TemplateRenderer};

/// Write the archive page for `category` and return where it went.
///
/// Entries are listed exactly in the order given, which for a generation
/// run is discovery order rather than date order.
pub fn build_archive(
    templates: &TemplateRenderer,
    output_dir: &Path,
    category: Category,
    entries: &[IndexEntry],
) -> Result<PathBuf, RenderError> {
    let mut context = Context::new();
    context.insert("title", category.archive_title());
    context.insert("category", category.name());
    context.insert("stylesheet", &category.stylesheet());
    context.insert("entries", entries);
    context.insert("empty_message", category.empty_archive_message());

    let html = templates.render(ARCHIVE_TEMPLATE, &context)?;

    let output_path = output_dir.join(category.archive_path());
    write_file(&output_path, &html)?;
    info!("Generated archive: {} ({} entries)", output_path.display(), entries.len());

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;

    fn entry(title: &str, url: &str, date: &str) -> IndexEntry {
        IndexEntry {
            title: title.into(),
            url: url.into(),
            display_date: date.into(),
        }
    }

    #[test]
    fn test_lists_entries_in_given_order() {
        let out = tempfile::tempdir().unwrap();
        let templates = TemplateRenderer::new(&SiteConfig::default()).unwrap();
        let entries = [
            entry("Newest", "/poetry/newest.html", "3/1/25"),
            entry("Oldest", "/poetry/oldest.html", "1/1/20"),
        ];

        let path = build_archive(&templates, out.path(), Category::Poetry, &entries).unwrap();

        assert_eq!(path, out.path().join("poetry/poetry-archive.html"));
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("<title>Poetry Archive - Gerald Reid</title>"));
        assert!(html.contains(r#"<section class="poetry-archive">"#));

        let newest = html
            .find(r#"<li><a href="/poetry/newest.html">Newest</a> (3/1/25)</li>"#)
            .unwrap();
        let oldest = html
            .find(r#"<li><a href="/poetry/oldest.html">Oldest</a> (1/1/20)</li>"#)
            .unwrap();
        assert!(newest < oldest);
        assert!(!html.contains("archive-empty"));
    }

    #[test]
    fn test_empty_archive_shows_placeholder() {
        let out = tempfile::tempdir().unwrap();
        let templates = TemplateRenderer::new(&SiteConfig::default()).unwrap();

        let path = build_archive(&templates, out.path(), Category::Stories, &[]).unwrap();

        assert_eq!(path, out.path().join("stories/story-archive.html"));
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("<h1>Story Archive</h1>"));
        assert!(html.contains("No stories have been published yet."));
        assert!(!html.contains("<ul class=\"archive-list\">"));
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let out = tempfile::tempdir().unwrap();
        let templates = TemplateRenderer::new(&SiteConfig::default()).unwrap();
        let entries = [entry("Only", "/stories/only.html", "Unknown Date")];

        let path = build_archive(&templates, out.path(), Category::Stories, &entries).unwrap();
        let first = fs::read(&path).unwrap();
        build_archive(&templates, out.path(), Category::Stories, &entries).unwrap();

        assert_eq!(first, fs::read(&path).unwrap());
    }
}
