use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use tera::{Context, Tera};
use walkdir::WalkDir;

use crate::category::Category;
use crate::config::SiteConfig;

pub const PAGE_TEMPLATE: &str = "page.html";
pub const ARCHIVE_TEMPLATE: &str = "archive.html";

const EMBEDDED: [(&str, &str); 3] = [
    ("base.html", include_str!("../templates/base.html")),
    (PAGE_TEMPLATE, include_str!("../templates/page.html")),
    (ARCHIVE_TEMPLATE, include_str!("../templates/archive.html")),
];

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

/// Home plus one link per category archive.
pub fn site_navigation() -> Vec<NavItem> {
    let mut items = vec![NavItem {
        text: "Home".into(),
        link: "/".into(),
    }];
    items.extend(Category::ALL.iter().map(|c| NavItem {
        text: match c {
            Category::Poetry => "Poetry".into(),
            Category::Stories => "Stories".into(),
        },
        link: c.archive_url(),
    }));
    items
}

/// Renders the site chrome around page and archive bodies.
///
/// Values are HTML-escaped on the way in; only `body` is inserted raw.
pub struct TemplateRenderer {
    tera: Tera,
    globals: Context,
}

impl TemplateRenderer {
    /// Renderer using only the built-in templates.
    pub fn new(site: &SiteConfig) -> Result<Self, TemplateError> {
        Ok(Self::with_tera(embedded()?, site))
    }

    /// Templates in `theme_dir` replace built-in ones of the same name.
    pub fn with_theme(theme_dir: &Path, site: &SiteConfig) -> Result<Self, TemplateError> {
        let mut tera = embedded()?;

        let overrides: Vec<(PathBuf, Option<String>)> = WalkDir::new(theme_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && e.path().extension().is_some_and(|ext| ext == "html"))
            .filter_map(|e| {
                let name = e.path().strip_prefix(theme_dir).ok()?.to_string_lossy().replace('\\', "/");
                Some((e.into_path(), Some(name)))
            })
            .collect();

        if !overrides.is_empty() {
            debug!("Loading {} theme templates from {}", overrides.len(), theme_dir.display());
            tera.add_template_files(overrides)?;
        }

        Ok(Self::with_tera(tera, site))
    }

    fn with_tera(mut tera: Tera, site: &SiteConfig) -> Self {
        tera.set_escape_fn(escape_html);

        let mut globals = Context::new();
        globals.insert("site", site);
        globals.insert("navigation", &site_navigation());

        Self { tera, globals }
    }

    /// Render a template with page-specific values layered over the globals.
    pub fn render(&self, template: &str, context: &Context) -> Result<String, TemplateError> {
        let mut full = self.globals.clone();
        full.extend(context.clone());
        Ok(self.tera.render(template, &full)?)
    }
}

fn embedded() -> Result<Tera, TemplateError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(EMBEDDED)?;
    Ok(tera)
}

// Tera's default escaper also rewrites `/`, which mangles every href.
fn escape_html(input: &str) -> String {
    html_escape::encode_quoted_attribute(input).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn page_context(title: &str, body: &str) -> Context {
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("stylesheet", "/poetry.css");
        context.insert("category", "poetry");
        context.insert("date", "1/10/25");
        context.insert("body", body);
        context
    }

    #[test]
    fn test_page_has_site_chrome() {
        let renderer = TemplateRenderer::new(&SiteConfig::default()).unwrap();
        let html = renderer
            .render(PAGE_TEMPLATE, &page_context("Dawn", "<p>Light.</p>"))
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/styles.css">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="/poetry.css">"#));
        assert!(html.contains("<title>Dawn - Gerald Reid</title>"));
        assert!(html.contains(r#"<li><a href="/poetry/poetry-archive.html">Poetry</a></li>"#));
        assert!(html.contains(r#"<a href="https://medium.com/" aria-label="Medium""#));
        assert!(html.contains("© 2025 Gerald Reid"));
        assert!(html.contains("<p>Light.</p>"));
    }

    #[test]
    fn test_values_are_escaped_but_body_is_not() {
        let renderer = TemplateRenderer::new(&SiteConfig::default()).unwrap();
        let html = renderer
            .render(PAGE_TEMPLATE, &page_context("Fish & <Chips>", "<em>raw</em>"))
            .unwrap();

        assert!(html.contains("<h1>Fish &amp; &lt;Chips&gt;</h1>"));
        assert!(html.contains("<em>raw</em>"));
    }

    #[test]
    fn test_navigation() {
        let links: Vec<_> = site_navigation().into_iter().map(|n| n.link).collect();
        assert_eq!(
            links,
            vec!["/", "/poetry/poetry-archive.html", "/stories/story-archive.html"]
        );
    }

    #[test]
    fn test_theme_overrides_builtin() {
        let theme = tempfile::tempdir().unwrap();
        fs::write(
            theme.path().join("page.html"),
            r#"{% extends "base.html" %}{% block content %}<div id="custom">{{ title }}</div>{% endblock content %}"#,
        )
        .unwrap();

        let renderer = TemplateRenderer::with_theme(theme.path(), &SiteConfig::default()).unwrap();
        let html = renderer
            .render(PAGE_TEMPLATE, &page_context("Dusk", ""))
            .unwrap();

        assert!(html.contains(r#"<div id="custom">Dusk</div>"#));
        assert!(html.contains("<footer>"));
    }
}
