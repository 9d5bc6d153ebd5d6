use std::io;
use std::path::{Path, PathBuf};

use log::info;
use tera::Context;

use crate::category::{Category, UnknownCategory};
use crate::date::display_date;
use crate::frontmatter::{Metadata, extract_frontmatter};
use crate::index::{ContentIndex, IndexEntry};
use crate::markdown::render_markdown;
use crate::paths::resolve;
use crate::template::{PAGE_TEMPLATE, TemplateError, TemplateRenderer};

/// Front matter that can't produce a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required metadata `{0}`")]
    MissingField(&'static str),
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
    #[error("title resolves to the reserved page {0}")]
    ReservedPath(String),
    #[error("another document already resolved to {0}")]
    DuplicatePath(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Template(#[from] TemplateError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Page(IndexEntry),
    Skipped(ValidationError),
}

/// The validated front matter of a publishable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta<'a> {
    pub category: Category,
    pub title: &'a str,
    pub date: Option<&'a str>,
}

impl<'a> PageMeta<'a> {
    pub fn from_metadata(metadata: &'a Metadata) -> Result<Self, ValidationError> {
        let category = metadata
            .get_non_empty("type")
            .ok_or(ValidationError::MissingField("type"))?;
        let title = metadata
            .get_non_empty("title")
            .ok_or(ValidationError::MissingField("title"))?;

        Ok(Self {
            category: category.parse()?,
            title,
            date: metadata.get_non_empty("date"),
        })
    }
}

/// Turns one markdown document into one HTML page under `output_dir`.
pub struct PageRenderer<'a> {
    templates: &'a TemplateRenderer,
    output_dir: &'a Path,
}

impl<'a> PageRenderer<'a> {
    pub fn new(templates: &'a TemplateRenderer, output_dir: &'a Path) -> Self {
        Self {
            templates,
            output_dir,
        }
    }

    /// Render the document at `path` and record it in `index`.
    ///
    /// Invalid front matter, or a title whose page would land on an archive
    /// or on a page already generated into `index`, is reported as
    /// [`Rendered::Skipped`]; nothing is written and the index is left alone.
    pub fn render(&self, path: &Path, index: &mut ContentIndex) -> Result<Rendered, RenderError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RenderError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (metadata, body) = extract_frontmatter(&raw);
        let meta = match PageMeta::from_metadata(&metadata) {
            Ok(meta) => meta,
            Err(e) => return Ok(Rendered::Skipped(e)),
        };

        let out = resolve(meta.category, meta.title);
        if out.relative == Path::new(&meta.category.archive_path()) {
            return Ok(Rendered::Skipped(ValidationError::ReservedPath(out.url)));
        }
        if index.contains_url(&out.url) {
            return Ok(Rendered::Skipped(ValidationError::DuplicatePath(out.url)));
        }

        let date = display_date(meta.date);

        let mut context = Context::new();
        context.insert("title", meta.title);
        context.insert("category", meta.category.name());
        context.insert("stylesheet", &meta.category.stylesheet());
        context.insert("date", &date);
        context.insert("body", &render_markdown(body));

        let html = self.templates.render(PAGE_TEMPLATE, &context)?;

        let output_path = self.output_dir.join(&out.relative);
        write_file(&output_path, &html)?;
        info!("Generated: {}", output_path.display());

        let entry = IndexEntry {
            title: meta.title.to_string(),
            url: out.url,
            display_date: date,
        };
        index.push(meta.category, entry.clone());

        Ok(Rendered::Page(entry))
    }
}

/// Write `contents`, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    };

    write().map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })
}
