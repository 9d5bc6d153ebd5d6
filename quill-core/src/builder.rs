use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

use crate::archive::build_archive;
use crate::category::Category;
use crate::config::SiteConfig;
use crate::index::ContentIndex;
use crate::page::{PageRenderer, RenderError, Rendered, ValidationError};
use crate::scanner::{ContentScanner, ScanError};
use crate::sitemap::build_sitemap;
use crate::template::{TemplateError, TemplateRenderer};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Content directory not specified")]
    MissingContentDir,
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A document that was discovered but produced no page.
#[derive(Debug)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: ValidationError,
}

/// A document whose page could not be read or written.
#[derive(Debug)]
pub struct Failed {
    pub path: PathBuf,
    pub error: RenderError,
}

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub index: ContentIndex,
    pub skipped: Vec<Skipped>,
    pub failed: Vec<Failed>,
    pub archives: Vec<PathBuf>,
    pub sitemap: Option<PathBuf>,
}

impl BuildReport {
    pub fn pages(&self) -> usize {
        self.index.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

pub struct SiteBuilder {
    content_dir: Option<PathBuf>,
    output_dir: PathBuf,
    theme_dir: Option<PathBuf>,
    site: SiteConfig,
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteBuilder {
    pub fn new() -> Self {
        Self {
            content_dir: None,
            output_dir: PathBuf::from("."),
            theme_dir: None,
            site: SiteConfig::default(),
        }
    }

    // Required configuration
    pub fn content_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.content_dir = Some(path.as_ref().to_path_buf());
        self
    }

    // Optional configuration
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = path.as_ref().to_path_buf();
        self
    }

    /// Templates here override the built-in ones. Ignored if the directory
    /// doesn't exist.
    pub fn theme_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.theme_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn site_config(mut self, config: SiteConfig) -> Self {
        self.site = config;
        self
    }

    pub fn build(self) -> Result<Site, BuildError> {
        let content_dir = self.content_dir.ok_or(BuildError::MissingContentDir)?;

        let templates = match self.theme_dir.filter(|dir| dir.is_dir()) {
            Some(dir) => {
                debug!("Using theme: {}", dir.display());
                TemplateRenderer::with_theme(&dir, &self.site)?
            }
            None => TemplateRenderer::new(&self.site)?,
        };

        Ok(Site {
            scanner: ContentScanner::new(content_dir),
            output_dir: self.output_dir,
            templates,
            site: self.site,
        })
    }
}

pub struct Site {
    scanner: ContentScanner,
    output_dir: PathBuf,
    templates: TemplateRenderer,
    site: SiteConfig,
}

impl Site {
    pub fn content_dir(&self) -> &Path {
        self.scanner.source_dir()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Run the whole pipeline once: pages, then archives, then the sitemap.
    ///
    /// A document that can't be read or written is recorded in the report
    /// and the run moves on. Failing to scan, or to write an archive or the
    /// sitemap, aborts the run.
    pub fn generate(&self, generated_at: DateTime<Utc>) -> Result<BuildReport, BuildError> {
        let documents = self.scanner.scan()?;
        info!(
            "Found {} documents in {}",
            documents.len(),
            self.scanner.source_dir().display()
        );

        let mut report = BuildReport::default();
        let renderer = PageRenderer::new(&self.templates, &self.output_dir);

        for path in documents {
            match renderer.render(&path, &mut report.index) {
                Ok(Rendered::Page(_)) => {}
                Ok(Rendered::Skipped(reason)) => {
                    warn!("Skipping {}: {reason}", path.display());
                    report.skipped.push(Skipped { path, reason });
                }
                Err(error) => {
                    error!("Error: {error}");
                    report.failed.push(Failed { path, error });
                }
            }
        }

        for category in Category::ALL {
            let entries = report.index.entries(category);
            let archive = build_archive(&self.templates, &self.output_dir, category, entries)?;
            report.archives.push(archive);
        }

        report.sitemap = build_sitemap(
            &report.index,
            self.site.origin(),
            &self.output_dir,
            generated_at,
        )?;

        Ok(report)
    }
}
