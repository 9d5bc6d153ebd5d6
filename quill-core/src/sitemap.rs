//! `sitemap.xml` for search engines.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/poetry/my-poem.html</loc>
//!     <lastmod>2025-01-10T12:00:00.000Z</lastmod>
//!   </url>
//! </urlset>
//! ```
//!
//! `lastmod` is the time of the generation run, shared by every entry.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};

use crate::index::ContentIndex;
use crate::page::{RenderError, write_file};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Sitemap XML for every indexed page, or `None` when nothing was indexed.
pub fn sitemap_xml(index: &ContentIndex, origin: &str, generated_at: DateTime<Utc>) -> Option<String> {
    if index.is_empty() {
        return None;
    }

    let origin = origin.trim_end_matches('/');
    let lastmod = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true);

    let mut xml = String::with_capacity(256 + index.len() * 128);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    for (_, entry) in index.iter() {
        let loc = format!("{origin}{}", entry.url);
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", html_escape::encode_text(&loc)));
        xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    Some(xml)
}

/// Write `sitemap.xml` into `output_dir`.
///
/// An empty index writes nothing and returns `Ok(None)`.
pub fn build_sitemap(
    index: &ContentIndex,
    origin: &str,
    output_dir: &Path,
    generated_at: DateTime<Utc>,
) -> Result<Option<PathBuf>, RenderError> {
    let Some(xml) = sitemap_xml(index, origin, generated_at) else {
        warn!("No pages were generated, skipping {SITEMAP_FILE}");
        return Ok(None);
    };

    let path = output_dir.join(SITEMAP_FILE);
    write_file(&path, &xml)?;
    info!("Generated sitemap: {} ({} urls)", path.display(), index.len());

    Ok(Some(path))
}
