pub mod archive;
pub mod builder;
pub mod category;
pub mod config;
pub mod date;
pub mod frontmatter;
pub mod index;
pub mod markdown;
pub mod page;
pub mod paths;
pub mod scanner;
pub mod sitemap;
pub mod template;

// Re-export main types
pub use builder::{BuildError, BuildReport, Site, SiteBuilder};
pub use category::Category;
pub use frontmatter::{Metadata, extract_frontmatter};
pub use index::{ContentIndex, IndexEntry};
pub use markdown::render_markdown;
pub use page::{PageRenderer, RenderError, Rendered, ValidationError};
pub use paths::{OutputPath, resolve};
pub use scanner::{ContentScanner, ScanError};
pub use template::{TemplateError, TemplateRenderer};
