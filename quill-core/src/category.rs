use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The kinds of writing the site publishes.
///
/// Every category owns an output folder, a stylesheet and an archive page.
/// Declaration order is the order archives and sitemap entries are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Poetry,
    Stories,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Poetry, Category::Stories];

    /// Name used for the output folder, stylesheet and CSS class hooks.
    pub fn name(self) -> &'static str {
        match self {
            Category::Poetry => "poetry",
            Category::Stories => "stories",
        }
    }

    pub fn folder(self) -> &'static str {
        self.name()
    }

    pub fn stylesheet(self) -> String {
        format!("/{}.css", self.name())
    }

    pub fn archive_title(self) -> &'static str {
        match self {
            Category::Poetry => "Poetry Archive",
            Category::Stories => "Story Archive",
        }
    }

    pub fn archive_file_name(self) -> &'static str {
        match self {
            Category::Poetry => "poetry-archive.html",
            Category::Stories => "story-archive.html",
        }
    }

    /// Archive path relative to the output root.
    pub fn archive_path(self) -> String {
        format!("{}/{}", self.folder(), self.archive_file_name())
    }

    pub fn archive_url(self) -> String {
        format!("/{}", self.archive_path())
    }

    pub fn empty_archive_message(self) -> &'static str {
        match self {
            Category::Poetry => "No poems have been published yet.",
            Category::Stories => "No stories have been published yet.",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type `{0}` (expected `poetry` or `stories`)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "poetry" => Ok(Category::Poetry),
            "stories" | "story" => Ok(Category::Stories),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
