use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parsing(#[from] toml::de::Error),
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&data)?;

        Ok(config)
    }
}

/// Site-wide values shared by every generated page.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Appended to every `<title>` and used as the logo's alt text.
    pub author: String,
    /// Origin prepended to page URLs in the sitemap.
    pub base_url: String,
    pub logo: String,
    pub copyright: String,
    pub socials: Vec<SocialLink>,
}

impl SiteConfig {
    /// `base_url` without a trailing slash, ready to prefix `/path` URLs.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            author: "Gerald Reid".into(),
            base_url: "https://geraldreid.com".into(),
            logo: "/images/logo.svg".into(),
            copyright: "© 2025 Gerald Reid".into(),
            socials: vec![
                SocialLink {
                    label: "Medium".into(),
                    url: "https://medium.com/".into(),
                    icon: "fa-brands fa-medium".into(),
                },
                SocialLink {
                    label: "Instagram".into(),
                    url: "https://instagram.com/".into(),
                    icon: "fa-brands fa-instagram".into(),
                },
            ],
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}
