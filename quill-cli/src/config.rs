use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File, FileFormat, Map};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "./quill.toml";

/// Complete configuration that merges CLI args, env vars, config files, and defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuillConfig {
    /// Build configuration
    pub build: BuildConfig,
    /// Site configuration (from quill-core)
    #[serde(flatten)]
    pub site: quill_core::config::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Directory holding the markdown sources
    pub content: String,
    /// Root the generated site is written to
    pub output: String,
    /// Template overrides, used only if the directory exists
    pub theme: String,
    /// Configuration file path
    pub config: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "./content".to_string(),
            output: ".".to_string(),
            theme: "./theme".to_string(),
            config: DEFAULT_CONFIG_FILE.to_string(),
        }
    }
}

/// CLI flag name to the config key it overrides.
const CLI_KEYS: [(&str, &str); 4] = [
    ("content", "build.content"),
    ("output", "build.output"),
    ("theme", "build.theme"),
    ("config", "build.config"),
];

impl QuillConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (QUILL_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        Self::load_with_env(args, std::env::vars().collect())
    }

    /// Same as [`QuillConfig::load`], reading variables from `env` instead of
    /// the process environment.
    pub fn load_with_env(args: &ArgMatches, env: Map<String, String>) -> Result<Self> {
        let config_file = args
            .try_get_one::<String>("config")
            .ok()
            .flatten()
            .cloned()
            .or_else(|| env.get("QUILL_BUILD__CONFIG").cloned())
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        builder = builder.add_source(ConfigBuilder::try_from(&Self::default())?);

        // 2. Add configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::new(&config_file, FileFormat::Toml));
        }

        // 3. Add environment variables with QUILL_ prefix
        builder = builder.add_source(
            Environment::with_prefix("QUILL")
                .prefix_separator("_")
                .separator("__") // Use double underscore for nested keys
                .source(Some(env)),
        );

        // 4. Override with CLI arguments that were actually given
        let cli_overrides: HashMap<String, String> = CLI_KEYS
            .iter()
            .filter_map(|(arg, key)| {
                let value = args.try_get_one::<String>(arg).ok().flatten()?;
                Some((key.to_string(), value.clone()))
            })
            .collect();

        if !cli_overrides.is_empty() {
            builder = builder.add_source(ConfigBuilder::try_from(&cli_overrides)?);
        }

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn build_config(&self) -> &BuildConfig {
        &self.build
    }

    pub fn site_config(&self) -> &quill_core::config::SiteConfig {
        &self.site.site
    }
}
