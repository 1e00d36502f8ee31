//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Stock image used for articles that do not carry their own.
pub const DEFAULT_ARTICLE_IMAGE: &str = "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=600&q=60";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Article listing and detail settings.
    #[serde(default)]
    pub articles: ArticlesConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, used as the `<title>` suffix.
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,

    /// Where the "Enroll Now" buttons point.
    #[serde(default = "default_contact_url")]
    pub contact_url: String,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Content data file (TOML, YAML or JSON).
    #[serde(default = "default_content_file")]
    pub content_file: String,

    /// Directory that `data-include` paths are resolved against.
    #[serde(default = "default_partials_dir")]
    pub partials_dir: String,
}

/// Article listing and detail configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticlesConfig {
    /// Articles per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Image used when an article has none.
    #[serde(default = "default_image")]
    pub default_image: String,

    /// Category filter buttons, in display order. `all` is implied.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Number of related articles on the detail page.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,

    /// Path of the detail page; the ordinal goes in the `id` query parameter.
    #[serde(default = "default_detail_path")]
    pub detail_path: String,

    /// Paragraph appended to every article body on the detail page.
    #[serde(default)]
    pub detail_epilogue: Option<String>,
}

// Default value functions
fn default_contact_url() -> String {
    "/pages/contact.html".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_content_file() -> String {
    "content.toml".to_string()
}

fn default_partials_dir() -> String {
    "partials".to_string()
}

fn default_page_size() -> usize {
    9
}

fn default_image() -> String {
    DEFAULT_ARTICLE_IMAGE.to_string()
}

fn default_related_limit() -> usize {
    3
}

fn default_detail_path() -> String {
    "/pages/article.html".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            content_file: default_content_file(),
            partials_dir: default_partials_dir(),
        }
    }
}

impl Default for ArticlesConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_image: default_image(),
            categories: Vec::new(),
            related_limit: default_related_limit(),
            detail_path: default_detail_path(),
            detail_epilogue: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `ALNOOR__SECTION__KEY` variables override the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("ALNOOR").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.articles.page_size == 0 {
            return Err(CoreError::config("articles.page_size must be at least 1"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Resolve a path from the config file's directory, leaving absolute paths alone.
    pub fn resolve(base_dir: &Path, path: &str) -> std::path::PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }
}
