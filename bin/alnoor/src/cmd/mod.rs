//! Command implementations.

pub mod build;
pub mod check;
pub mod render;
pub mod serve;

use std::path::{Path, PathBuf};

use alnoor_core::{Config, ContentStore};
use color_eyre::eyre::{Result, WrapErr};

/// Configuration and content loaded for one command.
///
/// Paths in the configuration are relative to the directory holding the
/// configuration file.
#[derive(Debug)]
pub struct Site {
    pub config: Config,
    pub store: ContentStore,
    pub root: PathBuf,
}

impl Site {
    /// Load the configuration at `config_path` and the content it names.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;
        let root = site_root(config_path);

        let content_path = Config::resolve(&root, &config.build.content_file);
        let store = ContentStore::load(&content_path)
            .wrap_err_with(|| format!("Failed to load content from {}", content_path.display()))?;

        tracing::debug!(
            root = %root.display(),
            articles = store.article_count(),
            "Loaded site"
        );

        Ok(Self {
            config,
            store,
            root,
        })
    }

    pub fn output_dir(&self) -> PathBuf {
        Config::resolve(&self.root, &self.config.build.output_dir)
    }

    pub fn partials_dir(&self) -> PathBuf {
        Config::resolve(&self.root, &self.config.build.partials_dir)
    }
}

/// Directory the configuration file lives in.
pub fn site_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
