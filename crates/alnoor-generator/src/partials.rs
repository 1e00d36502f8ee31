//! `data-include` placeholder resolution.
//!
//! Pages carry `<div data-include="header.html"></div>` placeholders. Each one
//! is filled from a [`FragmentSource`]; a fragment that cannot be loaded is
//! replaced by an inline alert and does not affect the others.

use std::{
    fs,
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

use regex::{Captures, Regex};
use thiserror::Error;
use tracing::{debug, warn};

use crate::views::escape_html;

static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div\s+data-include="([^"]*)"\s*>\s*</div>"#).expect("valid include pattern")
});

/// Fragment loading errors.
#[derive(Debug, Error)]
pub enum PartialError {
    /// Path escapes the fragment root or is absolute.
    #[error("invalid fragment path: {0}")]
    InvalidPath(String),

    /// No fragment at that path.
    #[error("fragment not found: {0}")]
    NotFound(String),

    /// IO error.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for fragment loading.
pub type Result<T> = std::result::Result<T, PartialError>;

/// Where fragments come from.
pub trait FragmentSource {
    fn fetch(&self, path: &str) -> Result<String>;
}

/// Fragments read from a directory.
#[derive(Debug, Clone)]
pub struct DirFragmentSource {
    root: PathBuf,
}

impl DirFragmentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an include path onto the root. A leading `/` is ignored.
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if !plain || relative.as_os_str().is_empty() {
            return Err(PartialError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl FragmentSource for DirFragmentSource {
    fn fetch(&self, path: &str) -> Result<String> {
        let file = self.resolve(path)?;
        if !file.is_file() {
            return Err(PartialError::NotFound(path.to_string()));
        }
        fs::read_to_string(&file).map_err(|source| PartialError::Io {
            path: path.to_string(),
            source,
        })
    }
}

/// Result of filling a page's placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Included {
    pub html: String,

    /// Include paths that could not be loaded, in document order.
    pub failed: Vec<String>,
}

/// Markup substituted for a fragment that failed to load.
pub fn partial_failure_html(path: &str) -> String {
    format!(
        r#"<div class="alert">Unable to load component: {}</div>"#,
        escape_html(path)
    )
}

/// Non-empty include paths referenced by `html`, in document order.
pub fn include_paths(html: &str) -> Vec<&str> {
    INCLUDE_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|path| !path.is_empty())
        .collect()
}

/// Replace every include placeholder in `html` with its fragment.
///
/// Placeholders with an empty path are left untouched.
pub fn include_partials<S>(html: &str, source: &S) -> Included
where
    S: FragmentSource + ?Sized,
{
    let mut failed = Vec::new();

    let html = INCLUDE_RE.replace_all(html, |caps: &Captures<'_>| {
        let path = &caps[1];
        if path.is_empty() {
            return caps[0].to_string();
        }

        match source.fetch(path) {
            Ok(fragment) => {
                debug!(path, "included fragment");
                fragment
            }
            Err(err) => {
                warn!(path, error = %err, "unable to load component");
                failed.push(path.to_string());
                partial_failure_html(path)
            }
        }
    });

    Included {
        html: html.into_owned(),
        failed,
    }
}
