//! Build orchestration.
//!
//! Renders every page, fills the `data-include` placeholders and writes the
//! site to the output directory.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use alnoor_articles::{ArticleListController, DisplayArticle};
use alnoor_core::{Config, ContentStore};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    html::{HtmlError, HtmlGenerator},
    partials::{DirFragmentSource, include_partials},
};

/// Where the article data export is written, relative to the output directory.
pub const ARTICLES_JSON: &str = "assets/data/articles.json";

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Article data export failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of pages written.
    pub pages: usize,

    /// Number of articles in the data export.
    pub articles: usize,

    /// Include placeholders that fell back to an alert.
    pub partial_failures: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// One rendered page waiting to be written.
#[derive(Debug)]
struct RenderedPage {
    relative: &'static str,
    html: String,
}

/// Site builder.
#[derive(Debug)]
pub struct Builder {
    generator: HtmlGenerator,
    output_dir: PathBuf,
    partials_dir: Option<PathBuf>,
}

impl Builder {
    #[must_use]
    pub fn new(config: Config, store: ContentStore, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            generator: HtmlGenerator::new(config, store),
            output_dir: output_dir.into(),
            partials_dir: None,
        }
    }

    /// Fill `data-include` placeholders from this directory.
    #[must_use]
    pub fn with_partials_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.partials_dir = Some(dir.into());
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Execute the full build.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(output = %self.output_dir.display(), "starting build");

        self.clean_output()?;

        let list = self.generator.list_controller();
        let pages = self.render_pages(&list)?;
        let (written, partial_failures) = self.write_pages(pages);
        stats.pages = written;
        stats.partial_failures = partial_failures;

        stats.articles = self.write_articles_json(list.articles())?;

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            articles = stats.articles,
            partial_failures = stats.partial_failures,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Render every page in its initial state.
    ///
    /// The listing shows page 1 of every category and carries every card for
    /// the page script. The detail page carries every article body.
    fn render_pages(&self, list: &ArticleListController) -> Result<Vec<RenderedPage>> {
        let generator = &self.generator;

        Ok(vec![
            RenderedPage {
                relative: "index.html",
                html: generator.generate_home()?,
            },
            RenderedPage {
                relative: "pages/articles.html",
                html: generator.generate_articles(list)?,
            },
            RenderedPage {
                relative: "pages/article.html",
                html: generator.generate_article_page()?,
            },
            RenderedPage {
                relative: "pages/pricing.html",
                html: generator.generate_pricing()?,
            },
            RenderedPage {
                relative: "pages/terms.html",
                html: generator.generate_terms()?,
            },
        ])
    }

    /// Fill includes and write pages in parallel.
    ///
    /// Returns the number of pages written and of failed includes.
    fn write_pages(&self, pages: Vec<RenderedPage>) -> (usize, usize) {
        let source = self.partials_dir.as_ref().map(DirFragmentSource::new);

        let results: Vec<_> = pages
            .into_par_iter()
            .map(|page| {
                let (html, failures) = match &source {
                    Some(source) => {
                        let included = include_partials(&page.html, source);
                        (included.html, included.failed.len())
                    }
                    None => (page.html, 0),
                };

                let output_path = self.output_dir.join(page.relative);
                if let Some(parent) = output_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&output_path, html)?;

                debug!(path = %output_path.display(), "wrote page");
                Ok::<_, BuildError>(failures)
            })
            .collect();

        let mut written = 0;
        let mut failures = 0;
        for result in results {
            match result {
                Ok(count) => {
                    written += 1;
                    failures += count;
                }
                Err(e) => warn!(error = %e, "failed to write page"),
            }
        }

        (written, failures)
    }

    /// Export the formatted articles for client-side filtering.
    fn write_articles_json(&self, articles: &[DisplayArticle]) -> Result<usize> {
        let output_path = self.output_dir.join(ARTICLES_JSON);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, serde_json::to_string_pretty(articles)?)?;

        info!(path = %output_path.display(), count = articles.len(), "wrote article data");
        Ok(articles.len())
    }
}

#[cfg(test)]
mod tests {
    use alnoor_core::{RawArticle, SiteContent, config::SiteConfig};
    use tempfile::TempDir;

    use super::*;

    fn test_config() -> Config {
        Config {
            site: SiteConfig {
                title: "Al-Noor Quran Institute".to_string(),
                base_url: "https://alnoor.example".to_string(),
                description: None,
                author: None,
                contact_url: "/pages/contact.html".to_string(),
            },
            build: Default::default(),
            articles: Default::default(),
        }
    }

    fn store(count: usize) -> ContentStore {
        ContentStore::new(SiteContent {
            articles: Some(
                (1..=count)
                    .map(|n| RawArticle {
                        title: format!("Lesson {n}"),
                        excerpt: "Weekly reflection".to_string(),
                        category: "Tajweed".to_string(),
                        author: "Qari Bilal".to_string(),
                        date: "Mar 3, 2024".to_string(),
                        image: None,
                        content: None,
                        tags: None,
                    })
                    .collect(),
            ),
            ..SiteContent::default()
        })
    }

    #[test]
    fn test_build_writes_every_page() {
        let output = TempDir::new().unwrap();
        let builder = Builder::new(test_config(), store(4), output.path());

        let stats = builder.build().unwrap();

        assert_eq!(stats.pages, 5);
        assert_eq!(stats.articles, 4);
        for page in [
            "index.html",
            "pages/articles.html",
            "pages/article.html",
            "pages/pricing.html",
            "pages/terms.html",
        ] {
            assert!(output.path().join(page).is_file(), "{page} written");
        }

        let json = fs::read_to_string(output.path().join(ARTICLES_JSON)).unwrap();
        let articles: Vec<DisplayArticle> = serde_json::from_str(&json).unwrap();
        assert_eq!(articles[3].link, "/pages/article.html?id=4");
    }

    #[test]
    fn test_build_cleans_output() {
        let output = TempDir::new().unwrap();
        fs::write(output.path().join("stale.html"), "old").unwrap();

        Builder::new(test_config(), store(1), output.path())
            .build()
            .unwrap();

        assert!(!output.path().join("stale.html").exists());
    }

    #[test]
    fn test_build_fills_partials() {
        let output = TempDir::new().unwrap();
        let partials = TempDir::new().unwrap();
        fs::write(partials.path().join("header.html"), "<header>Al-Noor</header>").unwrap();

        let stats = Builder::new(test_config(), store(2), output.path())
            .with_partials_dir(partials.path())
            .build()
            .unwrap();

        // footer.html is missing on every page
        assert_eq!(stats.partial_failures, 5);

        let index = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(index.contains("<header>Al-Noor</header>"));
        assert!(index.contains("Unable to load component: footer.html"));
    }

    #[test]
    fn test_build_without_articles() {
        let output = TempDir::new().unwrap();
        let stats = Builder::new(test_config(), ContentStore::default(), output.path())
            .build()
            .unwrap();

        assert_eq!(stats.articles, 0);
        let listing = fs::read_to_string(output.path().join("pages/articles.html")).unwrap();
        assert!(listing.contains("articles-error"));
        let json = fs::read_to_string(output.path().join(ARTICLES_JSON)).unwrap();
        assert_eq!(json.trim(), "[]");
    }
}
