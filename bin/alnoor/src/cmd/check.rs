//! Check command - validate configuration, content and partials

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use alnoor_core::{Config, ContentStore};
use alnoor_generator::{
    DirFragmentSource, FragmentSource, HtmlError, HtmlGenerator, include_paths,
};
use color_eyre::eyre::{Result, bail};

use super::site_root;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration, the content file, and every partial the
/// rendered pages include.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let mut result = ValidationResult::default();
    let root = site_root(config_path);

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    if let Some(config) = config {
        check_config_values(&config, &root, &mut result);

        println!("\nChecking content...");
        let content_path = Config::resolve(&root, &config.build.content_file);
        match ContentStore::load(&content_path) {
            Ok(store) => {
                println!("  ✓ {} loaded", content_path.display());
                check_articles(&config, &store, &mut result);

                println!("\nChecking partials...");
                let partials_dir = Config::resolve(&root, &config.build.partials_dir);
                check_partials(config, store, &partials_dir, &mut result);
            }
            Err(e) => {
                result.add_error(format!("Content error: {e}"));
                println!("  ✗ Content invalid: {e}");
            }
        }
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, root: &Path, result: &mut ValidationResult) {
    if !config.site.base_url.starts_with("http") {
        result.add_warning("site.base_url should start with http:// or https://");
    }

    let output = Config::resolve(root, &config.build.output_dir);
    if output.exists() && !output.is_dir() {
        result.add_error(format!(
            "Output path exists but is not a directory: {}",
            output.display()
        ));
    }

    if config.articles.related_limit == 0 {
        result.add_warning("articles.related_limit is 0, related articles are hidden");
    }
}

/// Check the articles collection against the configured categories.
fn check_articles(config: &Config, store: &ContentStore, result: &mut ValidationResult) {
    let Some(articles) = store.articles() else {
        result.add_warning("Content has no articles collection, the listing shows its error state");
        println!("  ⚠ No articles collection");
        return;
    };

    if articles.is_empty() {
        result.add_warning("Articles collection is empty");
    }

    let categories = &config.articles.categories;
    let mut used = BTreeSet::new();
    for (index, article) in articles.iter().enumerate() {
        let id = index + 1;
        if article.title.trim().is_empty() {
            result.add_error(format!("Article {id} has an empty title"));
        }
        if !categories.is_empty() && !categories.contains(&article.category) {
            result.add_warning(format!(
                "Article {id} ({}) has category '{}' with no filter button",
                article.title, article.category
            ));
        }
        used.insert(article.category.as_str());
    }

    for category in categories {
        if !used.contains(category.as_str()) {
            result.add_warning(format!("Category '{category}' has no articles"));
        }
    }

    println!("  ✓ {} articles checked", articles.len());
}

/// Check that every included partial exists and report unreferenced ones.
fn check_partials(
    config: Config,
    store: ContentStore,
    partials_dir: &Path,
    result: &mut ValidationResult,
) {
    let referenced = match referenced_partials(config, store) {
        Ok(paths) => paths,
        Err(e) => {
            result.add_error(format!("Page rendering failed: {e}"));
            return;
        }
    };

    if referenced.is_empty() {
        println!("  ✓ No partials referenced");
        return;
    }

    if !partials_dir.is_dir() {
        result.add_error(format!(
            "Partials directory missing: {}",
            partials_dir.display()
        ));
        println!("  ✗ {}/ missing", partials_dir.display());
        return;
    }

    let source = DirFragmentSource::new(partials_dir);
    for path in &referenced {
        match source.fetch(path) {
            Ok(_) => println!("  ✓ {path}"),
            Err(e) => {
                result.add_error(format!("Partial {path}: {e}"));
                println!("  ✗ {path}: {e}");
            }
        }
    }

    for file in unreferenced_partials(partials_dir, &referenced) {
        result.add_warning(format!("Partial {} is never included", file.display()));
    }
}

/// Include paths used across every generated page.
fn referenced_partials(
    config: Config,
    store: ContentStore,
) -> std::result::Result<BTreeSet<String>, HtmlError> {
    let generator = HtmlGenerator::new(config, store);
    let list = generator.list_controller();

    let pages = [
        generator.generate_home()?,
        generator.generate_articles(&list)?,
        generator.generate_article_page()?,
        generator.generate_pricing()?,
        generator.generate_terms()?,
    ];

    Ok(pages
        .iter()
        .flat_map(|page| include_paths(page))
        .map(|path| path.trim_start_matches('/').to_string())
        .collect())
}

/// HTML files under `dir` that no page includes.
fn unreferenced_partials(dir: &Path, referenced: &BTreeSet<String>) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
        .filter_map(|e| {
            let relative = e.path().strip_prefix(dir).ok()?;
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            (!referenced.contains(&key)).then(|| relative.to_path_buf())
        })
        .collect()
}
