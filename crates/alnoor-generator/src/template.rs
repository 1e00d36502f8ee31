//! HTML template system for page generation.
//!
//! Plain string interpolation: `{{ name }}` is required, `{{ name? }}` renders
//! as empty when unset. Substituted values are never re-scanned.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Variables for interpolation.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert `value` only when it is `Some`.
    #[must_use]
    pub fn with_opt(mut self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A named template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given context.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = self.content.clone();
        let mut pos = 0;

        while let Some(start) = result[pos..].find("{{") {
            let start = pos + start;
            let end = result[start..]
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let end = start + end + 2;

            let var_name = result[start + 2..end - 2].trim();
            let (var_name, optional) = match var_name.strip_suffix('?') {
                Some(stripped) => (stripped.trim_end(), true),
                None => (var_name, false),
            };

            let value = match context.get(var_name) {
                Some(v) => v.to_string(),
                None if optional => String::new(),
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            };

            result.replace_range(start..end, &value);
            pos = start + value.len();
        }

        Ok(result)
    }
}

/// Registry of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a registry holding the built-in page templates.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        self.register(Template::new("base", DEFAULT_BASE_TEMPLATE));
        self.register(Template::new("home", DEFAULT_HOME_TEMPLATE));
        self.register(Template::new("articles", DEFAULT_ARTICLES_TEMPLATE));
        self.register(Template::new("article", DEFAULT_ARTICLE_TEMPLATE));
        self.register(Template::new(
            "article_missing",
            DEFAULT_ARTICLE_MISSING_TEMPLATE,
        ));
        self.register(Template::new("pricing", DEFAULT_PRICING_TEMPLATE));
        self.register(Template::new("terms", DEFAULT_TERMS_TEMPLATE));
    }

    /// Register a template, replacing any with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Page shell shared by every page. Header and footer come in as partials.
pub const DEFAULT_BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <meta name="description" content="{{ description? }}">
    <meta name="author" content="{{ author? }}">
    <link rel="canonical" href="{{ canonical_url }}">
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link href="https://fonts.googleapis.com/css2?family=Amiri&family=Inter:wght@400;600;700&display=swap" rel="stylesheet">
    <link rel="stylesheet" href="/assets/css/style.css">
</head>
<body class="{{ body_class? }}">
    <div data-include="header.html"></div>
    <main>
        {{ content }}
    </main>
    <div data-include="footer.html"></div>
    <p class="copyright">&copy; <span id="year">{{ year }}</span> {{ site_title }}. All rights reserved.</p>
    {{ scripts? }}
</body>
</html>"##;

/// Homepage body.
pub const DEFAULT_HOME_TEMPLATE: &str = r#"<section class="hero">
    <div class="container">
        <p class="hero-verse" lang="ar" dir="rtl" data-hero-verse>{{ hero_verse }}</p>
        <p class="hero-translation" data-hero-translation>{{ hero_translation }}</p>
        <p class="hero-text" data-hero-text>{{ hero_subtext }}</p>
        <div class="hero-actions">{{ hero_actions }}</div>
    </div>
</section>
<section class="about">
    <div class="container">
        <h2>Our Mission</h2>
        <p data-about-mission>{{ mission }}</p>
        <ul class="goals" data-goals>{{ goals }}</ul>
    </div>
</section>
<section class="courses">
    <div class="container">
        <h2>Our Courses</h2>
        <div class="grid" id="courses-grid">{{ courses }}</div>
    </div>
</section>
<section class="articles-preview">
    <div class="container">
        <h2>Latest Articles</h2>
        <div class="grid" id="articles-preview">{{ articles_preview }}</div>
        <a href="{{ articles_url }}" class="btn btn-outline">View All Articles</a>
    </div>
</section>
{{ faq? }}"#;

/// Article listing body.
pub const DEFAULT_ARTICLES_TEMPLATE: &str = r#"<section class="page-header">
    <div class="container">
        <h1>Articles &amp; Resources</h1>
        <p>{{ intro? }}</p>
    </div>
</section>
<section class="articles-section">
    <div class="container">
        <div class="articles-controls">
            <div class="search-box">
                <input type="search" id="article-search" placeholder="Search articles..." value="{{ search_value? }}">
                <button type="button" id="search-btn" class="btn btn-primary">Search</button>
            </div>
            <div class="category-filters">{{ filters }}</div>
        </div>
        <div id="articles-listing" data-page-size="{{ page_size }}">{{ listing }}</div>
        {{ card_source? }}
    </div>
</section>"#;

/// Article detail body.
pub const DEFAULT_ARTICLE_TEMPLATE: &str = r#"<div class="container">
    <nav class="breadcrumb">
        <a href="/">Home</a> / <a href="{{ articles_url }}">Articles</a> / <span id="breadcrumb-title">{{ title }}</span>
    </nav>
    <article id="single-article" class="single-article">
        <header class="article-header">
            <span class="badge" id="article-category">{{ category }}</span>
            <h1 id="article-title">{{ title }}</h1>
            <div class="article-meta">
                <span id="article-author">{{ author }}</span> &bull;
                <time id="article-date" datetime="{{ date }}">{{ date }}</time>
            </div>
        </header>
        {{ hero_image? }}
        <div id="article-body" class="article-body">{{ body }}</div>
        <div id="article-tags">{{ tags? }}</div>
        <div class="article-share">
            <button type="button" class="btn btn-outline" onclick="shareArticle()">Share Article</button>
        </div>
    </article>
    {{ related? }}
</div>"#;

/// Detail page when the article cannot be resolved.
pub const DEFAULT_ARTICLE_MISSING_TEMPLATE: &str = r#"<div class="container">
    <div id="article-error" class="article-error">
        <h1>Article Not Found</h1>
        <p data-article-message>{{ message }}</p>
        <a href="{{ articles_url }}" class="btn btn-primary">Back to Articles</a>
    </div>
</div>"#;

/// Pricing grid body.
pub const DEFAULT_PRICING_TEMPLATE: &str = r#"<section class="page-header">
    <div class="container">
        <h1>Pricing Plans</h1>
        <p>Flexible monthly plans for every learner.</p>
    </div>
</section>
<section class="pricing">
    <div class="container">
        <div class="pricing-grid" id="pricing-grid">{{ plans }}</div>
    </div>
</section>"#;

/// Terms list body.
pub const DEFAULT_TERMS_TEMPLATE: &str = r#"<section class="page-header">
    <div class="container">
        <h1>Terms &amp; Conditions</h1>
    </div>
</section>
<section class="terms">
    <div class="container">
        <ol id="terms-list">{{ terms }}</ol>
    </div>
</section>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_simple_render() {
        let template = Template::new("test", "Assalamu alaikum, {{ name }}!");
        let ctx = TemplateContext::new().with_var("name", "Aisha");

        let result = template.render(&ctx).unwrap();
        assert_eq!(result, "Assalamu alaikum, Aisha!");
    }

    #[test]
    fn test_template_optional_variable() {
        let template = Template::new("test", "Plan{{ suffix? }}.");

        let result = template.render(&TemplateContext::new()).unwrap();
        assert_eq!(result, "Plan.");

        let ctx = TemplateContext::new().with_var("suffix", " A");
        assert_eq!(template.render(&ctx).unwrap(), "Plan A.");
    }

    #[test]
    fn test_with_opt_skips_none() {
        let ctx = TemplateContext::new()
            .with_opt("author", Some("Qari Bilal"))
            .with_opt("description", None::<String>);
        assert_eq!(ctx.get("author"), Some("Qari Bilal"));
        assert_eq!(ctx.get("description"), None);
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let template = Template::new("test", "<p>{{ body }}</p>");
        let ctx = TemplateContext::new().with_var("body", "{{ not_a_var }}");
        assert_eq!(template.render(&ctx).unwrap(), "<p>{{ not_a_var }}</p>");
    }

    #[test]
    fn test_template_missing_required_variable() {
        let template = Template::new("test", "Hello, {{ name }}!");
        let result = template.render(&TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::MissingVariable(name)) if name == "name"));
    }

    #[test]
    fn test_unclosed_delimiter() {
        let template = Template::new("test", "Hello, {{ name");
        assert!(matches!(
            template.render(&TemplateContext::new()),
            Err(TemplateError::InvalidSyntax(_))
        ));
    }

    #[test]
    fn test_template_registry() {
        let registry = TemplateRegistry::new();

        for name in [
            "base",
            "home",
            "articles",
            "article",
            "article_missing",
            "pricing",
            "terms",
        ] {
            assert!(registry.get(name).is_some(), "{name} is registered");
        }
        assert!(matches!(
            registry.render("nonexistent", &TemplateContext::new()),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_render_base_template() {
        let registry = TemplateRegistry::new();
        let ctx = TemplateContext::new()
            .with_var("title", "Pricing | Al-Noor Quran Institute")
            .with_var("canonical_url", "https://alnoor.example/pages/pricing.html")
            .with_var("content", "<p>Plans</p>")
            .with_var("site_title", "Al-Noor Quran Institute")
            .with_var("year", "2026");

        let result = registry.render("base", &ctx).unwrap();
        assert!(result.contains("<title>Pricing | Al-Noor Quran Institute</title>"));
        assert!(result.contains("<p>Plans</p>"));
        assert!(result.contains(r#"data-include="header.html""#));
        assert!(result.contains(r#"&copy; <span id="year">2026</span> Al-Noor Quran Institute"#));
    }
}
