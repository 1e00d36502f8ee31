//! Full page generation.
//!
//! Article pages are driven by the controllers from `alnoor-articles`; the
//! other pages read the content store directly.

use alnoor_articles::{
    ArticleDetailController, ArticleFormatter, ArticleListController, DetailState,
};
use alnoor_core::{Config, ContentStore};
use chrono::{Datelike, Utc};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    scripts::{DETAIL_SCRIPT, LISTING_SCRIPT, SHARE_SCRIPT},
    template::{TemplateContext, TemplateError, TemplateRegistry},
    views,
};

/// Path of the listing page, linked from the detail page and the homepage.
pub const ARTICLES_PAGE: &str = "/pages/articles.html";

/// Number of article cards on the homepage.
const PREVIEW_COUNT: usize = 3;

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// Per-page values for the base template.
struct Shell<'a> {
    title: String,
    path: &'a str,
    description: Option<&'a str>,
    body_class: Option<&'a str>,
    scripts: Option<String>,
}

/// HTML page generator.
#[derive(Debug)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    config: Config,
    store: ContentStore,
}

impl HtmlGenerator {
    #[must_use]
    pub fn new(config: Config, store: ContentStore) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            config,
            store,
        }
    }

    /// Create a generator with custom templates.
    #[must_use]
    pub fn with_templates(config: Config, store: ContentStore, templates: TemplateRegistry) -> Self {
        Self {
            templates,
            config,
            store,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A loaded listing controller over this generator's content.
    ///
    /// A load failure is kept in the controller's status and rendered as the
    /// error state.
    pub fn list_controller(&self) -> ArticleListController {
        let mut controller =
            ArticleListController::from_config(self.store.clone(), &self.config.articles);
        if let Err(err) = controller.load() {
            warn!(error = %err, "article listing unavailable");
        }
        controller
    }

    /// A detail controller over this generator's content, not yet loaded.
    pub fn detail_controller(&self) -> ArticleDetailController {
        ArticleDetailController::from_config(self.store.clone(), &self.config.articles)
    }

    pub fn generate_home(&self) -> Result<String> {
        let hero = self.store.hero();
        let about = self.store.about();

        let formatter = ArticleFormatter::from_config(&self.config.articles);
        let preview: String = self
            .store
            .articles()
            .unwrap_or_default()
            .iter()
            .take(PREVIEW_COUNT)
            .enumerate()
            .map(|(index, raw)| views::preview_card_html(&formatter.format(index + 1, raw)))
            .collect();
        let courses: String = self
            .store
            .courses()
            .iter()
            .map(views::course_card_html)
            .collect();

        let ctx = TemplateContext::new()
            .with_var("hero_verse", views::escape_html(&hero.verse))
            .with_var("hero_translation", views::escape_html(&hero.translation))
            .with_var("hero_subtext", views::escape_html(&hero.subtext))
            .with_var("hero_actions", views::hero_actions_html(hero))
            .with_var("mission", views::escape_html(&about.mission))
            .with_var("goals", views::list_items_html(&about.goals))
            .with_var("courses", courses)
            .with_var("articles_preview", preview)
            .with_var("articles_url", ARTICLES_PAGE)
            .with_opt("faq", views::faq_html(self.store.faq()));
        let inner = self.templates.render("home", &ctx)?;

        self.wrap(
            Shell {
                title: self.config.site.title.clone(),
                path: "/",
                description: self.config.site.description.as_deref(),
                body_class: Some("home-page"),
                scripts: None,
            },
            &inner,
        )
    }

    /// Filter buttons and the current listing view.
    pub fn listing_fragment(&self, list: &ArticleListController) -> String {
        let filters =
            views::category_filters_html(&self.config.articles.categories, &list.state().category);
        let listing = views::list_view_html(&list.view());
        format!(r#"<div class="category-filters">{filters}</div>{listing}"#)
    }

    pub fn generate_articles(&self, list: &ArticleListController) -> Result<String> {
        let state = list.state();
        let ctx = TemplateContext::new()
            .with_var(
                "filters",
                views::category_filters_html(&self.config.articles.categories, &state.category),
            )
            .with_var("listing", views::list_view_html(&list.view()))
            .with_var("page_size", state.page_size.to_string())
            .with_opt("card_source", views::card_source_html(list.articles()))
            .with_var("search_value", views::escape_html(&state.search_term))
            .with_var(
                "intro",
                "Guidance for students and parents on Tajweed, Hifz and Quranic living.",
            );
        let inner = self.templates.render("articles", &ctx)?;
        debug!(
            page = state.page,
            total_pages = list.total_pages(),
            "rendered article listing"
        );

        self.wrap(
            Shell {
                title: self.page_title("Articles"),
                path: ARTICLES_PAGE,
                description: self.config.site.description.as_deref(),
                body_class: Some("articles-page"),
                scripts: Some(LISTING_SCRIPT.to_string()),
            },
            &inner,
        )
    }

    /// The detail body for the controller's current state.
    pub fn article_fragment(&self, detail: &ArticleDetailController) -> Result<String> {
        let html = match detail.state() {
            DetailState::Loading => {
                r#"<div id="article-loading" class="loading">Loading article...</div>"#.to_string()
            }
            DetailState::Failed(err) => {
                let ctx = TemplateContext::new()
                    .with_var("message", views::escape_html(&capitalize(&err.to_string())))
                    .with_var("articles_url", ARTICLES_PAGE);
                self.templates.render("article_missing", &ctx)?
            }
            DetailState::Ready(ready) => {
                let article = &ready.article;
                let ctx = TemplateContext::new()
                    .with_var("title", views::escape_html(&article.title))
                    .with_var("category", views::escape_html(&article.category))
                    .with_var("author", views::escape_html(&article.author))
                    .with_var("date", views::escape_html(&article.date))
                    .with_opt(
                        "hero_image",
                        ready
                            .hero_image
                            .as_deref()
                            .map(|url| views::detail_image_html(url, &article.title)),
                    )
                    .with_var("body", views::blocks_html(&ready.blocks))
                    .with_var("articles_url", ARTICLES_PAGE)
                    .with_opt("tags", views::tags_html(&article.tags))
                    .with_opt("related", views::related_section_html(&ready.related));
                self.templates.render("article", &ctx)?
            }
        };
        Ok(html)
    }

    pub fn generate_article(&self, detail: &ArticleDetailController) -> Result<String> {
        let inner = self.article_fragment(detail)?;
        let (title, description) = match detail.detail() {
            Some(ready) => (
                self.page_title(&ready.article.title),
                Some(ready.article.excerpt.as_str()),
            ),
            None => (self.page_title("Article"), None),
        };

        self.wrap(
            Shell {
                title,
                path: &self.config.articles.detail_path,
                description,
                body_class: Some("article-page"),
                scripts: Some(SHARE_SCRIPT.to_string()),
            },
            &inner,
        )
    }

    /// The statically hosted detail page.
    ///
    /// Every article body, plus the missing-id and not-found states, is
    /// rendered into a `<template>`; the page script shows the one named by
    /// the `?id=` of the request.
    pub fn generate_article_page(&self) -> Result<String> {
        let pending = self.detail_controller();
        let mut inner = format!(
            r#"<div id="article-view">{}</div>"#,
            self.article_fragment(&pending)?
        );

        for ordinal in 1..=self.store.article_count() {
            let mut detail = self.detail_controller();
            if let Err(err) = detail.load(Some(&ordinal.to_string())) {
                warn!(ordinal, error = %err, "skipping article variant");
                continue;
            }
            let title = detail
                .detail()
                .map(|ready| self.page_title(&ready.article.title))
                .unwrap_or_default();
            inner.push_str(&format!(
                r#"<template data-article-id="{ordinal}" data-title="{}">{}</template>"#,
                views::escape_html(&title),
                self.article_fragment(&detail)?
            ));
        }

        let mut missing_id = self.detail_controller();
        let _ = missing_id.load(None);
        let mut not_found = self.detail_controller();
        let _ = not_found.load(Some("0"));
        inner.push_str(&format!(
            r#"<template data-article-state="missing-id">{}</template><template data-article-state="not-found">{}</template>"#,
            self.article_fragment(&missing_id)?,
            self.article_fragment(&not_found)?
        ));
        debug!(articles = self.store.article_count(), "rendered article page");

        self.wrap(
            Shell {
                title: self.page_title("Article"),
                path: &self.config.articles.detail_path,
                description: self.config.site.description.as_deref(),
                body_class: Some("article-page"),
                scripts: Some(format!("{SHARE_SCRIPT}{DETAIL_SCRIPT}")),
            },
            &inner,
        )
    }

    pub fn generate_pricing(&self) -> Result<String> {
        let contact = &self.config.site.contact_url;
        let plans: String = self
            .store
            .pricing()
            .iter()
            .map(|plan| views::pricing_card_html(plan, contact))
            .collect();
        let inner = self
            .templates
            .render("pricing", &TemplateContext::new().with_var("plans", plans))?;

        self.wrap(
            Shell {
                title: self.page_title("Pricing"),
                path: "/pages/pricing.html",
                description: self.config.site.description.as_deref(),
                body_class: Some("pricing-page"),
                scripts: None,
            },
            &inner,
        )
    }

    pub fn generate_terms(&self) -> Result<String> {
        let ctx =
            TemplateContext::new().with_var("terms", views::list_items_html(self.store.terms()));
        let inner = self.templates.render("terms", &ctx)?;

        self.wrap(
            Shell {
                title: self.page_title("Terms & Conditions"),
                path: "/pages/terms.html",
                description: self.config.site.description.as_deref(),
                body_class: Some("terms-page"),
                scripts: None,
            },
            &inner,
        )
    }

    fn page_title(&self, title: &str) -> String {
        format!("{title} | {}", self.config.site.title)
    }

    fn wrap(&self, shell: Shell<'_>, inner: &str) -> Result<String> {
        let ctx = TemplateContext::new()
            .with_var("title", views::escape_html(&shell.title))
            .with_var("canonical_url", views::escape_html(&self.config.url_for(shell.path)))
            .with_var("content", inner)
            .with_var("site_title", views::escape_html(&self.config.site.title))
            .with_var("year", Utc::now().year().to_string())
            .with_opt("description", shell.description.map(views::escape_html))
            .with_opt(
                "author",
                self.config.site.author.as_deref().map(views::escape_html),
            )
            .with_opt("body_class", shell.body_class)
            .with_opt("scripts", shell.scripts);

        Ok(self.templates.render("base", &ctx)?)
    }
}

/// Uppercase the first letter of an error message for display.
fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
