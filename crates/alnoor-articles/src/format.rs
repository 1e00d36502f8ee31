//! Raw article records to display-ready articles.

use alnoor_core::{
    RawArticle,
    config::{ArticlesConfig, DEFAULT_ARTICLE_IMAGE},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A formatted, render-ready article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayArticle {
    /// 1-based position in the content store.
    pub id: usize,

    pub title: String,

    pub excerpt: String,

    pub category: String,

    pub author: String,

    /// Human-readable date.
    pub date: String,

    /// Article image, or the configured default.
    pub image: String,

    /// Permalink to the detail page.
    pub link: String,

    /// Body text; equals the excerpt when the record has none.
    pub content: String,

    pub tags: Vec<String>,
}

impl DisplayArticle {
    /// Whether the title, excerpt or category contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

/// How ISO dates are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `Mar 1, 2024`, used on cards.
    #[default]
    Short,
    /// `March 1, 2024`, used on the detail page.
    Long,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::Short => "%b %-d, %Y",
            Self::Long => "%B %-d, %Y",
        }
    }
}

/// Render a stored date for display.
///
/// Stored dates are normally already human-readable and pass through as-is.
/// A bare ISO date (`2024-03-01`) is rewritten in the requested style.
pub fn display_date(raw: &str, style: DateStyle) -> String {
    let trimmed = raw.trim();
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date.format(style.pattern()).to_string(),
        Err(_) => trimmed.to_string(),
    }
}

/// Formats raw records into [`DisplayArticle`]s.
#[derive(Debug, Clone)]
pub struct ArticleFormatter {
    default_image: String,
    detail_path: String,
    date_style: DateStyle,
}

impl Default for ArticleFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_ARTICLE_IMAGE, "/pages/article.html")
    }
}

impl ArticleFormatter {
    /// Create a formatter with an explicit default image and detail page path.
    #[must_use]
    pub fn new(default_image: impl Into<String>, detail_path: impl Into<String>) -> Self {
        Self {
            default_image: default_image.into(),
            detail_path: detail_path.into(),
            date_style: DateStyle::Short,
        }
    }

    /// Create a formatter from the `[articles]` config section.
    #[must_use]
    pub fn from_config(config: &ArticlesConfig) -> Self {
        Self::new(&config.default_image, &config.detail_path)
    }

    /// Use the given date style.
    #[must_use]
    pub fn with_date_style(mut self, style: DateStyle) -> Self {
        self.date_style = style;
        self
    }

    /// Permalink to the detail page for an ordinal.
    pub fn permalink(&self, ordinal: usize) -> String {
        format!("{}?id={ordinal}", self.detail_path)
    }

    /// Format a single record found at `ordinal` (1-based).
    pub fn format(&self, ordinal: usize, raw: &RawArticle) -> DisplayArticle {
        let image = raw
            .image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(self.default_image.as_str())
            .to_string();

        DisplayArticle {
            id: ordinal,
            title: raw.title.clone(),
            excerpt: raw.excerpt.clone(),
            category: raw.category.clone(),
            author: raw.author.clone(),
            date: display_date(&raw.date, self.date_style),
            image,
            link: self.permalink(ordinal),
            content: raw.content.clone().unwrap_or_else(|| raw.excerpt.clone()),
            tags: raw.tags.clone().unwrap_or_default(),
        }
    }

    /// Format every record, numbering from 1.
    pub fn format_all(&self, articles: &[RawArticle]) -> Vec<DisplayArticle> {
        articles
            .iter()
            .enumerate()
            .map(|(index, raw)| self.format(index + 1, raw))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str) -> RawArticle {
        RawArticle {
            title: title.to_string(),
            excerpt: "Short summary".to_string(),
            category: "Tajweed".to_string(),
            author: "Ustadha Maryam".to_string(),
            date: "Feb 12, 2024".to_string(),
            image: None,
            content: None,
            tags: None,
        }
    }

    #[test]
    fn test_format_applies_defaults() {
        let formatter = ArticleFormatter::default();
        let article = formatter.format(4, &raw("Makharij 101"));

        assert_eq!(article.id, 4);
        assert_eq!(article.image, DEFAULT_ARTICLE_IMAGE);
        assert_eq!(article.link, "/pages/article.html?id=4");
        assert_eq!(article.content, "Short summary");
        assert!(article.tags.is_empty());
        assert_eq!(article.date, "Feb 12, 2024");
    }

    #[test]
    fn test_format_keeps_provided_fields() {
        let formatter = ArticleFormatter::new("/img/fallback.jpg", "/read");
        let mut record = raw("Hifz Routines");
        record.image = Some("https://img.example/hifz.jpg".to_string());
        record.content = Some("# Morning\n\nRevise first.".to_string());
        record.tags = Some(vec!["hifz".to_string(), "routine".to_string()]);

        let article = formatter.format(2, &record);
        assert_eq!(article.image, "https://img.example/hifz.jpg");
        assert_eq!(article.link, "/read?id=2");
        assert_eq!(article.content, "# Morning\n\nRevise first.");
        assert_eq!(article.tags, vec!["hifz", "routine"]);
    }

    #[test]
    fn test_blank_image_uses_default() {
        let formatter = ArticleFormatter::new("/img/fallback.jpg", "/read");
        let mut record = raw("Blank");
        record.image = Some("   ".to_string());

        assert_eq!(formatter.format(1, &record).image, "/img/fallback.jpg");
    }

    #[test]
    fn test_display_date_styles() {
        assert_eq!(display_date("2024-03-01", DateStyle::Short), "Mar 1, 2024");
        assert_eq!(display_date("2024-03-01", DateStyle::Long), "March 1, 2024");
        assert_eq!(display_date("Ramadan 1445", DateStyle::Long), "Ramadan 1445");
        assert_eq!(display_date(" Jan 5, 2024 ", DateStyle::Short), "Jan 5, 2024");
    }

    #[test]
    fn test_format_all_numbers_from_one() {
        let formatter = ArticleFormatter::default();
        let articles = formatter.format_all(&[raw("a"), raw("b"), raw("c")]);
        let ids: Vec<_> = articles.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(articles[2].link, "/pages/article.html?id=3");
    }

    #[test]
    fn test_matches_search() {
        let article = ArticleFormatter::default().format(1, &raw("Makharij 101"));
        assert!(article.matches_search(""));
        assert!(article.matches_search("makharij"));
        assert!(article.matches_search("summary"));
        assert!(article.matches_search("tajw"));
        assert!(!article.matches_search("maryam"));
    }

    #[test]
    fn test_display_article_serializes() {
        let article = ArticleFormatter::default().format(1, &raw("Makharij 101"));
        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"link\":\"/pages/article.html?id=1\""));
    }
}
