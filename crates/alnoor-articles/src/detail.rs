//! Single article view addressed by ordinal.

use alnoor_core::{ContentStore, config::ArticlesConfig};
use tracing::{debug, warn};

use crate::{
    blocks::{Block, render_content_blocks},
    error::{ArticleError, Result},
    format::{ArticleFormatter, DateStyle, DisplayArticle},
};

/// Related articles shown unless configured otherwise.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// The article identifier carried in a detail page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailAddress {
    id: Option<String>,
}

impl DetailAddress {
    /// Read the `id` parameter from a query string (`?id=3&ref=home` or `id=3`).
    ///
    /// The first `id` wins; an empty value counts as missing.
    pub fn from_query(query: &str) -> Self {
        let id = query
            .trim_start_matches('?')
            .split('&')
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| *key == "id")
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        Self { id }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Everything the detail page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetail {
    pub article: DisplayArticle,

    /// The record's own image. Unlike listing cards, the detail page shows
    /// no image rather than the default one.
    pub hero_image: Option<String>,

    /// The article body split into blocks.
    pub blocks: Vec<Block>,

    /// The first few articles of the store, in content order.
    ///
    /// The current article is not excluded.
    pub related: Vec<DisplayArticle>,
}

/// Lifecycle of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Ready(Box<ArticleDetail>),
    /// Terminal; later loads return the same error.
    Failed(ArticleError),
}

/// Resolves one article and its related set.
#[derive(Debug)]
pub struct ArticleDetailController {
    store: ContentStore,
    formatter: ArticleFormatter,
    card_formatter: ArticleFormatter,
    related_limit: usize,
    epilogue: Option<String>,
    article_id: Option<usize>,
    state: DetailState,
}

impl ArticleDetailController {
    /// Create a controller in the `Loading` state.
    pub fn new(store: ContentStore, formatter: ArticleFormatter, related_limit: usize) -> Self {
        Self {
            store,
            card_formatter: formatter.clone().with_date_style(DateStyle::Short),
            formatter: formatter.with_date_style(DateStyle::Long),
            related_limit,
            epilogue: None,
            article_id: None,
            state: DetailState::Loading,
        }
    }

    /// Create a controller using the `[articles]` config section.
    pub fn from_config(store: ContentStore, config: &ArticlesConfig) -> Self {
        let mut controller = Self::new(
            store,
            ArticleFormatter::from_config(config),
            config.related_limit,
        );
        controller.epilogue = config.detail_epilogue.clone();
        controller
    }

    /// Append `text` as a closing paragraph to every article body.
    #[must_use]
    pub fn with_epilogue(mut self, text: impl Into<String>) -> Self {
        self.epilogue = Some(text.into());
        self
    }

    /// Resolve the article for a raw `id` value.
    ///
    /// Once a load has failed the controller stays failed.
    pub fn load(&mut self, id: Option<&str>) -> Result<()> {
        if let DetailState::Failed(err) = &self.state {
            return Err(err.clone());
        }

        match self.resolve(id) {
            Ok((ordinal, detail)) => {
                debug!(ordinal, related = detail.related.len(), "article loaded");
                self.article_id = Some(ordinal);
                self.state = DetailState::Ready(Box::new(detail));
                Ok(())
            }
            Err(err) => {
                warn!(?id, error = %err, "article detail failed");
                self.state = DetailState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Resolve the article named by a URL query string.
    pub fn load_address(&mut self, address: &DetailAddress) -> Result<()> {
        self.load(address.id())
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Ordinal of the loaded article.
    pub fn article_id(&self) -> Option<usize> {
        self.article_id
    }

    /// The loaded article, if any.
    pub fn detail(&self) -> Option<&ArticleDetail> {
        match &self.state {
            DetailState::Ready(detail) => Some(detail.as_ref()),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&ArticleError> {
        match &self.state {
            DetailState::Failed(err) => Some(err),
            _ => None,
        }
    }

    fn resolve(&self, id: Option<&str>) -> Result<(usize, ArticleDetail)> {
        let raw_id = id
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ArticleError::MissingId)?;

        let ordinal = leading_ordinal(raw_id).ok_or_else(|| ArticleError::not_found(raw_id))?;

        let record = self
            .store
            .article(ordinal)
            .ok_or_else(|| ArticleError::not_found(raw_id))?;

        let mut article = self.formatter.format(ordinal, record);
        let hero_image = record
            .image
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        if let Some(epilogue) = &self.epilogue {
            article.content = format!("{}\n\n{epilogue}", article.content);
        }

        let blocks = render_content_blocks(&article.content).collect();
        let related = self.related();

        Ok((
            ordinal,
            ArticleDetail {
                article,
                hero_image,
                blocks,
                related,
            },
        ))
    }

    fn related(&self) -> Vec<DisplayArticle> {
        self.store
            .articles()
            .unwrap_or_default()
            .iter()
            .take(self.related_limit)
            .enumerate()
            .map(|(index, raw)| self.card_formatter.format(index + 1, raw))
            .collect()
    }
}

/// Read the leading integer of an `id` value, ignoring anything after it.
///
/// `"3/"` and `"2abc"` name articles 3 and 2. Zero, negatives and values
/// without a leading digit name nothing.
fn leading_ordinal(raw: &str) -> Option<usize> {
    let unsigned = raw.strip_prefix('+').unwrap_or(raw);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok().filter(|&ordinal| ordinal > 0)
}

#[cfg(test)]
mod tests {
    use alnoor_core::{RawArticle, SiteContent, config::DEFAULT_ARTICLE_IMAGE};

    use super::*;

    fn store(count: usize) -> ContentStore {
        let articles = (1..=count)
            .map(|n| RawArticle {
                title: format!("Article {n}"),
                excerpt: format!("Excerpt {n}"),
                category: "Hifz".to_string(),
                author: "Qari Bilal".to_string(),
                date: "2024-09-20".to_string(),
                image: (n == 3).then(|| "https://img.example/hifz.jpg".to_string()),
                content: (n == 2).then(|| "# Plan\n\n- Revise\n- Memorise".to_string()),
                tags: None,
            })
            .collect();
        ContentStore::new(SiteContent {
            articles: Some(articles),
            ..SiteContent::default()
        })
    }

    fn detail_controller(count: usize) -> ArticleDetailController {
        ArticleDetailController::new(
            store(count),
            ArticleFormatter::default(),
            DEFAULT_RELATED_LIMIT,
        )
    }

    #[test]
    fn test_load_valid_id() {
        let mut controller = detail_controller(5);
        controller.load(Some("2")).expect("load");

        let detail = controller.detail().expect("detail");
        assert_eq!(controller.article_id(), Some(2));
        assert_eq!(detail.article.title, "Article 2");
        assert_eq!(detail.article.date, "September 20, 2024");
        assert_eq!(
            detail.blocks,
            vec![
                Block::Heading {
                    level: 1,
                    text: "Plan".to_string()
                },
                Block::List(vec!["Revise".to_string(), "Memorise".to_string()]),
            ]
        );
    }

    #[test]
    fn test_related_are_first_three_including_current() {
        let mut controller = detail_controller(5);
        controller.load(Some("1")).expect("load");

        let related = &controller.detail().expect("detail").related;
        let ids: Vec<_> = related.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(related[0].date, "Sep 20, 2024");
    }

    #[test]
    fn test_related_capped_by_store_size() {
        let mut controller = detail_controller(2);
        controller.load(Some("2")).expect("load");
        assert_eq!(controller.detail().expect("detail").related.len(), 2);
    }

    #[test]
    fn test_out_of_range_is_not_found() {
        let mut controller = detail_controller(5);
        assert_eq!(
            controller.load(Some("999")),
            Err(ArticleError::not_found("999"))
        );
        assert_eq!(
            controller.load(Some("0")),
            Err(ArticleError::not_found("999")),
            "failure is terminal"
        );
        assert!(controller.detail().is_none());
    }

    #[test]
    fn test_invalid_ids() {
        for bad in ["0", "-1", "abc", "+", "00", "6", "9abc"] {
            let mut controller = detail_controller(5);
            assert_eq!(controller.load(Some(bad)), Err(ArticleError::not_found(bad)));
        }
    }

    #[test]
    fn test_id_reads_leading_integer() {
        let cases = [
            ("2abc", 2),
            ("3/", 3),
            (" 4", 4),
            ("2.5", 2),
            ("+1", 1),
            ("05", 5),
        ];
        for (raw, expected) in cases {
            let mut controller = detail_controller(5);
            controller.load(Some(raw)).expect("load");
            assert_eq!(controller.article_id(), Some(expected), "id {raw:?}");
        }
    }

    #[test]
    fn test_hero_image_only_when_own() {
        let mut controller = detail_controller(3);
        controller.load(Some("3")).expect("load");
        assert_eq!(
            controller.detail().expect("detail").hero_image.as_deref(),
            Some("https://img.example/hifz.jpg")
        );

        let mut controller = detail_controller(3);
        controller.load(Some("1")).expect("load");
        let detail = controller.detail().expect("detail");
        assert_eq!(detail.hero_image, None);
        assert_eq!(detail.article.image, DEFAULT_ARTICLE_IMAGE);
    }

    #[test]
    fn test_missing_id() {
        let mut controller = detail_controller(5);
        assert_eq!(controller.load(None), Err(ArticleError::MissingId));
        assert_eq!(controller.error(), Some(&ArticleError::MissingId));

        let mut controller = detail_controller(5);
        assert_eq!(controller.load(Some("  ")), Err(ArticleError::MissingId));
    }

    #[test]
    fn test_absent_collection_is_not_found() {
        let mut controller = ArticleDetailController::new(
            ContentStore::default(),
            ArticleFormatter::default(),
            DEFAULT_RELATED_LIMIT,
        );
        assert_eq!(controller.load(Some("1")), Err(ArticleError::not_found("1")));
    }

    #[test]
    fn test_epilogue_is_appended() {
        let mut controller = detail_controller(3).with_epilogue("Keep reciting daily.");
        controller.load(Some("1")).expect("load");

        let detail = controller.detail().expect("detail");
        assert_eq!(detail.article.content, "Excerpt 1\n\nKeep reciting daily.");
        assert_eq!(
            detail.blocks.last(),
            Some(&Block::Paragraph("Keep reciting daily.".to_string()))
        );
    }

    #[test]
    fn test_detail_address_from_query() {
        assert_eq!(DetailAddress::from_query("?id=3").id(), Some("3"));
        assert_eq!(DetailAddress::from_query("ref=home&id=7&id=8").id(), Some("7"));
        assert_eq!(DetailAddress::from_query("?id=").id(), None);
        assert_eq!(DetailAddress::from_query("?ref=home").id(), None);
        assert_eq!(DetailAddress::from_query("").id(), None);
    }

    #[test]
    fn test_load_address() {
        let mut controller = detail_controller(4);
        controller
            .load_address(&DetailAddress::from_query("?id=4"))
            .expect("load");
        assert_eq!(controller.article_id(), Some(4));
    }
}
