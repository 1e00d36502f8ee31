//! Article listing state: category filter, search and pagination.

use alnoor_core::{ContentStore, config::ArticlesConfig};
use tracing::{debug, warn};

use crate::{
    error::{ArticleError, Result},
    format::{ArticleFormatter, DisplayArticle},
    pagination::Pagination,
};

/// Articles per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Wildcard category value.
pub const ALL_CATEGORIES: &str = "all";

/// Category selection for the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Exactly this category.
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter value; empty and `all` (any case) mean every category.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Whether an article in `category` passes the filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// The value used in filter buttons (`all` for the wildcard).
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }
}

/// Filter, search and page selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub category: CategoryFilter,

    /// Lowercased search term; empty matches everything.
    pub search_term: String,

    /// 1-based current page.
    pub page: usize,

    pub page_size: usize,
}

impl ListState {
    /// Initial state: every category, no search, first page.
    pub fn new(page_size: usize) -> Self {
        Self {
            category: CategoryFilter::All,
            search_term: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Lifecycle of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    /// Articles not read yet.
    Loading,
    /// Articles formatted and filterable.
    Ready,
    /// Terminal failure.
    Error(ArticleError),
}

/// What the listing shows for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Error(&'a ArticleError),
    /// Nothing matches the filter or search.
    Empty,
    Page {
        articles: Vec<&'a DisplayArticle>,
        pagination: Pagination,
    },
}

/// Owns the listing state and derives the visible page from the content store.
#[derive(Debug)]
pub struct ArticleListController {
    store: ContentStore,
    formatter: ArticleFormatter,
    articles: Vec<DisplayArticle>,
    /// Indices into `articles` that pass the current filter and search.
    filtered: Vec<usize>,
    state: ListState,
    status: ListStatus,
}

impl ArticleListController {
    /// Create a controller in the `Loading` state.
    pub fn new(store: ContentStore, formatter: ArticleFormatter, page_size: usize) -> Self {
        Self {
            store,
            formatter,
            articles: Vec::new(),
            filtered: Vec::new(),
            state: ListState::new(page_size),
            status: ListStatus::Loading,
        }
    }

    /// Create a controller using the `[articles]` config section.
    pub fn from_config(store: ContentStore, config: &ArticlesConfig) -> Self {
        Self::new(
            store,
            ArticleFormatter::from_config(config),
            config.page_size,
        )
    }

    /// Read and format the articles.
    ///
    /// An absent collection is an error; an empty one is a ready listing with
    /// nothing in it.
    pub fn load(&mut self) -> Result<()> {
        let Some(raw) = self.store.articles() else {
            warn!("content has no articles collection");
            self.status = ListStatus::Error(ArticleError::NoArticles);
            return Err(ArticleError::NoArticles);
        };

        self.articles = self.formatter.format_all(raw);
        self.status = ListStatus::Ready;
        self.refresh();

        debug!(articles = self.articles.len(), "article listing ready");
        Ok(())
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Every formatted article, in content order.
    pub fn articles(&self) -> &[DisplayArticle] {
        &self.articles
    }

    /// Select a category (`all` for every category) and go back to page 1.
    pub fn set_category(&mut self, category: &str) {
        self.state.category = CategoryFilter::parse(category);
        self.state.page = 1;
        self.refresh();
        debug!(category = self.state.category.as_str(), "category changed");
    }

    /// Set the search term and go back to page 1.
    pub fn set_search(&mut self, term: &str) {
        self.state.search_term = term.to_lowercase();
        self.state.page = 1;
        self.refresh();
        debug!(search = %self.state.search_term, matches = self.filtered.len(), "search changed");
    }

    /// Move to `page` if it exists. Returns whether the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            debug!(page, total = self.total_pages(), "ignoring out-of-range page");
            return false;
        }
        self.state.page = page;
        true
    }

    /// Number of articles passing the filter and search.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Number of pages; zero when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.state.page_size)
    }

    /// Articles on the current page.
    pub fn visible_page(&self) -> Vec<&DisplayArticle> {
        let start = (self.state.page - 1) * self.state.page_size;
        self.filtered
            .iter()
            .skip(start)
            .take(self.state.page_size)
            .map(|&index| &self.articles[index])
            .collect()
    }

    /// Page-number strip for the current page.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.state.page, self.total_pages())
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> ListView<'_> {
        match &self.status {
            ListStatus::Loading => ListView::Loading,
            ListStatus::Error(err) => ListView::Error(err),
            ListStatus::Ready if self.filtered.is_empty() => ListView::Empty,
            ListStatus::Ready => ListView::Page {
                articles: self.visible_page(),
                pagination: self.pagination(),
            },
        }
    }

    /// Recompute the filtered set and keep the page in range.
    fn refresh(&mut self) {
        let category = &self.state.category;
        let needle = self.state.search_term.as_str();

        self.filtered = self
            .articles
            .iter()
            .enumerate()
            .filter(|(_, article)| {
                category.matches(&article.category) && article.matches_search(needle)
            })
            .map(|(index, _)| index)
            .collect();

        let last_page = self.total_pages().max(1);
        self.state.page = self.state.page.clamp(1, last_page);
    }
}
