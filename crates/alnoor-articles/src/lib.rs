//! Al-Noor article pipeline
//!
//! Turns raw article records from the [`ContentStore`](alnoor_core::ContentStore)
//! into render-ready data. Nothing here emits markup or touches a page; the
//! generator crate consumes these types.
//!
//! # Modules
//!
//! - [`format`] - raw record to [`DisplayArticle`]
//! - [`blocks`] - freeform text to headings, lists and paragraphs
//! - [`listing`] - search, category filter and pagination state
//! - [`detail`] - single article lookup by ordinal with related articles
//! - [`pagination`] - page-number window with ellipsis markers
//! - [`share`] - native share, clipboard, manual prompt fallback chain

pub mod blocks;
pub mod detail;
pub mod error;
pub mod format;
pub mod listing;
pub mod pagination;
pub mod share;

pub use blocks::{Block, ContentBlocks, render_content_blocks};
pub use detail::{ArticleDetail, ArticleDetailController, DetailAddress, DetailState};
pub use error::{ArticleError, Result};
pub use format::{ArticleFormatter, DateStyle, DisplayArticle};
pub use listing::{ArticleListController, CategoryFilter, ListState, ListStatus, ListView};
pub use pagination::{PageItem, Pagination};
pub use share::{ShareError, ShareOutcome, SharePayload, SharePlatform, share_article};
