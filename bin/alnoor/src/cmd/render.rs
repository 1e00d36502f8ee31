//! Render command - print listing and detail fragments

use std::path::Path;

use alnoor_generator::HtmlGenerator;
use color_eyre::eyre::{Result, WrapErr};

use super::Site;

/// Listing state to render.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: usize,
}

/// Print the filter buttons and listing for `query`.
pub fn articles(config_path: &Path, query: &ListingQuery) -> Result<()> {
    let site = Site::load(config_path)?;
    println!("{}", listing_html(&HtmlGenerator::new(site.config, site.store), query));
    Ok(())
}

/// Print the detail body for the raw `id` value.
///
/// A missing or unknown id prints the not-found state rather than failing.
pub fn article(config_path: &Path, id: Option<&str>) -> Result<()> {
    let site = Site::load(config_path)?;
    let html = detail_html(&HtmlGenerator::new(site.config, site.store), id)?;
    println!("{html}");
    Ok(())
}

fn listing_html(generator: &HtmlGenerator, query: &ListingQuery) -> String {
    let mut list = generator.list_controller();
    if let Some(category) = &query.category {
        list.set_category(category);
    }
    if let Some(search) = &query.search {
        list.set_search(search);
    }
    if query.page > 1 && !list.set_page(query.page) {
        tracing::warn!(
            page = query.page,
            total_pages = list.total_pages(),
            "Page out of range, showing page 1"
        );
    }
    generator.listing_fragment(&list)
}

fn detail_html(generator: &HtmlGenerator, id: Option<&str>) -> Result<String> {
    let mut detail = generator.detail_controller();
    if let Err(e) = detail.load(id) {
        tracing::info!(error = %e, "Rendering not-found state");
    }

    generator
        .article_fragment(&detail)
        .wrap_err("Failed to render article")
}
