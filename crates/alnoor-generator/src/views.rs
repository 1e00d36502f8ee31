//! Markup fragments for articles, listings and the static content sections.
//!
//! Every function here is pure: data in, HTML string out. All text coming from
//! content is escaped.

use alnoor_articles::{
    Block, CategoryFilter, DisplayArticle, ListView, PageItem, Pagination,
    listing::ALL_CATEGORIES,
};
use alnoor_core::{Course, FaqEntry, Hero, PricingPlan};

/// Shown in place of an article body with no blocks.
const NO_CONTENT_HTML: &str = "<p>No content available.</p>";

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn card_image_html(article: &DisplayArticle) -> String {
    format!(
        r#"<div class="article-image"><img src="{}" alt="{}" loading="lazy"></div>"#,
        escape_html(&article.image),
        escape_html(&article.title)
    )
}

/// Detail page image. Only rendered when the article has its own.
pub fn detail_image_html(url: &str, title: &str) -> String {
    format!(
        r#"<img id="article-image" class="article-hero-image" src="{}" alt="{}">"#,
        escape_html(url),
        escape_html(title)
    )
}

/// Lowercased text a listing search is matched against.
fn search_text(article: &DisplayArticle) -> String {
    format!("{}\n{}\n{}", article.title, article.excerpt, article.category).to_lowercase()
}

/// Every listing card for client-side filtering, or `None` when there are
/// no articles.
pub fn card_source_html(articles: &[DisplayArticle]) -> Option<String> {
    if articles.is_empty() {
        return None;
    }
    let cards: String = articles.iter().map(article_card_html).collect();
    Some(format!(r#"<template id="article-cards">{cards}</template>"#))
}

/// Listing card: image, category badge, linked title, excerpt, date and author.
pub fn article_card_html(article: &DisplayArticle) -> String {
    let link = escape_html(&article.link);
    format!(
        r#"<article class="card article-card" data-article-id="{id}" data-category="{category}" data-search="{search}">
    {image}
    <div class="article-card-content">
        <span class="badge">{category}</span>
        <h3><a href="{link}">{title}</a></h3>
        <p>{excerpt}</p>
        <div class="article-meta"><small>{date} &bull; {author}</small></div>
        <a href="{link}" class="btn btn-outline">Read More &rarr;</a>
    </div>
</article>"#,
        id = article.id,
        search = escape_html(&search_text(article)),
        image = card_image_html(article),
        category = escape_html(&article.category),
        title = escape_html(&article.title),
        excerpt = escape_html(&article.excerpt),
        date = escape_html(&article.date),
        author = escape_html(&article.author),
    )
}

/// Related-article card on the detail page. Carries the date only.
pub fn related_card_html(article: &DisplayArticle) -> String {
    let link = escape_html(&article.link);
    format!(
        r#"<article class="card article-card">
    {image}
    <div class="article-card-content">
        <span class="badge">{category}</span>
        <h3><a href="{link}">{title}</a></h3>
        <p>{excerpt}</p>
        <small>{date}</small>
        <a href="{link}" class="btn btn-outline">Read More &rarr;</a>
    </div>
</article>"#,
        image = card_image_html(article),
        category = escape_html(&article.category),
        title = escape_html(&article.title),
        excerpt = escape_html(&article.excerpt),
        date = escape_html(&article.date),
    )
}

/// Homepage preview card.
pub fn preview_card_html(article: &DisplayArticle) -> String {
    format!(
        r#"<article class="card article-card">
    <img src="{image}" alt="{title}" loading="lazy">
    <span class="badge">{category}</span>
    <h3>{title}</h3>
    <p>{excerpt}</p>
    <p><small>{date} &bull; {author}</small></p>
    <a href="{link}" class="btn btn-outline">Read Article</a>
</article>"#,
        image = escape_html(&article.image),
        title = escape_html(&article.title),
        category = escape_html(&article.category),
        excerpt = escape_html(&article.excerpt),
        date = escape_html(&article.date),
        author = escape_html(&article.author),
        link = escape_html(&article.link),
    )
}

/// One content block.
pub fn block_html(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => format!("<h{level}>{}</h{level}>", escape_html(text)),
        Block::List(items) => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .collect();
            format!("<ul>{items}</ul>")
        }
        Block::Paragraph(text) => format!("<p>{}</p>", escape_html(text)),
    }
}

/// Article body from its blocks.
pub fn blocks_html<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> String {
    let html: String = blocks.into_iter().map(block_html).collect();
    if html.is_empty() {
        NO_CONTENT_HTML.to_string()
    } else {
        html
    }
}

/// Tag chips, or `None` when there are no tags.
pub fn tags_html(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    let chips: String = tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
        .collect();
    Some(format!(r#"<div class="tags">{chips}</div>"#))
}

/// Related articles section, or `None` when there are none to show.
pub fn related_section_html(related: &[DisplayArticle]) -> Option<String> {
    if related.is_empty() {
        return None;
    }
    let cards: String = related.iter().map(related_card_html).collect();
    Some(format!(
        r#"<section class="related-articles">
    <h2>Related Articles</h2>
    <div class="grid" id="related-articles">{cards}</div>
</section>"#
    ))
}

fn pagination_button(label: &str, target: Option<usize>) -> String {
    match target {
        Some(page) => {
            format!(r#"<button type="button" class="pagination-btn" data-page="{page}">{label}</button>"#)
        }
        None => format!(r#"<button type="button" class="pagination-btn" disabled>{label}</button>"#),
    }
}

/// Previous/next buttons around the page-number strip.
///
/// Returns `None` when everything fits on one page.
pub fn pagination_html(pagination: &Pagination) -> Option<String> {
    if !pagination.is_needed() {
        return None;
    }

    let mut parts = vec![pagination_button("&larr; Previous", pagination.previous_page())];
    for item in &pagination.items {
        parts.push(match item {
            PageItem::Page(page) if *page == pagination.current => format!(
                r#"<button type="button" class="pagination-btn active" data-page="{page}" aria-current="page">{page}</button>"#
            ),
            PageItem::Page(page) => pagination_button(&page.to_string(), Some(*page)),
            PageItem::Ellipsis => r#"<span class="pagination-ellipsis">...</span>"#.to_string(),
        });
    }
    parts.push(pagination_button("Next &rarr;", pagination.next_page()));

    Some(format!(
        r#"<nav class="pagination" id="pagination">{}</nav>"#,
        parts.join("")
    ))
}

/// Category filter buttons, `All` first.
pub fn category_filters_html(categories: &[String], active: &CategoryFilter) -> String {
    std::iter::once(("All", ALL_CATEGORIES))
        .chain(categories.iter().map(|c| (c.as_str(), c.as_str())))
        .map(|(label, value)| {
            let class = if active.as_str() == value {
                "filter-btn active"
            } else {
                "filter-btn"
            };
            format!(
                r#"<button type="button" class="{class}" data-category="{}">{}</button>"#,
                escape_html(value),
                escape_html(label)
            )
        })
        .collect()
}

/// The listing body for a controller snapshot.
pub fn list_view_html(view: &ListView<'_>) -> String {
    match view {
        ListView::Loading => {
            r#"<div id="articles-loading" class="loading">Loading articles...</div>"#.to_string()
        }
        ListView::Error(_) => r#"<div id="articles-error" class="alert">Unable to load articles. Please try again later.</div>"#.to_string(),
        ListView::Empty => r#"<div id="articles-empty" class="empty-state"><p>No articles found matching your criteria.</p></div>"#.to_string(),
        ListView::Page {
            articles,
            pagination,
        } => {
            let cards: String = articles.iter().map(|a| article_card_html(a)).collect();
            let nav = pagination_html(pagination).unwrap_or_default();
            format!(r#"<div class="grid articles-grid" id="articles-grid">{cards}</div>{nav}"#)
        }
    }
}

/// Primary call to action, plus the secondary one when configured.
pub fn hero_actions_html(hero: &Hero) -> String {
    let mut html = format!(
        r#"<a class="btn btn-primary" href="{}" data-hero-primary>{}</a>"#,
        escape_html(&hero.cta_primary.link),
        escape_html(&hero.cta_primary.label)
    );
    if let Some(secondary) = &hero.cta_secondary {
        html.push_str(&format!(
            r#"<a class="btn btn-outline" href="{}" data-hero-secondary>{}</a>"#,
            escape_html(&secondary.link),
            escape_html(&secondary.label)
        ));
    }
    html
}

/// `<li>` items for a plain string list.
pub fn list_items_html(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

pub fn course_card_html(course: &Course) -> String {
    format!(
        r#"<article class="card">
    <h3>{}</h3>
    <p>{}</p>
    <p><strong>Level:</strong> {}</p>
</article>"#,
        escape_html(&course.title),
        escape_html(&course.description),
        escape_html(&course.level)
    )
}

/// Current price with the struck-through original in front when present.
fn price_html(original: Option<&str>, current: Option<&str>) -> String {
    let mut html = String::new();
    if let Some(original) = original {
        html.push_str(&format!(
            r#"<span class="original-price">{}</span>"#,
            escape_html(original)
        ));
    }
    if let Some(current) = current {
        html.push_str(&format!(
            r#"<span class="discounted-price">{}</span>"#,
            escape_html(current)
        ));
    }
    html
}

/// Pricing card with USD up front and GBP / EUR underneath.
pub fn pricing_card_html(plan: &PricingPlan, contact_url: &str) -> String {
    format!(
        r#"<article class="price-card">
    <h3>{name}</h3>
    <p>{classes}</p>
    <div class="price">{usd}</div>
    <div class="global-price"><span>{gbp}</span><span>/</span><span>{eur}</span></div>
    <ul>{perks}</ul>
    <a class="btn btn-primary" href="{contact}">Enroll Now</a>
</article>"#,
        name = escape_html(&plan.plan),
        classes = escape_html(&plan.classes),
        usd = price_html(plan.original_usd.as_deref(), Some(&plan.usd)),
        gbp = price_html(plan.original_gbp.as_deref(), plan.gbp.as_deref()),
        eur = price_html(plan.original_eur.as_deref(), plan.eur.as_deref()),
        perks = list_items_html(&plan.perks),
        contact = escape_html(contact_url),
    )
}

/// FAQ section, or `None` when there are no entries.
pub fn faq_html(entries: &[FaqEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let items: String = entries
        .iter()
        .map(|entry| {
            format!(
                "<details class=\"faq-item\"><summary>{}</summary><p>{}</p></details>",
                escape_html(&entry.question),
                escape_html(&entry.answer)
            )
        })
        .collect();
    Some(format!(
        r#"<section class="faq">
    <div class="container">
        <h2>Frequently Asked Questions</h2>
        {items}
    </div>
</section>"#
    ))
}
