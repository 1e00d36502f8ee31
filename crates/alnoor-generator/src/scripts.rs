//! Inline scripts for the statically hosted pages.
//!
//! The listing and detail pages are rendered ahead of time. These scripts
//! only pick between prerendered markup: every card, message and article
//! body comes from the Rust renderers.

/// Share button: native share sheet, then clipboard, then a prompt.
///
/// Cancelling the share sheet ends the chain.
pub const SHARE_SCRIPT: &str = r#"<script>
function shareArticle() {
  const url = window.location.href;
  const title = document.getElementById('article-title')?.textContent || 'Article';
  const text = (document.getElementById('article-body')?.textContent || '').substring(0, 100);
  const copy = () => navigator.clipboard.writeText(url)
    .then(() => alert('Article link copied to clipboard!'))
    .catch(() => prompt('Copy this link:', url));
  if (!navigator.share) { copy(); return; }
  navigator.share({ title, text, url }).catch((err) => {
    if (err && err.name !== 'AbortError') copy();
  });
}
</script>"#;

/// Detail page: show the prerendered article named by `?id=`.
///
/// The id is read like the detail controller reads it: surrounding
/// whitespace is ignored, an optional `+` and the leading digits name the
/// article, and anything after them is dropped.
pub const DETAIL_SCRIPT: &str = r#"<script>
(function () {
  const view = document.getElementById('article-view');
  if (!view) return;
  const raw = (new URLSearchParams(window.location.search).get('id') || '').trim();
  const pick = (selector) => document.querySelector('template' + selector);
  let chosen = null;
  let missing = false;
  if (!raw) {
    chosen = pick('[data-article-state="missing-id"]');
  } else {
    const match = /^\+?(\d+)/.exec(raw);
    const ordinal = match ? parseInt(match[1], 10) : 0;
    if (ordinal > 0) chosen = pick('[data-article-id="' + ordinal + '"]');
    if (!chosen) {
      chosen = pick('[data-article-state="not-found"]');
      missing = true;
    }
  }
  if (!chosen) return;
  const body = chosen.content.cloneNode(true);
  if (missing) {
    const message = body.querySelector('[data-article-message]');
    if (message) message.textContent = 'Article not found: ' + raw;
  }
  view.replaceChildren(body);
  if (chosen.dataset.title) document.title = chosen.dataset.title;
})();
</script>"#;

/// Listing page: search, category filter and pagination over the
/// prerendered cards.
///
/// Follows the listing controller: a category or search change returns to
/// page 1, an out-of-range page is ignored, and the page strip keeps the
/// first page, the last page and two pages either side of the current one.
pub const LISTING_SCRIPT: &str = r#"<script>
(function () {
  const listing = document.getElementById('articles-listing');
  const source = document.getElementById('article-cards');
  if (!listing || !source) return;
  const pageSize = parseInt(listing.dataset.pageSize, 10) || 9;
  const cards = Array.from(source.content.querySelectorAll('.article-card'));
  const input = document.getElementById('article-search');
  const filters = Array.from(document.querySelectorAll('.filter-btn'));
  const params = new URLSearchParams(window.location.search);
  const normalize = (value) => {
    const category = (value || '').trim();
    return !category || category.toLowerCase() === 'all' ? 'all' : category;
  };
  const state = {
    category: normalize(params.get('category')),
    term: (params.get('search') || '').toLowerCase(),
    page: parseInt(params.get('page'), 10) || 1,
  };
  if (input) input.value = params.get('search') || '';

  const matches = (card) =>
    (state.category === 'all' || card.dataset.category === state.category) &&
    (!state.term || card.dataset.search.includes(state.term));
  const filtered = () => cards.filter(matches);
  const totalPages = () => Math.ceil(filtered().length / pageSize);

  function pageItems(current, total) {
    const items = [];
    let last = 0;
    for (let page = 1; page <= total; page++) {
      if (page === 1 || page === total || Math.abs(page - current) <= 2) {
        if (last && page > last + 1) items.push(null);
        items.push(page);
        last = page;
      }
    }
    return items;
  }

  function button(label, page, active) {
    const el = document.createElement('button');
    el.type = 'button';
    el.className = active ? 'pagination-btn active' : 'pagination-btn';
    el.innerHTML = label;
    if (page) el.dataset.page = page; else el.disabled = true;
    if (active) el.setAttribute('aria-current', 'page');
    return el;
  }

  function render() {
    const shown = filtered();
    const total = Math.ceil(shown.length / pageSize);
    if (state.page < 1 || state.page > Math.max(total, 1)) state.page = 1;
    filters.forEach((btn) => btn.classList.toggle('active', btn.dataset.category === state.category));
    listing.replaceChildren();
    if (!shown.length) {
      const empty = document.createElement('div');
      empty.id = 'articles-empty';
      empty.className = 'empty-state';
      empty.innerHTML = '<p>No articles found matching your criteria.</p>';
      listing.appendChild(empty);
      return;
    }
    const grid = document.createElement('div');
    grid.id = 'articles-grid';
    grid.className = 'grid articles-grid';
    const start = (state.page - 1) * pageSize;
    shown.slice(start, start + pageSize).forEach((card) => grid.appendChild(card.cloneNode(true)));
    listing.appendChild(grid);
    if (total <= 1) return;
    const nav = document.createElement('nav');
    nav.id = 'pagination';
    nav.className = 'pagination';
    nav.appendChild(button('&larr; Previous', state.page > 1 ? state.page - 1 : 0, false));
    pageItems(state.page, total).forEach((page) => {
      if (page === null) {
        const gap = document.createElement('span');
        gap.className = 'pagination-ellipsis';
        gap.textContent = '...';
        nav.appendChild(gap);
      } else {
        nav.appendChild(button(String(page), page, page === state.page));
      }
    });
    nav.appendChild(button('Next &rarr;', state.page < total ? state.page + 1 : 0, false));
    listing.appendChild(nav);
  }

  filters.forEach((btn) => btn.addEventListener('click', () => {
    state.category = normalize(btn.dataset.category);
    state.page = 1;
    render();
  }));

  const search = () => {
    state.term = (input ? input.value : '').toLowerCase();
    state.page = 1;
    render();
  };
  if (input) {
    input.addEventListener('input', search);
    input.addEventListener('keydown', (event) => { if (event.key === 'Enter') search(); });
  }
  document.getElementById('search-btn')?.addEventListener('click', search);

  listing.addEventListener('click', (event) => {
    const target = event.target.closest('[data-page]');
    if (!target) return;
    const page = parseInt(target.dataset.page, 10);
    if (page < 1 || page > totalPages()) return;
    state.page = page;
    render();
    listing.scrollIntoView({ behavior: 'smooth' });
  });

  if (params.has('category') || params.has('search') || params.has('page')) render();
})();
</script>"#;
