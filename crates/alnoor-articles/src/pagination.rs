//! Page-number window for the listing view.

use serde::{Deserialize, Serialize};

/// Pages shown on each side of the current page.
const WINDOW_RADIUS: usize = 2;

/// One slot in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    /// A clickable page number.
    Page(usize),
    /// Elided run of pages.
    Ellipsis,
}

/// Pagination controls for one listing state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: usize,
    pub total_pages: usize,
    pub items: Vec<PageItem>,
}

impl Pagination {
    /// Build the strip for `current` of `total_pages`.
    ///
    /// The first page, the last page and everything within two of `current`
    /// are listed; each gap collapses into one [`PageItem::Ellipsis`].
    pub fn new(current: usize, total_pages: usize) -> Self {
        let mut items = Vec::new();
        let mut last_shown = 0;

        for page in 1..=total_pages {
            let near_current = page.abs_diff(current) <= WINDOW_RADIUS;
            if page == 1 || page == total_pages || near_current {
                if last_shown != 0 && page > last_shown + 1 {
                    items.push(PageItem::Ellipsis);
                }
                items.push(PageItem::Page(page));
                last_shown = page;
            }
        }

        Self {
            current,
            total_pages,
            items,
        }
    }

    /// Whether there is anything to paginate.
    pub fn is_needed(&self) -> bool {
        self.total_pages > 1
    }

    /// Page behind the "Previous" button, if enabled.
    pub fn previous_page(&self) -> Option<usize> {
        (self.current > 1).then(|| self.current - 1)
    }

    /// Page behind the "Next" button, if enabled.
    pub fn next_page(&self) -> Option<usize> {
        (self.current < self.total_pages).then(|| self.current + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{PageItem::{Ellipsis, Page}, *};

    #[test]
    fn test_small_totals_show_every_page() {
        assert!(Pagination::new(1, 0).items.is_empty());
        assert_eq!(Pagination::new(1, 1).items, vec![Page(1)]);
        assert_eq!(
            Pagination::new(2, 5).items,
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn test_window_in_the_middle() {
        assert_eq!(
            Pagination::new(10, 20).items,
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn test_single_page_gap_still_elided() {
        assert_eq!(
            Pagination::new(5, 7).items,
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn test_window_at_edges() {
        assert_eq!(
            Pagination::new(1, 10).items,
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
        assert_eq!(
            Pagination::new(10, 10).items,
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_never_two_ellipses_in_a_row() {
        for total in 1..30 {
            for current in 1..=total {
                let items = Pagination::new(current, total).items;
                for pair in items.windows(2) {
                    assert!(
                        !matches!(pair, [Ellipsis, Ellipsis]),
                        "current={current} total={total}"
                    );
                }
                assert_eq!(items.first(), Some(&Page(1)));
                assert_eq!(items.last(), Some(&Page(total)));
            }
        }
    }

    #[test]
    fn test_previous_and_next() {
        let first = Pagination::new(1, 3);
        assert_eq!(first.previous_page(), None);
        assert_eq!(first.next_page(), Some(2));

        let last = Pagination::new(3, 3);
        assert_eq!(last.previous_page(), Some(2));
        assert_eq!(last.next_page(), None);

        assert!(!Pagination::new(1, 1).is_needed());
        assert!(last.is_needed());
    }
}
