use alnoor_articles::{ArticleFormatter, ArticleListController, ListView};
use alnoor_core::{ContentStore, RawArticle, SiteContent};
use proptest::prelude::*;
use proptest::test_runner::Config;

const CATEGORIES: [&str; 3] = ["Tajweed", "Hifz", "Parenting"];

fn raw(title: String, category: usize) -> RawArticle {
    RawArticle {
        title,
        excerpt: "Weekly note".to_string(),
        category: CATEGORIES[category].to_string(),
        author: "Ustadh Yusuf".to_string(),
        date: "2024-05-02".to_string(),
        image: None,
        content: None,
        tags: None,
    }
}

fn controller(articles: Vec<RawArticle>, page_size: usize) -> ArticleListController {
    let store = ContentStore::new(SiteContent {
        articles: Some(articles),
        ..SiteContent::default()
    });
    let mut controller = ArticleListController::new(store, ArticleFormatter::default(), page_size);
    controller.load().expect("load articles");
    controller
}

fn articles_strategy() -> impl Strategy<Value = Vec<RawArticle>> {
    prop::collection::vec(("[a-zA-Z ]{1,12}", 0_usize..3), 0..40).prop_map(|items| {
        items
            .into_iter()
            .map(|(title, category)| raw(title, category))
            .collect()
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn visible_page_is_slice_of_filtered(
        articles in articles_strategy(),
        page_size in 1_usize..12,
        category in prop::option::of(0_usize..3),
        search in "[a-zA-Z]{0,2}",
        page in 1_usize..6
    ) {
        let mut list = controller(articles.clone(), page_size);
        list.set_category(category.map_or("all", |c| CATEGORIES[c]));
        list.set_search(&search);
        list.set_page(page);

        let needle = search.to_lowercase();
        let expected: Vec<usize> = articles
            .iter()
            .enumerate()
            .filter(|(_, a)| category.is_none_or(|c| a.category == CATEGORIES[c]))
            .filter(|(_, a)| {
                a.title.to_lowercase().contains(&needle)
                    || a.excerpt.to_lowercase().contains(&needle)
                    || a.category.to_lowercase().contains(&needle)
            })
            .map(|(index, _)| index + 1)
            .collect();

        let current = list.state().page;
        let start = (current - 1) * page_size;
        let want: Vec<usize> = expected.iter().copied().skip(start).take(page_size).collect();
        let got: Vec<usize> = list.visible_page().iter().map(|a| a.id).collect();

        prop_assert_eq!(got, want);
        prop_assert_eq!(list.total_pages(), expected.len().div_ceil(page_size));
        prop_assert!(current >= 1);
        prop_assert!(current <= list.total_pages().max(1));
    }

    #[test]
    fn out_of_range_page_changes_nothing(
        articles in articles_strategy(),
        page_size in 1_usize..12,
        extra in 1_usize..5
    ) {
        let mut list = controller(articles, page_size);
        let before = list.state().clone();

        prop_assert!(!list.set_page(0));
        prop_assert!(!list.set_page(list.total_pages() + extra));
        prop_assert_eq!(list.state(), &before);
    }

    #[test]
    fn filter_changes_return_to_first_page(
        articles in articles_strategy(),
        page_size in 1_usize..4,
        search in "[a-z]{0,1}"
    ) {
        let mut list = controller(articles, page_size);
        let last = list.total_pages();
        if last > 1 {
            prop_assert!(list.set_page(last));
        }

        list.set_search(&search);
        prop_assert_eq!(list.state().page, 1);

        if list.total_pages() > 1 {
            prop_assert!(list.set_page(2));
        }
        list.set_category("Hifz");
        prop_assert_eq!(list.state().page, 1);
    }
}

#[test]
fn ten_articles_split_nine_and_one() {
    let articles = (1..=10).map(|n| raw(format!("Lesson {n}"), n % 3)).collect();
    let mut list = controller(articles, 9);

    match list.view() {
        ListView::Page {
            articles,
            pagination,
        } => {
            assert_eq!(articles.len(), 9);
            assert_eq!(pagination.total_pages, 2);
        }
        other => panic!("expected a page, got {other:?}"),
    }

    assert!(list.set_page(2));
    let ids: Vec<_> = list.visible_page().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![10]);
}
