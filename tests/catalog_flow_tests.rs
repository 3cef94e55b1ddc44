//! End-to-end flows over the seeded catalog: each browsing view driving
//! the shared engine through its own configuration and state container.

use learnx::prelude::*;
use tokio::time::Duration;

async fn setup() -> (Catalog, CatalogConfig) {
    (Catalog::seeded().await.unwrap(), CatalogConfig::default_config())
}

#[tokio::test]
async fn discovery_defaults_rank_by_students() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "discovery").unwrap();

    let outcome = state.run(&catalog.courses).unwrap();
    assert_eq!(outcome.total_count, 6);
    assert_eq!(outcome.total_pages, 1);
    assert_eq!(
        outcome.page_items[0].title,
        "Complete Web Development Bootcamp"
    );
    assert_eq!(outcome.page_items[5].title, "Cybersecurity Fundamentals");
}

#[tokio::test]
async fn discovery_search_scans_title_instructor_and_description() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "discovery").unwrap();

    // "react" appears in one title and one description
    state.set_search("react");
    let outcome = state.run(&catalog.courses).unwrap();
    let titles: Vec<_> = outcome
        .page_items
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(outcome.total_count, 2);
    assert!(titles.contains(&"Advanced React Development"));
    assert!(titles.contains(&"Complete Web Development Bootcamp"));

    // instructor names are searchable too
    state.set_search("rodriguez");
    let outcome = state.run(&catalog.courses).unwrap();
    assert_eq!(outcome.total_count, 1);
    assert_eq!(outcome.page_items[0].title, "UI/UX Design Fundamentals");
}

#[tokio::test]
async fn discovery_filters_combine_with_and() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "discovery").unwrap();

    state.set_equals("category", "Web Development").unwrap();
    assert_eq!(state.run(&catalog.courses).unwrap().total_count, 2);

    state.set_range("price", "$50-$100").unwrap();
    let outcome = state.run(&catalog.courses).unwrap();
    assert_eq!(outcome.total_count, 1);
    assert_eq!(
        outcome.page_items[0].title,
        "Complete Web Development Bootcamp"
    );
}

#[tokio::test]
async fn discovery_price_sorts_run_both_directions() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "discovery").unwrap();

    state.set_sort("price_low").unwrap();
    let cheapest_first = state.run(&catalog.courses).unwrap();
    assert_eq!(cheapest_first.page_items[0].price, 69.99);

    state.set_sort("price_high").unwrap();
    let dearest_first = state.run(&catalog.courses).unwrap();
    assert_eq!(dearest_first.page_items[0].price, 149.99);
}

#[tokio::test]
async fn discovery_rating_ties_stay_in_catalog_order() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "discovery").unwrap();

    // Two 4.9 courses: the bootcamp precedes the design course in the
    // seed order and must stay ahead of it
    state.set_sort("rating").unwrap();
    let outcome = state.run(&catalog.courses).unwrap();
    assert_eq!(
        outcome.page_items[0].title,
        "Complete Web Development Bootcamp"
    );
    assert_eq!(outcome.page_items[1].title, "UI/UX Design Fundamentals");
}

#[tokio::test]
async fn discovery_no_results_then_clear_filters() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "discovery").unwrap();

    // The catalog has nothing under $50
    state.set_range("price", "$0-$50").unwrap();
    let outcome = state.run(&catalog.courses).unwrap();
    assert_eq!(outcome.total_count, 0);
    assert_eq!(outcome.total_pages, 1);
    assert_eq!(outcome.clamped_page, 1);

    state.clear_filters();
    let outcome = state.run(&catalog.courses).unwrap();
    assert_eq!(outcome.total_count, 6);
}

#[tokio::test]
async fn forum_status_filter_finds_unanswered_threads() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "forum").unwrap();

    state.set_equals("status", "unanswered").unwrap();
    let outcome = state.run(&catalog.forum_posts).unwrap();
    assert_eq!(outcome.total_count, 1);
    assert!(outcome.page_items[0].title.contains("Figma"));

    state.set_equals("status", "solved").unwrap();
    let outcome = state.run(&catalog.forum_posts).unwrap();
    assert_eq!(outcome.total_count, 2);
}

#[tokio::test]
async fn forum_sorts_by_recency_and_views() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "forum").unwrap();

    let recent = state.run(&catalog.forum_posts).unwrap();
    assert!(recent.page_items[0].title.contains("React component organization"));

    state.set_sort("popular").unwrap();
    let popular = state.run(&catalog.forum_posts).unwrap();
    assert_eq!(popular.page_items[0].views, 412);
}

#[tokio::test]
async fn blog_category_and_search() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "blog").unwrap();

    state.set_equals("category", "Programming").unwrap();
    let outcome = state.run(&catalog.blog_posts).unwrap();
    assert_eq!(outcome.total_count, 2);

    state.set_search("react");
    let outcome = state.run(&catalog.blog_posts).unwrap();
    assert_eq!(outcome.total_count, 1);
    assert!(outcome.page_items[0].title.contains("React Hooks"));
}

#[tokio::test]
async fn audit_equality_and_window_filters() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "audit").unwrap();

    state.set_equals("user", "admin@learnx.com").unwrap();
    assert_eq!(state.run(&catalog.audit_entries).unwrap().total_count, 2);

    state.set_equals("user", "all").unwrap();
    state.set_search("backup");
    let outcome = state.run(&catalog.audit_entries).unwrap();
    assert_eq!(outcome.total_count, 1);
    assert_eq!(outcome.page_items[0].action, "BACKUP_COMPLETED");

    // Last 24 hours as seen from the morning after the seeded day
    state.set_search("");
    let now: DateTime<Utc> = "2024-01-26T12:00:00Z".parse().unwrap();
    state
        .set_since("timestamp", Some(DateRange::LastDay.cutoff(now)))
        .unwrap();
    let outcome = state.run(&catalog.audit_entries).unwrap();
    assert_eq!(outcome.total_count, 5);
}

#[tokio::test]
async fn audit_overshooting_page_is_reconciled() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "audit").unwrap();

    state.goto_page(4);
    let outcome = state.run(&catalog.audit_entries).unwrap();
    assert_eq!(outcome.total_pages, 1);
    assert_eq!(outcome.clamped_page, 1);
    assert_eq!(state.current_page(), 1);
    assert_eq!(outcome.page_items.len(), 8);
}

#[tokio::test]
async fn reviews_sort_by_helpfulness_and_keep_rating_ties_stable() {
    let (catalog, config) = setup().await;
    let mut state = ViewState::for_view(&config, "reviews").unwrap();

    state.set_sort("helpful").unwrap();
    let outcome = state.run(&catalog.reviews).unwrap();
    assert_eq!(outcome.page_items[0].helpful_count, 15);

    state.set_sort("rating_high").unwrap();
    let outcome = state.run(&catalog.reviews).unwrap();
    let five_star_names: Vec<_> = outcome
        .page_items
        .iter()
        .take(3)
        .map(|r| r.user_name.as_str())
        .collect();
    // Three five-star reviews, in seed order
    assert_eq!(five_star_names, vec!["Bob Smith", "Frank Miller", "Henry Chen"]);
}

#[tokio::test]
async fn sign_in_feeds_the_persisted_session() {
    let role = sign_in(
        "instructor@demo.com",
        "demo123",
        Duration::from_millis(1),
        CancelSignal::never(),
    )
    .await
    .unwrap();

    let session = Session::new(MemoryBackend::new());
    session.log_in(role);
    assert!(session.is_logged_in());
    assert_eq!(session.role(), Role::Instructor);

    session.log_out();
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn dismissing_checkout_cancels_the_payment() {
    let (handle, signal) = cancellation();
    let op = tokio::spawn(process_payment(99.99, Duration::from_secs(30), signal));

    handle.cancel();
    assert_eq!(op.await.unwrap(), Err(TaskError::Cancelled));
}
