//! Browse the seeded course catalog from a terminal: search, filter,
//! sort, and page exactly the way the discovery view does.
//!
//! Run with: cargo run --example catalog_browser

use learnx::prelude::*;
use tokio::time::Duration;

fn print_page(outcome: &QueryOutcome<Course>) {
    println!(
        "  {} courses found (page {}/{})",
        outcome.total_count, outcome.clamped_page, outcome.total_pages
    );
    for course in &outcome.page_items {
        println!(
            "  - {} by {} [{} | {}] ${:.2} ({:.1}★, {} students)",
            course.title,
            course.instructor,
            course.category,
            course.level,
            course.price,
            course.rating,
            course.students,
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let catalog = Catalog::seeded().await?;
    let config = CatalogConfig::default_config();
    let mut discovery = ViewState::for_view(&config, "discovery")?;

    println!("Most popular courses:");
    print_page(&discovery.run(&catalog.courses)?);

    println!("\nSearching for \"react\":");
    discovery.set_search("react");
    print_page(&discovery.run(&catalog.courses)?);

    println!("\nWeb Development, $50-$100, best rated first:");
    discovery.set_search("");
    discovery.set_equals("category", "Web Development")?;
    discovery.set_range("price", "$50-$100")?;
    discovery.set_sort("rating")?;
    let outcome = discovery.run(&catalog.courses)?;
    print_page(&outcome);

    if let Some(course) = outcome.page_items.first() {
        let summary = catalog.rating_summary(course.id);
        println!(
            "  {} reviews, {:.1}★ average",
            summary.total_reviews, summary.average_rating
        );
    }

    println!("\nClearing filters:");
    discovery.clear_filters();
    print_page(&discovery.run(&catalog.courses)?);

    // The checkout flow: a mock sign-in followed by a mock payment
    println!("\nSigning in...");
    let role = sign_in(
        "student@demo.com",
        "demo123",
        Duration::from_millis(200),
        CancelSignal::never(),
    )
    .await?;
    let session = Session::new(MemoryBackend::new());
    session.log_in(role);
    println!("  signed in as {}", session.role());

    println!("Processing payment...");
    let receipt = process_payment(99.99, Duration::from_millis(200), CancelSignal::never()).await?;
    println!("  order {} confirmed (${:.2})", receipt.order_id, receipt.amount);

    Ok(())
}
