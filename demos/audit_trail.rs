//! Walk the admin audit trail: search, per-user filtering, and the
//! date-range window, paged the way the admin view pages.
//!
//! Run with: cargo run --example audit_trail

use learnx::prelude::*;

fn print_page(outcome: &QueryOutcome<AuditEntry>) {
    println!(
        "  showing {} of {} entries (page {}/{})",
        outcome.page_items.len(),
        outcome.total_count,
        outcome.clamped_page,
        outcome.total_pages
    );
    for entry in &outcome.page_items {
        println!(
            "  [{}] {:<18} {:<8} {} - {}",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.action,
            entry.severity,
            entry.user_name,
            entry.details,
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let catalog = Catalog::seeded().await?;
    let config = CatalogConfig::default_config();
    let mut audit = ViewState::for_view(&config, "audit")?;

    println!("Full trail, newest first:");
    print_page(&audit.run(&catalog.audit_entries)?);

    println!("\nEverything admin@learnx.com did:");
    audit.set_equals("user", "admin@learnx.com")?;
    print_page(&audit.run(&catalog.audit_entries)?);

    println!("\nSearch \"login\" across all users:");
    audit.set_equals("user", "all")?;
    audit.set_search("login");
    print_page(&audit.run(&catalog.audit_entries)?);

    println!("\nLast 24 hours:");
    audit.set_search("");
    audit.set_since("timestamp", Some(DateRange::LastDay.cutoff(Utc::now())))?;
    print_page(&audit.run(&catalog.audit_entries)?);

    Ok(())
}
