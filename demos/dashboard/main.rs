//! Dashboard example
//!
//! Loads the bundled snapshot and prints what each dashboard page would show.
//!
//! ```text
//! cargo run --example dashboard -- [config.yaml] [search]
//! ```

use anyhow::Result;
use dashboard::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "demos/dashboard/dashboard.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let query = args.next().unwrap_or_default();

    let config = DashboardConfig::from_yaml_file(&config_path)?;
    let service = InMemoryDashboardService::from_config(&config)?;
    tracing::info!(config = %config_path, "Dashboard data loaded");

    let cards = service.fetch_card_data().await?;
    println!("📊 Overview");
    println!("    Collected:  {}", cards.total_paid_invoices);
    println!("    Pending:    {}", cards.total_pending_invoices);
    println!("    Invoices:   {}", cards.number_of_invoices);
    println!("    Customers:  {}", cards.number_of_customers);

    println!("\n🧾 Latest invoices");
    for invoice in service.fetch_latest_invoices().await? {
        println!(
            "    {:<20} {:>12}  {}",
            invoice.customer.name.as_deref().unwrap_or("-"),
            invoice.amount,
            invoice.date
        );
    }

    let pages = service.fetch_invoices_pages(&query).await?;
    println!("\n🔎 Invoices matching {:?} ({} page(s))", query, pages);
    for page in 1..=pages {
        for row in service.fetch_filtered_invoices(&query, page).await? {
            println!(
                "    [{}] {:<6} {:<20} {:>12} {}",
                page,
                row.id,
                row.customer.name.as_deref().unwrap_or("-"),
                format_currency(row.amount),
                row.status.as_str()
            );
        }
    }

    println!("\n👥 Customers");
    for customer in service.fetch_filtered_customers(&query).await? {
        println!(
            "    {:<20} {:>3} invoices  paid {:>12}  pending {:>12}",
            customer.name, customer.total_invoices, customer.total_paid, customer.total_pending
        );
    }

    println!("\n📈 Revenue (after {} ms)", config.revenue_delay_ms);
    for month in service.fetch_revenue().await? {
        println!("    {}  {}", month.month, month.revenue);
    }

    Ok(())
}
