//! Service trait for dashboard queries

use crate::core::error::DashboardResult;
use crate::core::model::{
    CardData, CustomerField, CustomerSummary, InvoiceForm, InvoiceRow, LatestInvoice, Revenue,
};
use async_trait::async_trait;

/// Read-only queries backing the dashboard pages
///
/// Implementations answer every query from a dataset that does not change
/// while the service is alive. Each operation fails with
/// [`DashboardError::Query`](crate::core::error::DashboardError::Query)
/// naming that operation; the underlying cause is only logged.
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Monthly revenue, returned verbatim
    async fn fetch_revenue(&self) -> DashboardResult<Vec<Revenue>>;

    /// The five most recent invoices joined with their customer
    async fn fetch_latest_invoices(&self) -> DashboardResult<Vec<LatestInvoice>>;

    /// Overview counters and paid/pending totals
    async fn fetch_card_data(&self) -> DashboardResult<CardData>;

    /// One page of invoices matching `query`, in snapshot order
    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: usize,
    ) -> DashboardResult<Vec<InvoiceRow>>;

    /// Number of pages of invoices matching `query`
    async fn fetch_invoices_pages(&self, query: &str) -> DashboardResult<usize>;

    /// A single invoice with its amount converted to dollars
    async fn fetch_invoice_by_id(&self, id: &str) -> DashboardResult<InvoiceForm>;

    /// All customers as `{id, name}`, ordered by name
    async fn fetch_customers(&self) -> DashboardResult<Vec<CustomerField>>;

    /// Customers matching `query` with their invoice totals, ordered by name
    async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> DashboardResult<Vec<CustomerSummary>>;
}
