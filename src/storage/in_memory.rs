//! In-memory implementation of DashboardService over a loaded snapshot

use crate::config::DashboardConfig;
use crate::core::currency::format_currency;
use crate::core::error::{DashboardResult, Operation, query_failed};
use crate::core::model::{
    CardData, CustomerField, CustomerJoin, CustomerSummary, InvoiceForm, InvoiceRow,
    LatestInvoice, Revenue, StatusTotals,
};
use crate::core::query::{
    ITEMS_PER_PAGE, PaginationMeta, SearchQuery, sort_by_locale, total_pages,
};
use crate::core::service::DashboardService;
use crate::storage::snapshot::Snapshot;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Number of entries on the "latest invoices" card
pub const LATEST_INVOICES_LIMIT: usize = 5;

/// Dashboard service answering every query from an immutable snapshot
///
/// Cloning is cheap: clones share the same snapshot.
#[derive(Clone)]
pub struct InMemoryDashboardService {
    snapshot: Arc<Snapshot>,
    revenue_delay: Duration,
}

impl InMemoryDashboardService {
    /// Create a service over an already loaded snapshot, with no revenue delay
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            revenue_delay: Duration::ZERO,
        }
    }

    /// Load the snapshot named by `config` and apply its settings
    pub fn from_config(config: &DashboardConfig) -> DashboardResult<Self> {
        let snapshot = Snapshot::from_json_file(&config.snapshot_path)?;
        Ok(Self::new(snapshot).with_revenue_delay(config.revenue_delay()))
    }

    /// Simulated latency of [`DashboardService::fetch_revenue`]
    pub fn with_revenue_delay(mut self, delay: Duration) -> Self {
        self.revenue_delay = delay;
        self
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn revenue(&self) -> Result<Vec<Revenue>> {
        Ok(self.snapshot.revenue.clone())
    }

    fn latest_invoices(&self) -> Result<Vec<LatestInvoice>> {
        let customers = self.snapshot.customer_index();
        let mut invoices: Vec<_> = self.snapshot.invoices.iter().collect();
        invoices.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(invoices
            .into_iter()
            .take(LATEST_INVOICES_LIMIT)
            .map(|invoice| LatestInvoice {
                id: invoice.id.clone(),
                customer_id: invoice.customer_id.clone(),
                amount: format_currency(invoice.amount),
                date: invoice.date,
                status: invoice.status.clone(),
                customer: customers.get(invoice.customer_id.as_str()).copied().into(),
            })
            .collect())
    }

    fn card_data(&self) -> Result<CardData> {
        let totals = StatusTotals::collect(&self.snapshot.invoices)?;

        Ok(CardData {
            number_of_customers: self.snapshot.customers.len(),
            number_of_invoices: self.snapshot.invoices.len(),
            total_paid_invoices: format_currency(totals.paid),
            total_pending_invoices: format_currency(totals.pending),
        })
    }

    fn matching_invoices(&self, query: &str) -> Vec<InvoiceRow> {
        let search = SearchQuery::new(query);
        let customers = self.snapshot.customer_index();

        self.snapshot
            .invoices
            .iter()
            .filter_map(|invoice| {
                let customer = customers.get(invoice.customer_id.as_str()).copied();
                search
                    .matches_invoice(invoice, customer)
                    .then(|| InvoiceRow {
                        id: invoice.id.clone(),
                        customer_id: invoice.customer_id.clone(),
                        amount: invoice.amount,
                        date: invoice.date,
                        status: invoice.status.clone(),
                        customer: CustomerJoin::from(customer),
                    })
            })
            .collect()
    }

    fn filtered_invoices(&self, query: &str, page: usize) -> Result<Vec<InvoiceRow>> {
        let matches = self.matching_invoices(query);
        let meta = PaginationMeta::new(page, ITEMS_PER_PAGE, matches.len());
        tracing::debug!(query, page = meta.page, total = meta.total, "Filtering invoices");

        Ok(matches
            .into_iter()
            .skip(meta.offset())
            .take(meta.limit)
            .collect())
    }

    fn invoices_pages(&self, query: &str) -> Result<usize> {
        let search = SearchQuery::new(query);
        let customers = self.snapshot.customer_index();
        let count = self
            .snapshot
            .invoices
            .iter()
            .filter(|invoice| {
                let customer = customers.get(invoice.customer_id.as_str()).copied();
                search.matches_invoice(invoice, customer)
            })
            .count();

        Ok(total_pages(count, ITEMS_PER_PAGE))
    }

    fn invoice_by_id(&self, id: &str) -> Result<InvoiceForm> {
        self.snapshot
            .invoices
            .iter()
            .find(|invoice| invoice.id == id)
            .map(InvoiceForm::from)
            .ok_or_else(|| anyhow!("Invoice not found: {}", id))
    }

    fn customers(&self) -> Result<Vec<CustomerField>> {
        let mut fields: Vec<CustomerField> = self
            .snapshot
            .customers
            .iter()
            .map(|c| CustomerField {
                id: c.id.clone(),
                name: c.name.clone(),
            })
            .collect();
        sort_by_locale(&mut fields, |f| f.name.as_str());

        Ok(fields)
    }

    fn filtered_customers(&self, query: &str) -> Result<Vec<CustomerSummary>> {
        let search = SearchQuery::new(query);

        let mut summaries = self
            .snapshot
            .customers
            .iter()
            .filter(|customer| search.matches_customer(customer))
            .map(|customer| -> Result<CustomerSummary> {
                let invoices: Vec<_> = self
                    .snapshot
                    .invoices
                    .iter()
                    .filter(|invoice| invoice.customer_id == customer.id)
                    .collect();
                let totals = StatusTotals::collect(invoices.iter().copied())?;

                Ok(CustomerSummary {
                    id: customer.id.clone(),
                    name: customer.name.clone(),
                    email: customer.email.clone(),
                    image_url: customer.image_url.clone(),
                    total_invoices: invoices.len(),
                    total_pending: format_currency(totals.pending),
                    total_paid: format_currency(totals.paid),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        sort_by_locale(&mut summaries, |s| s.name.as_str());

        Ok(summaries)
    }
}

#[async_trait]
impl DashboardService for InMemoryDashboardService {
    async fn fetch_revenue(&self) -> DashboardResult<Vec<Revenue>> {
        if !self.revenue_delay.is_zero() {
            tracing::debug!(
                delay_ms = self.revenue_delay.as_millis() as u64,
                "Simulating revenue latency"
            );
            tokio::time::sleep(self.revenue_delay).await;
        }
        self.revenue()
            .map_err(|e| query_failed(Operation::Revenue, e))
    }

    async fn fetch_latest_invoices(&self) -> DashboardResult<Vec<LatestInvoice>> {
        self.latest_invoices()
            .map_err(|e| query_failed(Operation::LatestInvoices, e))
    }

    async fn fetch_card_data(&self) -> DashboardResult<CardData> {
        self.card_data()
            .map_err(|e| query_failed(Operation::CardData, e))
    }

    async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: usize,
    ) -> DashboardResult<Vec<InvoiceRow>> {
        self.filtered_invoices(query, page)
            .map_err(|e| query_failed(Operation::FilteredInvoices, e))
    }

    async fn fetch_invoices_pages(&self, query: &str) -> DashboardResult<usize> {
        self.invoices_pages(query)
            .map_err(|e| query_failed(Operation::InvoicePages, e))
    }

    async fn fetch_invoice_by_id(&self, id: &str) -> DashboardResult<InvoiceForm> {
        self.invoice_by_id(id)
            .map_err(|e| query_failed(Operation::Invoice, e))
    }

    async fn fetch_customers(&self) -> DashboardResult<Vec<CustomerField>> {
        self.customers()
            .map_err(|e| query_failed(Operation::Customers, e))
    }

    async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> DashboardResult<Vec<CustomerSummary>> {
        self.filtered_customers(query)
            .map_err(|e| query_failed(Operation::CustomerTable, e))
    }
}

impl From<Snapshot> for InMemoryDashboardService {
    fn from(snapshot: Snapshot) -> Self {
        Self::new(snapshot)
    }
}
