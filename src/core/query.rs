//! Search, pagination and ordering utilities

use crate::core::model::{Customer, Invoice};
use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of rows per page of the invoices table
pub const ITEMS_PER_PAGE: usize = 6;

/// Search parameters of the invoices table
///
/// This structure is meant to be extracted from the URL query string by the
/// rendering layer. All parameters have sensible defaults.
///
/// # Example
/// ```rust,ignore
/// // GET /dashboard/invoices?query=lee&page=2
/// let params: InvoiceSearchParams = serde_urlencoded::from_str("query=lee&page=2")?;
/// let rows = service.fetch_filtered_invoices(params.query(), params.page()).await?;
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct InvoiceSearchParams {
    /// Free-text search, empty matches everything
    pub query: String,

    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

impl InvoiceSearchParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Case-insensitive substring search over invoices and customers
#[derive(Debug, Clone)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            raw: query.to_string(),
            lowered: query.to_lowercase(),
        }
    }

    fn contains_ci(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.lowered)
    }

    /// Match an invoice joined with its (possibly missing) customer
    ///
    /// Customer name and email, invoice date and status are compared
    /// case-insensitively. The amount is matched on its raw cent value.
    pub fn matches_invoice(&self, invoice: &Invoice, customer: Option<&Customer>) -> bool {
        customer.is_some_and(|c| self.contains_ci(&c.name) || self.contains_ci(&c.email))
            || invoice.amount.to_string().contains(&self.raw)
            || self.contains_ci(&invoice.date.to_string())
            || self.contains_ci(invoice.status.as_str())
    }

    /// Match a customer on name or email
    pub fn matches_customer(&self, customer: &Customer) -> bool {
        self.contains_ci(&customer.name) || self.contains_ci(&customer.email)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit and page are at least 1 to avoid division by zero
        Self {
            page: page.max(1),
            limit: limit.max(1),
            total,
        }
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Ceiling division of `total` by `limit`, zero when nothing matched
pub fn total_pages(total: usize, limit: usize) -> usize {
    if total == 0 { 0 } else { total.div_ceil(limit.max(1)) }
}

/// Compare two strings with the Unicode Collation Algorithm (CLDR root order)
///
/// Accents and case only break ties between otherwise equal names, so
/// "Émile" sorts before "Zoe" and "lee" before "Lee".
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

/// Sort `items` by the name `key` returns, using one collator for the whole sort
pub fn sort_by_locale<T>(items: &mut [T], key: impl Fn(&T) -> &str) {
    let mut collator = Collator::default();
    items.sort_by(|a, b| collator.collate(key(a), key(b)));
}
