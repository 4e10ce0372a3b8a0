//! Core module containing the record types, query contract and helpers

pub mod currency;
pub mod error;
pub mod model;
pub mod query;
pub mod service;

pub use currency::format_currency;
pub use error::{DashboardError, DashboardResult, Operation};
pub use model::{
    CardData, Customer, CustomerField, CustomerJoin, CustomerSummary, Invoice, InvoiceForm,
    InvoiceRow, InvoiceStatus, LatestInvoice, Revenue, StatusTotals,
};
pub use query::{
    ITEMS_PER_PAGE, InvoiceSearchParams, PaginationMeta, SearchQuery, locale_cmp, sort_by_locale,
};
pub use service::DashboardService;
