//! # Invoice Dashboard Data Layer
//!
//! Read-only queries for an invoicing dashboard (invoices, customers,
//! revenue), answered from a static JSON snapshot standing in for a database.
//!
//! ## Features
//!
//! - **Typed Results**: every query returns a dedicated serde-serializable struct
//! - **Search & Pagination**: case-insensitive search with fixed 6-row pages
//! - **Aggregates**: dashboard card counters and per-customer paid/pending totals
//! - **Locale-Aware Ordering**: customers sorted the way an English collator would
//! - **Opaque Failures**: each operation fails with its own message; causes are logged
//! - **Configuration-Based**: snapshot location and revenue latency from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dashboard::prelude::*;
//!
//! let config = DashboardConfig::from_yaml_file("dashboard.yaml")?;
//! let service = InMemoryDashboardService::from_config(&config)?;
//!
//! let cards = service.fetch_card_data().await?;
//! println!("{} invoices, {} paid", cards.number_of_invoices, cards.total_paid_invoices);
//!
//! let pages = service.fetch_invoices_pages("lee").await?;
//! let rows = service.fetch_filtered_invoices("lee", 1).await?;
//! ```

pub mod config;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        currency::format_currency,
        error::{DashboardError, DashboardResult, ErrorResponse, Operation},
        model::{
            CardData, Customer, CustomerField, CustomerJoin, CustomerSummary, Invoice,
            InvoiceForm, InvoiceRow, InvoiceStatus, LatestInvoice, Revenue, StatusTotals,
        },
        query::{
            ITEMS_PER_PAGE, InvoiceSearchParams, PaginationMeta, SearchQuery, locale_cmp,
            sort_by_locale,
        },
        service::DashboardService,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryDashboardService, Snapshot};

    // === Config ===
    pub use crate::config::DashboardConfig;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}
