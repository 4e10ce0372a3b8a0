//! Typed error handling for the dashboard data layer
//!
//! Every query operation fails with the same kind of error, a
//! [`DashboardError::Query`] naming the [`Operation`] that failed. The
//! underlying cause (a missing invoice, an arithmetic overflow, ...) is logged
//! at the operation boundary and is not carried to the caller.
//!
//! Loading failures ([`DashboardError::Snapshot`], [`DashboardError::Config`])
//! only happen while the service is being constructed.
//!
//! # Example
//!
//! ```rust,ignore
//! use dashboard::prelude::*;
//!
//! match service.fetch_invoice_by_id("unknown").await {
//!     Ok(form) => println!("{:?}", form),
//!     Err(DashboardError::Query(Operation::Invoice)) => {
//!         println!("invoice could not be loaded");
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// The query operations exposed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Revenue,
    LatestInvoices,
    CardData,
    FilteredInvoices,
    InvoicePages,
    Invoice,
    Customers,
    CustomerTable,
}

impl Operation {
    /// The message surfaced to callers when this operation fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Revenue => "Failed to fetch revenue data.",
            Operation::LatestInvoices => "Failed to fetch the latest invoices.",
            Operation::CardData => "Failed to fetch card data.",
            Operation::FilteredInvoices => "Failed to fetch invoices.",
            Operation::InvoicePages => "Failed to fetch total number of invoices.",
            Operation::Invoice => "Failed to fetch invoice.",
            Operation::Customers => "Failed to fetch all customers.",
            Operation::CustomerTable => "Failed to fetch customer table.",
        }
    }

    /// Short description used in operational logs
    pub fn log_context(&self) -> &'static str {
        match self {
            Operation::Revenue => "Error fetching revenue",
            Operation::LatestInvoices => "Error fetching the latest invoices",
            Operation::CardData => "Error fetching card data",
            Operation::FilteredInvoices => "Error fetching filtered invoices",
            Operation::InvoicePages => "Error fetching total number of invoices",
            Operation::Invoice => "Error fetching invoice",
            Operation::Customers => "Error fetching all customers",
            Operation::CustomerTable => "Error fetching customer table",
        }
    }

    /// Error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Operation::Revenue => "FETCH_REVENUE_FAILED",
            Operation::LatestInvoices => "FETCH_LATEST_INVOICES_FAILED",
            Operation::CardData => "FETCH_CARD_DATA_FAILED",
            Operation::FilteredInvoices => "FETCH_INVOICES_FAILED",
            Operation::InvoicePages => "FETCH_INVOICE_PAGES_FAILED",
            Operation::Invoice => "FETCH_INVOICE_FAILED",
            Operation::Customers => "FETCH_CUSTOMERS_FAILED",
            Operation::CustomerTable => "FETCH_CUSTOMER_TABLE_FAILED",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// The main error type for the dashboard data layer
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A query operation failed; the cause has already been logged
    #[error("{0}")]
    Query(Operation),

    /// The snapshot file could not be read or parsed
    #[error("Failed to load snapshot from '{}': {message}", .path.display())]
    Snapshot { path: PathBuf, message: String },

    /// The configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl DashboardError {
    /// Get the HTTP status code for this error
    ///
    /// Callers cannot tell a missing invoice from any other failure, so every
    /// variant is a server error.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DashboardError::Query(op) => op.error_code(),
            DashboardError::Snapshot { .. } => "SNAPSHOT_ERROR",
            DashboardError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// The failed operation, if this is a query failure
    pub fn operation(&self) -> Option<Operation> {
        match self {
            DashboardError::Query(op) => Some(*op),
            _ => None,
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<serde_yaml::Error> for DashboardError {
    fn from(err: serde_yaml::Error) -> Self {
        DashboardError::Config {
            message: err.to_string(),
        }
    }
}

/// Collapse an internal failure into the generic error for `op`.
///
/// The original cause is written to the operational log and dropped.
pub(crate) fn query_failed(op: Operation, err: anyhow::Error) -> DashboardError {
    tracing::error!(operation = ?op, error = %err, "{}", op.log_context());
    DashboardError::Query(op)
}

/// A specialized Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
