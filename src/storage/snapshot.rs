//! Loading of the static JSON dataset

use crate::core::error::{DashboardError, DashboardResult};
use crate::core::model::{Customer, Invoice, Revenue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The full dataset, read once and never mutated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub invoices: Vec<Invoice>,

    #[serde(default)]
    pub customers: Vec<Customer>,

    #[serde(default)]
    pub revenue: Vec<Revenue>,
}

impl Snapshot {
    /// Load a snapshot from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DashboardError::Snapshot {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let snapshot = Self::parse(&content, path.to_path_buf())?;
        tracing::debug!(
            path = %path.display(),
            invoices = snapshot.invoices.len(),
            customers = snapshot.customers.len(),
            revenue = snapshot.revenue.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Load a snapshot from a JSON string
    pub fn from_json_str(json: &str) -> DashboardResult<Self> {
        Self::parse(json, PathBuf::from("<inline>"))
    }

    fn parse(json: &str, path: PathBuf) -> DashboardResult<Self> {
        serde_json::from_str(json).map_err(|e| DashboardError::Snapshot {
            path,
            message: e.to_string(),
        })
    }

    /// Index customers by id for joins
    ///
    /// When two customers share an id, the first one in the snapshot wins.
    pub fn customer_index(&self) -> HashMap<&str, &Customer> {
        let mut index = HashMap::with_capacity(self.customers.len());
        for customer in &self.customers {
            index.entry(customer.id.as_str()).or_insert(customer);
        }
        index
    }
}
