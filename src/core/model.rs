//! Snapshot records and the typed results returned by dashboard queries

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Payment status of an invoice
///
/// Anything other than `paid` or `pending` is kept verbatim so that search
/// still sees it, but it counts toward neither total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Other(String),
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for InvoiceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "paid" => InvoiceStatus::Paid,
            "pending" => InvoiceStatus::Pending,
            _ => InvoiceStatus::Other(value),
        }
    }
}

impl From<InvoiceStatus> for String {
    fn from(status: InvoiceStatus) -> Self {
        match status {
            InvoiceStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// Identifier as written in the snapshot, either a JSON string or number
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    String(String),
    Integer(i64),
    Float(f64),
}

/// Read an id into its canonical string form (`1` and `"1"` both become `"1"`)
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::String(s) => s,
        RawId::Integer(n) => n.to_string(),
        RawId::Float(f) => f.to_string(),
    })
}

/// Read an invoice date given either as `YYYY-MM-DD` or as a date-time
///
/// Date-times keep their calendar date as written; RFC 3339 offsets are not
/// converted to another timezone.
fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_invoice_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid invoice date '{}'", raw)))
}

pub(crate) fn parse_invoice_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// An invoice as stored in the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub customer_id: String,
    /// Amount in cents
    pub amount: i64,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub status: InvoiceStatus,
}

/// A customer as stored in the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// One month of revenue, passed through unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: serde_json::Number,
}

/// Customer fields joined onto an invoice
///
/// All fields are `None` when the invoice points at an unknown customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerJoin {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

impl From<Option<&Customer>> for CustomerJoin {
    fn from(customer: Option<&Customer>) -> Self {
        match customer {
            Some(c) => Self {
                name: Some(c.name.clone()),
                email: Some(c.email.clone()),
                image_url: Some(c.image_url.clone()),
            },
            None => Self::default(),
        }
    }
}

/// Entry of the "latest invoices" card, with a formatted amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestInvoice {
    pub id: String,
    pub customer_id: String,
    pub amount: String,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    #[serde(flatten)]
    pub customer: CustomerJoin,
}

/// Row of the invoices table; the amount stays in cents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRow {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
    #[serde(flatten)]
    pub customer: CustomerJoin,
}

/// An invoice prepared for the edit form; `amount` is in dollars
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceForm {
    pub id: String,
    pub customer_id: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: InvoiceStatus,
}

impl From<&Invoice> for InvoiceForm {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id.clone(),
            customer_id: invoice.customer_id.clone(),
            amount: invoice.amount as f64 / 100.0,
            date: invoice.date,
            status: invoice.status.clone(),
        }
    }
}

/// Customer projection used by select inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}

/// Row of the customers table with per-customer invoice totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: usize,
    pub total_pending: String,
    pub total_paid: String,
}

/// Overview counters shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardData {
    pub number_of_customers: usize,
    pub number_of_invoices: usize,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

/// Raw cent sums per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTotals {
    pub paid: i64,
    pub pending: i64,
}

impl StatusTotals {
    /// Sum paid and pending amounts, failing on overflow
    pub fn collect<'a, I>(invoices: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = &'a Invoice>,
    {
        let mut totals = Self::default();
        for invoice in invoices {
            let slot = match invoice.status {
                InvoiceStatus::Paid => &mut totals.paid,
                InvoiceStatus::Pending => &mut totals.pending,
                InvoiceStatus::Other(_) => continue,
            };
            *slot = slot.checked_add(invoice.amount).ok_or_else(|| {
                anyhow::anyhow!("amount overflow while summing invoice {}", invoice.id)
            })?;
        }
        Ok(totals)
    }
}
