// Invoice domain model - free-form status tracking
use super::replace_rows;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [InvoiceStatus::Pending, InvoiceStatus::Paid, InvoiceStatus::Overdue];

    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown invoice status: {0}")]
pub struct UnknownInvoiceStatus(pub String);

impl FromStr for InvoiceStatus {
    type Err = UnknownInvoiceStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvoiceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownInvoiceStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub id: u32,
    /// Free-text property reference, not tied to any property record.
    pub property: String,
    /// Whole currency units.
    pub amount: u64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
}

impl Invoice {
    pub fn new(id: u32, property: impl Into<String>, amount: u64, status: InvoiceStatus, due_date: NaiveDate) -> Self {
        Self {
            id,
            property: property.into(),
            amount,
            status,
            due_date,
        }
    }
}

/// Next invoice sequence with invoice `id` set to `status`.
///
/// Any status may follow any other. An unknown id yields the same rows.
pub fn set_invoice_status(invoices: &[Arc<Invoice>], id: u32, status: InvoiceStatus) -> Vec<Arc<Invoice>> {
    replace_rows(
        invoices,
        |inv| inv.id == id,
        |inv| Invoice {
            status,
            ..inv.clone()
        },
    )
}
