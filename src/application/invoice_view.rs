// Invoice lifecycle view - per-mount store with free-form status assignment
use crate::application::seed_date;
use crate::application::view_output::{RowControl, ViewOutput, ViewRow};
use crate::domain::custom_data::CustomData;
use crate::domain::dashboard::ConfigSchema;
use crate::domain::invoice::{Invoice, InvoiceStatus, set_invoice_status};
use std::sync::Arc;

const COLUMNS: [&str; 5] = ["Property", "Amount", "Status", "Due Date", "Action"];
const CURRENCY_SYMBOL: &str = "£";

#[derive(Debug, Clone)]
pub struct InvoiceLifecycleView {
    invoices: Vec<Arc<Invoice>>,
}

impl InvoiceLifecycleView {
    pub fn mount(_config: &ConfigSchema) -> Self {
        Self::with_invoices(seed_invoices())
    }

    pub fn with_invoices(invoices: Vec<Invoice>) -> Self {
        Self {
            invoices: invoices.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn invoices(&self) -> &[Arc<Invoice>] {
        &self.invoices
    }

    // No transition rules: a manual override from any status to any status.
    pub fn set_status(&mut self, id: u32, status: InvoiceStatus) {
        if !self.invoices.iter().any(|inv| inv.id == id) {
            tracing::debug!("Status change ignored: no invoice with id {}", id);
            return;
        }
        self.invoices = set_invoice_status(&self.invoices, id, status);
        tracing::debug!("Invoice {} set to {}", id, status);
    }

    /// Renders one select per invoice, offering the tenant's invoice statuses.
    pub fn render(&self, config: &ConfigSchema, data: &CustomData) -> ViewOutput {
        let options: Vec<String> = data.invoice_statuses.iter().map(|s| s.to_string()).collect();

        let rows = self
            .invoices
            .iter()
            .map(|inv| ViewRow {
                key: inv.id,
                cells: vec![
                    inv.property.clone(),
                    format!("{}{}", CURRENCY_SYMBOL, inv.amount),
                    inv.status.to_string(),
                    inv.due_date.format("%Y-%m-%d").to_string(),
                ],
                control: RowControl::Select {
                    selected: inv.status.to_string(),
                    options: options.clone(),
                },
            })
            .collect();

        ViewOutput {
            heading: "Invoice Processing".to_string(),
            accent_color: config.primary_color.clone(),
            columns: COLUMNS.to_vec(),
            rows,
        }
    }
}

fn seed_invoices() -> Vec<Invoice> {
    vec![
        Invoice::new(1, "Shopping Center A", 5000, InvoiceStatus::Pending, seed_date(2023, 9, 30)),
        Invoice::new(2, "Retail Store B", 3500, InvoiceStatus::Paid, seed_date(2023, 9, 15)),
        Invoice::new(3, "Office Building C", 7000, InvoiceStatus::Overdue, seed_date(2023, 9, 1)),
    ]
}
