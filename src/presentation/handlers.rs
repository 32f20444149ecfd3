// UI event handlers - apply discrete user actions to the mounted views
use crate::application::view_registry::MountedView;
use crate::domain::invoice::{InvoiceStatus, UnknownInvoiceStatus};
use crate::presentation::host::{DashboardHost, PanelContent};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Action button pressed on a property row.
    Toggle { tab: String, property_id: u32 },
    /// Status selection changed on an invoice row.
    SetInvoiceStatus {
        tab: String,
        invoice_id: u32,
        status: InvoiceStatus,
    },
}

impl UiEvent {
    /// Builds a status change from the raw value of an invoice row's select.
    pub fn invoice_selection(
        tab: impl Into<String>,
        invoice_id: u32,
        value: &str,
    ) -> Result<Self, UnknownInvoiceStatus> {
        Ok(UiEvent::SetInvoiceStatus {
            tab: tab.into(),
            invoice_id,
            status: value.parse()?,
        })
    }

    pub fn tab(&self) -> &str {
        match self {
            UiEvent::Toggle { tab, .. } | UiEvent::SetInvoiceStatus { tab, .. } => tab,
        }
    }
}

impl DashboardHost<'_> {
    /// Applies one event to the view mounted under its tab.
    ///
    /// Returns false when the event does not address a mounted view of the
    /// matching kind; such events are dropped.
    pub fn handle(&mut self, event: UiEvent) -> bool {
        let Some(panel) = self.panels.iter_mut().find(|p| p.tab.id == event.tab()) else {
            tracing::debug!("Dropping event for tab {} - no such panel", event.tab());
            return false;
        };

        let view = match &mut panel.content {
            PanelContent::Mounted(view) => view,
            PanelContent::Placeholder => {
                tracing::debug!("Dropping event for placeholder tab {}", panel.tab.id);
                return false;
            }
        };

        match (view, event) {
            (MountedView::Property(view), UiEvent::Toggle { property_id, .. }) => {
                view.toggle(property_id);
                true
            }
            (MountedView::Invoice(view), UiEvent::SetInvoiceStatus { invoice_id, status, .. }) => {
                view.set_status(invoice_id, status);
                true
            }
            (view, event) => {
                tracing::debug!("Dropping {:?} - tab hosts a {} view", event, view.kind());
                false
            }
        }
    }

    /// Handles events one at a time until every sender is dropped.
    ///
    /// Each event runs to completion before the next is received.
    pub async fn run(&mut self, mut events: mpsc::Receiver<UiEvent>) -> usize {
        let mut handled = 0;
        while let Some(event) = events.recv().await {
            if self.handle(event) {
                handled += 1;
            }
        }
        tracing::debug!("Event channel closed after {} handled events", handled);
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::view_registry::ViewRegistry;
    use crate::domain::property::{OccupancyStatus, next_action_date};
    use crate::infrastructure::config::builtin_tenant;
    use chrono::Utc;

    fn invoice_status(host: &DashboardHost<'_>, id: u32) -> InvoiceStatus {
        match &host.panel("invoiceProcessing").unwrap().content {
            PanelContent::Mounted(MountedView::Invoice(view)) => {
                view.invoices().iter().find(|inv| inv.id == id).unwrap().status
            }
            _ => panic!("invoice view not mounted"),
        }
    }

    #[test]
    fn test_toggle_event_reaches_property_view() {
        let bundle = builtin_tenant().unwrap();
        let mut host = DashboardHost::mount(&bundle.config, &ViewRegistry::standard(), &bundle.custom_data);

        assert!(host.handle(UiEvent::Toggle {
            tab: "propertyManagement".to_string(),
            property_id: 1,
        }));

        match &host.panel("propertyManagement").unwrap().content {
            PanelContent::Mounted(MountedView::Property(view)) => {
                let property = &view.properties()[0];
                assert_eq!(property.status, OccupancyStatus::Occupied);
                assert_eq!(property.next_action_date, next_action_date(Utc::now().date_naive()));
            }
            _ => panic!("property view not mounted"),
        }
    }

    #[test]
    fn test_mismatched_events_are_dropped() {
        let bundle = builtin_tenant().unwrap();
        let mut host = DashboardHost::mount(&bundle.config, &ViewRegistry::standard(), &bundle.custom_data);

        assert!(!host.handle(UiEvent::Toggle {
            tab: "invoiceProcessing".to_string(),
            property_id: 1,
        }));
        assert!(!host.handle(UiEvent::SetInvoiceStatus {
            tab: "analytics".to_string(),
            invoice_id: 1,
            status: InvoiceStatus::Paid,
        }));
        assert_eq!(invoice_status(&host, 1), InvoiceStatus::Pending);
    }

    #[test]
    fn test_invoice_selection_parses_select_value() {
        let event = UiEvent::invoice_selection("invoiceProcessing", 3, "Paid").unwrap();
        assert_eq!(
            event,
            UiEvent::SetInvoiceStatus {
                tab: "invoiceProcessing".to_string(),
                invoice_id: 3,
                status: InvoiceStatus::Paid,
            }
        );

        let err = UiEvent::invoice_selection("invoiceProcessing", 3, "Refunded").unwrap_err();
        assert_eq!(err, UnknownInvoiceStatus("Refunded".to_string()));
    }

    #[tokio::test]
    async fn test_run_applies_events_in_order() {
        let bundle = builtin_tenant().unwrap();
        let mut host = DashboardHost::mount(&bundle.config, &ViewRegistry::standard(), &bundle.custom_data);

        let (tx, rx) = mpsc::channel(8);
        for status in [InvoiceStatus::Paid, InvoiceStatus::Overdue, InvoiceStatus::Pending] {
            tx.send(UiEvent::SetInvoiceStatus {
                tab: "invoiceProcessing".to_string(),
                invoice_id: 2,
                status,
            })
            .await
            .unwrap();
        }
        tx.send(UiEvent::Toggle {
            tab: "unknownTab".to_string(),
            property_id: 1,
        })
        .await
        .unwrap();
        drop(tx);

        let handled = host.run(rx).await;

        assert_eq!(handled, 3);
        assert_eq!(invoice_status(&host, 2), InvoiceStatus::Pending);
        assert_eq!(invoice_status(&host, 3), InvoiceStatus::Overdue);
    }
}
