// Custom data - tenant constant lists for building selection widgets
use super::invoice::InvoiceStatus;
use super::property::OccupancyStatus;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CustomData {
    pub property_types: Vec<String>,
    pub invoice_statuses: Vec<InvoiceStatus>,
    pub occupancy_statuses: Vec<OccupancyStatus>,
}

impl Default for CustomData {
    fn default() -> Self {
        Self {
            property_types: Vec::new(),
            invoice_statuses: InvoiceStatus::ALL.to_vec(),
            occupancy_statuses: OccupancyStatus::ALL.to_vec(),
        }
    }
}
