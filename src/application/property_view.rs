// Property occupancy view - per-mount store over the occupancy cycle
use crate::application::seed_date;
use crate::application::view_output::{RowControl, ViewOutput, ViewRow};
use crate::domain::dashboard::ConfigSchema;
use crate::domain::property::{OccupancyStatus, Property, toggle_occupancy};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

const COLUMNS: [&str; 5] = ["Property", "Status", "Next Action", "Next Action Date", "Action"];

#[derive(Debug, Clone)]
pub struct PropertyOccupancyView {
    properties: Vec<Arc<Property>>,
}

impl PropertyOccupancyView {
    /// Mounts the view with the fixed seed rows. The configuration is only read
    /// when rendering.
    pub fn mount(_config: &ConfigSchema) -> Self {
        Self::with_properties(seed_properties())
    }

    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties: properties.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn properties(&self) -> &[Arc<Property>] {
        &self.properties
    }

    /// Carries out the pending action of property `id` today (UTC calendar date).
    pub fn toggle(&mut self, id: u32) {
        self.toggle_on(id, Utc::now().date_naive());
    }

    pub fn toggle_on(&mut self, id: u32, today: NaiveDate) {
        if !self.properties.iter().any(|p| p.id == id) {
            tracing::debug!("Toggle ignored: no property with id {}", id);
            return;
        }
        self.properties = toggle_occupancy(&self.properties, id, today);
        tracing::debug!("Toggled property {}", id);
    }

    pub fn render(&self, config: &ConfigSchema) -> ViewOutput {
        let rows = self
            .properties
            .iter()
            .map(|p| ViewRow {
                key: p.id,
                cells: vec![
                    p.name.clone(),
                    p.status.to_string(),
                    p.next_action.to_string(),
                    p.next_action_date.format("%Y-%m-%d").to_string(),
                ],
                control: RowControl::Button {
                    label: p.next_action.to_string(),
                },
            })
            .collect();

        ViewOutput {
            heading: "Property Management".to_string(),
            accent_color: config.primary_color.clone(),
            columns: COLUMNS.to_vec(),
            rows,
        }
    }
}

fn seed_properties() -> Vec<Property> {
    vec![
        Property::new(1, "Shopping Center A", OccupancyStatus::Vacant, seed_date(2023, 9, 15)),
        Property::new(2, "Retail Store B", OccupancyStatus::Occupied, seed_date(2023, 10, 1)),
        Property::new(3, "Office Building C", OccupancyStatus::Vacant, seed_date(2023, 9, 20)),
    ]
}
