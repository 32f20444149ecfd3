// Property domain model - the occupancy cycle
use super::replace_rows;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// How far ahead the next occupancy action is scheduled after a toggle.
pub const NEXT_ACTION_LEAD: Months = Months::new(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum OccupancyStatus {
    Vacant,
    Occupied,
}

impl OccupancyStatus {
    pub const ALL: [OccupancyStatus; 2] = [OccupancyStatus::Vacant, OccupancyStatus::Occupied];

    pub fn opposite(self) -> Self {
        match self {
            OccupancyStatus::Vacant => OccupancyStatus::Occupied,
            OccupancyStatus::Occupied => OccupancyStatus::Vacant,
        }
    }

    /// The action that is always pending for a property in this status.
    pub fn pending_action(self) -> OccupancyAction {
        match self {
            OccupancyStatus::Vacant => OccupancyAction::Occupy,
            OccupancyStatus::Occupied => OccupancyAction::Vacate,
        }
    }
}

impl fmt::Display for OccupancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupancyStatus::Vacant => f.write_str("Vacant"),
            OccupancyStatus::Occupied => f.write_str("Occupied"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OccupancyAction {
    Occupy,
    Vacate,
}

impl fmt::Display for OccupancyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupancyAction::Occupy => f.write_str("Occupy"),
            OccupancyAction::Vacate => f.write_str("Vacate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub id: u32,
    pub name: String,
    pub status: OccupancyStatus,
    pub next_action: OccupancyAction,
    pub next_action_date: NaiveDate,
}

impl Property {
    pub fn new(id: u32, name: impl Into<String>, status: OccupancyStatus, next_action_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            next_action: status.pending_action(),
            next_action_date,
        }
    }

    /// The property after its pending action has been carried out on `today`.
    ///
    /// The next action is derived from the new status, never flipped on its own.
    pub fn toggled(&self, today: NaiveDate) -> Self {
        Self::new(self.id, self.name.clone(), self.status.opposite(), next_action_date(today))
    }
}

/// `today` plus three calendar months.
///
/// The day of month is carried over as an offset from the first, so days past
/// the end of the target month spill into the following one (Nov 30 becomes
/// Mar 2 in a common year).
pub fn next_action_date(today: NaiveDate) -> NaiveDate {
    let shifted = today
        .with_day(1)
        .and_then(|first| first.checked_add_months(NEXT_ACTION_LEAD))
        .and_then(|first| first.checked_add_days(Days::new(u64::from(today.day0()))));

    match shifted {
        Some(date) => date,
        None => {
            tracing::warn!("Next action date out of range for {}, keeping it", today);
            today
        }
    }
}

/// Next property sequence after toggling `id` on `today`.
///
/// An unknown id yields the same rows in the same order.
pub fn toggle_occupancy(properties: &[Arc<Property>], id: u32, today: NaiveDate) -> Vec<Arc<Property>> {
    replace_rows(properties, |p| p.id == id, |p| p.toggled(today))
}
