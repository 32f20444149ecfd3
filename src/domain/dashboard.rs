// Dashboard domain model - the tenant's immutable description of its dashboard
use super::chart::ChartMap;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Everything a host needs to know to specialize itself for one tenant.
///
/// Built once per session and passed by reference to the host and every view.
/// Missing fields fall back to their defaults; nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigSchema {
    pub title: String,
    pub company_name: String,
    pub logo_ref: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub current_user_name: String,
    pub dashboard: DashboardSection,
    pub analytics: AnalyticsSection,
    pub clients: Vec<Client>,
    pub features: BTreeMap<String, bool>,
}

impl ConfigSchema {
    /// A flag that is absent counts as disabled.
    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardSection {
    pub tabs: Vec<TabSpec>,
    pub charts: ChartMap,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyticsSection {
    pub charts: ChartMap,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TabSpec {
    pub id: String,
    pub label: String,
    pub description: String,
    pub icon_ref: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: String,
}
