// Dashboard host - mounts one panel per offered tab and owns the mounted views
use crate::application::view_output::ViewOutput;
use crate::application::view_registry::{MountedView, ViewRegistry};
use crate::domain::chart::ChartSpec;
use crate::domain::custom_data::CustomData;
use crate::domain::dashboard::{ConfigSchema, TabSpec};
use std::fmt;

/// Feature flag gating the analytics charts.
const ANALYTICS_FEATURE: &str = "analytics";

#[derive(Debug)]
pub enum PanelContent {
    Mounted(MountedView),
    /// The tab is offered but no view is registered for it yet.
    Placeholder,
}

#[derive(Debug)]
pub struct Panel<'a> {
    pub tab: &'a TabSpec,
    pub content: PanelContent,
}

impl Panel<'_> {
    /// Blank when the tab declares no icon.
    pub fn icon(&self) -> &str {
        self.tab.icon_ref.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelOutput {
    View(ViewOutput),
    Placeholder { label: String, description: String },
}

impl fmt::Display for PanelOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelOutput::View(output) => write!(f, "{}", output),
            PanelOutput::Placeholder { label, description } => {
                writeln!(f, "{}", label)?;
                writeln!(f, "{}", description)?;
                writeln!(f, "(coming soon)")
            }
        }
    }
}

/// Reference host for a tenant customization package.
///
/// Borrows the configuration for the whole session and owns every mounted view.
pub struct DashboardHost<'a> {
    config: &'a ConfigSchema,
    data: &'a CustomData,
    pub(crate) panels: Vec<Panel<'a>>,
}

impl<'a> DashboardHost<'a> {
    pub fn mount(config: &'a ConfigSchema, registry: &ViewRegistry, data: &'a CustomData) -> Self {
        let mut panels = Vec::new();

        for tab in &config.dashboard.tabs {
            if !config.feature_enabled(&tab.id) {
                tracing::debug!("Skipping tab {} - feature not enabled", tab.id);
                continue;
            }

            let content = match registry.resolve(&tab.id) {
                Some(factory) => {
                    tracing::debug!("Mounting {} view for tab {}", factory.kind(), tab.id);
                    PanelContent::Mounted(factory.mount(config))
                }
                None => {
                    tracing::info!("No view registered for tab {}, showing placeholder", tab.id);
                    PanelContent::Placeholder
                }
            };
            panels.push(Panel { tab, content });
        }

        tracing::info!(
            "Mounted {} of {} tabs and {} dashboard charts for {}",
            panels.len(),
            config.dashboard.tabs.len(),
            config.dashboard.charts.len(),
            config.company_name
        );

        Self { config, data, panels }
    }

    pub fn panels(&self) -> &[Panel<'a>] {
        &self.panels
    }

    pub fn panel(&self, tab_id: &str) -> Option<&Panel<'a>> {
        self.panels.iter().find(|p| p.tab.id == tab_id)
    }

    /// Dashboard charts, followed by analytics charts when analytics is enabled.
    pub fn visible_charts(&self) -> Vec<(&'a str, &'a ChartSpec)> {
        let config: &'a ConfigSchema = self.config;
        let mut charts: Vec<(&'a str, &'a ChartSpec)> = config.dashboard.charts.iter().collect();

        if config.feature_enabled(ANALYTICS_FEATURE) {
            charts.extend(config.analytics.charts.iter());
        }
        charts
    }

    pub fn render(&self) -> Vec<PanelOutput> {
        self.panels
            .iter()
            .map(|panel| match &panel.content {
                PanelContent::Mounted(view) => PanelOutput::View(view.render(self.config, self.data)),
                PanelContent::Placeholder => PanelOutput::Placeholder {
                    label: panel.tab.label.clone(),
                    description: panel.tab.description.clone(),
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::view_registry::{ViewFactory, ViewKind};
    use crate::infrastructure::config::builtin_tenant;

    fn tab(id: &str) -> TabSpec {
        TabSpec {
            id: id.to_string(),
            label: format!("{} label", id),
            description: format!("{} description", id),
            icon_ref: None,
        }
    }

    fn config_with(tabs: &[&str], enabled: &[&str]) -> ConfigSchema {
        let mut config = ConfigSchema::default();
        config.dashboard.tabs = tabs.iter().map(|id| tab(id)).collect();
        config.features = enabled.iter().map(|id| (id.to_string(), true)).collect();
        config
    }

    #[test]
    fn test_builtin_tenant_mounts_both_views() {
        let bundle = builtin_tenant().unwrap();
        let host = DashboardHost::mount(&bundle.config, &ViewRegistry::standard(), &bundle.custom_data);

        assert_eq!(host.panels().len(), 2);
        assert!(matches!(
            host.panel("propertyManagement").unwrap().content,
            PanelContent::Mounted(MountedView::Property(_))
        ));
        assert!(matches!(
            host.panel("invoiceProcessing").unwrap().content,
            PanelContent::Mounted(MountedView::Invoice(_))
        ));
        assert_eq!(host.panel("propertyManagement").unwrap().icon(), "Home");
    }

    #[test]
    fn test_tab_without_enabled_feature_is_skipped() {
        let mut config = config_with(&["propertyManagement", "invoiceProcessing"], &["propertyManagement"]);
        config.features.insert("invoiceProcessing".to_string(), false);
        let data = CustomData::default();
        let host = DashboardHost::mount(&config, &ViewRegistry::standard(), &data);

        assert_eq!(host.panels().len(), 1);
        assert!(host.panel("invoiceProcessing").is_none());
    }

    #[test]
    fn test_unregistered_tab_gets_placeholder() {
        let config = config_with(&["unknownTab", "propertyManagement"], &["unknownTab", "propertyManagement"]);
        let data = CustomData::default();
        let registry = ViewRegistry::empty().register(ViewFactory::builtin(ViewKind::InvoiceProcessing));
        let host = DashboardHost::mount(&config, &registry, &data);

        assert_eq!(host.panels().len(), 2);
        assert!(host.panels().iter().all(|p| matches!(p.content, PanelContent::Placeholder)));
        assert_eq!(host.panel("unknownTab").unwrap().icon(), "");

        let rendered = host.render();
        assert_eq!(
            rendered[0],
            PanelOutput::Placeholder {
                label: "unknownTab label".to_string(),
                description: "unknownTab description".to_string(),
            }
        );
        assert!(rendered[1].to_string().contains("coming soon"));
    }

    #[test]
    fn test_analytics_feature_gates_analytics_charts() {
        let mut bundle = builtin_tenant().unwrap();
        let registry = ViewRegistry::standard();

        let host = DashboardHost::mount(&bundle.config, &registry, &bundle.custom_data);
        let keys: Vec<&str> = host.visible_charts().into_iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec!["propertyStatus", "invoiceStatus", "revenueByProperty", "occupancyRate"]
        );

        bundle.config.features.insert("analytics".to_string(), false);
        let host = DashboardHost::mount(&bundle.config, &registry, &bundle.custom_data);
        let keys: Vec<&str> = host.visible_charts().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["propertyStatus", "invoiceStatus"]);
    }

    #[test]
    fn test_render_uses_tenant_branding() {
        let bundle = builtin_tenant().unwrap();
        let host = DashboardHost::mount(&bundle.config, &ViewRegistry::standard(), &bundle.custom_data);

        let rendered = host.render();
        assert_eq!(rendered.len(), 2);
        match &rendered[1] {
            PanelOutput::View(output) => {
                assert_eq!(output.heading, "Invoice Processing");
                assert_eq!(output.accent_color, "#3B82F6");
                assert_eq!(output.rows.len(), 3);
            }
            other => panic!("expected a view, got {:?}", other),
        }
    }
}
