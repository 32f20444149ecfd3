use crate::domain::custom_data::CustomData;
use crate::domain::dashboard::ConfigSchema;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The QuoinStone tenant shipped with the crate.
const BUILTIN_TENANT: &str = include_str!("../../config/tenant.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load host settings: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("failed to read tenant file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tenant file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone)]
pub struct HostSettings {
    /// Tenant file to load; the built-in tenant is used when unset.
    #[serde(default)]
    pub tenant_file: Option<PathBuf>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            tenant_file: None,
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// A tenant customization package: the dashboard description plus the
/// constant lists its views build selection widgets from.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct TenantBundle {
    #[serde(flatten)]
    pub config: ConfigSchema,
    #[serde(default)]
    pub custom_data: CustomData,
}

pub fn load_host_settings() -> Result<HostSettings, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/host").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn parse_tenant(source: &str) -> Result<TenantBundle, ConfigError> {
    Ok(toml::from_str(source)?)
}

pub fn load_tenant_file(path: &Path) -> Result<TenantBundle, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let bundle = parse_tenant(&source)?;
    tracing::info!("Loaded tenant '{}' from {}", bundle.config.title, path.display());
    Ok(bundle)
}

pub fn builtin_tenant() -> Result<TenantBundle, ConfigError> {
    parse_tenant(BUILTIN_TENANT)
}

/// Loads the tenant named by the host settings, falling back to the built-in one.
pub fn load_tenant(settings: &HostSettings) -> Result<TenantBundle, ConfigError> {
    match &settings.tenant_file {
        Some(path) => load_tenant_file(path),
        None => {
            tracing::info!("No tenant file configured, using built-in tenant");
            builtin_tenant()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartKind;
    use crate::domain::invoice::InvoiceStatus;
    use crate::domain::property::OccupancyStatus;
    use std::io::Write;

    #[test]
    fn test_builtin_tenant() {
        let bundle = builtin_tenant().unwrap();
        let config = &bundle.config;

        assert_eq!(config.title, "QuoinStone Property Management");
        assert_eq!(config.company_name, "QuoinStone Group");
        assert_eq!(config.primary_color, "#3B82F6");
        assert_eq!(config.current_user_name, "Tim Struth");

        let tab_ids: Vec<&str> = config.dashboard.tabs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(tab_ids, vec!["propertyManagement", "invoiceProcessing"]);
        assert_eq!(config.dashboard.tabs[1].icon_ref.as_deref(), Some("FileText"));

        assert_eq!(config.dashboard.charts.len(), 2);
        assert_eq!(config.dashboard.charts["propertyStatus"].kind, ChartKind::Pie);
        assert_eq!(config.dashboard.charts["invoiceStatus"].series_total("count"), 100.0);
        assert_eq!(config.analytics.charts.len(), 2);
        assert_eq!(config.analytics.charts["occupancyRate"].data_points.len(), 4);

        assert_eq!(config.clients.len(), 3);
        assert_eq!(config.clients[1].industry, "Commercial Real Estate");
        assert_eq!(config.features.len(), 4);
        assert!(config.features.values().all(|enabled| *enabled));

        assert_eq!(bundle.custom_data.property_types.len(), 3);
        assert_eq!(bundle.custom_data.invoice_statuses, InvoiceStatus::ALL.to_vec());
        assert_eq!(bundle.custom_data.occupancy_statuses, OccupancyStatus::ALL.to_vec());
    }

    #[test]
    fn test_tenant_without_custom_data() {
        let bundle = parse_tenant(
            r#"
            title = "Minimal"

            [features]
            invoiceProcessing = true
            "#,
        )
        .unwrap();

        assert_eq!(bundle.config.title, "Minimal");
        assert!(bundle.config.feature_enabled("invoiceProcessing"));
        assert_eq!(bundle.custom_data, CustomData::default());
    }

    #[test]
    fn test_invalid_tenant_is_parse_error() {
        let err = parse_tenant("title = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_tenant_file() {
        let path = std::env::temp_dir().join(format!("tenant-dashboard-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "title = \"From Disk\"").unwrap();
        drop(file);

        let settings = HostSettings {
            tenant_file: Some(path.clone()),
            ..HostSettings::default()
        };
        let bundle = load_tenant(&settings).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(bundle.config.title, "From Disk");
    }

    #[test]
    fn test_missing_tenant_file_is_read_error() {
        let err = load_tenant_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_default_settings_use_builtin_tenant() {
        let settings = HostSettings::default();
        assert_eq!(settings.log_filter, "info");
        assert_eq!(load_tenant(&settings).unwrap(), builtin_tenant().unwrap());
    }
}
