// Main entry point - wires a tenant package into the reference dashboard host
use tenant_dashboard::application::view_registry::ViewRegistry;
use tenant_dashboard::infrastructure::config::{load_host_settings, load_tenant};
use tenant_dashboard::presentation::handlers::UiEvent;
use tenant_dashboard::presentation::host::DashboardHost;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = load_host_settings()?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let bundle = load_tenant(&settings)?;
    let registry = ViewRegistry::standard();
    let mut host = DashboardHost::mount(&bundle.config, &registry, &bundle.custom_data);

    println!("{} - signed in as {}", bundle.config.title, bundle.config.current_user_name);
    for (key, chart) in host.visible_charts() {
        println!("chart {} ({}, {} points)", key, chart.kind, chart.data_points.len());
    }
    println!();

    // Scripted session standing in for user input
    let events = [
        UiEvent::Toggle {
            tab: "propertyManagement".to_string(),
            property_id: 1,
        },
        UiEvent::invoice_selection("invoiceProcessing", 3, "Paid")?,
    ];
    let (tx, rx) = mpsc::channel(16);
    tokio::spawn(async move {
        for event in events {
            if tx.send(event).await.is_err() {
                break;
            }
        }
    });

    let handled = host.run(rx).await;
    tracing::info!("Handled {} events", handled);

    for output in host.render() {
        println!("{}", output);
    }

    Ok(())
}
