use crate::app_config::AppConfig;
use crate::capability_report::build_reports;
use kronos_capabilities::CapabilityRegistry;
use tracing::info;

mod app_config;
mod capability_report;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt().with_max_level(config.logging().level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let source = config.registry().profile_source();
    let registry = CapabilityRegistry::from_source(source.as_ref(), config.registry().save_controls()).await?;
    info!("✅  Built capability registry with {} models", registry.len());

    let reports = build_reports(&registry, config.report().models(), config.report().base_timeout());
    for report in &reports {
        report.log();
    }

    if config.report().json() {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    info!("🔥 {} reported on {} models", env!("CARGO_PKG_NAME"), reports.len());

    Ok(())
}
