// Main entry point - Dependency injection and server setup
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use weather_dashboard::application::assembler::DashboardAssembler;
use weather_dashboard::application::dashboard_service::DashboardService;
use weather_dashboard::infrastructure::config::load_config;
use weather_dashboard::infrastructure::json_dataset_source::JsonFileDatasetSource;
use weather_dashboard::presentation::app_state::AppState;
use weather_dashboard::presentation::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_config()?;

    // Create dataset source (infrastructure layer)
    let source = Arc::new(JsonFileDatasetSource::new(&config.dataset.path));

    // Create pipeline and service (application layer)
    let assembler = DashboardAssembler::from_config(&config.pipeline);
    assembler.check_config()?;
    let dashboard_service = DashboardService::new(source, assembler);

    let state = Arc::new(AppState { dashboard_service });
    let router = build_router(state);

    // Start server
    let addr = config.server.bind_address();
    tracing::info!(
        "Starting weather-dashboard on {} (dataset {}, scale ceiling {})",
        addr,
        config.dataset.path,
        config.pipeline.scale_max
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
