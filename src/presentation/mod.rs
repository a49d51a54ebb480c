// Presentation layer - HTTP surface for the rendering shell
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::assembler::tests::sample_dataset;
    use crate::application::assembler::DashboardAssembler;
    use crate::application::dashboard_service::tests::StaticSource;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::dataset_source::DatasetSource;
    use crate::domain::weather::{MonthlyPrecipitation, WeatherDataset};
    use crate::infrastructure::config::PipelineConfig;
    use crate::infrastructure::json_dataset_source::JsonFileDatasetSource;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn router_with(source: Arc<dyn DatasetSource>) -> Router {
        let service = DashboardService::new(
            source,
            DashboardAssembler::from_config(&PipelineConfig::default()),
        );
        build_router(Arc::new(AppState {
            dashboard_service: service,
        }))
    }

    fn router(dataset: Option<WeatherDataset>) -> Router {
        router_with(Arc::new(StaticSource(dataset)))
    }

    async fn fetch(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, _) = fetch(router(None), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_dashboard_ok() {
        let (status, body) = fetch(router(Some(sample_dataset())), "/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        for panel in ["current", "hourlyTrend", "precipitation", "forecast", "distribution"] {
            assert!(body.get(panel).is_some(), "missing panel {}", panel);
        }
        assert_eq!(body["current"]["uvRisk"], "high");
        assert_eq!(body["current"]["uvLabel"], "High");
        assert_eq!(body["distribution"][0]["color"], "#FFD700");
    }

    #[tokio::test]
    async fn test_dashboard_validation_error() {
        let mut dataset = sample_dataset();
        dataset.precipitation[0] = MonthlyPrecipitation::new("Jan", -5.0);
        let (status, body) = fetch(router(Some(dataset)), "/dashboard").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.get("current").is_none());
        assert!(body["error"].as_str().unwrap().contains("Jan"));
    }

    #[tokio::test]
    async fn test_dashboard_missing_rainfall_is_unprocessable() {
        let sample = include_str!("../../data/weather.json");
        let path = std::env::temp_dir().join(format!(
            "weather-dashboard-no-rainfall-{}.json",
            std::process::id()
        ));
        tokio::fs::write(&path, sample.replacen(r#""rainfall": 120"#, r#""total": 120"#, 1))
            .await
            .unwrap();

        let source = Arc::new(JsonFileDatasetSource::new(&path));
        let (status, body) = fetch(router_with(source), "/dashboard").await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("rainfall"));
    }

    #[tokio::test]
    async fn test_dashboard_source_unavailable() {
        let (status, _) = fetch(router(None), "/dashboard").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
