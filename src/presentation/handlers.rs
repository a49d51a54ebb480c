// HTTP request handlers
use crate::domain::error::DashboardError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Build the dashboard view model from the current dataset
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.get_dashboard().await {
        Ok(view) => Json(view).into_response(),
        Err(e) => {
            let status = match e.downcast_ref::<DashboardError>() {
                Some(DashboardError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
                Some(DashboardError::Configuration(_)) => StatusCode::INTERNAL_SERVER_ERROR,
                None => StatusCode::SERVICE_UNAVAILABLE,
            };
            tracing::error!("Error building dashboard: {:#}", e);
            (status, Json(json!({ "error": format!("{:#}", e) }))).into_response()
        }
    }
}
