use axum::{Router, extract::State, routing::get};
use bloomcheck_core::domain::health::{entities::HealthStatus, ports::HealthCheckService};
use utoipa::OpenApi;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(health_check))]
pub struct HealthApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Service health",
    responses(
        (status = 200, body = HealthStatus)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response<HealthStatus> {
    Response::OK(state.service.health().await)
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    let index = if root_path.is_empty() {
        "/".to_string()
    } else {
        root_path.to_string()
    };

    Router::new()
        .route(&index, get(health_check))
        .route(&format!("{}/health", root_path), get(health_check))
}
