use super::handlers::check_flower::{__path_check_flower, check_flower};
use crate::application::http::{health::health_check, server::app_state::AppState};
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(check_flower))]
pub struct FlowerCheckApiDoc;

/// The front-end posts to `/flower-check`; `/lookup` is kept as an alias.
pub fn flower_check_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/flower-check", root_path),
            get(health_check).post(check_flower),
        )
        .route(
            &format!("{}/lookup", root_path),
            get(health_check).post(check_flower),
        )
}
