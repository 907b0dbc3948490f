use std::any::Any;
use std::sync::Arc;

use crate::application::cors_middleware::cors_middleware;
use crate::application::http::flower_check::router::flower_check_routes;
use crate::application::http::health::health_routes;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Router, middleware};
use axum_prometheus::PrometheusMetricLayer;
use bloomcheck_core::{application::create_service, domain::common::BloomCheckConfig};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{debug, info_span};
use utoipa_swagger_ui::SwaggerUi;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = BloomCheckConfig::from(args.as_ref().clone());

    if config.llm.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; unknown flowers will return an error result");
    }

    let service = create_service(config)?;
    Ok(AppState::new(args, service))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Turns a handler panic into the regular JSON 500 body.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ApiError::InternalServerError(format!("internal error: {detail}")).into_response()
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    debug!("Allowed origin: {}", state.args.server.allowed_origin);

    let mut openapi = ApiDoc::document();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let mut router = Router::new()
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(flower_check_routes(state.clone()))
        .merge(health_routes(&root_path))
        .fallback(not_found);

    if state.args.server.metrics_enabled {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let router = router
        .layer(middleware::from_fn_with_state(state.clone(), cors_middleware))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace_layer)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    async fn exploding_handler() -> &'static str {
        panic!("registry exploded")
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_json_internal_error() {
        let app = Router::new()
            .route("/boom", get(exploding_handler))
            .layer(CatchPanicLayer::custom(handle_panic));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/boom").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("registry exploded"));
    }

    #[test]
    fn test_handle_panic_with_opaque_payload() {
        let response = handle_panic(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
