use axum::extract::State;
use bloomcheck_core::domain::flower::{
    entities::LookupResult, ports::FlowerSafetyService, value_objects::LookupFlowerInput,
};

use crate::application::http::{
    flower_check::validators::CheckFlowerRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/flower-check",
    tag = "flower-check",
    summary = "Check whether a flower is safe for pets",
    description = "Looks the flower up in the curated registry (exact, then fuzzy match) and falls back to an LLM answer flagged as unverified when it is unknown.",
    request_body = CheckFlowerRequest,
    responses(
        (status = 200, body = LookupResult),
        (status = 400, body = ErrorBody, description = "Missing, empty or malformed flower name"),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn check_flower(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckFlowerRequest>,
) -> Result<Response<LookupResult>, ApiError> {
    let result = state
        .service
        .lookup_flower(LookupFlowerInput {
            flower: payload.flower,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
