use crate::application::http::{flower_check::router::FlowerCheckApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "BloomCheck API",
    description = "Is this flower safe for cats and dogs?"
))]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document with every route group merged in.
    pub fn document() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(FlowerCheckApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
