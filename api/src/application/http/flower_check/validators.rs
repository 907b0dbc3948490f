use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CheckFlowerRequest {
    /// A missing field reads as empty and is rejected by the lookup.
    #[serde(default)]
    #[schema(example = "Roses")]
    #[validate(length(max = 100, message = "flower must be at most 100 characters"))]
    pub flower: String,
}
