use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for every failed request; `message` is shown to users verbatim.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}
