use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for unexpected failures: the store error text is passed through
/// verbatim under the `error` key.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
