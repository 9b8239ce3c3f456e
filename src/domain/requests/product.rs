use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Mechanical keyboard")]
    pub name: String,

    pub description: Option<String>,

    #[schema(example = 149.99)]
    pub price: Decimal,

    /// Owning user. Not checked here; a dangling id fails on the store's
    /// foreign key constraint.
    #[serde(rename = "userId")]
    pub user_id: Option<i32>,
}
