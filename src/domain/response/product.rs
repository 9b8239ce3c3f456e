use crate::model::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Listing projection. The raw column names stay internal; the wire carries
/// `productName` and `cost` only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductListItem {
    pub id: i32,

    #[serde(rename = "productName")]
    pub product_name: String,

    pub cost: Decimal,
}

impl From<Product> for ProductListItem {
    fn from(value: Product) -> Self {
        ProductListItem {
            id: value.id,
            product_name: value.name,
            cost: value.price,
        }
    }
}
