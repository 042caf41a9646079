use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub model: String,
    pub fabric: String,
    pub color: String,
    /// Ordered size codes, e.g. `["PP", "P", "M", "G", "GG", "XG"]`.
    pub sizes: Vec<String>,
    pub base_price: Option<Decimal>,
    pub stock: Option<i32>,
    pub image_url: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub model: Option<String>,
    pub fabric: Option<String>,
    pub color: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub base_price: Option<Decimal>,
    pub stock: Option<i32>,
    pub image_url: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductList {
    pub items: Vec<Product>,
}
