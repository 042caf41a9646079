use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entity::{json::QuoteItem, quotes::QuoteStatus},
    models::Quote,
};

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    pub client_id: i32,
    pub seller_id: i32,
    pub supplier_id: Option<i32>,
    pub product_id: Option<i32>,
    pub print_id: Option<i32>,
    pub items: Vec<QuoteItem>,
    /// Defaults to pending.
    pub status: Option<QuoteStatus>,
    pub unit_price: Option<Decimal>,
    /// Derived from unit price and quantity when omitted.
    pub total_price: Option<Decimal>,
    pub delivery_days: Option<i32>,
    pub supplier_response: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuoteRequest {
    pub client_id: Option<i32>,
    pub seller_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub product_id: Option<i32>,
    pub print_id: Option<i32>,
    pub items: Option<Vec<QuoteItem>>,
    pub status: Option<QuoteStatus>,
    pub unit_price: Option<Decimal>,
    pub total_price: Option<Decimal>,
    pub delivery_days: Option<i32>,
    pub supplier_response: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuoteList {
    pub items: Vec<Quote>,
}
