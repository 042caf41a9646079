use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entity::orders::{OrderStatus, ProductionStep},
    models::Order,
};

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub budget_id: i32,
    pub client_id: i32,
    pub supplier_id: i32,
    /// Generated as `PED-2024-001` style when omitted.
    pub order_number: Option<String>,
    /// Defaults to approved.
    pub status: Option<OrderStatus>,
    /// Defaults to cutting.
    pub production_step: Option<ProductionStep>,
    /// 0 to 100, defaults to 0.
    pub progress: Option<i32>,
    pub total_value: Decimal,
    pub delivery_date: Option<DateTime<Utc>>,
    pub tracking_code: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub budget_id: Option<i32>,
    pub client_id: Option<i32>,
    pub supplier_id: Option<i32>,
    pub status: Option<OrderStatus>,
    pub production_step: Option<ProductionStep>,
    pub progress: Option<i32>,
    pub total_value: Option<Decimal>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub tracking_code: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}
