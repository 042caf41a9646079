use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{entity::budgets::BudgetStatus, models::Budget};

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetRequest {
    pub quote_id: i32,
    pub client_id: i32,
    /// Generated as `ORC-0001` style when omitted.
    pub budget_number: Option<String>,
    pub total_value: Decimal,
    /// Defaults to 50.
    pub down_payment_percent: Option<i32>,
    /// Derived from total and percent when omitted.
    pub down_payment_value: Option<Decimal>,
    /// Defaults to the shop PIX key.
    pub pix_key: Option<String>,
    /// Defaults to draft.
    pub status: Option<BudgetStatus>,
    /// Defaults to now plus the configured validity window.
    pub valid_until: Option<DateTime<Utc>>,
    pub pdf_url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetRequest {
    pub quote_id: Option<i32>,
    pub client_id: Option<i32>,
    pub total_value: Option<Decimal>,
    pub down_payment_percent: Option<i32>,
    pub down_payment_value: Option<Decimal>,
    pub pix_key: Option<String>,
    pub status: Option<BudgetStatus>,
    pub valid_until: Option<DateTime<Utc>>,
    pub pdf_url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BudgetList {
    pub items: Vec<Budget>,
}
