use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entity::transactions::{PaymentMethod, TransactionStatus},
    models::Transaction,
};

/// Body for `POST /api/orders/{id}/transactions`; the order comes from the path.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub payment_method: PaymentMethod,
    pub amount: Decimal,
    /// Defaults to pending.
    pub status: Option<TransactionStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    pub payment_method: Option<PaymentMethod>,
    pub amount: Option<Decimal>,
    pub status: Option<TransactionStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionList {
    pub items: Vec<Transaction>,
}
