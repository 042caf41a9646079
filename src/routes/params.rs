use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::entity::{budgets::BudgetStatus, orders::OrderStatus, quotes::QuoteStatus};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuoteListQuery {
    /// Only quotes in this status.
    pub status: Option<QuoteStatus>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BudgetListQuery {
    /// Only budgets in this status.
    pub status: Option<BudgetStatus>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    /// Only orders in this status.
    pub status: Option<OrderStatus>,
}
