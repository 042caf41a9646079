use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    entity::{
        budgets::{BudgetStatus, Column as BudgetCol, Entity as Budgets},
        orders::{Column as OrderCol, Entity as Orders, OrderStatus},
    },
    error::AppResult,
    models::{Budget, DashboardMetrics, DashboardOverview, Order},
    state::AppState,
};

const RECENT_LIMIT: u64 = 5;

#[derive(Debug, FromQueryResult)]
struct DeliveredTotals {
    revenue: Option<Decimal>,
    completed: i64,
    average: Option<Decimal>,
}

pub async fn metrics(state: &AppState) -> AppResult<DashboardMetrics> {
    let totals = Orders::find()
        .select_only()
        .column_as(Expr::col(OrderCol::TotalValue).sum(), "revenue")
        .column_as(Expr::col(OrderCol::Id).count(), "completed")
        .column_as(
            Expr::expr(Func::avg(Expr::col(OrderCol::TotalValue))),
            "average",
        )
        .filter(OrderCol::Status.eq(OrderStatus::Delivered))
        .into_model::<DeliveredTotals>()
        .one(&state.orm)
        .await?;

    let pending_budgets = Budgets::find()
        .filter(BudgetCol::Status.eq(BudgetStatus::Sent))
        .count(&state.orm)
        .await?;

    let mut metrics = DashboardMetrics {
        pending_budgets: pending_budgets as i64,
        ..DashboardMetrics::default()
    };
    if let Some(totals) = totals {
        metrics.total_revenue = totals.revenue.unwrap_or(Decimal::ZERO);
        metrics.completed_orders = totals.completed;
        metrics.average_ticket = totals.average.unwrap_or(Decimal::ZERO).round_dp(2);
    }
    tracing::debug!(
        completed = metrics.completed_orders,
        pending_budgets = metrics.pending_budgets,
        "dashboard metrics computed"
    );

    Ok(metrics)
}

/// Metrics plus the latest orders and budgets.
pub async fn overview(state: &AppState) -> AppResult<DashboardOverview> {
    let metrics = metrics(state).await?;

    let recent_orders = Orders::find()
        .order_by_desc(OrderCol::CreatedAt)
        .order_by_desc(OrderCol::Id)
        .limit(RECENT_LIMIT)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    let recent_budgets = Budgets::find()
        .order_by_desc(BudgetCol::CreatedAt)
        .order_by_desc(BudgetCol::Id)
        .limit(RECENT_LIMIT)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Budget::from)
        .collect();

    Ok(DashboardOverview {
        metrics,
        recent_orders,
        recent_budgets,
    })
}
