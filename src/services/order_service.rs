use chrono::{Datelike, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::orders::{CreateOrderRequest, UpdateOrderRequest},
    entity::orders::{ActiveModel, Column, Entity as Orders, OrderStatus, ProductionStep},
    error::AppResult,
    models::Order,
    state::AppState,
    validation,
};

pub fn format_order_number(year: i32, n: i32) -> String {
    format!("PED-{year}-{n:03}")
}

fn validate_progress(progress: i32) -> AppResult<()> {
    validation::in_range("progress", progress, 0..=100)
}

async fn next_order_number(state: &AppState) -> AppResult<String> {
    let last = Orders::find()
        .order_by_desc(Column::Id)
        .one(&state.orm)
        .await?;
    let next = last.map(|o| o.id).unwrap_or(0) + 1;
    Ok(format_order_number(Utc::now().year(), next))
}

pub async fn list_orders(state: &AppState, status: Option<OrderStatus>) -> AppResult<Vec<Order>> {
    let mut query = Orders::find();
    if let Some(status) = status {
        query = query.filter(Column::Status.eq(status));
    }
    let items = query
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();
    Ok(items)
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<Option<Order>> {
    let order = Orders::find_by_id(id).one(&state.orm).await?;
    Ok(order.map(Order::from))
}

pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Order> {
    validation::money("totalValue", payload.total_value)?;
    let progress = payload.progress.unwrap_or(0);
    validate_progress(progress)?;

    let order_number = match payload.order_number {
        Some(number) => {
            validation::require_text("orderNumber", &number)?;
            number
        }
        None => next_order_number(state).await?,
    };
    let status = payload.status.unwrap_or(OrderStatus::Approved);
    let delivered_at = (status == OrderStatus::Delivered).then(|| Utc::now().fixed_offset());

    let active = ActiveModel {
        id: NotSet,
        budget_id: Set(payload.budget_id),
        client_id: Set(payload.client_id),
        supplier_id: Set(payload.supplier_id),
        order_number: Set(order_number),
        status: Set(status),
        production_step: Set(payload.production_step.unwrap_or(ProductionStep::Cutting)),
        progress: Set(progress),
        total_value: Set(payload.total_value.round_dp(2)),
        delivery_date: Set(payload.delivery_date.map(|d| d.fixed_offset())),
        tracking_code: Set(payload.tracking_code),
        notes: Set(payload.notes),
        created_at: NotSet,
        delivered_at: Set(delivered_at),
    };
    let order = active.insert(&state.orm).await?;
    tracing::info!(
        order_id = order.id,
        order_number = %order.order_number,
        "order created"
    );

    Ok(order.into())
}

pub async fn update_order(
    state: &AppState,
    id: i32,
    payload: UpdateOrderRequest,
) -> AppResult<Option<Order>> {
    let existing = match Orders::find_by_id(id).one(&state.orm).await? {
        Some(o) => o,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(budget_id) = payload.budget_id {
        active.budget_id = Set(budget_id);
    }
    if let Some(client_id) = payload.client_id {
        active.client_id = Set(client_id);
    }
    if let Some(supplier_id) = payload.supplier_id {
        active.supplier_id = Set(supplier_id);
    }
    if let Some(status) = payload.status {
        if status == OrderStatus::Delivered && existing.delivered_at.is_none() {
            active.delivered_at = Set(Some(Utc::now().fixed_offset()));
        }
        active.status = Set(status);
    }
    if let Some(step) = payload.production_step {
        active.production_step = Set(step);
    }
    if let Some(progress) = payload.progress {
        validate_progress(progress)?;
        active.progress = Set(progress);
    }
    if let Some(total) = payload.total_value {
        validation::money("totalValue", total)?;
        active.total_value = Set(total.round_dp(2));
    }
    if let Some(date) = payload.delivery_date {
        active.delivery_date = Set(Some(date.fixed_offset()));
    }
    if let Some(code) = payload.tracking_code {
        active.tracking_code = Set(Some(code));
    }
    if let Some(notes) = payload.notes {
        active.notes = Set(Some(notes));
    }

    if !active.is_changed() {
        return Ok(Some(existing.into()));
    }
    let order = active.update(&state.orm).await?;
    tracing::info!(
        order_id = order.id,
        status = ?order.status,
        progress = order.progress,
        "order updated"
    );

    Ok(Some(order.into()))
}

pub async fn delete_order(state: &AppState, id: i32) -> AppResult<()> {
    let result = Orders::delete_by_id(id).exec(&state.orm).await?;
    tracing::info!(order_id = id, rows = result.rows_affected, "order deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_numbers_carry_year_and_sequence() {
        assert_eq!(format_order_number(2024, 1), "PED-2024-001");
        assert_eq!(format_order_number(2025, 37), "PED-2025-037");
        assert_eq!(format_order_number(2025, 1234), "PED-2025-1234");
    }

    #[test]
    fn progress_is_a_percentage() {
        assert!(validate_progress(0).is_ok());
        assert!(validate_progress(100).is_ok());
        assert!(validate_progress(-1).is_err());
        assert!(validate_progress(101).is_err());
    }
}
