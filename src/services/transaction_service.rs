use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::transactions::{CreateTransactionRequest, UpdateTransactionRequest},
    entity::transactions::{ActiveModel, Column, Entity as Transactions, TransactionStatus},
    error::AppResult,
    models::Transaction,
    state::AppState,
    validation,
};

/// Payments recorded against one order, newest first.
pub async fn list_transactions(state: &AppState, order_id: i32) -> AppResult<Vec<Transaction>> {
    let items = Transactions::find()
        .filter(Column::OrderId.eq(order_id))
        .order_by_desc(Column::TransactionDate)
        .order_by_desc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Transaction::from)
        .collect();
    Ok(items)
}

pub async fn get_transaction(state: &AppState, id: i32) -> AppResult<Option<Transaction>> {
    let txn = Transactions::find_by_id(id).one(&state.orm).await?;
    Ok(txn.map(Transaction::from))
}

pub async fn create_transaction(
    state: &AppState,
    order_id: i32,
    payload: CreateTransactionRequest,
) -> AppResult<Transaction> {
    validation::positive_money("amount", payload.amount)?;

    let active = ActiveModel {
        id: NotSet,
        order_id: Set(order_id),
        payment_method: Set(payload.payment_method),
        amount: Set(payload.amount.round_dp(2)),
        status: Set(payload.status.unwrap_or(TransactionStatus::Pending)),
        transaction_date: Set(Utc::now().fixed_offset()),
        notes: Set(payload.notes),
    };
    let txn = active.insert(&state.orm).await?;
    tracing::info!(
        transaction_id = txn.id,
        order_id,
        amount = %txn.amount,
        "transaction recorded"
    );

    Ok(txn.into())
}

pub async fn update_transaction(
    state: &AppState,
    id: i32,
    payload: UpdateTransactionRequest,
) -> AppResult<Option<Transaction>> {
    let existing = match Transactions::find_by_id(id).one(&state.orm).await? {
        Some(t) => t,
        None => return Ok(None),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(method) = payload.payment_method {
        active.payment_method = Set(method);
    }
    if let Some(amount) = payload.amount {
        validation::positive_money("amount", amount)?;
        active.amount = Set(amount.round_dp(2));
    }
    if let Some(status) = payload.status {
        active.status = Set(status);
    }
    if let Some(notes) = payload.notes {
        active.notes = Set(Some(notes));
    }

    if !active.is_changed() {
        return Ok(Some(existing.into()));
    }
    let txn = active.update(&state.orm).await?;
    tracing::info!(transaction_id = txn.id, status = ?txn.status, "transaction updated");

    Ok(Some(txn.into()))
}

pub async fn delete_transaction(state: &AppState, id: i32) -> AppResult<()> {
    let result = Transactions::delete_by_id(id).exec(&state.orm).await?;
    tracing::info!(transaction_id = id, rows = result.rows_affected, "transaction deleted");
    Ok(())
}
