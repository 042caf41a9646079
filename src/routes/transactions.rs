use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::transactions::{CreateTransactionRequest, TransactionList, UpdateTransactionRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Transaction,
    response::{ApiResponse, Meta},
    services::transaction_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(get_transaction)
            .put(update_transaction)
            .delete(delete_transaction),
    )
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}/transactions",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Payments recorded for the order", body = ApiResponse<TransactionList>)
    ),
    tag = "Transactions"
)]
pub async fn list_order_transactions(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(order_id): Path<i32>,
) -> AppResult<Json<ApiResponse<TransactionList>>> {
    let items = transaction_service::list_transactions(&state, order_id).await?;
    let meta = Meta::total(items.len());
    Ok(Json(ApiResponse::success(
        "Transactions",
        TransactionList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/transactions",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Record payment", body = ApiResponse<Transaction>),
        (status = 400, description = "Invalid amount"),
        (status = 409, description = "Order does not exist"),
    ),
    tag = "Transactions"
)]
pub async fn create_order_transaction(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(order_id): Path<i32>,
    Json(payload): Json<CreateTransactionRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Transaction>>)> {
    let txn = transaction_service::create_transaction(&state, order_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Transaction recorded", txn, Some(Meta::empty()))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Get transaction", body = ApiResponse<Transaction>),
        (status = 404, description = "Transaction not found"),
    ),
    tag = "Transactions"
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Transaction>>> {
    let txn = transaction_service::get_transaction(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Transaction", txn, None)))
}

#[utoipa::path(
    put,
    path = "/api/transactions/{id}",
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    request_body = UpdateTransactionRequest,
    responses(
        (status = 200, description = "Updated transaction", body = ApiResponse<Transaction>),
        (status = 404, description = "Transaction not found"),
    ),
    tag = "Transactions"
)]
pub async fn update_transaction(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTransactionRequest>,
) -> AppResult<Json<ApiResponse<Transaction>>> {
    let txn = transaction_service::update_transaction(&state, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Updated", txn, Some(Meta::empty()))))
}

#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Deleted transaction")
    ),
    tag = "Transactions"
)]
pub async fn delete_transaction(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    transaction_service::delete_transaction(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
