use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::budgets::{BudgetList, CreateBudgetRequest, UpdateBudgetRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Budget,
    response::{ApiResponse, Meta},
    routes::params::BudgetListQuery,
    services::budget_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_budgets).post(create_budget))
        .route(
            "/{id}",
            get(get_budget).put(update_budget).delete(delete_budget),
        )
}

#[utoipa::path(
    get,
    path = "/api/budgets",
    params(BudgetListQuery),
    responses(
        (status = 200, description = "List budgets", body = ApiResponse<BudgetList>)
    ),
    tag = "Budgets"
)]
pub async fn list_budgets(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<BudgetListQuery>,
) -> AppResult<Json<ApiResponse<BudgetList>>> {
    let items = budget_service::list_budgets(&state, query.status).await?;
    let meta = Meta::total(items.len());
    Ok(Json(ApiResponse::success("Budgets", BudgetList { items }, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/budgets/{id}",
    params(
        ("id" = i32, Path, description = "Budget ID")
    ),
    responses(
        (status = 200, description = "Get budget", body = ApiResponse<Budget>),
        (status = 404, description = "Budget not found"),
    ),
    tag = "Budgets"
)]
pub async fn get_budget(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Budget>>> {
    let budget = budget_service::get_budget(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Budget", budget, None)))
}

#[utoipa::path(
    post,
    path = "/api/budgets",
    request_body = CreateBudgetRequest,
    responses(
        (status = 201, description = "Create budget", body = ApiResponse<Budget>),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Budgets"
)]
pub async fn create_budget(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateBudgetRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Budget>>)> {
    let budget = budget_service::create_budget(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Budget created", budget, Some(Meta::empty()))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/budgets/{id}",
    params(
        ("id" = i32, Path, description = "Budget ID")
    ),
    request_body = UpdateBudgetRequest,
    responses(
        (status = 200, description = "Updated budget", body = ApiResponse<Budget>),
        (status = 404, description = "Budget not found"),
    ),
    tag = "Budgets"
)]
pub async fn update_budget(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBudgetRequest>,
) -> AppResult<Json<ApiResponse<Budget>>> {
    let budget = budget_service::update_budget(&state, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Updated", budget, Some(Meta::empty()))))
}

#[utoipa::path(
    delete,
    path = "/api/budgets/{id}",
    params(
        ("id" = i32, Path, description = "Budget ID")
    ),
    responses(
        (status = 200, description = "Deleted budget")
    ),
    tag = "Budgets"
)]
pub async fn delete_budget(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    budget_service::delete_budget(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
