use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    middleware::auth::AuthUser,
    models::{DashboardMetrics, DashboardOverview},
    response::{ApiResponse, Meta},
    services::dashboard_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(metrics))
        .route("/overview", get(overview))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/metrics",
    responses(
        (status = 200, description = "Revenue, completed orders, pending budgets and average ticket", body = ApiResponse<DashboardMetrics>)
    ),
    tag = "Dashboard"
)]
pub async fn metrics(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<DashboardMetrics>>> {
    let data = dashboard_service::metrics(&state).await?;
    Ok(Json(ApiResponse::success("Metrics", data, Some(Meta::empty()))))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/overview",
    responses(
        (status = 200, description = "Metrics with recent orders and budgets", body = ApiResponse<DashboardOverview>)
    ),
    tag = "Dashboard"
)]
pub async fn overview(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<DashboardOverview>>> {
    let data = dashboard_service::overview(&state).await?;
    Ok(Json(ApiResponse::success("Overview", data, Some(Meta::empty()))))
}
