use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::prints::{CreatePrintRequest, PrintList, UpdatePrintRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Print,
    response::{ApiResponse, Meta},
    services::print_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_prints).post(create_print))
        .route(
            "/{id}",
            get(get_print).put(update_print).delete(delete_print),
        )
}

#[utoipa::path(
    get,
    path = "/api/prints",
    responses(
        (status = 200, description = "List prints", body = ApiResponse<PrintList>)
    ),
    tag = "Prints"
)]
pub async fn list_prints(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<PrintList>>> {
    let items = print_service::list_prints(&state).await?;
    let meta = Meta::total(items.len());
    Ok(Json(ApiResponse::success("Prints", PrintList { items }, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/prints/{id}",
    params(
        ("id" = i32, Path, description = "Print ID")
    ),
    responses(
        (status = 200, description = "Get print", body = ApiResponse<Print>),
        (status = 404, description = "Print not found"),
    ),
    tag = "Prints"
)]
pub async fn get_print(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Print>>> {
    let print = print_service::get_print(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Print", print, None)))
}

#[utoipa::path(
    post,
    path = "/api/prints",
    request_body = CreatePrintRequest,
    responses(
        (status = 201, description = "Create print", body = ApiResponse<Print>),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Prints"
)]
pub async fn create_print(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreatePrintRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Print>>)> {
    let print = print_service::create_print(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Print created", print, Some(Meta::empty()))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/prints/{id}",
    params(
        ("id" = i32, Path, description = "Print ID")
    ),
    request_body = UpdatePrintRequest,
    responses(
        (status = 200, description = "Updated print", body = ApiResponse<Print>),
        (status = 404, description = "Print not found"),
    ),
    tag = "Prints"
)]
pub async fn update_print(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePrintRequest>,
) -> AppResult<Json<ApiResponse<Print>>> {
    let print = print_service::update_print(&state, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Updated", print, Some(Meta::empty()))))
}

#[utoipa::path(
    delete,
    path = "/api/prints/{id}",
    params(
        ("id" = i32, Path, description = "Print ID")
    ),
    responses(
        (status = 200, description = "Deleted print")
    ),
    tag = "Prints"
)]
pub async fn delete_print(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    print_service::delete_print(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
