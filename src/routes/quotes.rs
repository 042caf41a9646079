use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::quotes::{CreateQuoteRequest, QuoteList, UpdateQuoteRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Quote,
    response::{ApiResponse, Meta},
    routes::params::QuoteListQuery,
    services::quote_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_quotes).post(create_quote))
        .route(
            "/{id}",
            get(get_quote).put(update_quote).delete(delete_quote),
        )
}

#[utoipa::path(
    get,
    path = "/api/quotes",
    params(QuoteListQuery),
    responses(
        (status = 200, description = "List quotes", body = ApiResponse<QuoteList>)
    ),
    tag = "Quotes"
)]
pub async fn list_quotes(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<QuoteListQuery>,
) -> AppResult<Json<ApiResponse<QuoteList>>> {
    let items = quote_service::list_quotes(&state, query.status).await?;
    let meta = Meta::total(items.len());
    Ok(Json(ApiResponse::success("Quotes", QuoteList { items }, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/quotes/{id}",
    params(
        ("id" = i32, Path, description = "Quote ID")
    ),
    responses(
        (status = 200, description = "Get quote", body = ApiResponse<Quote>),
        (status = 404, description = "Quote not found"),
    ),
    tag = "Quotes"
)]
pub async fn get_quote(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Quote>>> {
    let quote = quote_service::get_quote(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Quote", quote, None)))
}

#[utoipa::path(
    post,
    path = "/api/quotes",
    request_body = CreateQuoteRequest,
    responses(
        (status = 201, description = "Create quote", body = ApiResponse<Quote>),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Quotes"
)]
pub async fn create_quote(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateQuoteRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Quote>>)> {
    let quote = quote_service::create_quote(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Quote created", quote, Some(Meta::empty()))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/quotes/{id}",
    params(
        ("id" = i32, Path, description = "Quote ID")
    ),
    request_body = UpdateQuoteRequest,
    responses(
        (status = 200, description = "Updated quote", body = ApiResponse<Quote>),
        (status = 404, description = "Quote not found"),
    ),
    tag = "Quotes"
)]
pub async fn update_quote(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQuoteRequest>,
) -> AppResult<Json<ApiResponse<Quote>>> {
    let quote = quote_service::update_quote(&state, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Updated", quote, Some(Meta::empty()))))
}

#[utoipa::path(
    delete,
    path = "/api/quotes/{id}",
    params(
        ("id" = i32, Path, description = "Quote ID")
    ),
    responses(
        (status = 200, description = "Deleted quote")
    ),
    tag = "Quotes"
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    quote_service::delete_quote(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
