use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::clients::{ClientList, CreateClientRequest, UpdateClientRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Client,
    response::{ApiResponse, Meta},
    services::client_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route(
            "/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
}

#[utoipa::path(
    get,
    path = "/api/clients",
    responses(
        (status = 200, description = "List clients", body = ApiResponse<ClientList>)
    ),
    tag = "Clients"
)]
pub async fn list_clients(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<ClientList>>> {
    let items = client_service::list_clients(&state).await?;
    let meta = Meta::total(items.len());
    Ok(Json(ApiResponse::success("Clients", ClientList { items }, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Get client", body = ApiResponse<Client>),
        (status = 404, description = "Client not found"),
    ),
    tag = "Clients"
)]
pub async fn get_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Client>>> {
    let client = client_service::get_client(&state, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Client", client, None)))
}

#[utoipa::path(
    post,
    path = "/api/clients",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Create client", body = ApiResponse<Client>),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Clients"
)]
pub async fn create_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateClientRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Client>>)> {
    let client = client_service::create_client(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Client created", client, Some(Meta::empty()))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Updated client", body = ApiResponse<Client>),
        (status = 404, description = "Client not found"),
    ),
    tag = "Clients"
)]
pub async fn update_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClientRequest>,
) -> AppResult<Json<ApiResponse<Client>>> {
    let client = client_service::update_client(&state, id, payload)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Updated", client, Some(Meta::empty()))))
}

#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Deleted client")
    ),
    tag = "Clients"
)]
pub async fn delete_client(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    client_service::delete_client(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
