//! HTTP behaviour that does not need a database: routing, the auth gate and
//! the JSON fallback.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use chrono::Utc;
use emunah_api::{
    app::build_app,
    config::AppConfig,
    entity::users::{self, Role},
    services::auth_service::issue_token,
    state::AppState,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

const SECRET: &str = "router-test-secret";

fn test_app() -> Router {
    let config = AppConfig {
        database_url: String::new(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: SECRET.into(),
        shop_pix_key: "11998896725".into(),
        budget_validity_days: 7,
    };
    build_app(AppState::new(DatabaseConnection::default(), config))
}

fn token_for(id: i32, role: Role) -> String {
    let user = users::Model {
        id,
        name: "Teste".into(),
        email: "teste@emunah.com".into(),
        password_hash: String::new(),
        role,
        phone: None,
        created_at: Utc::now().fixed_offset(),
    };
    issue_token(&user, SECRET).unwrap()
}

async fn send(app: Router, method: &str, uri: &str, token: Option<&str>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn send_json(app: Router, method: &str, uri: &str, token: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_public_and_tagged_with_request_id() {
    let response = send(test_app(), "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-request-id").is_some());

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "ok");
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let response = send(test_app(), "GET", "/nope", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["data"]["path"], "/nope");
}

#[tokio::test]
async fn api_requires_bearer_token() {
    let response = send(test_app(), "GET", "/api/clients", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(test_app(), "GET", "/api/dashboard/metrics", Some("garbage")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_management_is_admin_only() {
    let seller = token_for(2, Role::Seller);
    let response = send(test_app(), "GET", "/api/users", Some(&seller)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_cannot_delete_own_account() {
    let admin = token_for(1, Role::Admin);
    let response = send(test_app(), "DELETE", "/api/users/1", Some(&admin)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// Bodies are rejected while deserializing, before any query runs.
#[tokio::test]
async fn unknown_enum_values_are_rejected() {
    let seller = token_for(2, Role::Seller);

    let response = send_json(
        test_app(),
        "POST",
        "/api/prints",
        &seller,
        r#"{"name":"Logo","technique":"neon"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = send_json(
        test_app(),
        "PUT",
        "/api/orders/1",
        &seller,
        r#"{"status":"LOST"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = send_json(
        test_app(),
        "POST",
        "/api/orders/1/transactions",
        &seller,
        r#"{"paymentMethod":"CHEQUE","amount":"10.00"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
