use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod budgets;
pub mod clients;
pub mod dashboard;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod prints;
pub mod products;
pub mod quotes;
pub mod suppliers;
pub mod transactions;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/clients", clients::router())
        .nest("/suppliers", suppliers::router())
        .nest("/products", products::router())
        .nest("/prints", prints::router())
        .nest("/quotes", quotes::router())
        .nest("/budgets", budgets::router())
        .nest("/orders", orders::router())
        .nest("/transactions", transactions::router())
        .nest("/dashboard", dashboard::router())
}
