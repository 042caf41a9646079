pub mod auth_service;
pub mod budget_service;
pub mod client_service;
pub mod dashboard_service;
pub mod order_service;
pub mod print_service;
pub mod product_service;
pub mod quote_service;
pub mod supplier_service;
pub mod transaction_service;
pub mod user_service;
