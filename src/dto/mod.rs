pub mod auth;
pub mod budgets;
pub mod clients;
pub mod orders;
pub mod prints;
pub mod products;
pub mod quotes;
pub mod suppliers;
pub mod transactions;
pub mod users;
