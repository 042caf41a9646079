pub mod budgets;
pub mod clients;
pub mod json;
pub mod orders;
pub mod prints;
pub mod products;
pub mod quotes;
pub mod suppliers;
pub mod transactions;
pub mod users;

pub use budgets::Entity as Budgets;
pub use clients::Entity as Clients;
pub use orders::Entity as Orders;
pub use prints::Entity as Prints;
pub use products::Entity as Products;
pub use quotes::Entity as Quotes;
pub use suppliers::Entity as Suppliers;
pub use transactions::Entity as Transactions;
pub use users::Entity as Users;
