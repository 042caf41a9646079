use utoipa::{
    Modify, OpenApi,
    openapi::{
        self, OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse},
        budgets::{BudgetList, CreateBudgetRequest, UpdateBudgetRequest},
        clients::{ClientList, CreateClientRequest, UpdateClientRequest},
        orders::{CreateOrderRequest, OrderList, UpdateOrderRequest},
        prints::{CreatePrintRequest, PrintList, UpdatePrintRequest},
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
        quotes::{CreateQuoteRequest, QuoteList, UpdateQuoteRequest},
        suppliers::{CreateSupplierRequest, SupplierList, UpdateSupplierRequest},
        transactions::{CreateTransactionRequest, TransactionList, UpdateTransactionRequest},
        users::{CreateUserRequest, UpdateUserRequest, UserList},
    },
    entity::{
        budgets::BudgetStatus,
        json::QuoteItem,
        orders::{OrderStatus, ProductionStep},
        prints::Technique,
        quotes::QuoteStatus,
        transactions::{PaymentMethod, TransactionStatus},
        users::Role,
    },
    models::{
        Budget, Client, DashboardMetrics, DashboardOverview, Order, Print, Product, Quote,
        Supplier, Transaction, User,
    },
    response::{ApiResponse, Meta},
    routes::{
        auth, budgets, clients, dashboard, health, orders, params, prints, products, quotes,
        suppliers, transactions, users,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        suppliers::list_suppliers,
        suppliers::get_supplier,
        suppliers::create_supplier,
        suppliers::update_supplier,
        suppliers::delete_supplier,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        prints::list_prints,
        prints::get_print,
        prints::create_print,
        prints::update_print,
        prints::delete_print,
        quotes::list_quotes,
        quotes::get_quote,
        quotes::create_quote,
        quotes::update_quote,
        quotes::delete_quote,
        budgets::list_budgets,
        budgets::get_budget,
        budgets::create_budget,
        budgets::update_budget,
        budgets::delete_budget,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::delete_order,
        transactions::list_order_transactions,
        transactions::create_order_transaction,
        transactions::get_transaction,
        transactions::update_transaction,
        transactions::delete_transaction,
        dashboard::metrics,
        dashboard::overview
    ),
    components(
        schemas(
            Role,
            Technique,
            QuoteStatus,
            BudgetStatus,
            OrderStatus,
            ProductionStep,
            PaymentMethod,
            TransactionStatus,
            QuoteItem,
            User,
            Client,
            Supplier,
            Product,
            Print,
            Quote,
            Budget,
            Order,
            Transaction,
            DashboardMetrics,
            DashboardOverview,
            LoginRequest,
            LoginResponse,
            CreateUserRequest,
            UpdateUserRequest,
            CreateClientRequest,
            UpdateClientRequest,
            CreateSupplierRequest,
            UpdateSupplierRequest,
            CreateProductRequest,
            UpdateProductRequest,
            CreatePrintRequest,
            UpdatePrintRequest,
            CreateQuoteRequest,
            UpdateQuoteRequest,
            CreateBudgetRequest,
            UpdateBudgetRequest,
            CreateOrderRequest,
            UpdateOrderRequest,
            CreateTransactionRequest,
            UpdateTransactionRequest,
            UserList,
            ClientList,
            SupplierList,
            ProductList,
            PrintList,
            QuoteList,
            BudgetList,
            OrderList,
            TransactionList,
            params::QuoteListQuery,
            params::BudgetListQuery,
            params::OrderListQuery,
            Meta,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<DashboardMetrics>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Users", description = "User management, admin only"),
        (name = "Clients", description = "Client endpoints"),
        (name = "Suppliers", description = "Supplier endpoints"),
        (name = "Products", description = "Garment catalog endpoints"),
        (name = "Prints", description = "Artwork endpoints"),
        (name = "Quotes", description = "Supplier quote endpoints"),
        (name = "Budgets", description = "Client budget endpoints"),
        (name = "Orders", description = "Production order endpoints"),
        (name = "Transactions", description = "Payment endpoints"),
        (name = "Dashboard", description = "Business metrics"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
