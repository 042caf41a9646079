use std::collections::BTreeMap;

use emunah_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        auth::LoginRequest,
        budgets::{CreateBudgetRequest, UpdateBudgetRequest},
        clients::{CreateClientRequest, UpdateClientRequest},
        orders::{CreateOrderRequest, UpdateOrderRequest},
        prints::{CreatePrintRequest, UpdatePrintRequest},
        products::{CreateProductRequest, UpdateProductRequest},
        quotes::{CreateQuoteRequest, UpdateQuoteRequest},
        suppliers::{CreateSupplierRequest, UpdateSupplierRequest},
        transactions::CreateTransactionRequest,
        users::CreateUserRequest,
    },
    entity::{
        budgets::BudgetStatus,
        json::QuoteItem,
        orders::OrderStatus,
        prints::Technique,
        quotes::QuoteStatus,
        transactions::PaymentMethod,
        users::Role,
    },
    error::AppError,
    models::{Budget, Client, Order, Product},
    services::{
        auth_service, budget_service, client_service, dashboard_service, order_service,
        print_service, product_service, quote_service, supplier_service, transaction_service,
        user_service,
    },
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, Statement};

// Quote -> budget -> order -> payment, then the dashboard numbers that follow.
#[tokio::test]
async fn quote_budget_order_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    // Empty dashboard
    let metrics = dashboard_service::metrics(&state).await?;
    assert_eq!(metrics.total_revenue, Decimal::ZERO);
    assert_eq!(metrics.average_ticket, Decimal::ZERO);
    assert_eq!(metrics.completed_orders, 0);
    assert_eq!(metrics.pending_budgets, 0);

    // Users and login
    let seller = user_service::create_user(
        &state,
        CreateUserRequest {
            name: "Vendedor".into(),
            email: "Vendas@Emunah.com".into(),
            password: "segredo".into(),
            role: None,
            phone: None,
        },
    )
    .await?;
    assert_eq!(seller.role, Role::Seller);
    assert_eq!(seller.email, "vendas@emunah.com");
    let by_email = user_service::get_user_by_email(&state, "vendas@emunah.com").await?;
    assert_eq!(by_email.map(|u| u.id), Some(seller.id));

    let login = auth_service::login(
        &state,
        LoginRequest {
            email: "vendas@emunah.com".into(),
            password: "segredo".into(),
        },
    )
    .await?;
    assert_eq!(login.user.id, seller.id);
    let bad_login = auth_service::login(
        &state,
        LoginRequest {
            email: "vendas@emunah.com".into(),
            password: "errada".into(),
        },
    )
    .await;
    assert!(matches!(bad_login, Err(AppError::Unauthorized(_))));

    // Client: create, get, partial update, list order
    let client = create_client(&state, "Tech Solutions LTDA").await?;
    let fetched = client_service::get_client(&state, client.id).await?;
    assert_eq!(fetched.as_ref(), Some(&client));

    let updated = client_service::update_client(
        &state,
        client.id,
        UpdateClientRequest {
            city: Some("Campinas".into()),
            ..Default::default()
        },
    )
    .await?
    .expect("client exists");
    assert_eq!(updated.city.as_deref(), Some("Campinas"));
    assert_eq!(updated.name, client.name);
    assert_eq!(updated.email, client.email);

    let second = create_client(&state, "Padaria Pão Quente").await?;
    let listed = client_service::list_clients(&state).await?;
    assert_eq!(listed.first().map(|c| c.id), Some(second.id));

    let supplier = supplier_service::create_supplier(
        &state,
        CreateSupplierRequest {
            name: "Confecções Premium".into(),
            contact_name: None,
            cnpj: None,
            email: Some("contato@premium.com".into()),
            phone: None,
            address: None,
            production_time_days: None,
            rating: Some(Decimal::new(48, 1)),
            payment_method: Some("PIX".into()),
            notes: None,
        },
    )
    .await?;
    assert_eq!(supplier.production_time_days, 7);

    let annotated = supplier_service::update_supplier(
        &state,
        supplier.id,
        UpdateSupplierRequest {
            notes: Some("Entrega rápida".into()),
            ..Default::default()
        },
    )
    .await?
    .expect("supplier exists");
    assert_eq!(annotated.notes.as_deref(), Some("Entrega rápida"));
    assert_eq!(annotated.name, supplier.name);
    assert_eq!(annotated.rating, supplier.rating);
    assert_eq!(annotated.production_time_days, supplier.production_time_days);
    assert_eq!(annotated.payment_method, supplier.payment_method);

    let product = catalog_flow(&state).await?;

    // Quote quantities
    let quote = quote_service::create_quote(
        &state,
        CreateQuoteRequest {
            client_id: client.id,
            seller_id: seller.id,
            supplier_id: Some(supplier.id),
            product_id: Some(product.id),
            print_id: None,
            items: vec![
                item(&[("P", 10), ("M", 20), ("G", 15)]),
                item(&[("GG", 5)]),
            ],
            status: None,
            unit_price: Some(Decimal::new(2500, 2)),
            total_price: None,
            delivery_days: Some(7),
            supplier_response: None,
            notes: None,
        },
    )
    .await?;
    assert_eq!(quote.total_quantity, 50);
    assert_eq!(quote.total_price, Some(Decimal::new(125000, 2)));
    assert_eq!(quote.status, QuoteStatus::Pending);

    let noted = quote_service::update_quote(
        &state,
        quote.id,
        UpdateQuoteRequest {
            notes: Some("Cliente pediu urgência".into()),
            ..Default::default()
        },
    )
    .await?
    .expect("quote exists");
    assert_eq!(noted.notes.as_deref(), Some("Cliente pediu urgência"));
    assert_eq!(noted.items, quote.items);
    assert_eq!(noted.total_quantity, quote.total_quantity);
    assert_eq!(noted.unit_price, quote.unit_price);
    assert_eq!(noted.total_price, quote.total_price);
    assert_eq!(noted.status, quote.status);

    // Prices that do not fit the money columns are rejected up front.
    let overflow = quote_service::create_quote(
        &state,
        quote_request(client.id, seller.id, Decimal::MAX),
    )
    .await;
    assert!(matches!(overflow, Err(AppError::BadRequest(_))));
    let overflow = quote_service::update_quote(
        &state,
        quote.id,
        UpdateQuoteRequest {
            unit_price: Some(Decimal::new(10_000_000, 0)),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(overflow, Err(AppError::BadRequest(_))));

    // Budget defaults and numbering
    let budget = create_budget(&state, quote.id, client.id, None).await?;
    assert_eq!(budget.budget_number, "ORC-0001");
    assert_eq!(budget.down_payment_percent, 50);
    assert_eq!(budget.down_payment_value, Decimal::new(62500, 2));
    assert_eq!(budget.pix_key, "11998896725");
    assert_eq!(budget.status, BudgetStatus::Draft);
    assert!(budget.valid_until > budget.created_at);

    let duplicate = create_budget(&state, quote.id, client.id, Some("ORC-0001".into())).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    for total in [Decimal::new(100_000_000, 0), Decimal::MAX] {
        let mut request = budget_request(quote.id, client.id);
        request.total_value = total;
        let oversized = budget_service::create_budget(&state, request).await;
        assert!(matches!(oversized, Err(AppError::BadRequest(_))));
    }
    let oversized = budget_service::update_budget(
        &state,
        budget.id,
        UpdateBudgetRequest {
            total_value: Some(Decimal::MAX),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(oversized, Err(AppError::BadRequest(_))));

    let sent = budget_service::update_budget(
        &state,
        budget.id,
        UpdateBudgetRequest {
            status: Some(BudgetStatus::Sent),
            ..Default::default()
        },
    )
    .await?
    .expect("budget exists");
    assert!(sent.sent_at.is_some());
    assert_eq!(sent.total_value, budget.total_value);
    let pending = budget_service::list_budgets(&state, Some(BudgetStatus::Sent)).await?;
    assert_eq!(pending.len(), 1);

    // Orders
    let order = create_order(&state, &budget, supplier.id, None).await?;
    assert!(order.order_number.starts_with("PED-"));
    assert!(order.order_number.ends_with("-001"));
    assert_eq!(order.progress, 0);

    let duplicate =
        create_order(&state, &budget, supplier.id, Some(order.order_number.clone())).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let bad_progress = order_service::update_order(
        &state,
        order.id,
        UpdateOrderRequest {
            progress: Some(101),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(bad_progress, Err(AppError::BadRequest(_))));

    let mut request = order_request(&budget, supplier.id);
    request.total_value = Decimal::MAX;
    let oversized = order_service::create_order(&state, request).await;
    assert!(matches!(oversized, Err(AppError::BadRequest(_))));

    let delivered = order_service::update_order(
        &state,
        order.id,
        UpdateOrderRequest {
            status: Some(OrderStatus::Delivered),
            progress: Some(100),
            ..Default::default()
        },
    )
    .await?
    .expect("order exists");
    assert!(delivered.delivered_at.is_some());

    // Payments
    let txn = transaction_service::create_transaction(
        &state,
        order.id,
        CreateTransactionRequest {
            payment_method: PaymentMethod::Pix,
            amount: Decimal::new(62500, 2),
            status: None,
            notes: None,
        },
    )
    .await?;
    let payments = transaction_service::list_transactions(&state, order.id).await?;
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].id, txn.id);

    let orphan = transaction_service::create_transaction(
        &state,
        order.id + 1000,
        CreateTransactionRequest {
            payment_method: PaymentMethod::Boleto,
            amount: Decimal::ONE,
            status: None,
            notes: None,
        },
    )
    .await;
    assert!(matches!(orphan, Err(AppError::Conflict(_))));

    let oversized = transaction_service::create_transaction(
        &state,
        order.id,
        CreateTransactionRequest {
            payment_method: PaymentMethod::Pix,
            amount: Decimal::MAX,
            status: None,
            notes: None,
        },
    )
    .await;
    assert!(matches!(oversized, Err(AppError::BadRequest(_))));

    // Dashboard after delivery
    let metrics = dashboard_service::metrics(&state).await?;
    assert_eq!(metrics.total_revenue, Decimal::new(125000, 2));
    assert_eq!(metrics.average_ticket, Decimal::new(125000, 2));
    assert_eq!(metrics.completed_orders, 1);
    assert_eq!(metrics.pending_budgets, 1);

    let overview = dashboard_service::overview(&state).await?;
    assert_eq!(overview.recent_orders.len(), 1);
    assert_eq!(overview.recent_budgets.len(), 1);

    // Five more quote -> budget -> order chains
    let mut quotes = vec![quote.clone()];
    let mut budgets = vec![budget.clone()];
    let mut orders = vec![order.clone()];
    for _ in 0..5 {
        let quote = quote_service::create_quote(
            &state,
            quote_request(client.id, seller.id, Decimal::new(2500, 2)),
        )
        .await?;
        let budget = create_budget(&state, quote.id, client.id, None).await?;
        orders.push(create_order(&state, &budget, supplier.id, None).await?);
        budgets.push(budget);
        quotes.push(quote);
    }

    // Lists are newest first.
    let ids = |rows: Vec<i32>| rows.into_iter().rev().collect::<Vec<_>>();
    let listed = quote_service::list_quotes(&state, None).await?;
    assert_eq!(
        listed.iter().map(|q| q.id).collect::<Vec<_>>(),
        ids(quotes.iter().map(|q| q.id).collect())
    );
    let listed = budget_service::list_budgets(&state, None).await?;
    assert_eq!(
        listed.iter().map(|b| b.id).collect::<Vec<_>>(),
        ids(budgets.iter().map(|b| b.id).collect())
    );
    let listed = order_service::list_orders(&state, None).await?;
    assert_eq!(
        listed.iter().map(|o| o.id).collect::<Vec<_>>(),
        ids(orders.iter().map(|o| o.id).collect())
    );

    // The overview keeps only the five most recent rows.
    let overview = dashboard_service::overview(&state).await?;
    assert_eq!(
        overview.recent_orders.iter().map(|o| o.id).collect::<Vec<_>>(),
        ids(orders[1..].iter().map(|o| o.id).collect())
    );
    assert_eq!(
        overview.recent_budgets.iter().map(|b| b.id).collect::<Vec<_>>(),
        ids(budgets[1..].iter().map(|b| b.id).collect())
    );
    assert_eq!(overview.metrics.completed_orders, 1);
    assert_eq!(overview.metrics.pending_budgets, 1);

    // Delete
    let last_order = orders.pop().expect("order created above");
    order_service::delete_order(&state, last_order.id).await?;
    assert!(order_service::get_order(&state, last_order.id).await?.is_none());
    let last_budget = budgets.pop().expect("budget created above");
    budget_service::delete_budget(&state, last_budget.id).await?;
    assert!(budget_service::get_budget(&state, last_budget.id).await?.is_none());
    let last_quote = quotes.pop().expect("quote created above");
    quote_service::delete_quote(&state, last_quote.id).await?;
    assert!(quote_service::get_quote(&state, last_quote.id).await?.is_none());

    transaction_service::delete_transaction(&state, txn.id).await?;
    assert!(transaction_service::get_transaction(&state, txn.id).await?.is_none());
    client_service::delete_client(&state, second.id).await?;
    assert!(client_service::get_client(&state, second.id).await?.is_none());

    // Referenced rows are protected by foreign keys.
    let blocked = client_service::delete_client(&state, client.id).await;
    assert!(matches!(blocked, Err(AppError::Conflict(_))));

    Ok(())
}

// Products and prints, including the JSON list columns.
async fn catalog_flow(state: &AppState) -> anyhow::Result<Product> {
    let product = product_service::create_product(
        state,
        product_request("Camiseta Básica", &[" pp ", "p", "M", "g"]),
    )
    .await?;
    assert_eq!(product.sizes, vec!["PP", "P", "M", "G"]);
    assert_eq!(product.stock, 0);
    assert!(product.active);
    let fetched = product_service::get_product(state, product.id).await?;
    assert_eq!(fetched.as_ref(), Some(&product));

    let restocked = product_service::update_product(
        state,
        product.id,
        UpdateProductRequest {
            stock: Some(120),
            ..Default::default()
        },
    )
    .await?
    .expect("product exists");
    assert_eq!(restocked.stock, 120);
    assert_eq!(restocked.sizes, product.sizes);
    assert_eq!(restocked.base_price, product.base_price);
    assert_eq!(restocked.name, product.name);
    assert_eq!(restocked.fabric, product.fabric);

    let duplicate_sizes =
        product_service::create_product(state, product_request("Polo", &["p", "P"])).await;
    assert!(matches!(duplicate_sizes, Err(AppError::BadRequest(_))));

    let mut overpriced = product_request("Jaqueta", &["M"]);
    overpriced.base_price = Some(Decimal::new(100_000_000_000, 0));
    let overpriced = product_service::create_product(state, overpriced).await;
    assert!(matches!(overpriced, Err(AppError::BadRequest(_))));
    let overpriced = product_service::update_product(
        state,
        product.id,
        UpdateProductRequest {
            base_price: Some(Decimal::MAX),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(overpriced, Err(AppError::BadRequest(_))));

    let polo = product_service::create_product(state, product_request("Polo", &["M", "G"])).await?;
    let listed = product_service::list_products(state).await?;
    assert_eq!(
        listed.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![polo.id, product.id]
    );
    product_service::delete_product(state, polo.id).await?;
    assert!(product_service::get_product(state, polo.id).await?.is_none());

    let print = print_service::create_print(
        state,
        CreatePrintRequest {
            name: "Logo Emunah".into(),
            description: Some("Logo oficial da marca".into()),
            file_url: None,
            colors: vec!["Preto".into(), "Branco".into()],
            positions: vec!["Peito".into(), "Costas".into()],
            technique: None,
            dimensions: Some("10x10cm".into()),
            active: None,
        },
    )
    .await?;
    assert_eq!(print.technique, Technique::Silk);
    assert_eq!(print.colors, vec!["Preto", "Branco"]);
    let fetched = print_service::get_print(state, print.id).await?;
    assert_eq!(fetched.as_ref(), Some(&print));

    let switched = print_service::update_print(
        state,
        print.id,
        UpdatePrintRequest {
            technique: Some(Technique::Dtf),
            ..Default::default()
        },
    )
    .await?
    .expect("print exists");
    assert_eq!(switched.technique, Technique::Dtf);
    assert_eq!(switched.colors, print.colors);
    assert_eq!(switched.positions, print.positions);
    assert_eq!(switched.dimensions, print.dimensions);

    print_service::delete_print(state, print.id).await?;
    assert!(print_service::get_print(state, print.id).await?.is_none());
    assert!(print_service::list_prints(state).await?.is_empty());

    Ok(product)
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE transactions, orders, budgets, quotes, prints, products, suppliers, clients, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    let config = AppConfig {
        database_url: database_url.to_string(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: "flow-test-secret".into(),
        shop_pix_key: "11998896725".into(),
        budget_validity_days: 7,
    };
    Ok(AppState::new(orm, config))
}

fn item(grid: &[(&str, i32)]) -> QuoteItem {
    QuoteItem {
        product_id: 1,
        print_id: None,
        size_grid: grid
            .iter()
            .map(|(size, qty)| (size.to_string(), *qty))
            .collect::<BTreeMap<_, _>>(),
        position: None,
        technique: None,
    }
}

fn product_request(name: &str, sizes: &[&str]) -> CreateProductRequest {
    CreateProductRequest {
        name: name.into(),
        model: "Gola redonda".into(),
        fabric: "Algodão".into(),
        color: "Branco".into(),
        sizes: sizes.iter().map(|s| s.to_string()).collect(),
        base_price: Some(Decimal::new(2590, 2)),
        stock: None,
        image_url: None,
        active: None,
    }
}

fn quote_request(client_id: i32, seller_id: i32, unit_price: Decimal) -> CreateQuoteRequest {
    CreateQuoteRequest {
        client_id,
        seller_id,
        supplier_id: None,
        product_id: None,
        print_id: None,
        items: vec![item(&[("M", 10), ("G", 10)])],
        status: None,
        unit_price: Some(unit_price),
        total_price: None,
        delivery_days: None,
        supplier_response: None,
        notes: None,
    }
}

async fn create_client(state: &AppState, name: &str) -> Result<Client, AppError> {
    client_service::create_client(
        state,
        CreateClientRequest {
            name: name.into(),
            cpf_cnpj: None,
            email: Some("contato@cliente.com".into()),
            phone: None,
            address: None,
            city: Some("São Paulo".into()),
            state: Some("SP".into()),
            zip_code: None,
        },
    )
    .await
}

fn budget_request(quote_id: i32, client_id: i32) -> CreateBudgetRequest {
    CreateBudgetRequest {
        quote_id,
        client_id,
        budget_number: None,
        total_value: Decimal::new(125000, 2),
        down_payment_percent: None,
        down_payment_value: None,
        pix_key: None,
        status: None,
        valid_until: None,
        pdf_url: None,
        notes: None,
    }
}

async fn create_budget(
    state: &AppState,
    quote_id: i32,
    client_id: i32,
    number: Option<String>,
) -> Result<Budget, AppError> {
    let request = CreateBudgetRequest {
        budget_number: number,
        ..budget_request(quote_id, client_id)
    };
    budget_service::create_budget(state, request).await
}

fn order_request(budget: &Budget, supplier_id: i32) -> CreateOrderRequest {
    CreateOrderRequest {
        budget_id: budget.id,
        client_id: budget.client_id,
        supplier_id,
        order_number: None,
        status: None,
        production_step: None,
        progress: None,
        total_value: budget.total_value,
        delivery_date: None,
        tracking_code: None,
        notes: None,
    }
}

async fn create_order(
    state: &AppState,
    budget: &Budget,
    supplier_id: i32,
    number: Option<String>,
) -> Result<Order, AppError> {
    let request = CreateOrderRequest {
        order_number: number,
        ..order_request(budget, supplier_id)
    };
    order_service::create_order(state, request).await
}
