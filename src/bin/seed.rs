use emunah_api::{
    config::AppConfig,
    db::{create_orm_conn, create_pool, run_migrations},
    services::auth_service::hash_password,
};
use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    // Ensure migrations are applied.
    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let pool = create_pool(&config.database_url).await?;
    let (users,): (i64,) = sqlx::query_as("SELECT count(*) FROM users")
        .fetch_one(&pool)
        .await?;
    if users > 0 {
        println!("Users already present, skipping seed");
        return Ok(());
    }

    let admin_email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@emunah.com".to_string());
    let (admin_password, generated) = match std::env::var("ADMIN_PASSWORD") {
        Ok(password) if !password.is_empty() => (password, false),
        _ => (Uuid::new_v4().simple().to_string(), true),
    };

    let mut tx = pool.begin().await?;
    let admin_id = seed_admin(&mut tx, &admin_email, &admin_password).await?;
    seed_suppliers(&mut tx).await?;
    seed_prints(&mut tx).await?;
    seed_clients(&mut tx).await?;
    tx.commit().await?;

    println!("Admin user created: {admin_email} (id {admin_id})");
    if generated {
        println!("Generated password: {admin_password}");
        println!("Set ADMIN_PASSWORD to choose the admin password instead.");
    }
    println!("Seed completed");
    Ok(())
}

async fn seed_admin(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
) -> anyhow::Result<i32> {
    let password_hash = hash_password(password)?;
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO users (name, email, password_hash, role, phone)
        VALUES ($1, $2, $3, 'ADMIN', '')
        RETURNING id
        "#,
    )
    .bind("Administrador")
    .bind(email.trim().to_lowercase())
    .bind(password_hash)
    .fetch_one(&mut **tx)
    .await?;
    Ok(id)
}

async fn seed_suppliers(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<()> {
    let suppliers = [
        (
            "Confecções Premium",
            "João Silva",
            "contato@premium.com",
            "11999887766",
            7,
            Decimal::new(48, 1),
            "PIX",
        ),
        (
            "Têxtil Brasil",
            "Maria Santos",
            "maria@textilbrasil.com",
            "11988776655",
            10,
            Decimal::new(45, 1),
            "Boleto",
        ),
    ];

    for (name, contact, email, phone, days, rating, payment) in suppliers {
        sqlx::query(
            r#"
            INSERT INTO suppliers
                (name, contact_name, email, phone, production_time_days, rating, payment_method)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(name)
        .bind(contact)
        .bind(email)
        .bind(phone)
        .bind(days)
        .bind(rating)
        .bind(payment)
        .execute(&mut **tx)
        .await?;
    }

    println!("Seeded suppliers");
    Ok(())
}

async fn seed_prints(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<()> {
    let prints = [
        (
            "Logo Emunah",
            "Logo oficial da marca",
            vec!["Preto", "Branco"],
            vec!["Peito", "Costas"],
            "silk",
            "10x10cm",
        ),
        (
            "Estampa Geométrica",
            "Design geométrico moderno",
            vec!["Azul", "Vermelho", "Amarelo"],
            vec!["Costas", "Manga"],
            "dtf",
            "30x40cm",
        ),
    ];

    for (name, description, colors, positions, technique, dimensions) in prints {
        sqlx::query(
            r#"
            INSERT INTO prints (name, description, colors, positions, technique, dimensions, active)
            VALUES ($1, $2, $3::jsonb, $4::jsonb, $5, $6, TRUE)
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(serde_json::to_string(&colors)?)
        .bind(serde_json::to_string(&positions)?)
        .bind(technique)
        .bind(dimensions)
        .execute(&mut **tx)
        .await?;
    }

    println!("Seeded prints");
    Ok(())
}

async fn seed_clients(tx: &mut Transaction<'_, Postgres>) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO clients (name, cpf_cnpj, email, phone, city, state)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind("Tech Solutions LTDA")
    .bind("12.345.678/0001-90")
    .bind("contato@techsolutions.com")
    .bind("11987654321")
    .bind("São Paulo")
    .bind("SP")
    .execute(&mut **tx)
    .await?;

    println!("Seeded clients");
    Ok(())
}
