use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    /// PIX key printed on budgets when none is given.
    pub shop_pix_key: String,
    pub budget_validity_days: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET is not set"))?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let shop_pix_key =
            env::var("SHOP_PIX_KEY").unwrap_or_else(|_| DEFAULT_PIX_KEY.to_string());
        let budget_validity_days = env::var("BUDGET_VALIDITY_DAYS")
            .ok()
            .and_then(|d| d.parse::<i64>().ok())
            .filter(|d| *d > 0)
            .unwrap_or(DEFAULT_BUDGET_VALIDITY_DAYS);
        Ok(Self {
            port,
            database_url,
            host,
            jwt_secret,
            shop_pix_key,
            budget_validity_days,
        })
    }
}

pub const DEFAULT_PIX_KEY: &str = "11998896725";
pub const DEFAULT_BUDGET_VALIDITY_DAYS: i64 = 7;
