use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_days: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub replicate_api_key: Option<String>,
    pub kling_access_key: Option<String>,
    pub kling_secret_key: Option<String>,
    /// Upper bound for a single provider call, seconds. No retries.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    pub providers: ProviderConfig,
}

impl AppConfig {
    /// Everything is optional with demo-mode defaults: without any env the
    /// server runs against a local SQLite file and mock providers.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://adflow.db?mode=rwc".into());
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);

        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".into()),
            ttl_days: std::env::var("JWT_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
        };

        let providers = ProviderConfig {
            replicate_api_key: std::env::var("REPLICATE_API_KEY").ok(),
            kling_access_key: std::env::var("KLING_ACCESS_KEY").ok(),
            kling_secret_key: std::env::var("KLING_SECRET_KEY").ok(),
            timeout_secs: std::env::var("PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(180),
        };

        Ok(Self {
            database_url,
            host,
            port,
            jwt,
            providers,
        })
    }
}
