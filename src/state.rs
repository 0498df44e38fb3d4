use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

use crate::config::AppConfig;
use crate::providers::kling::KlingProvider;
use crate::providers::mock::{MockImageProvider, MockVideoProvider};
use crate::providers::replicate::ReplicateProvider;
use crate::providers::{ImageProvider, VideoProvider};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
    pub image_provider: Arc<dyn ImageProvider>,
    pub video_provider: Arc<dyn VideoProvider>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let http = reqwest::Client::new();
        let timeout = Duration::from_secs(config.providers.timeout_secs);

        // Provider variant is fixed at startup by credential presence;
        // handlers only ever see the trait.
        let image_provider: Arc<dyn ImageProvider> =
            match config.providers.replicate_api_key.clone() {
                Some(key) => {
                    info!("image provider: replicate");
                    Arc::new(ReplicateProvider::new(http.clone(), key, timeout))
                }
                None => {
                    info!("image provider: mock (REPLICATE_API_KEY not set)");
                    Arc::new(MockImageProvider)
                }
            };

        let video_provider: Arc<dyn VideoProvider> = match (
            config.providers.kling_access_key.clone(),
            config.providers.kling_secret_key.clone(),
        ) {
            (Some(access), Some(secret)) => {
                info!("video provider: kling");
                Arc::new(KlingProvider::new(
                    http.clone(),
                    access,
                    secret,
                    Duration::from_secs(60),
                ))
            }
            _ => {
                info!("video provider: mock (KLING_ACCESS_KEY/KLING_SECRET_KEY not set)");
                Arc::new(MockVideoProvider)
            }
        };

        Ok(Self {
            db,
            config,
            http,
            image_provider,
            video_provider,
        })
    }

    pub fn from_parts(
        db: SqlitePool,
        config: Arc<AppConfig>,
        http: reqwest::Client,
        image_provider: Arc<dyn ImageProvider>,
        video_provider: Arc<dyn VideoProvider>,
    ) -> Self {
        Self {
            db,
            config,
            http,
            image_provider,
            video_provider,
        }
    }

    /// In-memory state for tests: single-connection SQLite pool (so every
    /// query sees the same in-memory database) and mock providers.
    pub fn fake() -> Self {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_lazy("sqlite::memory:")
            .expect("lazy pool ok");

        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            jwt: crate::config::JwtConfig {
                secret: "test-secret".into(),
                ttl_days: 30,
            },
            providers: crate::config::ProviderConfig {
                replicate_api_key: None,
                kling_access_key: None,
                kling_secret_key: None,
                timeout_secs: 1,
            },
        });

        Self {
            db,
            config,
            http: reqwest::Client::new(),
            image_provider: Arc::new(MockImageProvider),
            video_provider: Arc::new(MockVideoProvider),
        }
    }
}
