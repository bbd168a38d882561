#![cfg(test)]

use std::sync::Arc;

use rstest::fixture;

use crate::infra::config::{AppConfig, ApplicationConfig, DatabaseConfig, LoggerConfig};
use crate::infra::db::init_db;
use crate::infra::state::AppState;
use crate::tests::helpers::clear_tables;

#[fixture]
pub fn test_config() -> AppConfig {
    AppConfig {
        db: DatabaseConfig {
            url: std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set"),
            max_connections: 5,
        },
        logger: LoggerConfig {
            log_path: "./test.log".to_string(),
        },
        application: ApplicationConfig {
            allow_origins: vec!["*".to_string()],
            address: std::env::var("TEST_APP_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            base_path: "/api".to_string(),
        },
    }
}

/// Connects, migrates and empties every table.
#[fixture]
pub async fn init_test_app_state(test_config: AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(&test_config).await?;
    clear_tables(&pool).await;

    Ok(AppState {
        pool,
        config: Arc::new(test_config),
    })
}
