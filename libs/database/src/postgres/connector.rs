use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Open a connection pool described by `config`
pub async fn connect(config: PostgresConfig) -> DatabaseResult<DatabaseConnection> {
    let db = Database::connect(config.into_connect_options()).await?;
    info!("Connected to PostgreSQL");
    Ok(db)
}

/// Open a connection pool, retrying with backoff while PostgreSQL is not
/// reachable yet (common while containers start together)
///
/// ```ignore
/// use database::postgres::{PostgresConfig, connect_with_retry};
/// use database::common::RetryConfig;
///
/// let config = PostgresConfig::from_env()?;
/// let db = connect_with_retry(config, RetryConfig::new().with_max_retries(5)).await?;
/// ```
pub async fn connect_with_retry(
    config: PostgresConfig,
    retry_config: RetryConfig,
) -> DatabaseResult<DatabaseConnection> {
    let attempts = retry_config.max_retries + 1;
    retry_with_backoff(|| connect(config.clone()), retry_config)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(format!("gave up after {} attempts: {}", attempts, e)))
}
