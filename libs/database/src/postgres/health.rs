use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Run `query` and fail unless the server accepts it
///
/// ```ignore
/// use database::postgres::check_health_with_query;
///
/// // Fail fast at startup when the table was never created
/// check_health_with_query(&db, "SELECT 1 FROM item LIMIT 1").await?;
/// ```
pub async fn check_health_with_query(
    db: &DatabaseConnection,
    query: &str,
) -> Result<(), DatabaseError> {
    debug!(query, "Running PostgreSQL health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, query.to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("query '{}' failed: {}", query, e))
    })?;

    debug!("PostgreSQL health check passed");
    Ok(())
}
