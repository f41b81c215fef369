//! PostgreSQL connection pool setup and health checks (SeaORM)

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{connect, connect_with_retry};
pub use health::check_health_with_query;

// Re-export SeaORM types for convenience
pub use sea_orm::{DatabaseConnection, DbErr};
