//! Configuration for the item service

use core_config::{ConfigError, FromEnv, env_flag, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Which ItemRepository implementation the service runs on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RepositoryKind {
    /// Process-local store, lost on restart
    Memory,
    /// Hand-written SQL statements over PostgreSQL
    Sql,
    /// SeaORM entity and query builder over PostgreSQL
    Orm,
}

impl RepositoryKind {
    pub fn needs_database(self) -> bool {
        !matches!(self, RepositoryKind::Memory)
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub repository: RepositoryKind,
    /// Present exactly when `repository` needs a database
    pub database: Option<PostgresConfig>,
    pub seed_test_data: bool,
}

impl FromEnv for Config {
    /// - `ITEM_REPOSITORY`: memory (default), sql or orm
    /// - `DATABASE_URL` and `DB_*`: read only for sql and orm
    /// - `SEED_TEST_DATA`: defaults to true outside production
    fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let repository = env_parse("ITEM_REPOSITORY", RepositoryKind::Memory)?;

        let database = if repository.needs_database() {
            Some(PostgresConfig::from_env()?)
        } else {
            None
        };

        let seed_test_data = env_flag("SEED_TEST_DATA", environment.is_development())?;

        Ok(Self {
            environment,
            server,
            repository,
            database,
            seed_test_data,
        })
    }
}
