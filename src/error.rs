use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrator(#[from] sqlx_migrator::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown migration: {0}")]
    UnknownMigration(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
