use sqlx::Error as SqlxError;
use sqlx::migrate::MigrateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Migration error: {0}")]
    Migrate(#[from] MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Invalid sort property: {0}")]
    InvalidSort(String),

    #[error("Custom: {0}")]
    Custom(String),
}
