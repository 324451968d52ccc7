use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::info;

pub type ConnectionPool = PgPool;

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ConnectionManager;

impl ConnectionManager {
    fn options() -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
    }

    /// Connects eagerly so a wrong `DATABASE_URL` fails at startup.
    pub async fn new_pool(database_url: &str) -> anyhow::Result<ConnectionPool> {
        let pool = Self::options()
            .connect(database_url)
            .await
            .context("Failed to create database connection pool")?;

        info!("🗄️ Connected to Postgres (max {MAX_CONNECTIONS} connections)");
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_options_are_bounded() {
        let options = ConnectionManager::options();
        assert_eq!(options.get_max_connections(), MAX_CONNECTIONS);
        assert_eq!(options.get_acquire_timeout(), ACQUIRE_TIMEOUT);
    }

    #[tokio::test]
    async fn malformed_url_is_reported_with_context() {
        let err = ConnectionManager::new_pool("not a database url")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to create database connection pool"));
    }
}
