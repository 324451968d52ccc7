mod command;
mod memory;
mod query;
mod sort;

pub use self::command::ProduitCommandRepository;
pub use self::memory::InMemoryProduitRepository;
pub use self::query::ProduitQueryRepository;

use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::info;

/// Applies the embedded SQL migrations of this crate.
pub async fn run_migrations(pool: &ConnectionPool) -> Result<(), RepositoryError> {
    info!("Running produit migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
