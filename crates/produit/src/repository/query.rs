use crate::{
    abstract_trait::produit::repository::ProduitQueryRepositoryTrait, model::Produit,
    repository::sort::resolve_sort,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, domain::requests::Pageable, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProduitQueryRepository {
    db: ConnectionPool,
}

impl ProduitQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProduitQueryRepositoryTrait for ProduitQueryRepository {
    async fn find_all_by(&self, pageable: &Pageable) -> Result<Vec<Produit>, RepositoryError> {
        info!(
            "🔍 Fetching produits page {} size {} sort {:?}",
            pageable.page, pageable.size, pageable.sort
        );

        let (column, direction) = resolve_sort(pageable)?;
        let tiebreak = if column == "id" { "" } else { ", id ASC" };

        // column comes from a fixed whitelist, never from the request text
        let sql = format!(
            "SELECT id, description, nom, prix FROM produit ORDER BY {column} {}{tiebreak} LIMIT $1 OFFSET $2",
            direction.as_sql()
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let produits = sqlx::query_as::<_, Produit>(&sql)
            .bind(pageable.limit())
            .bind(pageable.offset())
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch produits: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(produits)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Produit>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let produit = sqlx::query_as::<_, Produit>(
            "SELECT id, description, nom, prix FROM produit WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch produit {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(produit)
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM produit WHERE id = $1)")
                .bind(id)
                .fetch_one(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        Ok(exists)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM produit")
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(total)
    }
}
