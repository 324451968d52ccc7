use crate::{
    abstract_trait::produit::repository::ProduitCommandRepositoryTrait, model::Produit,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProduitCommandRepository {
    db: ConnectionPool,
}

impl ProduitCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProduitCommandRepositoryTrait for ProduitCommandRepository {
    async fn insert(&self, produit: &Produit) -> Result<Produit, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Produit>(
            r#"
            INSERT INTO produit (id, description, nom, prix)
            VALUES ($1, $2, $3, $4)
            RETURNING id, description, nom, prix
            "#,
        )
        .bind(produit.id)
        .bind(&produit.description)
        .bind(&produit.nom)
        .bind(produit.prix)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert produit {}: {:?}", produit.id, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Inserted produit {}", result.id);
        Ok(result)
    }

    async fn update(&self, produit: &Produit) -> Result<Produit, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Produit>(
            r#"
            UPDATE produit
            SET description = $2, nom = $3, prix = $4
            WHERE id = $1
            RETURNING id, description, nom, prix
            "#,
        )
        .bind(produit.id)
        .bind(&produit.description)
        .bind(&produit.nom)
        .bind(produit.prix)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update produit {}: {:?}", produit.id, err);
            RepositoryError::from(err)
        })?
        .ok_or_else(|| {
            error!("❌ Produit {} vanished before update", produit.id);
            RepositoryError::NotFound
        })?;

        info!("✅ Updated produit {}", result.id);
        Ok(result)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM produit WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete produit {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        info!("🗑️ Deleted produit {} ({} row)", id, result.rows_affected());
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM produit")
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete all produits: {:?}", err);
                RepositoryError::from(err)
            })?;

        info!("🗑️ Deleted {} produits", result.rows_affected());
        Ok(())
    }
}
