use crate::model::Produit;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProduitCommandRepository = Arc<dyn ProduitCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProduitCommandRepositoryTrait {
    async fn insert(&self, produit: &Produit) -> Result<Produit, RepositoryError>;
    /// Overwrites every column of an existing row; `NotFound` when the id is gone.
    async fn update(&self, produit: &Produit) -> Result<Produit, RepositoryError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
