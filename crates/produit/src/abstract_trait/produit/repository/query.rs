use crate::model::Produit;
use async_trait::async_trait;
use shared::{domain::requests::Pageable, errors::RepositoryError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynProduitQueryRepository = Arc<dyn ProduitQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProduitQueryRepositoryTrait {
    async fn find_all_by(&self, pageable: &Pageable) -> Result<Vec<Produit>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Produit>, RepositoryError>;
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
}
