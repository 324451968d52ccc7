use crate::model::Produit;
use async_trait::async_trait;
use shared::{domain::requests::Pageable, errors::ServiceError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynProduitQueryService = Arc<dyn ProduitQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProduitQueryServiceTrait {
    async fn find_all(&self, pageable: &Pageable) -> Result<Vec<Produit>, ServiceError>;
    async fn count_all(&self) -> Result<i64, ServiceError>;
    async fn find_one(&self, id: Uuid) -> Result<Option<Produit>, ServiceError>;
    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError>;
}
