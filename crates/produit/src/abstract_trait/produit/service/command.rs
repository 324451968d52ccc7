use crate::model::{NewProduit, Produit};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProduitCommandService = Arc<dyn ProduitCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProduitCommandServiceTrait {
    /// Persists a new produit under a freshly assigned id.
    async fn save(&self, produit: NewProduit) -> Result<Produit, ServiceError>;
    /// Replaces every field of an existing produit.
    async fn update(&self, produit: Produit) -> Result<Produit, ServiceError>;
    /// Copies the non-null fields of `produit` onto the stored one.
    ///
    /// Returns `None` when no produit has that id.
    async fn partial_update(&self, produit: Produit) -> Result<Option<Produit>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}
