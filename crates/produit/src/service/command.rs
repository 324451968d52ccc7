use crate::{
    abstract_trait::produit::{
        repository::{DynProduitCommandRepository, DynProduitQueryRepository},
        service::ProduitCommandServiceTrait,
    },
    model::{NewProduit, Produit},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProduitCommandService {
    command: DynProduitCommandRepository,
    query: DynProduitQueryRepository,
    metrics: Metrics,
}

impl ProduitCommandService {
    pub fn new(
        command: DynProduitCommandRepository,
        query: DynProduitQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("produit_command", registry);

        Self {
            command,
            query,
            metrics,
        }
    }

    fn complete<T>(
        &self,
        start: Instant,
        method: Method,
        operation: &str,
        result: &Result<T, ServiceError>,
    ) {
        let elapsed = start.elapsed().as_secs_f64();
        match result {
            Ok(_) => {
                info!("✅ {operation} completed in {elapsed:.4}s");
                self.metrics.record(method, Status::Success, elapsed);
            }
            Err(err) => {
                error!("❌ {operation} failed: {err}");
                self.metrics.record(method, Status::Error, elapsed);
            }
        }
    }

    async fn merge(&self, patch: Produit) -> Result<Option<Produit>, ServiceError> {
        let Some(mut existing) = self.query.find_by_id(patch.id).await? else {
            return Ok(None);
        };

        if let Some(description) = patch.description {
            existing.description = Some(description);
        }
        if let Some(nom) = patch.nom {
            existing.nom = Some(nom);
        }
        if let Some(prix) = patch.prix {
            existing.prix = Some(prix);
        }

        let saved = self.command.update(&existing).await?;
        Ok(Some(saved))
    }
}

#[async_trait]
impl ProduitCommandServiceTrait for ProduitCommandService {
    async fn save(&self, produit: NewProduit) -> Result<Produit, ServiceError> {
        debug!("Request to save Produit : {:?}", produit);
        let start = Instant::now();

        let produit = produit.into_persisted(Uuid::new_v4());
        let result = self
            .command
            .insert(&produit)
            .await
            .map_err(ServiceError::from);

        self.complete(start, Method::Post, "produit_save", &result);
        result
    }

    async fn update(&self, produit: Produit) -> Result<Produit, ServiceError> {
        debug!("Request to update Produit : {:?}", produit);
        let start = Instant::now();

        let result = self
            .command
            .update(&produit)
            .await
            .map_err(ServiceError::from);

        self.complete(start, Method::Put, "produit_update", &result);
        result
    }

    async fn partial_update(&self, produit: Produit) -> Result<Option<Produit>, ServiceError> {
        debug!("Request to partially update Produit : {:?}", produit);
        let start = Instant::now();

        let result = self.merge(produit).await;

        self.complete(start, Method::Patch, "produit_partial_update", &result);
        result
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        debug!("Request to delete Produit : {}", id);
        let start = Instant::now();

        let result = self.command.delete_by_id(id).await.map_err(ServiceError::from);

        self.complete(start, Method::Delete, "produit_delete", &result);
        result
    }
}
