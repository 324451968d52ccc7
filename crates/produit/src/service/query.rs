use crate::{
    abstract_trait::produit::{
        repository::DynProduitQueryRepository, service::ProduitQueryServiceTrait,
    },
    model::Produit,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::requests::Pageable,
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct ProduitQueryService {
    query: DynProduitQueryRepository,
    metrics: Metrics,
}

impl ProduitQueryService {
    pub fn new(query: DynProduitQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("produit_query", registry);

        Self { query, metrics }
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
}

#[async_trait]
impl ProduitQueryServiceTrait for ProduitQueryService {
    async fn find_all(&self, pageable: &Pageable) -> Result<Vec<Produit>, ServiceError> {
        debug!("Request to get all Produits : {:?}", pageable);
        let start = Instant::now();

        let result = self
            .query
            .find_all_by(pageable)
            .await
            .map_err(ServiceError::from);

        self.complete(start, Method::Get, "produit_find_all", &result);
        result
    }

    async fn count_all(&self) -> Result<i64, ServiceError> {
        let start = Instant::now();
        let result = self.query.count().await.map_err(ServiceError::from);

        self.complete(start, Method::Get, "produit_count", &result);
        result
    }

    async fn find_one(&self, id: Uuid) -> Result<Option<Produit>, ServiceError> {
        debug!("Request to get Produit : {}", id);
        let start = Instant::now();

        let result = self.query.find_by_id(id).await.map_err(ServiceError::from);

        self.complete(start, Method::Get, "produit_find_one", &result);
        result
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ServiceError> {
        self.query.exists_by_id(id).await.map_err(ServiceError::from)
    }
}
