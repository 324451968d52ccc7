use produit::{
    abstract_trait::produit::{
        repository::{DynProduitCommandRepository, DynProduitQueryRepository},
        service::{DynProduitCommandService, DynProduitQueryService},
    },
    repository::{InMemoryProduitRepository, ProduitCommandRepository, ProduitQueryRepository},
    service::{ProduitCommandService, ProduitQueryService},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub produit_command: DynProduitCommandService,
    pub produit_query: DynProduitQueryService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("produit_command", &"DynProduitCommandService")
            .field("produit_query", &"DynProduitQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(
        command_repo: DynProduitCommandRepository,
        query_repo: DynProduitQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        let produit_command: DynProduitCommandService = Arc::new(ProduitCommandService::new(
            command_repo,
            query_repo.clone(),
            registry,
        ));

        let produit_query: DynProduitQueryService =
            Arc::new(ProduitQueryService::new(query_repo, registry));

        Self {
            produit_command,
            produit_query,
        }
    }

    pub fn with_pool(pool: ConnectionPool, registry: &mut Registry) -> Self {
        let command_repo: DynProduitCommandRepository =
            Arc::new(ProduitCommandRepository::new(pool.clone()));
        let query_repo: DynProduitQueryRepository = Arc::new(ProduitQueryRepository::new(pool));

        Self::new(command_repo, query_repo, registry)
    }

    pub fn in_memory(registry: &mut Registry) -> Self {
        let repo = InMemoryProduitRepository::new();

        Self::new(Arc::new(repo.clone()), Arc::new(repo), registry)
    }
}
