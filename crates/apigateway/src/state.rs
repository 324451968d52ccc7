use crate::{di::DependenciesInject, entity_routes::entity_routes};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynJwtService,
    config::{Config, ConnectionManager, JwtConfig},
    routing::RouteTable,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Application name used as prefix of the alert headers.
#[derive(Debug, Clone)]
pub struct AppName(pub Arc<str>);

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub app_name: AppName,
    pub route_table: Arc<RouteTable>,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let mut registry = Registry::default();

        let di_container = if config.uses_in_memory_storage() {
            info!("Using in-memory produit storage");
            DependenciesInject::in_memory(&mut registry)
        } else {
            let pool = ConnectionManager::new_pool(&config.database_url)
                .await
                .context("Failed to connect to database")?;

            if config.run_migrations {
                produit::repository::run_migrations(&pool)
                    .await
                    .context("Failed to run database migrations")?;
            }

            DependenciesInject::with_pool(pool, &mut registry)
        };

        Ok(Self::from_parts(
            &config.jwt_secret,
            &config.app_name,
            di_container,
            registry,
        ))
    }

    /// State backed by the in-memory repository.
    pub fn in_memory(jwt_secret: &str, app_name: &str) -> Self {
        let mut registry = Registry::default();
        let di_container = DependenciesInject::in_memory(&mut registry);

        Self::from_parts(jwt_secret, app_name, di_container, registry)
    }

    fn from_parts(
        jwt_secret: &str,
        app_name: &str,
        di_container: DependenciesInject,
        registry: Registry,
    ) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(jwt_secret)) as DynJwtService;

        Self {
            jwt_config,
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            app_name: AppName(Arc::from(app_name)),
            route_table: Arc::new(entity_routes()),
        }
    }
}
