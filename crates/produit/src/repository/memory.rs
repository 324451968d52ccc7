use crate::{
    abstract_trait::produit::repository::{
        ProduitCommandRepositoryTrait, ProduitQueryRepositoryTrait,
    },
    model::Produit,
    repository::sort::resolve_sort,
};
use async_trait::async_trait;
use shared::{
    domain::requests::{Direction, Pageable},
    errors::RepositoryError,
};
use std::{cmp::Ordering, collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Process-local produit store used by `memory:` database URLs and by tests.
///
/// Clones share the same underlying map, so one instance can serve as both the
/// command and the query repository.
#[derive(Clone, Default)]
pub struct InMemoryProduitRepository {
    rows: Arc<RwLock<BTreeMap<Uuid, Produit>>>,
}

impl InMemoryProduitRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare_option<T>(a: &Option<T>, b: &Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    // nulls sort after values, as Postgres does for ASC
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_by(column: &str, a: &Produit, b: &Produit) -> Ordering {
    match column {
        "description" => compare_option(&a.description, &b.description, |x, y| x.cmp(y)),
        "nom" => compare_option(&a.nom, &b.nom, |x, y| x.cmp(y)),
        "prix" => compare_option(&a.prix, &b.prix, |x, y| x.total_cmp(y)),
        _ => a.id.cmp(&b.id),
    }
}

#[async_trait]
impl ProduitCommandRepositoryTrait for InMemoryProduitRepository {
    async fn insert(&self, produit: &Produit) -> Result<Produit, RepositoryError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&produit.id) {
            return Err(RepositoryError::Custom(format!(
                "duplicate key value for produit {}",
                produit.id
            )));
        }
        rows.insert(produit.id, produit.clone());
        debug!("Inserted produit {} in memory", produit.id);
        Ok(produit.clone())
    }

    async fn update(&self, produit: &Produit) -> Result<Produit, RepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&produit.id).ok_or(RepositoryError::NotFound)?;
        *row = produit.clone();
        debug!("Updated produit {} in memory", produit.id);
        Ok(produit.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.rows.write().await.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.rows.write().await.clear();
        Ok(())
    }
}

#[async_trait]
impl ProduitQueryRepositoryTrait for InMemoryProduitRepository {
    async fn find_all_by(&self, pageable: &Pageable) -> Result<Vec<Produit>, RepositoryError> {
        let (column, direction) = resolve_sort(pageable)?;

        let mut produits: Vec<Produit> = self.rows.read().await.values().cloned().collect();
        produits.sort_by(|a, b| {
            let primary = match direction {
                Direction::Asc => compare_by(column, a, b),
                Direction::Desc => compare_by(column, b, a),
            };
            primary.then_with(|| a.id.cmp(&b.id))
        });

        Ok(produits
            .into_iter()
            .skip(pageable.offset() as usize)
            .take(pageable.limit() as usize)
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Produit>, RepositoryError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.rows.read().await.contains_key(&id))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.rows.read().await.len() as i64)
    }
}
