use super::module::{RouteModule, split_segments};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, future::Future, pin::Pin, sync::Arc};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};
use utoipa::ToSchema;

pub type LoadChildrenFuture = Pin<Box<dyn Future<Output = anyhow::Result<RouteModule>> + Send>>;
pub type LoadChildren = Arc<dyn Fn() -> LoadChildrenFuture + Send + Sync>;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Failed to load child routes of '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteData {
    pub page_title: String,
}

impl RouteData {
    pub fn page_title(title: &str) -> Self {
        Self {
            page_title: title.to_string(),
        }
    }
}

pub struct Route {
    path: String,
    data: RouteData,
    load_children: LoadChildren,
    loaded: OnceCell<Arc<RouteModule>>,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("data", &self.data)
            .field("loaded", &self.loaded.initialized())
            .finish()
    }
}

impl Route {
    pub fn new<F, Fut>(path: &str, data: RouteData, load_children: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<RouteModule>> + Send + 'static,
    {
        Self {
            path: path.to_string(),
            data,
            load_children: Arc::new(move || Box::pin(load_children()) as LoadChildrenFuture),
            loaded: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn data(&self) -> &RouteData {
        &self.data
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Resolves the child module, invoking the loader only until it first succeeds.
    pub async fn load_children(&self) -> Result<Arc<RouteModule>, RouteError> {
        self.loaded
            .get_or_try_init(|| async {
                info!("Loading child routes of '{}'", self.path);
                (self.load_children)().await.map(Arc::new)
            })
            .await
            .cloned()
            .map_err(|err| {
                error!("❌ Failed to load child routes of '{}': {err:#}", self.path);
                RouteError::Load {
                    path: self.path.clone(),
                    source: err.into(),
                }
            })
    }
}

/// Outcome of a navigation: which entity page to show and with which parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRoute {
    pub path: String,
    pub page_title: String,
    pub view: String,
    pub params: BTreeMap<String, String>,
    pub default_sort: Option<String>,
    pub authenticated: bool,
}

#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.push(route);
        self
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Navigates to `url`, e.g. `produit/<id>/edit`.
    ///
    /// Returns `Ok(None)` when neither the table nor the loaded child module
    /// has a matching entry.
    pub async fn resolve(&self, url: &str) -> Result<Option<ResolvedRoute>, RouteError> {
        let url = url.split(['?', '#']).next().unwrap_or_default();
        let segments = split_segments(url);
        let Some((head, rest)) = segments.split_first() else {
            return Ok(None);
        };

        let Some(route) = self.find(head) else {
            debug!("No route registered for '{head}'");
            return Ok(None);
        };

        let module = route.load_children().await?;
        let rest = rest.join("/");

        Ok(module.match_path(&rest).map(|(child, params)| ResolvedRoute {
            path: route.path.clone(),
            page_title: route.data.page_title.clone(),
            view: child.view.clone(),
            params,
            default_sort: child.default_sort.clone(),
            authenticated: child.authenticated,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::ChildRoute;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_route(path: &str, calls: Arc<AtomicUsize>) -> Route {
        Route::new(path, RouteData::page_title("Things"), move || {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(RouteModule::new(vec![
                    ChildRoute::new("", "list").default_sort("id,asc"),
                    ChildRoute::new(":id/edit", "edit").authenticated(),
                ]))
            }
        })
    }

    #[tokio::test]
    async fn child_module_is_loaded_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let table = RouteTable::new().with_route(counting_route("thing", calls.clone()));

        assert!(!table.find("thing").unwrap().is_loaded());
        table.resolve("thing").await.unwrap();
        table.resolve("thing/42/edit").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(table.find("thing").unwrap().is_loaded());
    }

    #[tokio::test]
    async fn resolve_carries_title_view_and_params() {
        let table = RouteTable::new()
            .with_route(counting_route("thing", Arc::new(AtomicUsize::new(0))));

        let resolved = table.resolve("/thing/42/edit?x=1").await.unwrap().unwrap();
        assert_eq!(resolved.page_title, "Things");
        assert_eq!(resolved.view, "edit");
        assert_eq!(resolved.params.get("id").map(String::as_str), Some("42"));
        assert!(resolved.authenticated);
    }

    #[tokio::test]
    async fn unknown_paths_resolve_to_none() {
        let table = RouteTable::new()
            .with_route(counting_route("thing", Arc::new(AtomicUsize::new(0))));

        assert!(table.resolve("other").await.unwrap().is_none());
        assert!(table.resolve("thing/42/unknown").await.unwrap().is_none());
        assert!(table.resolve("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failed_load_is_retried_on_next_navigation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let table = RouteTable::new().with_route(Route::new(
            "flaky",
            RouteData::page_title("Flaky"),
            move || {
                let counter = counter.clone();
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        anyhow::bail!("chunk not available");
                    }
                    Ok(RouteModule::new(vec![ChildRoute::new("", "list")]))
                }
            },
        ));

        let err = table.resolve("flaky").await.unwrap_err();
        assert!(matches!(err, RouteError::Load { ref path, .. } if path == "flaky"));

        let resolved = table.resolve("flaky").await.unwrap().unwrap();
        assert_eq!(resolved.view, "list");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut table = RouteTable::new();
        table.push(counting_route("b", calls.clone()));
        table.push(counting_route("a", calls));

        let paths: Vec<&str> = table.routes().map(Route::path).collect();
        assert_eq!(paths, vec!["b", "a"]);
        assert_eq!(table.len(), 2);
    }
}
