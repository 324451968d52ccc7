use shared::routing::{ChildRoute, RouteModule};

/// Pages of the produit entity, below the `produit` table entry.
pub fn produit_routes() -> RouteModule {
    RouteModule::new(vec![
        ChildRoute::new("", "list").default_sort("id,asc").authenticated(),
        ChildRoute::new(":id/view", "detail").authenticated(),
        ChildRoute::new("new", "create").authenticated(),
        ChildRoute::new(":id/edit", "edit").authenticated(),
    ])
}

/// Loader registered in the entity route table.
pub async fn load_produit_routes() -> anyhow::Result<RouteModule> {
    Ok(produit_routes())
}
