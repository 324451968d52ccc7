use produit::routes::load_produit_routes;
use shared::routing::{Route, RouteData, RouteTable};

/// Top-level entity pages; each entry loads its own child routes on first navigation.
pub fn entity_routes() -> RouteTable {
    RouteTable::new().with_route(Route::new(
        "produit",
        RouteData::page_title("Produits"),
        load_produit_routes,
    ))
}
