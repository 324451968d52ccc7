pub mod di;
pub mod entity_routes;
pub mod handler;
pub mod middleware;
pub mod state;
