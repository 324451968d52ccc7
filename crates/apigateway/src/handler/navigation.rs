use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::get,
};
use shared::{
    errors::HttpError,
    routing::{ResolvedRoute, RouteTable},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/app/{path}",
    tag = "Navigation",
    params(("path" = String, Path, description = "Page URL below /app, e.g. produit/{id}/edit")),
    responses(
        (status = 200, description = "Page the URL leads to", body = ResolvedRoute),
        (status = 404, description = "No page matches the URL"),
        (status = 500, description = "Child routes failed to load")
    )
)]
pub async fn navigate(
    Extension(table): Extension<Arc<RouteTable>>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    match table.resolve(&path).await {
        Ok(Some(resolved)) => Ok(Json(resolved)),
        Ok(None) => Err(HttpError::NotFound(format!("No page matches '{path}'"))),
        Err(err) => Err(HttpError::Internal(err.to_string())),
    }
}

pub fn navigation_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/app/{*path}", get(navigate))
        .layer(Extension(app_state.route_table.clone()))
}
