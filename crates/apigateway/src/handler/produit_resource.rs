use crate::{
    middleware::{
        jwt::auth_middleware,
        validate::{SimpleValidatedJson, ValidatedQuery},
    },
    state::{AppName, AppState},
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::{HeaderValue, StatusCode, header::LOCATION},
    middleware,
    response::IntoResponse,
    routing::get,
};
use produit::{
    ENTITY_NAME,
    abstract_trait::produit::service::{DynProduitCommandService, DynProduitQueryService},
    domain::requests::ProduitRequest,
    model::Produit,
};
use shared::{
    domain::requests::Pageable,
    errors::HttpError,
    utils::{HeaderUtil, generate_pagination_http_headers},
};
use std::sync::Arc;
use tracing::debug;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

const RESOURCE_PATH: &str = "/api/produits";

/// Rejects a body whose id is missing, malformed or different from the path id.
fn check_body_id(app_name: &str, id: Uuid, body: &ProduitRequest) -> Result<(), HttpError> {
    match body.parsed_id() {
        None => Err(HttpError::bad_request_alert(
            app_name,
            ENTITY_NAME,
            "idnull",
            "Invalid id",
        )),
        Some(Some(body_id)) if body_id == id => Ok(()),
        Some(_) => Err(HttpError::bad_request_alert(
            app_name,
            ENTITY_NAME,
            "idinvalid",
            "Invalid ID",
        )),
    }
}

async fn ensure_exists(
    query: &DynProduitQueryService,
    app_name: &str,
    id: Uuid,
) -> Result<(), HttpError> {
    if query.exists(id).await? {
        Ok(())
    } else {
        Err(HttpError::bad_request_alert(
            app_name,
            ENTITY_NAME,
            "idnotfound",
            "Entity not found",
        ))
    }
}

#[utoipa::path(
    post,
    path = "/api/produits",
    tag = "Produit",
    security(("bearer_auth" = [])),
    request_body = ProduitRequest,
    responses(
        (status = 201, description = "Produit created", body = Produit),
        (status = 400, description = "Body already carries an id"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_produit(
    Extension(service): Extension<DynProduitCommandService>,
    Extension(AppName(app_name)): Extension<AppName>,
    SimpleValidatedJson(body): SimpleValidatedJson<ProduitRequest>,
) -> Result<impl IntoResponse, HttpError> {
    debug!("REST request to save Produit : {:?}", body);

    if body.has_id() {
        return Err(HttpError::bad_request_alert(
            &app_name,
            ENTITY_NAME,
            "idexists",
            "A new produit cannot already have an ID",
        ));
    }

    let produit = service.save(body.into_new_produit()).await?;

    let mut headers =
        HeaderUtil::create_entity_creation_alert(&app_name, ENTITY_NAME, &produit.id.to_string());
    if let Ok(location) = HeaderValue::from_str(&format!("{RESOURCE_PATH}/{}", produit.id)) {
        headers.insert(LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(produit)))
}

#[utoipa::path(
    put,
    path = "/api/produits/{id}",
    tag = "Produit",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Produit ID")),
    request_body = ProduitRequest,
    responses(
        (status = 200, description = "Produit updated", body = Produit),
        (status = 400, description = "Missing, mismatching or unknown id"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_produit(
    Extension(command): Extension<DynProduitCommandService>,
    Extension(query): Extension<DynProduitQueryService>,
    Extension(AppName(app_name)): Extension<AppName>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<ProduitRequest>,
) -> Result<impl IntoResponse, HttpError> {
    debug!("REST request to update Produit : {}, {:?}", id, body);

    check_body_id(&app_name, id, &body)?;
    ensure_exists(&query, &app_name, id).await?;

    let produit = command.update(body.into_produit(id)).await?;
    let headers = HeaderUtil::create_entity_update_alert(&app_name, ENTITY_NAME, &id.to_string());

    Ok((StatusCode::OK, headers, Json(produit)))
}

/// Merge-patch: fields sent as `null` or left out keep their stored value.
#[utoipa::path(
    patch,
    path = "/api/produits/{id}",
    tag = "Produit",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Produit ID")),
    request_body(content = ProduitRequest, content_type = "application/merge-patch+json"),
    responses(
        (status = 200, description = "Produit partially updated", body = Produit),
        (status = 400, description = "Missing, mismatching or unknown id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Produit not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn partial_update_produit(
    Extension(command): Extension<DynProduitCommandService>,
    Extension(query): Extension<DynProduitQueryService>,
    Extension(AppName(app_name)): Extension<AppName>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<ProduitRequest>,
) -> Result<impl IntoResponse, HttpError> {
    debug!(
        "REST request to partial update Produit partially : {}, {:?}",
        id, body
    );

    check_body_id(&app_name, id, &body)?;
    ensure_exists(&query, &app_name, id).await?;

    let produit = command
        .partial_update(body.into_produit(id))
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Produit {id} not found")))?;
    let headers = HeaderUtil::create_entity_update_alert(&app_name, ENTITY_NAME, &id.to_string());

    Ok((StatusCode::OK, headers, Json(produit)))
}

#[utoipa::path(
    get,
    path = "/api/produits",
    tag = "Produit",
    security(("bearer_auth" = [])),
    params(Pageable),
    responses(
        (status = 200, description = "Page of produits, with X-Total-Count and Link headers", body = Vec<Produit>),
        (status = 400, description = "Invalid paging or sort parameters"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_all_produits(
    Extension(service): Extension<DynProduitQueryService>,
    ValidatedQuery(pageable): ValidatedQuery<Pageable>,
) -> Result<impl IntoResponse, HttpError> {
    debug!("REST request to get a page of Produits");

    let produits = service.find_all(&pageable).await?;
    let total = service.count_all().await?;
    let headers = generate_pagination_http_headers(RESOURCE_PATH, &pageable, total);

    Ok((StatusCode::OK, headers, Json(produits)))
}

#[utoipa::path(
    get,
    path = "/api/produits/{id}",
    tag = "Produit",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Produit ID")),
    responses(
        (status = 200, description = "Produit details", body = Produit),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Produit not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_produit(
    Extension(service): Extension<DynProduitQueryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    debug!("REST request to get Produit : {}", id);

    let produit = service
        .find_one(id)
        .await?
        .ok_or_else(|| HttpError::NotFound(format!("Produit {id} not found")))?;

    Ok((StatusCode::OK, Json(produit)))
}

#[utoipa::path(
    delete,
    path = "/api/produits/{id}",
    tag = "Produit",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Produit ID")),
    responses(
        (status = 204, description = "Produit deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_produit(
    Extension(service): Extension<DynProduitCommandService>,
    Extension(AppName(app_name)): Extension<AppName>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    debug!("REST request to delete Produit : {}", id);

    service.delete(id).await?;
    let headers =
        HeaderUtil::create_entity_deletion_alert(&app_name, ENTITY_NAME, &id.to_string());

    Ok((StatusCode::NO_CONTENT, headers))
}

pub fn produit_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(RESOURCE_PATH, get(get_all_produits).post(create_produit))
        .route(
            "/api/produits/{id}",
            get(get_produit)
                .put(update_produit)
                .patch(partial_update_produit)
                .delete(delete_produit),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.produit_command.clone()))
        .layer(Extension(app_state.di_container.produit_query.clone()))
        .layer(Extension(app_state.app_name.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_id_must_match_path_id() {
        let id = Uuid::new_v4();
        let mut body = ProduitRequest::default();
        assert!(check_body_id("examApp", id, &body).is_err());

        body.id = Some("not-a-uuid".into());
        assert!(check_body_id("examApp", id, &body).is_err());

        body.id = Some(Uuid::new_v4().to_string());
        assert!(check_body_id("examApp", id, &body).is_err());

        body.id = Some(id.to_string());
        assert!(check_body_id("examApp", id, &body).is_ok());
    }
}
