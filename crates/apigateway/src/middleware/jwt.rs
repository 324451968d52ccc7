use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::{ErrorResponse, ServiceError}};
use tracing::debug;

/// Accepts a JWT from the `token` cookie or an `Authorization: Bearer` header
/// and exposes its `Claims` to the handlers.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| auth_value.strip_prefix("Bearer ").map(str::to_owned))
        });

    let Some(token) = token else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::fail(
                "You are not logged in, please provide token",
            )),
        ));
    };

    let claims = jwt.verify_token(&token).map_err(|err| {
        debug!("Rejected token: {err}");
        let message = match err {
            ServiceError::TokenExpired => "Token expired",
            _ => "Invalid token",
        };
        (StatusCode::UNAUTHORIZED, Json(ErrorResponse::fail(message)))
    })?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
