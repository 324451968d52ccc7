use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use crate::utils::HeaderUtil;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    BadRequestAlert {
        app_name: String,
        entity_name: String,
        error_key: String,
        message: String,
    },
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

impl HttpError {
    pub fn bad_request_alert(
        app_name: &str,
        entity_name: &str,
        error_key: &str,
        message: &str,
    ) -> Self {
        HttpError::BadRequestAlert {
            app_name: app_name.to_string(),
            entity_name: entity_name.to_string(),
            error_key: error_key.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::InvalidSort(property) => {
                    HttpError::BadRequest(format!("Invalid sort property: {property}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidToken => HttpError::Unauthorized("Invalid token".into()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg, alert) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            HttpError::BadRequestAlert {
                app_name,
                entity_name,
                error_key,
                message,
            } => {
                let headers = HeaderUtil::create_failure_alert(&app_name, &entity_name, &error_key);
                (StatusCode::BAD_REQUEST, message, Some((headers, error_key)))
            }
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        match alert {
            Some((headers, error_key)) => {
                let body = Json(ErrorResponse {
                    status: "error".into(),
                    message: msg,
                    error_key: Some(format!("error.{error_key}")),
                });
                (status, headers, body).into_response()
            }
            None => {
                let body = Json(ErrorResponse {
                    status: "error".into(),
                    message: msg,
                    error_key: None,
                });
                (status, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_not_found_maps_to_404() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_alert_carries_error_headers() {
        let response = HttpError::bad_request_alert("examApp", "produit", "idexists", "boom")
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("X-examApp-error").unwrap(),
            "error.idexists"
        );
        assert_eq!(
            response.headers().get("X-examApp-params").unwrap(),
            "produit"
        );
    }
}
