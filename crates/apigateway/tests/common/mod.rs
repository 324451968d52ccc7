//! Drives the full router in-process against the in-memory repository.

#![allow(dead_code)]

use apigateway::{handler::AppRouter, state::AppState};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{abstract_trait::JwtServiceTrait, config::JwtConfig};
use tower::ServiceExt;

pub const JWT_SECRET: &str = "test-secret";
pub const APP_NAME: &str = "examApp";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to deserialize JSON response")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub struct TestApp {
    router: Router,
    token: String,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_state(AppState::in_memory(JWT_SECRET, APP_NAME))
    }

    pub fn with_state(state: AppState) -> Self {
        let token = JwtConfig::new(JWT_SECRET)
            .generate_token("admin", &["ROLE_ADMIN", "ROLE_USER"])
            .expect("Failed to generate token");

        Self {
            router: AppRouter::build_router(state),
            token,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Authenticated request with an optional JSON body.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        self.send_as(method, uri, body, "application/json").await
    }

    pub async fn send_as(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        content_type: &str,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token));

        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, content_type);
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        self.send_request(builder.body(body).expect("Failed to build request"))
            .await
    }

    pub async fn send_request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn count(&self) -> i64 {
        let response = self.send(Method::GET, "/api/produits?size=1", None).await;
        response
            .header("x-total-count")
            .and_then(|v| v.parse().ok())
            .expect("missing X-Total-Count")
    }
}
