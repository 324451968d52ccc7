use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_VALIDITY_SECONDS: i64 = 86_400;

/// Token payload: `sub` is the user login, `auth` the comma separated authorities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub auth: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn authorities(&self) -> impl Iterator<Item = &str> {
        self.auth.split(',').map(str::trim).filter(|a| !a.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
    pub token_validity_seconds: i64,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
            token_validity_seconds: DEFAULT_TOKEN_VALIDITY_SECONDS,
        }
    }

    pub fn with_validity(mut self, seconds: i64) -> Self {
        self.token_validity_seconds = seconds;
        self
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, login: &str, authorities: &[&str]) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + Duration::seconds(self.token_validity_seconds)).timestamp() as usize;

        let claims = Claims {
            sub: login.to_string(),
            auth: authorities.join(","),
            exp,
            iat,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data =
            decode::<Claims>(token, &decoding_key, &Validation::default()).map_err(|err| {
                match err.kind() {
                    ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                    _ => ServiceError::Jwt(err),
                }
            })?;

        if token_data.claims.sub.is_empty() {
            return Err(ServiceError::InvalidToken);
        }

        Ok(token_data.claims)
    }
}
