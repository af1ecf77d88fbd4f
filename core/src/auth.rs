//! Request builder and response parser for registration, login, and token
//! verification.
//!
//! The auth service lives on its own host, so `AuthClient` is a separate
//! thin client rather than three extra methods on [`crate::PlacesClient`].
//! Registration and login are unauthenticated; verification sends the
//! session token with the `Bearer` scheme.

use crate::client::ensure_ok;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Account, AuthSession, Credentials};

/// Stateless client for the auth API.
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_register(&self, input: &Credentials) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/signup", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_authorize(&self, input: &Credentials) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/signin", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_get_content(&self, token: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/users/me", self.base_url),
            headers: vec![
                ("authorization".to_string(), format!("Bearer {token}")),
                ("content-type".to_string(), "application/json".to_string()),
            ],
            body: None,
        }
    }

    pub fn parse_register(&self, response: HttpResponse) -> Result<Account, ApiError> {
        ensure_ok(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_authorize(&self, response: HttpResponse) -> Result<AuthSession, ApiError> {
        ensure_ok(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_content(&self, response: HttpResponse) -> Result<Account, ApiError> {
        ensure_ok(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}
