//! Request builder and response parser for the card feed and profile
//! operations.
//!
//! # Design
//! `PlacesClient` holds the base URL and the authorization header value and
//! carries no other state. Each operation is split into a `build_*` method
//! that produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`]; the bound surface in [`crate::api`] wires the two to
//! the transport. Every request carries the same fixed header set,
//! `authorization` plus `content-type: application/json`, exactly as the
//! service expects it.

use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Card, CreateCard, UpdateAvatar, UpdateProfile, User};

/// Stateless client for the resource API: profile, cards, and likes.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    base_url: String,
    authorization: String,
}

impl PlacesClient {
    pub fn new(base_url: &str, authorization: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization: authorization.to_string(),
        }
    }

    /// The fixed header set attached to every resource request.
    fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("authorization".to_string(), self.authorization.clone()),
            ("content-type".to_string(), "application/json".to_string()),
        ]
    }

    fn request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: self.headers(),
            body,
        }
    }

    pub fn build_get_profile(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/users/me", None)
    }

    pub fn build_list_cards(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/cards", None)
    }

    pub fn build_update_profile(&self, input: &UpdateProfile) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(HttpMethod::Patch, "/users/me", Some(body)))
    }

    pub fn build_update_avatar(&self, input: &UpdateAvatar) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(HttpMethod::Patch, "/users/me/avatar", Some(body)))
    }

    pub fn build_create_card(&self, input: &CreateCard) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(HttpMethod::Post, "/cards", Some(body)))
    }

    pub fn build_delete_card(&self, id: Uuid) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/cards/{id}"), None)
    }

    pub fn build_add_like(&self, id: Uuid) -> HttpRequest {
        self.request(HttpMethod::Put, &format!("/cards/{id}/likes"), None)
    }

    pub fn build_remove_like(&self, id: Uuid) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/cards/{id}/likes"), None)
    }

    pub fn parse_get_profile(&self, response: HttpResponse) -> Result<User, ApiError> {
        ensure_ok(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_list_cards(&self, response: HttpResponse) -> Result<Vec<Card>, ApiError> {
        ensure_ok(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_profile(&self, response: HttpResponse) -> Result<User, ApiError> {
        ensure_ok(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_avatar(&self, response: HttpResponse) -> Result<User, ApiError> {
        ensure_ok(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_card(&self, response: HttpResponse) -> Result<Card, ApiError> {
        ensure_ok(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// The delete response body is not read; the service is free to answer
    /// with a bare 204 or a 200 carrying a message.
    pub fn parse_delete_card(&self, response: HttpResponse) -> Result<(), ApiError> {
        ensure_ok(&response)
    }

    pub fn parse_add_like(&self, response: HttpResponse) -> Result<Card, ApiError> {
        ensure_ok(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_remove_like(&self, response: HttpResponse) -> Result<Card, ApiError> {
        ensure_ok(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Accept any 2xx status; map 401 and 404 to their dedicated variants and
/// everything else to the catch-all status error.
pub(crate) fn ensure_ok(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    match response.status {
        401 => Err(ApiError::Unauthorized),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}
