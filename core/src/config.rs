//! Endpoint and credential configuration from the environment.

use std::env;

/// Where the clients point and what credential the resource API carries.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the resource API, including any deployment prefix.
    pub base_url: String,
    /// Base URL of the auth service.
    pub auth_url: String,
    /// Value of the `authorization` header for resource requests.
    pub authorization: String,
}

impl ApiConfig {
    /// Read `PLACES_API_URL`, `PLACES_AUTH_URL`, and `PLACES_TOKEN`,
    /// defaulting to a local mock server and an empty credential.
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("PLACES_API_URL", "http://127.0.0.1:3000/v1/demo"),
            auth_url: env_or("PLACES_AUTH_URL", "http://127.0.0.1:3000"),
            authorization: env_or("PLACES_TOKEN", ""),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        log::info!("{key} not set, using default");
        default.to_string()
    })
}
