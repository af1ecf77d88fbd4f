//! Blocking executor for [`HttpRequest`] values.
//!
//! # Design
//! One attempt per call: no retries, no backoff, no client-side timeout.
//! ureq's status-as-error behavior is disabled so 4xx/5xx responses come
//! back as data and the `parse_*` methods stay the single place where
//! status codes are interpreted. Anything that prevents a response from
//! arriving at all maps to [`ApiError::Transport`].

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Execute a request and return the raw response.
pub fn send(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    log::debug!("sending {:?} {}", req.method, req.path);

    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => with_headers(agent.get(&req.path), &req.headers).call(),
        (HttpMethod::Delete, _) => with_headers(agent.delete(&req.path), &req.headers).call(),
        (HttpMethod::Post, Some(body)) => {
            with_headers(agent.post(&req.path), &req.headers).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => with_headers(agent.post(&req.path), &req.headers).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            with_headers(agent.put(&req.path), &req.headers).send(body.as_bytes())
        }
        (HttpMethod::Put, None) => with_headers(agent.put(&req.path), &req.headers).send_empty(),
        (HttpMethod::Patch, Some(body)) => {
            with_headers(agent.patch(&req.path), &req.headers).send(body.as_bytes())
        }
        (HttpMethod::Patch, None) => with_headers(agent.patch(&req.path), &req.headers).send_empty(),
    };

    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    log::debug!("received {status} from {}", req.path);

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn with_headers<S>(
    mut builder: ureq::RequestBuilder<S>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<S> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
