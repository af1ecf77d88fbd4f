//! HTTP requests and responses as plain data.
//!
//! # Design
//! The resource and auth clients only ever produce `HttpRequest` values and
//! consume `HttpResponse` values; the actual round-trip happens in
//! [`crate::transport`]. Keeping the messages as data makes every operation
//! testable without a server and keeps header handling explicit: the header
//! list a client builds is exactly what goes on the wire, and callers may
//! append overrides before sending.
//!
//! All fields are owned (`String`, `Vec`) so values can be moved freely
//! between the builder, the transport, and test code.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by the `build_*` methods on [`crate::PlacesClient`] and
/// [`crate::AuthClient`]; executed by [`crate::transport::send`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by the transport (or constructed directly in tests), then handed
/// to the matching `parse_*` method for status interpretation and
/// deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
