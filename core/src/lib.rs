//! Client library for the places photo-card service.
//!
//! # Overview
//! Users authenticate against the auth service, then read and mutate a
//! shared feed of image cards through the resource API: fetch the profile
//! and the feed, add and delete cards, like and unlike, edit the profile
//! name and avatar.
//!
//! # Design
//! - [`PlacesClient`] and [`AuthClient`] are pure data transforms: each
//!   operation is a `build_*` method producing an [`HttpRequest`] and a
//!   `parse_*` method consuming an [`HttpResponse`].
//! - [`transport`] executes requests with exactly one attempt per call; the
//!   bound [`Api`]/[`Auth`] surface glues the two together so an operation
//!   is one network call returning `Result<T, ApiError>`.
//! - [`Session`] owns the persisted token and the logged-in/logged-out
//!   state machine; [`AppState`] holds the feed rules the view layer
//!   applies to server results.
//! - Failures propagate unchanged: no retries, no recovery, no
//!   classification beyond the [`ApiError`] variants.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod state;
pub mod transport;
pub mod types;

pub use api::{Api, Auth};
pub use auth::AuthClient;
pub use client::PlacesClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::{Session, SessionError, SessionStatus, TokenStore};
pub use state::AppState;
pub use types::{Account, AuthSession, Card, CreateCard, Credentials, UpdateAvatar, UpdateProfile, User};
