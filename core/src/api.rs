//! Bound API surface: each operation is exactly one HTTP call.
//!
//! [`Api`] and [`Auth`] couple the stateless builders to the transport so
//! callers get `Result<T, ApiError>` without touching
//! [`crate::HttpRequest`] values themselves. Errors pass through unchanged:
//! no recovery and no retry happens at this layer.

use uuid::Uuid;

use crate::auth::AuthClient;
use crate::client::PlacesClient;
use crate::error::ApiError;
use crate::transport;
use crate::types::{Account, AuthSession, Card, CreateCard, Credentials, UpdateAvatar, UpdateProfile, User};

/// Resource API bound to the transport.
#[derive(Debug, Clone)]
pub struct Api {
    client: PlacesClient,
}

impl Api {
    /// `authorization` is the value of the `authorization` header attached
    /// to every request: the session token, or a pre-shared credential.
    pub fn new(base_url: &str, authorization: &str) -> Self {
        Self {
            client: PlacesClient::new(base_url, authorization),
        }
    }

    pub fn get_profile(&self) -> Result<User, ApiError> {
        let req = self.client.build_get_profile();
        self.client.parse_get_profile(transport::send(req)?)
    }

    pub fn list_cards(&self) -> Result<Vec<Card>, ApiError> {
        let req = self.client.build_list_cards();
        self.client.parse_list_cards(transport::send(req)?)
    }

    pub fn update_profile(&self, name: &str, about: &str) -> Result<User, ApiError> {
        let input = UpdateProfile {
            name: name.to_string(),
            about: about.to_string(),
        };
        let req = self.client.build_update_profile(&input)?;
        self.client.parse_update_profile(transport::send(req)?)
    }

    pub fn update_avatar(&self, avatar: &str) -> Result<User, ApiError> {
        let input = UpdateAvatar {
            avatar: avatar.to_string(),
        };
        let req = self.client.build_update_avatar(&input)?;
        self.client.parse_update_avatar(transport::send(req)?)
    }

    pub fn create_card(&self, name: &str, link: &str) -> Result<Card, ApiError> {
        let input = CreateCard {
            name: name.to_string(),
            link: link.to_string(),
        };
        let req = self.client.build_create_card(&input)?;
        self.client.parse_create_card(transport::send(req)?)
    }

    pub fn delete_card(&self, id: Uuid) -> Result<(), ApiError> {
        let req = self.client.build_delete_card(id);
        self.client.parse_delete_card(transport::send(req)?)
    }

    pub fn add_like(&self, id: Uuid) -> Result<Card, ApiError> {
        let req = self.client.build_add_like(id);
        self.client.parse_add_like(transport::send(req)?)
    }

    pub fn remove_like(&self, id: Uuid) -> Result<Card, ApiError> {
        let req = self.client.build_remove_like(id);
        self.client.parse_remove_like(transport::send(req)?)
    }

    /// The single dispatch point for the like button: a card the user has
    /// already liked gets an unlike, anything else gets a like. Callers
    /// must not call `add_like`/`remove_like` directly from toggle-style
    /// UI, or a like could be issued for an already-liked card.
    pub fn toggle_like(&self, card: &Card, user: Uuid) -> Result<Card, ApiError> {
        if card.is_liked_by(user) {
            self.remove_like(card.id)
        } else {
            self.add_like(card.id)
        }
    }
}

/// Auth API bound to the transport.
#[derive(Debug, Clone)]
pub struct Auth {
    client: AuthClient,
}

impl Auth {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: AuthClient::new(base_url),
        }
    }

    pub fn register(&self, email: &str, password: &str) -> Result<Account, ApiError> {
        let input = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let req = self.client.build_register(&input)?;
        self.client.parse_register(transport::send(req)?)
    }

    pub fn authorize(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let input = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let req = self.client.build_authorize(&input)?;
        self.client.parse_authorize(transport::send(req)?)
    }

    pub fn get_content(&self, token: &str) -> Result<Account, ApiError> {
        let req = self.client.build_get_content(token);
        self.client.parse_get_content(transport::send(req)?)
    }
}
