//! Domain DTOs for the places service.
//!
//! # Design
//! These types mirror the service's JSON schema but are defined independently
//! of the mock-server crate; the integration tests catch any drift between
//! the two. Field names follow the wire format (`link` for a card's image
//! URL, `avatar` for the profile picture), not any prettier client-side
//! naming.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user profile as returned by the resource API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub about: String,
    pub avatar: String,
}

/// The identity attached to a session token: returned by registration and
/// by token verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
}

/// A shareable image card. `likes` holds the ids of users who liked the
/// card; the server keeps it set-semantic, so membership checks are enough.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub id: Uuid,
    pub name: String,
    pub link: String,
    pub owner: Uuid,
    pub likes: Vec<Uuid>,
}

impl Card {
    /// Whether the given user is in this card's likes set.
    pub fn is_liked_by(&self, user: Uuid) -> bool {
        self.likes.contains(&user)
    }
}

/// Email/password pair sent to both the registration and login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response: the bearer token plus the email it was
/// issued for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub email: String,
}

/// Request payload for updating the profile name and description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub name: String,
    pub about: String,
}

/// Request payload for replacing the profile avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvatar {
    pub avatar: String,
}

/// Request payload for adding a card to the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCard {
    pub name: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_membership_check() {
        let user = Uuid::new_v4();
        let other = Uuid::new_v4();
        let card = Card {
            id: Uuid::new_v4(),
            name: "Lake".to_string(),
            link: "https://x/lake.jpg".to_string(),
            owner: other,
            likes: vec![user],
        };
        assert!(card.is_liked_by(user));
        assert!(!card.is_liked_by(other));
    }

    #[test]
    fn card_roundtrips_through_json() {
        let card = Card {
            id: Uuid::new_v4(),
            name: "Bridge".to_string(),
            link: "https://x/bridge.jpg".to_string(),
            owner: Uuid::new_v4(),
            likes: vec![Uuid::new_v4()],
        };
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn user_deserializes_from_wire_fields() {
        let user: User = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","name":"Marie","about":"Traveler","avatar":"https://x/a.png"}"#,
        )
        .unwrap();
        assert_eq!(user.name, "Marie");
        assert_eq!(user.avatar, "https://x/a.png");
    }
}
