//! Application state: the current user and the card feed, with the
//! mutation rules the view layer applies to server results.
//!
//! The rules are small but load-bearing: a freshly created card goes to the
//! front of the feed, a card returned by a like operation replaces its
//! predecessor in place, and delete permission comes from comparing the
//! card's owner with the loaded user and from nothing else.

use uuid::Uuid;

use crate::types::{Card, User};

/// Mutable state owned by the view layer.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_user: Option<User>,
    pub cards: Vec<Card>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_profile(&mut self, user: User) {
        self.current_user = Some(user);
    }

    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// A card the user just created goes to the front of the feed.
    pub fn insert_card(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Replace the card with the same id, keeping its position. Cards the
    /// feed no longer holds are ignored.
    pub fn apply_card(&mut self, card: Card) {
        if let Some(slot) = self.cards.iter_mut().find(|c| c.id == card.id) {
            *slot = card;
        }
    }

    pub fn remove_card(&mut self, id: Uuid) {
        self.cards.retain(|c| c.id != id);
    }

    /// Delete is gated on ownership: the card's owner must be the loaded
    /// user. With no user loaded nothing is deletable.
    pub fn can_delete(&self, card: &Card) -> bool {
        match &self.current_user {
            Some(user) => card.owner == user.id,
            None => false,
        }
    }

    /// Liked state as a plain boolean; how it is rendered is the
    /// presentation layer's business.
    pub fn is_liked(&self, card: &Card) -> bool {
        match &self.current_user {
            Some(user) => card.is_liked_by(user.id),
            None => false,
        }
    }

    /// Drop everything tied to the signed-in user.
    pub fn clear(&mut self) {
        self.current_user = None;
        self.cards.clear();
    }
}
