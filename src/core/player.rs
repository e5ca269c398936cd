//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Opaque string identifier supplied by the caller (session layer, UI).
//! The engine only compares ids for equality.
//!
//! ## Player
//!
//! Identity (id, display name, avatar), the hand of cards and the uno-yell
//! flag. Hands use `im::Vector` so cloning a whole roster is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

/// Player identifier.
///
/// ```
/// use uno_engine::core::PlayerId;
///
/// let id = PlayerId::new("p1");
/// assert_eq!(id.as_str(), "p1");
/// assert_eq!(format!("{}", id), "p1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub avatar: String,

    /// Cards currently held.
    hand: Vector<Card>,

    /// Set by a successful uno yell; cleared whenever the hand grows.
    yelled_uno: bool,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
            hand: Vector::new(),
            yelled_uno: false,
        }
    }

    /// Cards in hand, in the order they were received.
    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Look up a card in hand by id.
    #[must_use]
    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == card_id)
    }

    #[must_use]
    pub fn has_card(&self, card_id: CardId) -> bool {
        self.card(card_id).is_some()
    }

    #[must_use]
    pub fn yelled_uno(&self) -> bool {
        self.yelled_uno
    }

    /// Add a card to the hand. Any earlier uno yell no longer holds.
    pub fn receive(&mut self, card: Card) {
        self.hand.push_back(card);
        self.yelled_uno = false;
    }

    /// Remove a card from the hand by id.
    ///
    /// Returns the removed card, or `None` if it was not held.
    pub fn take_card(&mut self, card_id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == card_id)?;
        Some(self.hand.remove(pos))
    }

    /// Empty the hand, returning its cards.
    pub fn clear_hand(&mut self) -> Vector<Card> {
        self.yelled_uno = false;
        std::mem::take(&mut self.hand)
    }

    /// Replace the hand wholesale.
    ///
    /// Returns the previous hand. The yell flag is always cleared.
    pub fn replace_hand(&mut self, hand: Vector<Card>) -> Vector<Card> {
        self.yelled_uno = false;
        std::mem::replace(&mut self.hand, hand)
    }

    pub fn mark_yelled(&mut self) {
        self.yelled_uno = true;
    }
}
