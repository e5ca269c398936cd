//! Cards: identity, color and value.
//!
//! Every card in a deck has a unique `CardId`. Wild cards are built without
//! a color; the player names one when playing, and that color becomes the
//! card's effective color on the discard pile.

use serde::{Deserialize, Serialize};

/// Card identifier, unique within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl CardColor {
    pub const ALL: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];
}

/// Face value of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardValue {
    /// Numbered card, 0-9.
    Number(u8),
    /// Next player loses their turn.
    Skip,
    /// Play direction flips.
    Reverse,
    /// Target draws two.
    DrawTwo,
    /// Any color, always playable.
    Wild,
    /// Any color, target draws four.
    WildDrawFour,
}

impl CardValue {
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardValue::Wild | CardValue::WildDrawFour)
    }

    /// Cards a penalty target must draw when this card is played.
    #[must_use]
    pub const fn draw_penalty(self) -> usize {
        match self {
            CardValue::DrawTwo => 2,
            CardValue::WildDrawFour => 4,
            _ => 0,
        }
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub value: CardValue,

    /// Printed color, or for a played wild card the chosen color.
    /// `None` only for a wild card that has not been played yet.
    pub color: Option<CardColor>,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, value: CardValue, color: Option<CardColor>) -> Self {
        Self { id, value, color }
    }

    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.value.is_wild()
    }

    /// A copy of this card with the given color chosen.
    #[must_use]
    pub fn with_color(mut self, color: CardColor) -> Self {
        self.color = Some(color);
        self
    }

    /// A copy of this card as it sits in a fresh deck (wild color cleared).
    #[must_use]
    pub fn reset(mut self) -> Self {
        if self.is_wild() {
            self.color = None;
        }
        self
    }

    /// Whether this card may be played on top of `top`.
    ///
    /// Wild cards always match. Otherwise the colors must agree or the
    /// face values must agree.
    #[must_use]
    pub fn matches(&self, top: &Card) -> bool {
        if self.is_wild() {
            return true;
        }
        let same_color = self.color.is_some() && self.color == top.color;
        same_color || self.value == top.value
    }
}
