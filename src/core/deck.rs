//! Draw pile.
//!
//! Ordered with the top of the pile at the back of the vector. Backed by
//! `im::Vector` so snapshots of the game state stay O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardColor, CardId, CardValue};
use super::rng::GameRng;

/// Cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 108;

/// The draw pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard 108-card deck, unshuffled.
    ///
    /// Per color: one `0`, two each of `1`-`9`, `Skip`, `Reverse` and
    /// `DrawTwo`. Plus four `Wild` and four `WildDrawFour`.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vector::new();
        let mut next_id = 0u32;
        let mut push = |value: CardValue, color: Option<CardColor>| {
            cards.push_back(Card::new(CardId::new(next_id), value, color));
            next_id += 1;
        };

        for color in CardColor::ALL {
            push(CardValue::Number(0), Some(color));
            for _ in 0..2 {
                for n in 1..=9 {
                    push(CardValue::Number(n), Some(color));
                }
                push(CardValue::Skip, Some(color));
                push(CardValue::Reverse, Some(color));
                push(CardValue::DrawTwo, Some(color));
            }
        }
        for _ in 0..4 {
            push(CardValue::Wild, None);
            push(CardValue::WildDrawFour, None);
        }

        Self { cards }
    }

    /// Create a deck from explicit cards. The last card is the top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card, if any, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Put a card on top.
    pub fn push_top(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Slide cards under the pile.
    pub fn push_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.cards.push_front(card.reset());
        }
    }

    /// Shuffle the whole pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle_cards(&mut cards);
        self.cards = cards.into_iter().collect();
    }
}
