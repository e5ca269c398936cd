//! Seeded randomness for a game.
//!
//! A game draws randomness in three places: shuffling the deck, picking a
//! random first player, and picking the recipient of "take card to random
//! player". All three read one ChaCha8 stream owned by the `GameState`, so
//! the same seed and the same actions replay the same game.
//!
//! ```
//! use uno_engine::core::{Deck, GameRng};
//!
//! let mut a = Deck::standard();
//! let mut b = Deck::standard();
//! a.shuffle(&mut GameRng::new(42));
//! b.shuffle(&mut GameRng::new(42));
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::card::Card;

#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A uniformly chosen seat in `0..count`, or `None` for an empty table.
    pub fn seat(&mut self, count: usize) -> Option<usize> {
        (count > 0).then(|| self.inner.gen_range(0..count))
    }

    /// A uniformly chosen element.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    pub fn shuffle_cards(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.inner);
    }

    /// Capture the stream position.
    #[must_use]
    pub fn checkpoint(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Continue a stream from a checkpoint.
    #[must_use]
    pub fn resume(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Saved position of a [`GameRng`]. Capture is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
