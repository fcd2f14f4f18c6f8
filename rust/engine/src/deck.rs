use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Location};
use crate::errors::GameError;
use crate::player::PlayerId;

/// The three shared piles on the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Draw,
    DiscardLeft,
    DiscardRight,
}

impl Pile {
    /// How many cards a pick-up from this pile takes: two from the draw
    /// pile, one from a discard pile.
    pub fn draw_count(self) -> usize {
        match self {
            Pile::Draw => 2,
            Pile::DiscardLeft | Pile::DiscardRight => 1,
        }
    }
}

/// The full card set of a match, insertion order preserved, unique by id.
///
/// The deck is the single source of truth for card locations. Piles, hands
/// and played-effect groups are computed views filtered by location. Views
/// keep deck order, which doubles as stack order: the first card of a view
/// is the pile's bottom and the last is its top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the deck contents. Every loaded card starts on the draw
    /// pile; cards repeating an already-loaded id are dropped.
    pub fn load(&mut self, cards: Vec<Card>) {
        self.cards.clear();
        for mut card in cards {
            if self.cards.iter().any(|c| c.id == card.id) {
                continue;
            }
            card.location = Location::Pile(Pile::Draw);
            self.cards.push(card);
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Rewrites a card's location in place, preserving deck order. Unknown
    /// ids are ignored.
    pub fn update(&mut self, id: CardId, location: Location) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
            card.location = location;
        }
    }

    /// Cards currently on `pile`, in deck order.
    pub fn pile(&self, pile: Pile) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| c.location == Location::Pile(pile))
            .copied()
            .collect()
    }

    pub fn draw_pile(&self) -> Vec<Card> {
        self.pile(Pile::Draw)
    }

    pub fn left_discard_pile(&self) -> Vec<Card> {
        self.pile(Pile::DiscardLeft)
    }

    pub fn right_discard_pile(&self) -> Vec<Card> {
        self.pile(Pile::DiscardRight)
    }

    /// The top card of `pile`: the last element of its view.
    pub fn top_card(&self, pile: Pile) -> Option<Card> {
        self.cards
            .iter()
            .filter(|c| c.location == Location::Pile(pile))
            .last()
            .copied()
    }

    /// Cards in `player`'s hand, in deck order.
    pub fn cards_in_hand(&self, player: PlayerId) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| c.location == Location::PlayerHand(player))
            .copied()
            .collect()
    }

    /// Everything `player` scores with: hand plus played effects.
    pub fn all_cards_of(&self, player: PlayerId) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| {
                c.location == Location::PlayerHand(player)
                    || c.location == Location::PlayerEffects(player)
            })
            .copied()
            .collect()
    }

    /// Selects up to `pile.draw_count()` card ids from the front of the
    /// pile view. Emptiness is checked once, at call time, so a one-card
    /// draw pile yields a single id without error. The caller relocates the
    /// returned ids with [`Deck::update`].
    pub fn draw(&self, pile: Pile) -> Result<Vec<CardId>, GameError> {
        let view = self.pile(pile);
        if view.is_empty() {
            return Err(GameError::PileEmpty(pile));
        }
        Ok(view
            .iter()
            .take(pile.draw_count())
            .map(|c| c.id)
            .collect())
    }
}

/// Deterministic card shuffler. The same seed always produces the same
/// permutation, which the test suite relies on.
#[derive(Debug)]
pub struct Shuffler {
    rng: ChaCha20Rng,
}

impl Shuffler {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}
