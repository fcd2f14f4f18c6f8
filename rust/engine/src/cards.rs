use serde::{Deserialize, Serialize};

use crate::deck::Pile;
use crate::player::PlayerId;

/// Identifier of a card, unique within a deck and stable for the whole match.
pub type CardId = u32;

/// Duo cards score in pairs and can be played as effects.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Duo {
    Fish,
    Ship,
    Crab,
    Swimmer,
    Shark,
}

/// Collector cards score on a per-kind count table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Collector {
    Shell,
    Octopus,
    Penguin,
    Sailor,
}

/// Multiplier cards score against matching base cards in the same hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Multiplier {
    Ship,
    Fish,
    Penguin,
    Sailor,
}

/// The kind of a card, which decides how it scores and which effects it can
/// take part in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Duo(Duo),
    Collector(Collector),
    Multiplier(Multiplier),
    Mermaid,
}

impl Kind {
    pub fn is_mermaid(self) -> bool {
        matches!(self, Kind::Mermaid)
    }
}

/// Card face colors. Mermaid scoring groups cards by color; white is the
/// mermaids' own color and never forms a group.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Color {
    DarkBlue,
    LightBlue,
    Black,
    Yellow,
    LightGreen,
    White,
    Purple,
    LightGrey,
    LightOrange,
    LightPink,
    Orange,
}

/// Where a card currently sits. Every card has exactly one location at any
/// time; commands move cards by rewriting this tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// In one of the three shared piles.
    Pile(Pile),
    /// In a player's hand, available for hand actions.
    PlayerHand(PlayerId),
    /// Consumed by a played effect; visible for scoring, not for hand actions.
    PlayerEffects(PlayerId),
}

/// A single playing card. Identity (`id`, `kind`, `color`) is immutable;
/// only `location` changes over the life of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: Kind,
    pub color: Color,
    pub location: Location,
}

impl Card {
    /// Creates a card located on the draw pile.
    pub fn new(id: CardId, kind: Kind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            location: Location::Pile(Pile::Draw),
        }
    }
}

/// Number of cards in the standard catalog.
pub const STANDARD_DECK_SIZE: usize = 58;

/// Builds the standard 58-card catalog in a fixed order, ids `1..=58`.
///
/// Composition: 4 mermaids; duos 9 crab / 8 ship / 7 fish / 5 swimmer /
/// 5 shark; collectors 6 shell / 5 octopus / 3 penguin / 2 sailor; one
/// multiplier of each kind. The engine takes whatever the deck supply hands
/// it and does not re-validate this composition.
pub fn standard_deck() -> Vec<Card> {
    use Color::*;

    let mut cards: Vec<Card> = Vec::with_capacity(STANDARD_DECK_SIZE);
    let mut push = |kind: Kind, color: Color| {
        let id = cards.len() as CardId + 1;
        cards.push(Card::new(id, kind, color));
    };

    for _ in 0..4 {
        push(Kind::Mermaid, White);
    }

    push(Kind::Multiplier(Multiplier::Ship), Yellow);
    push(Kind::Multiplier(Multiplier::Fish), Black);
    push(Kind::Multiplier(Multiplier::Penguin), LightGrey);
    push(Kind::Multiplier(Multiplier::Sailor), LightGrey);

    for color in [
        DarkBlue, LightBlue, Black, Yellow, LightGreen, Purple, LightGrey, LightOrange, LightPink,
    ] {
        push(Kind::Duo(Duo::Crab), color);
    }
    for color in [
        DarkBlue, DarkBlue, DarkBlue, LightBlue, LightBlue, LightBlue, Black, Yellow,
    ] {
        push(Kind::Duo(Duo::Ship), color);
    }
    for color in [DarkBlue, Black, Black, Black, Yellow, Yellow, Yellow] {
        push(Kind::Duo(Duo::Fish), color);
    }
    for _ in 0..5 {
        push(Kind::Duo(Duo::Swimmer), LightBlue);
    }
    for color in [DarkBlue, DarkBlue, DarkBlue, DarkBlue, LightGrey] {
        push(Kind::Duo(Duo::Shark), color);
    }

    for color in [Black, Black, Yellow, Yellow, LightGreen, LightGreen] {
        push(Kind::Collector(Collector::Shell), color);
    }
    for color in [LightGreen, LightGreen, LightGreen, Purple, Purple] {
        push(Kind::Collector(Collector::Octopus), color);
    }
    for color in [Purple, LightOrange, LightOrange] {
        push(Kind::Collector(Collector::Penguin), color);
    }
    for color in [LightPink, Orange] {
        push(Kind::Collector(Collector::Sailor), color);
    }

    cards
}
