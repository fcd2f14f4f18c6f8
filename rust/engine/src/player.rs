use serde::{Deserialize, Serialize};

/// Seat identifier. A match uses the first N seats in this order and turn
/// order wraps from the last occupied seat back to `One`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
    Three,
    Four,
}

impl PlayerId {
    pub const ALL: [PlayerId; 4] = [PlayerId::One, PlayerId::Two, PlayerId::Three, PlayerId::Four];

    /// The seat that plays after this one in a match of `players` seats.
    pub fn next(self, players: InGameCount) -> PlayerId {
        let seats = players.player_ids();
        let index = seats.iter().position(|&p| p == self).unwrap_or(0);
        seats[(index + 1) % seats.len()]
    }
}

/// How many players are in the match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum InGameCount {
    Two,
    Three,
    Four,
}

impl InGameCount {
    pub fn player_count(self) -> usize {
        match self {
            InGameCount::Two => 2,
            InGameCount::Three => 3,
            InGameCount::Four => 4,
        }
    }

    /// The occupied seats, in turn order.
    pub fn player_ids(self) -> &'static [PlayerId] {
        &PlayerId::ALL[..self.player_count()]
    }

    /// Total points a player must reach for the match to have a winner.
    pub fn winning_threshold(self) -> i32 {
        match self {
            InGameCount::Two => 40,
            InGameCount::Three => 35,
            InGameCount::Four => 30,
        }
    }
}

/// A player in the match. Hand and effect membership live on the deck as
/// card locations, never here.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self { id }
    }
}
