use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// How a round was brought to its end.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EndRoundKind {
    Stop,
    LastChance,
}

/// Lifecycle of a single round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundState {
    InProgress,
    /// The round end has been called but the round is not finalized yet.
    EndReason { kind: EndRoundKind, caller: PlayerId },
    Complete,
}

/// One scoring epoch of a match. `points` stays empty until the round's
/// scoring pass runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub state: RoundState,
    pub points: BTreeMap<PlayerId, i32>,
}

impl Round {
    pub fn new() -> Self {
        Self {
            state: RoundState::InProgress,
            points: BTreeMap::new(),
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.state == RoundState::InProgress
    }

    pub fn is_complete(&self) -> bool {
        self.state == RoundState::Complete
    }

    /// The player who called last chance, while that call is pending.
    pub fn last_chance_caller(&self) -> Option<PlayerId> {
        match self.state {
            RoundState::EndReason {
                kind: EndRoundKind::LastChance,
                caller,
            } => Some(caller),
            _ => None,
        }
    }

    pub fn points_for(&self, player: PlayerId) -> i32 {
        self.points.get(&player).copied().unwrap_or(0)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
