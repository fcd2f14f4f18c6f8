use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::player::InGameCount;

/// The three ways a turn can end.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EndTurnKind {
    /// Pass play to the next seat.
    NextPlayer,
    /// Stop the round and score it immediately.
    Stop,
    /// Bet on holding the best hand; scoring waits until the call comes
    /// back around.
    LastChance,
}

/// Actions a player can request. Each resolves to a validation rule and a
/// command; the engine always validates before executing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum UserAction {
    DrawPilePickUp,
    PickUpFromLeftDiscard,
    PickUpFromRightDiscard,
    DiscardToLeftPile(CardId),
    DiscardToRightPile(CardId),
    PlayEffectWithCards(CardId, CardId),
    StealCard(CardId),
    EndTurn(EndTurnKind),
    CompleteRound,
}

/// Actions in the system namespace, executed on the engine rather than the
/// game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SystemAction {
    CreateGame { players: InGameCount },
}

/// Any action the engine can be asked to perform.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EngineAction {
    User(UserAction),
    System(SystemAction),
}
