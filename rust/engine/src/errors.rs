use thiserror::Error;

use crate::deck::Pile;

/// Failures surfaced by commands. Rule rejections are not errors; an action
/// that fails validation is silently ignored by the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("pile {0:?} has no cards to draw")]
    PileEmpty(Pile),
    #[error("the draw pile cannot be used as a discard pick-up source")]
    AttemptedDrawPileAsDiscardSource,
}
