//! Validation rules: pure predicates over a game snapshot.
//!
//! Rules never mutate state and are safe to evaluate repeatedly; the engine
//! runs the matching rule before every command and silently drops actions
//! that fail it.

use crate::actions::{EndTurnKind, UserAction};
use crate::cards::{CardId, Duo, Kind, Location};
use crate::deck::{Deck, Pile};
use crate::game::{Effect, Game, Phase};

/// Is `action` legal on `game` right now?
pub fn validate(game: &Game, action: &UserAction) -> bool {
    match *action {
        UserAction::DrawPilePickUp => can_pick_up_from_draw_pile(game),
        UserAction::PickUpFromLeftDiscard => can_pick_up_from_discard(game, Pile::DiscardLeft),
        UserAction::PickUpFromRightDiscard => can_pick_up_from_discard(game, Pile::DiscardRight),
        UserAction::DiscardToLeftPile(id) => can_discard_card(game, id, Pile::DiscardLeft),
        UserAction::DiscardToRightPile(id) => can_discard_card(game, id, Pile::DiscardRight),
        UserAction::PlayEffectWithCards(first, second) => can_play_effect(game, first, second),
        UserAction::StealCard(id) => can_steal_card(game, id),
        UserAction::EndTurn(EndTurnKind::NextPlayer) => game.phase_equals(Phase::WaitingForPlay),
        UserAction::EndTurn(EndTurnKind::Stop) | UserAction::EndTurn(EndTurnKind::LastChance) => {
            game.phase_equals(Phase::WaitingForPlay) && game.current_round().is_in_progress()
        }
        UserAction::CompleteRound => matches!(game.phase(), Phase::RoundEnded(_)),
    }
}

/// Discard-pile symmetry rule: a discard pile accepts a card only while it
/// is empty or the other discard pile still holds cards. The draw pile
/// never accepts a discard.
pub fn can_discard(deck: &Deck, pile: Pile) -> bool {
    match pile {
        Pile::Draw => false,
        Pile::DiscardLeft => {
            deck.left_discard_pile().is_empty() || !deck.right_discard_pile().is_empty()
        }
        Pile::DiscardRight => {
            deck.right_discard_pile().is_empty() || !deck.left_discard_pile().is_empty()
        }
    }
}

/// Kind pairs that fire an effect, order-independent: two crabs, two fish,
/// two ships, or shark with swimmer.
pub fn is_effect_pair(first: Kind, second: Kind) -> bool {
    use Duo::*;
    matches!(
        (first, second),
        (Kind::Duo(Crab), Kind::Duo(Crab))
            | (Kind::Duo(Fish), Kind::Duo(Fish))
            | (Kind::Duo(Ship), Kind::Duo(Ship))
            | (Kind::Duo(Shark), Kind::Duo(Swimmer))
            | (Kind::Duo(Swimmer), Kind::Duo(Shark))
    )
}

fn can_pick_up_from_draw_pile(game: &Game) -> bool {
    game.phase_equals(Phase::WaitingForDraw) && !game.deck().draw_pile().is_empty()
}

fn can_pick_up_from_discard(game: &Game, pile: Pile) -> bool {
    let phase_allows = game.phase_equals(Phase::WaitingForDraw)
        || game.phase_equals(Phase::ResolvingEffect(Effect::PickUpDiscard));
    phase_allows && !game.deck().pile(pile).is_empty()
}

fn can_discard_card(game: &Game, id: CardId, pile: Pile) -> bool {
    if !game.phase_equals(Phase::WaitingForDiscard) {
        return false;
    }
    let in_hand = game
        .card(id)
        .map(|card| card.location == Location::PlayerHand(game.current_player_up()))
        .unwrap_or(false);
    in_hand && can_discard(game.deck(), pile)
}

fn can_play_effect(game: &Game, first: CardId, second: CardId) -> bool {
    if !game.phase_equals(Phase::WaitingForPlay) || first == second {
        return false;
    }
    let hand = Location::PlayerHand(game.current_player_up());
    match (game.card(first), game.card(second)) {
        (Some(a), Some(b)) => {
            a.location == hand && b.location == hand && is_effect_pair(a.kind, b.kind)
        }
        _ => false,
    }
}

fn can_steal_card(game: &Game, id: CardId) -> bool {
    if !game.phase_equals(Phase::ResolvingEffect(Effect::StealCard)) {
        return false;
    }
    match game.card(id) {
        Some(card) => match card.location {
            Location::PlayerHand(owner) => owner != game.current_player_up(),
            _ => false,
        },
        None => false,
    }
}
