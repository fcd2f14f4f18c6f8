//! Commands: the only place game state is mutated.
//!
//! Every command is reached through [`execute`] after its rule has passed.
//! Fallible commands check their failure condition before touching any
//! state, so a returned error never leaves the game partially mutated.

use crate::actions::{EndTurnKind, UserAction};
use crate::cards::{CardId, Duo, Kind, Location};
use crate::deck::Pile;
use crate::errors::GameError;
use crate::game::{Effect, Game, Phase};
use crate::round::{EndRoundKind, RoundState};
use crate::score;

/// Runs `action` against `game`.
pub fn execute(game: &mut Game, action: &UserAction) -> Result<(), GameError> {
    match *action {
        UserAction::DrawPilePickUp => pick_up_from_draw_pile(game),
        UserAction::PickUpFromLeftDiscard => pick_up_from_discard_pile(game, Pile::DiscardLeft),
        UserAction::PickUpFromRightDiscard => pick_up_from_discard_pile(game, Pile::DiscardRight),
        UserAction::DiscardToLeftPile(id) => {
            discard_card(game, id, Pile::DiscardLeft);
            Ok(())
        }
        UserAction::DiscardToRightPile(id) => {
            discard_card(game, id, Pile::DiscardRight);
            Ok(())
        }
        UserAction::PlayEffectWithCards(first, second) => play_effect(game, first, second),
        UserAction::StealCard(id) => {
            steal_card(game, id);
            Ok(())
        }
        UserAction::EndTurn(EndTurnKind::NextPlayer) => {
            end_turn_next_player(game);
            Ok(())
        }
        UserAction::EndTurn(EndTurnKind::Stop) => {
            end_round_stop(game);
            Ok(())
        }
        UserAction::EndTurn(EndTurnKind::LastChance) => {
            end_round_last_chance(game);
            Ok(())
        }
        UserAction::CompleteRound => {
            complete_round(game);
            Ok(())
        }
    }
}

fn pick_up_from_draw_pile(game: &mut Game) -> Result<(), GameError> {
    let drawn = game.draw(Pile::Draw)?;
    let hand = Location::PlayerHand(game.current_player_up());
    for id in drawn {
        game.update(id, hand);
    }
    game.set_phase(Phase::WaitingForDiscard);
    Ok(())
}

/// Relocates the top card of a discard pile to the current player's hand.
/// Naming the draw pile as the source is a contract violation, not a
/// player-reachable state, and fails without touching the game.
pub fn pick_up_from_discard_pile(game: &mut Game, pile: Pile) -> Result<(), GameError> {
    if pile == Pile::Draw {
        return Err(GameError::AttemptedDrawPileAsDiscardSource);
    }
    let top = game
        .deck()
        .top_card(pile)
        .ok_or(GameError::PileEmpty(pile))?;
    game.update(top.id, Location::PlayerHand(game.current_player_up()));
    game.set_phase(Phase::WaitingForPlay);
    Ok(())
}

fn discard_card(game: &mut Game, id: CardId, pile: Pile) {
    game.update(id, Location::Pile(pile));
    game.set_phase(Phase::WaitingForPlay);
}

fn play_effect(game: &mut Game, first: CardId, second: CardId) -> Result<(), GameError> {
    let kinds = (
        game.card(first).map(|c| c.kind),
        game.card(second).map(|c| c.kind),
    );
    let (Some(first_kind), Some(second_kind)) = kinds else {
        return Ok(());
    };

    // A fish pair draws from the draw pile. Probe that draw before moving
    // anything so an empty pile fails with the game untouched.
    let fish_pair = matches!(
        (first_kind, second_kind),
        (Kind::Duo(Duo::Fish), Kind::Duo(Duo::Fish))
    );
    let fish_draw = if fish_pair {
        Some(game.draw(Pile::Draw)?)
    } else {
        None
    };

    let effects = Location::PlayerEffects(game.current_player_up());
    game.update(first, effects);
    game.update(second, effects);

    match (first_kind, second_kind) {
        (Kind::Duo(Duo::Crab), Kind::Duo(Duo::Crab)) => {
            game.set_phase(Phase::ResolvingEffect(Effect::PickUpDiscard));
        }
        (Kind::Duo(Duo::Fish), Kind::Duo(Duo::Fish)) => {
            if let Some(id) = fish_draw.and_then(|ids| ids.first().copied()) {
                game.update(id, Location::PlayerHand(game.current_player_up()));
            }
            game.set_phase(Phase::WaitingForPlay);
        }
        (Kind::Duo(Duo::Ship), Kind::Duo(Duo::Ship)) => {
            // A pair of ships grants another draw segment to the same player.
            game.set_phase(Phase::WaitingForDraw);
        }
        (Kind::Duo(Duo::Shark), Kind::Duo(Duo::Swimmer))
        | (Kind::Duo(Duo::Swimmer), Kind::Duo(Duo::Shark)) => {
            game.set_phase(Phase::ResolvingEffect(Effect::StealCard));
        }
        // Legality of the pairing is the rule layer's concern; any other
        // pairing that reaches this point has no further consequence.
        _ => {}
    }

    Ok(())
}

fn steal_card(game: &mut Game, id: CardId) {
    game.update(id, Location::PlayerHand(game.current_player_up()));
    game.set_phase(Phase::WaitingForPlay);
}

fn end_turn_next_player(game: &mut Game) {
    // Mermaid collection is an instant win, checked before anything else.
    if game.current_player_has_four_mermaids() {
        game.set_phase(Phase::EndGame);
        return;
    }

    // When play would return to the player who called last chance, the
    // round ends instead and the deferred scoring pass runs now.
    let next = game.next_player_up();
    if game.current_round().last_chance_caller() == Some(next) {
        let points = score::round_points_for_last_chance(game, next);
        game.set_round_points(points);
        game.set_phase(Phase::RoundEnded(EndRoundKind::LastChance));
        return;
    }

    game.advance_player();
    game.set_phase(Phase::WaitingForDraw);
}

fn end_round_stop(game: &mut Game) {
    let caller = game.current_player_up();
    game.set_round_state(RoundState::EndReason {
        kind: EndRoundKind::Stop,
        caller,
    });
    let points = score::round_points_for_stop(game);
    game.set_round_points(points);
    game.set_phase(Phase::RoundEnded(EndRoundKind::Stop));
}

fn end_round_last_chance(game: &mut Game) {
    let caller = game.current_player_up();
    game.set_round_state(RoundState::EndReason {
        kind: EndRoundKind::LastChance,
        caller,
    });
    game.advance_player();
    game.set_phase(Phase::WaitingForDraw);
}

fn complete_round(game: &mut Game) {
    game.set_round_state(RoundState::Complete);
    if game.winner().is_some() {
        game.set_phase(Phase::EndGame);
        return;
    }
    game.push_round();
    game.advance_player();
    game.set_phase(Phase::WaitingForDraw);
}
