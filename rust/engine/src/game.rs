use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cards::{Card, CardId, Kind, Location};
use crate::deck::{Deck, Pile};
use crate::errors::GameError;
use crate::player::{InGameCount, Player, PlayerId};
use crate::round::{EndRoundKind, Round, RoundState};
use crate::score;

/// Identifier of a match, supplied by the injected id generator.
pub type GameId = Uuid;

/// Effects that pause normal play until the player makes a choice.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Effect {
    PickUpDiscard,
    StealCard,
}

/// The match's control state. Exactly one phase holds at a time and it is
/// the sole gate deciding which actions are legal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Phase {
    WaitingForStart,
    WaitingForDraw,
    WaitingForDiscard,
    WaitingForPlay,
    ResolvingEffect(Effect),
    RoundEnded(EndRoundKind),
    EndGame,
}

/// Aggregate root of a match: deck, players, phase, current player and the
/// round history. Mutated exclusively through validated actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    players: BTreeMap<PlayerId, Player>,
    players_in_game: InGameCount,
    deck: Deck,
    phase: Phase,
    current_player_up: PlayerId,
    rounds: Vec<Round>,
}

impl Game {
    /// Creates a match with every card on the draw pile, seats filled for
    /// the requested count, and one round in progress.
    pub fn new(id: GameId, cards: Vec<Card>, players_in_game: InGameCount) -> Self {
        let mut deck = Deck::new();
        deck.load(cards);

        let players = players_in_game
            .player_ids()
            .iter()
            .map(|&id| (id, Player::new(id)))
            .collect();

        Self {
            id,
            players,
            players_in_game,
            deck,
            phase: Phase::WaitingForStart,
            current_player_up: PlayerId::One,
            rounds: vec![Round::new()],
        }
    }

    /// Empty stand-in used by the engine before the first game is created.
    pub fn placeholder() -> Self {
        Self::new(Uuid::nil(), Vec::new(), InGameCount::Two)
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn players(&self) -> &BTreeMap<PlayerId, Player> {
        &self.players
    }

    pub fn players_in_game(&self) -> InGameCount {
        self.players_in_game
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_equals(&self, phase: Phase) -> bool {
        self.phase == phase
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub fn current_player_up(&self) -> PlayerId {
        self.current_player_up
    }

    /// The seat that would play next under normal rotation.
    pub fn next_player_up(&self) -> PlayerId {
        self.current_player_up.next(self.players_in_game)
    }

    pub fn advance_player(&mut self) {
        self.current_player_up = self.next_player_up();
    }

    // Deck pass-throughs used by commands.

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.card(id)
    }

    pub fn update(&mut self, id: CardId, location: Location) {
        self.deck.update(id, location);
    }

    pub fn draw(&self, pile: Pile) -> Result<Vec<CardId>, GameError> {
        self.deck.draw(pile)
    }

    pub fn cards_in_hand(&self, player: PlayerId) -> Vec<Card> {
        self.deck.cards_in_hand(player)
    }

    pub fn all_cards_of(&self, player: PlayerId) -> Vec<Card> {
        self.deck.all_cards_of(player)
    }

    // Round bookkeeping. The rounds list is never empty, so the unwraps on
    // the last element cannot fail.

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn current_round(&self) -> &Round {
        self.rounds.last().expect("a game always has a round")
    }

    pub fn current_round_mut(&mut self) -> &mut Round {
        self.rounds.last_mut().expect("a game always has a round")
    }

    pub fn set_round_state(&mut self, state: RoundState) {
        self.current_round_mut().state = state;
    }

    pub fn set_round_points(&mut self, points: BTreeMap<PlayerId, i32>) {
        self.current_round_mut().points = points;
    }

    /// Opens the next scoring epoch.
    pub fn push_round(&mut self) {
        self.rounds.push(Round::new());
    }

    /// Instant-win check run on every end of turn.
    pub fn current_player_has_four_mermaids(&self) -> bool {
        self.cards_in_hand(self.current_player_up)
            .iter()
            .filter(|c| c.kind == Kind::Mermaid)
            .count()
            == 4
    }

    /// The match winner over all completed rounds, if the threshold has
    /// been reached and tie-breaking settles on one player.
    pub fn winner(&self) -> Option<PlayerId> {
        score::match_winner(&self.rounds, self.players_in_game)
    }
}
