use uuid::Uuid;

use crate::actions::{EngineAction, SystemAction};
use crate::cards::{standard_deck, Card, Location};
use crate::commands;
use crate::deck::{Pile, Shuffler};
use crate::errors::GameError;
use crate::events::Event;
use crate::game::{Game, GameId, Phase};
use crate::player::InGameCount;
use crate::rules;

/// The engine's external collaborators, injected at construction.
///
/// Every field is public so a host (or a test) can replace individual hooks
/// after starting from [`DataProvider::standard`]. Hooks are synchronous and
/// invoked inline; the event sink must never block.
pub struct DataProvider {
    /// Supplies the playable card catalog.
    pub deck: Box<dyn FnMut() -> Vec<Card> + Send>,
    /// Produces a fresh match id on game creation.
    pub new_game_id: Box<dyn FnMut() -> GameId + Send>,
    /// Receives the outgoing game snapshot when a new game supersedes it.
    pub save_game: Box<dyn FnMut(&Game) + Send>,
    /// Permutes the catalog for a new game.
    pub shuffle_cards: Box<dyn FnMut(Vec<Card>) -> Vec<Card> + Send>,
    /// Receives a notification after every successfully applied action.
    pub send_event: Box<dyn FnMut(Event) + Send>,
}

impl DataProvider {
    /// Standard wiring: the built-in catalog, v4 UUIDs, a seeded shuffler,
    /// and no-op persistence and event hooks.
    pub fn standard(seed: u64) -> Self {
        let mut shuffler = Shuffler::new_with_seed(seed);
        Self {
            deck: Box::new(standard_deck),
            new_game_id: Box::new(Uuid::new_v4),
            save_game: Box::new(|_| {}),
            shuffle_cards: Box::new(move |mut cards| {
                shuffler.shuffle(&mut cards);
                cards
            }),
            send_event: Box::new(|_| {}),
        }
    }
}

/// Orchestrates one live game: resolves action tags to their rule and
/// command, validates, executes, and notifies the event sink.
///
/// # Examples
///
/// ```
/// use seasalt_engine::actions::{EngineAction, SystemAction, UserAction};
/// use seasalt_engine::engine::{DataProvider, GameEngine};
/// use seasalt_engine::player::InGameCount;
///
/// let mut engine = GameEngine::new(DataProvider::standard(42));
/// engine
///     .perform_action(EngineAction::System(SystemAction::CreateGame {
///         players: InGameCount::Two,
///     }))
///     .expect("create game");
///
/// // Probe legality without executing.
/// assert!(engine.action_is_playable(&EngineAction::User(UserAction::DrawPilePickUp)));
/// ```
pub struct GameEngine {
    data_provider: DataProvider,
    /// Master card list, fetched once from the deck supply.
    cards: Vec<Card>,
    game: Game,
}

impl GameEngine {
    /// Builds an engine around its collaborators. The live game starts as a
    /// placeholder until the first `CreateGame` action runs.
    pub fn new(mut data_provider: DataProvider) -> Self {
        let cards = (data_provider.deck)();
        Self {
            data_provider,
            cards,
            game: Game::placeholder(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Whether `action`'s rule passes on the current state. This is the
    /// query half of the API; [`GameEngine::perform_action`] silently skips
    /// actions this would reject.
    pub fn action_is_playable(&self, action: &EngineAction) -> bool {
        match action {
            EngineAction::User(user) => rules::validate(&self.game, user),
            // Creating a game must stay legal in every phase, or a finished
            // match could never be superseded.
            EngineAction::System(SystemAction::CreateGame { .. }) => true,
        }
    }

    /// Validates and executes `action`. An action whose rule fails is
    /// ignored: no mutation, no event, `Ok(())`. Command-level failures are
    /// propagated unchanged.
    pub fn perform_action(&mut self, action: EngineAction) -> Result<(), GameError> {
        if !self.action_is_playable(&action) {
            return Ok(());
        }

        match action {
            EngineAction::User(user) => commands::execute(&mut self.game, &user)?,
            EngineAction::System(SystemAction::CreateGame { players }) => {
                self.create_game(players)?
            }
        }

        (self.data_provider.send_event)(Event::UpdatedGame(self.game.clone()));
        Ok(())
    }

    /// Persists the outgoing game, then replaces it with a freshly shuffled
    /// one: a new id, every card on the draw pile, and the top two cards
    /// seeding the left and right discard piles.
    fn create_game(&mut self, players: InGameCount) -> Result<(), GameError> {
        (self.data_provider.save_game)(&self.game);

        let id = (self.data_provider.new_game_id)();
        let cards = (self.data_provider.shuffle_cards)(self.cards.clone());
        let mut game = Game::new(id, cards, players);

        let seeds = game.draw(Pile::Draw)?;
        if let Some(&first) = seeds.first() {
            game.update(first, Location::Pile(Pile::DiscardLeft));
        }
        if let Some(&second) = seeds.get(1) {
            game.update(second, Location::Pile(Pile::DiscardRight));
        }
        game.set_phase(Phase::WaitingForDraw);

        self.game = game;
        Ok(())
    }
}
