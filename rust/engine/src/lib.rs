//! # seasalt-engine: Card Game Rule Engine Core
//!
//! A deterministic, single-threaded rule engine for a turn-based card game.
//! Tracks game state, validates player and system actions against the game
//! rules, executes them, and computes round and match scoring.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card identity (kind, color), locations, and the standard catalog
//! - [`deck`] - Location-tracking deck with derived pile and hand views, plus
//!   the deterministic ChaCha20 shuffler
//! - [`player`] - Seats, in-game player counts, and turn order
//! - [`round`] - Round lifecycle and per-round points
//! - [`game`] - The aggregate root: deck, players, phase, round history
//! - [`actions`] - The symbolic action tags the engine resolves
//! - [`rules`] - Pure validation predicates, one per action
//! - [`commands`] - State transitions, the only mutation site
//! - [`score`] - Scoring passes and match-winner determination
//! - [`engine`] - Orchestration and dependency injection
//! - [`events`] - Fan-out event bus for state-change notifications
//! - [`logger`] - JSONL game/action history records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use seasalt_engine::actions::{EngineAction, SystemAction, UserAction};
//! use seasalt_engine::engine::{DataProvider, GameEngine};
//! use seasalt_engine::game::Phase;
//! use seasalt_engine::player::InGameCount;
//!
//! let mut engine = GameEngine::new(DataProvider::standard(42));
//!
//! engine
//!     .perform_action(EngineAction::System(SystemAction::CreateGame {
//!         players: InGameCount::Two,
//!     }))
//!     .expect("create game");
//! assert_eq!(engine.game().phase(), Phase::WaitingForDraw);
//!
//! // The current player draws two cards from the draw pile.
//! engine
//!     .perform_action(EngineAction::User(UserAction::DrawPilePickUp))
//!     .expect("draw");
//! assert_eq!(engine.game().phase(), Phase::WaitingForDiscard);
//! ```
//!
//! ## Scoring
//!
//! Scoring passes are stateless functions over card snapshots:
//!
//! ```rust
//! use seasalt_engine::cards::{Card, Color, Duo, Kind};
//! use seasalt_engine::score;
//!
//! let hand = [
//!     Card::new(1, Kind::Duo(Duo::Crab), Color::Black),
//!     Card::new(2, Kind::Duo(Duo::Crab), Color::Yellow),
//! ];
//! assert_eq!(score::stop_score(&hand), 1);
//! ```
//!
//! ## Legality Probing
//!
//! Actions that fail validation are silently ignored by
//! [`engine::GameEngine::perform_action`]; callers that need to distinguish
//! "not legal right now" query [`engine::GameEngine::action_is_playable`]
//! through the same action tags.

pub mod actions;
pub mod cards;
pub mod commands;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod logger;
pub mod player;
pub mod round;
pub mod rules;
pub mod score;
