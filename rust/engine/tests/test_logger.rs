use std::collections::BTreeMap;
use std::fs;

use uuid::Uuid;

use seasalt_engine::actions::{EngineAction, UserAction};
use seasalt_engine::cards::{Card, Color, Duo, Kind};
use seasalt_engine::game::Game;
use seasalt_engine::logger::{ActionEntry, GameLogger, GameRecord};
use seasalt_engine::player::{InGameCount, PlayerId};
use seasalt_engine::round::{Round, RoundState};

fn sample_game() -> Game {
    let cards = vec![
        Card::new(1, Kind::Duo(Duo::Crab), Color::Black),
        Card::new(2, Kind::Duo(Duo::Fish), Color::Yellow),
    ];
    Game::new(Uuid::from_u128(99), cards, InGameCount::Two)
}

#[test]
fn action_entries_round_trip_through_jsonl() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("log").join("match.jsonl");

    let game = sample_game();
    let entry = ActionEntry::applied(&game, EngineAction::User(UserAction::DrawPilePickUp));

    let mut logger = GameLogger::create(&path).expect("create log");
    logger.write_action(&entry).expect("write");
    drop(logger);

    let contents = fs::read_to_string(&path).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);

    let parsed: ActionEntry = serde_json::from_str(lines[0]).expect("parse");
    assert_eq!(parsed.game_id, game.id());
    assert_eq!(parsed.action, entry.action);
    assert_eq!(parsed.phase, game.phase());
    assert_eq!(parsed.current_player_up, PlayerId::One);
    assert!(parsed.ts.is_some(), "the logger injects a timestamp");
}

#[test]
fn game_records_keep_rounds_points_and_winner() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("games.jsonl");

    let mut game = sample_game();
    let points: BTreeMap<PlayerId, i32> = [(PlayerId::One, 41), (PlayerId::Two, 12)]
        .into_iter()
        .collect();
    game.set_round_points(points.clone());
    game.set_round_state(RoundState::Complete);

    let mut record = GameRecord::of(&game);
    record.seed = Some(42);

    let mut logger = GameLogger::create(&path).expect("create log");
    logger.write_game(&record).expect("write");
    drop(logger);

    let contents = fs::read_to_string(&path).expect("read log");
    let parsed: GameRecord = serde_json::from_str(contents.trim()).expect("parse");

    assert_eq!(parsed.game_id, Uuid::from_u128(99));
    assert_eq!(parsed.rounds.len(), 1);
    assert_eq!(parsed.rounds[0].points, points);
    assert_eq!(parsed.winner, Some(PlayerId::One));
    assert_eq!(parsed.seed, Some(42));
    assert!(parsed.ts.is_some());
}

#[test]
fn records_append_one_line_each() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mixed.jsonl");

    let game = sample_game();
    let mut logger = GameLogger::create(&path).expect("create log");
    for action in [
        EngineAction::User(UserAction::DrawPilePickUp),
        EngineAction::User(UserAction::DiscardToLeftPile(1)),
        EngineAction::User(UserAction::StealCard(2)),
    ] {
        logger
            .write_action(&ActionEntry::applied(&game, action))
            .expect("write");
    }
    drop(logger);

    let contents = fs::read_to_string(&path).expect("read log");
    assert_eq!(contents.lines().count(), 3);
    for line in contents.lines() {
        let _: ActionEntry = serde_json::from_str(line).expect("each line parses alone");
    }
}

#[test]
fn a_preset_timestamp_is_preserved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ts.jsonl");

    let game = sample_game();
    let mut entry = ActionEntry::applied(&game, EngineAction::User(UserAction::DrawPilePickUp));
    entry.ts = Some("2026-01-02T03:04:05Z".to_string());

    let mut logger = GameLogger::create(&path).expect("create log");
    logger.write_action(&entry).expect("write");
    drop(logger);

    let contents = fs::read_to_string(&path).expect("read log");
    let parsed: ActionEntry = serde_json::from_str(contents.trim()).expect("parse");
    assert_eq!(parsed.ts.as_deref(), Some("2026-01-02T03:04:05Z"));
}

#[test]
fn empty_rounds_produce_an_empty_record() {
    let game = sample_game();
    let record = GameRecord::of(&game);

    assert_eq!(record.rounds.len(), 1);
    assert_eq!(record.rounds[0], Round::new());
    assert_eq!(record.winner, None);
}
