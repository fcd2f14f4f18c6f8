use serde::{Deserialize, Serialize};

use crate::actions::EngineAction;
use crate::game::{Game, GameId, Phase};
use crate::player::PlayerId;
use crate::round::Round;

/// Records one applied action and the state it left behind.
/// Serialized to JSONL for game history storage and replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub game_id: GameId,
    pub action: EngineAction,
    /// Phase after the action was applied.
    pub phase: Phase,
    /// Seat up after the action was applied.
    pub current_player_up: PlayerId,
    /// Timestamp (RFC3339); injected by the logger when missing.
    #[serde(default)]
    pub ts: Option<String>,
}

impl ActionEntry {
    pub fn applied(game: &Game, action: EngineAction) -> Self {
        Self {
            game_id: game.id(),
            action,
            phase: game.phase(),
            current_player_up: game.current_player_up(),
            ts: None,
        }
    }
}

/// Snapshot of a finished or superseded game: the round history with its
/// points and the winner, if the match produced one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: GameId,
    pub rounds: Vec<Round>,
    pub winner: Option<PlayerId>,
    /// RNG seed used for shuffling, when known (enables deterministic replay).
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    pub fn of(game: &Game) -> Self {
        Self {
            game_id: game.id(),
            rounds: game.rounds().to_vec(),
            winner: game.winner(),
            seed: None,
            ts: None,
        }
    }
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends game and action records to a log file, one JSON object per line.
///
/// The logger is an external consumer of engine state: hosts wire it into
/// the `save_game` or `send_event` hooks, or drive it directly.
pub struct GameLogger {
    writer: BufWriter<File>,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write_action(&mut self, entry: &ActionEntry) -> std::io::Result<()> {
        let mut entry = entry.clone();
        if entry.ts.is_none() {
            entry.ts = Some(now_rfc3339());
        }
        self.write_line(&entry)
    }

    pub fn write_game(&mut self, record: &GameRecord) -> std::io::Result<()> {
        let mut record = record.clone();
        if record.ts.is_none() {
            record.ts = Some(now_rfc3339());
        }
        self.write_line(&record)
    }

    fn write_line<T: Serialize>(&mut self, record: &T) -> std::io::Result<()> {
        let line = serde_json::to_string(record).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
