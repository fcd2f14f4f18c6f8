//! Scoring passes: stateless functions over card snapshots and round
//! history.

use std::collections::BTreeMap;

use crate::cards::{Card, Collector, Color, Duo, Kind, Multiplier};
use crate::game::Game;
use crate::player::{InGameCount, PlayerId};
use crate::round::Round;

fn count_kind(cards: &[Card], kind: Kind) -> i32 {
    cards.iter().filter(|c| c.kind == kind).count() as i32
}

/// Duo pairs: one point per pair of the same standard kind, and one point
/// per swimmer matched against a shark.
pub fn duo_score(cards: &[Card]) -> i32 {
    let duo = |d: Duo| count_kind(cards, Kind::Duo(d));

    let standard = duo(Duo::Crab) / 2 + duo(Duo::Fish) / 2 + duo(Duo::Ship) / 2;
    let paired = duo(Duo::Swimmer).min(duo(Duo::Shark));
    standard + paired
}

// Shell and octopus follow their arithmetic progression for any count; the
// table caps in the source rules coincide with the copies that exist.
// Penguin and sailor are exact tables and score nothing outside them.
fn collector_points(kind: Collector, count: i32) -> i32 {
    if count == 0 {
        return 0;
    }
    match kind {
        Collector::Shell => (count - 1) * 2,
        Collector::Octopus => (count - 1) * 3,
        Collector::Penguin => match count {
            1 => 1,
            2 => 3,
            3 => 5,
            _ => 0,
        },
        Collector::Sailor => match count {
            1 => 0,
            2 => 5,
            _ => 0,
        },
    }
}

/// Collector cards: per-kind count lookup, summed across kinds.
pub fn collector_score(cards: &[Card]) -> i32 {
    [
        Collector::Shell,
        Collector::Octopus,
        Collector::Penguin,
        Collector::Sailor,
    ]
    .into_iter()
    .map(|kind| collector_points(kind, count_kind(cards, Kind::Collector(kind))))
    .sum()
}

fn multiplier_value(multiplier: Multiplier) -> i32 {
    match multiplier {
        Multiplier::Ship => 1,
        Multiplier::Fish => 1,
        Multiplier::Penguin => 2,
        Multiplier::Sailor => 3,
    }
}

fn matching_kind(multiplier: Multiplier) -> Kind {
    match multiplier {
        Multiplier::Ship => Kind::Duo(Duo::Ship),
        Multiplier::Fish => Kind::Duo(Duo::Fish),
        Multiplier::Penguin => Kind::Collector(Collector::Penguin),
        Multiplier::Sailor => Kind::Collector(Collector::Sailor),
    }
}

/// Multiplier cards: each one is worth its fixed value times the number of
/// matching base cards held. Holding two of the same multiplier doubles the
/// bonus.
pub fn multiplier_score(cards: &[Card]) -> i32 {
    cards
        .iter()
        .filter_map(|c| match c.kind {
            Kind::Multiplier(m) => Some(m),
            _ => None,
        })
        .map(|m| multiplier_value(m) * count_kind(cards, matching_kind(m)))
        .sum()
}

/// Sizes of the non-mermaid, non-white color groups, largest first.
fn color_group_sizes(cards: &[Card]) -> Vec<i32> {
    let mut counts: BTreeMap<Color, i32> = BTreeMap::new();
    for card in cards {
        if card.kind.is_mermaid() || card.color == Color::White {
            continue;
        }
        *counts.entry(card.color).or_insert(0) += 1;
    }
    let mut sizes: Vec<i32> = counts.into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

/// Mermaids: each mermaid held converts into the size of the next-largest
/// color group; ranks beyond the available groups contribute nothing.
pub fn mermaid_score(cards: &[Card]) -> i32 {
    let mermaids = cards.iter().filter(|c| c.kind == Kind::Mermaid).count();
    color_group_sizes(cards).into_iter().take(mermaids).sum()
}

/// The size of the single largest color group, used by last-chance scoring.
pub fn color_bonus(cards: &[Card]) -> i32 {
    color_group_sizes(cards).first().copied().unwrap_or(0)
}

/// A player's full round score at the moment the round stops.
pub fn stop_score(cards: &[Card]) -> i32 {
    if cards.is_empty() {
        return 0;
    }
    duo_score(cards) + collector_score(cards) + multiplier_score(cards) + mermaid_score(cards)
}

/// Stop scores for every seat, over each player's hand and played effects.
pub fn round_points_for_stop(game: &Game) -> BTreeMap<PlayerId, i32> {
    game.players_in_game()
        .player_ids()
        .iter()
        .map(|&player| (player, stop_score(&game.all_cards_of(player))))
        .collect()
}

/// Last-chance scoring. The caller wins the bet when their stop score is at
/// least every other player's (ties win). The bet winner keeps their stop
/// score plus their color bonus while everyone else is reduced to bonus
/// only; if the bet is lost the caller keeps only the bonus and the others
/// keep their stop scores.
pub fn round_points_for_last_chance(game: &Game, caller: PlayerId) -> BTreeMap<PlayerId, i32> {
    let stops = round_points_for_stop(game);
    let caller_stop = stops.get(&caller).copied().unwrap_or(0);
    let caller_wins = stops
        .iter()
        .filter(|&(&player, _)| player != caller)
        .all(|(_, &stop)| caller_stop >= stop);

    stops
        .iter()
        .map(|(&player, &stop)| {
            let bonus = color_bonus(&game.all_cards_of(player));
            let points = match (player == caller, caller_wins) {
                (true, true) => stop + bonus,
                (true, false) => bonus,
                (false, true) => bonus,
                (false, false) => stop,
            };
            (player, points)
        })
        .collect()
}

/// Per-player totals over the completed rounds.
pub fn total_points(rounds: &[Round]) -> BTreeMap<PlayerId, i32> {
    let mut totals: BTreeMap<PlayerId, i32> = BTreeMap::new();
    for round in rounds.iter().filter(|r| r.is_complete()) {
        for (&player, &points) in &round.points {
            *totals.entry(player).or_insert(0) += points;
        }
    }
    totals
}

/// Match-winner determination. A winner exists only once the best total
/// reaches the player-count threshold. Ties at the top are broken by
/// scanning completed rounds from most recent to earliest, keeping only the
/// round's top scorers, until a single candidate remains; a tie that
/// survives every round leaves the match without a winner.
pub fn match_winner(rounds: &[Round], players: InGameCount) -> Option<PlayerId> {
    let totals = total_points(rounds);
    let total_of = |player: PlayerId| totals.get(&player).copied().unwrap_or(0);

    let best = players.player_ids().iter().map(|&p| total_of(p)).max()?;
    if best < players.winning_threshold() {
        return None;
    }

    let mut candidates: Vec<PlayerId> = players
        .player_ids()
        .iter()
        .copied()
        .filter(|&p| total_of(p) == best)
        .collect();

    if candidates.len() == 1 {
        return Some(candidates[0]);
    }

    for round in rounds.iter().filter(|r| r.is_complete()).rev() {
        let round_best = candidates
            .iter()
            .map(|&p| round.points_for(p))
            .max()
            .unwrap_or(0);
        candidates.retain(|&p| round.points_for(p) == round_best);
        if candidates.len() == 1 {
            return Some(candidates[0]);
        }
    }

    None
}
