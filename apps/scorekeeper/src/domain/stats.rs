//! Rolling per-player statistics, updated as each round completes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, PlayerId, PlayerRoundScore};

/// Aggregates for one player. "No data yet" is an absent value, never a
/// numeric sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Arithmetic mean across every round the player has an entry for;
    /// 0.0 when none (never NaN).
    pub avg_score: f64,
    /// Lowest round score seen.
    pub best_round: Option<i32>,
    /// Highest round score seen.
    pub worst_round: Option<i32>,
    pub max_round_score: Option<i32>,
    /// Consecutive rounds at the round minimum, ties included.
    pub current_low_streak: u32,
    pub low_streak: u32,
    /// Consecutive rounds at the round maximum, ties included.
    pub current_high_streak: u32,
    pub high_streak: u32,
    pub rounds_played: u32,
    /// Times at the round minimum.
    pub rounds_won: u32,
    /// Rounds scored exactly 0.
    pub perfect_rounds: u32,
    /// Length in rounds of the current strictly-decreasing run; 0 outside
    /// a run, 2 at the first decrease.
    pub current_improvement_streak: u32,
    pub improvement_streak: u32,
    pub last_round_score: Option<i32>,
    /// Ever held the round maximum (sticky).
    pub had_highest_score: bool,
    /// Ever the unique holder of the maximum cumulative total (sticky).
    pub was_in_last_place: bool,
}

/// Extremes of the most recently recorded round, across all of its score
/// lines. Ties count for every tied player.
pub(crate) struct RoundExtremes {
    pub min: i32,
    pub max: i32,
}

pub(crate) fn round_extremes(scores: &[PlayerRoundScore]) -> Option<RoundExtremes> {
    let min = scores.iter().map(|s| s.round_score).min()?;
    let max = scores.iter().map(|s| s.round_score).max()?;
    Some(RoundExtremes { min, max })
}

/// The unique holder of the maximum cumulative total, if exactly one player
/// holds it.
pub(crate) fn unique_total_leader(state: &GameState) -> Option<PlayerId> {
    let max_total = state.players.iter().map(|p| p.total_score).max()?;
    let mut at_max = state.players.iter().filter(|p| p.total_score == max_total);
    match (at_max.next(), at_max.next()) {
        (Some(only), None) => Some(only.id),
        _ => None,
    }
}

/// Update every player's aggregates from the just-finished round (the last
/// entry in `state.rounds`). Reads the round history that already includes
/// that round, per the fixed ordering of the finish-round operation.
pub fn update_after_round(state: &mut GameState) {
    let Some(round) = state.rounds.last() else {
        return;
    };
    let Some(extremes) = round_extremes(&round.scores) else {
        return;
    };
    let scores_by_id: HashMap<PlayerId, i32> = round
        .scores
        .iter()
        .map(|s| (s.player_id, s.round_score))
        .collect();

    // Per-player (sum, count) across the full history, for the mean.
    let mut history: HashMap<PlayerId, (i64, u32)> = HashMap::new();
    for past in &state.rounds {
        for line in &past.scores {
            let entry = history.entry(line.player_id).or_insert((0, 0));
            entry.0 += i64::from(line.round_score);
            entry.1 += 1;
        }
    }

    let leader = unique_total_leader(state);

    for player in &mut state.players {
        let Some(&score) = scores_by_id.get(&player.id) else {
            continue;
        };
        let stats = &mut player.stats;

        stats.rounds_played += 1;
        if let Some(&(sum, count)) = history.get(&player.id) {
            if count > 0 {
                stats.avg_score = sum as f64 / f64::from(count);
            }
        }

        stats.best_round = Some(stats.best_round.map_or(score, |b| b.min(score)));
        stats.worst_round = Some(stats.worst_round.map_or(score, |w| w.max(score)));
        stats.max_round_score = Some(stats.max_round_score.map_or(score, |m| m.max(score)));

        let is_lowest = score == extremes.min;
        let is_highest = score == extremes.max;

        if is_lowest {
            stats.current_low_streak += 1;
            stats.rounds_won += 1;
        } else {
            stats.current_low_streak = 0;
        }
        stats.low_streak = stats.low_streak.max(stats.current_low_streak);

        if is_highest {
            stats.current_high_streak += 1;
            stats.had_highest_score = true;
        } else {
            stats.current_high_streak = 0;
        }
        stats.high_streak = stats.high_streak.max(stats.current_high_streak);

        if score == 0 {
            stats.perfect_rounds += 1;
        }

        // The improvement streak counts the rounds in the improving run,
        // so the first strict decrease makes a run of two.
        match stats.last_round_score {
            Some(prev) if score < prev => {
                stats.current_improvement_streak = stats.current_improvement_streak.max(1) + 1;
                stats.improvement_streak =
                    stats.improvement_streak.max(stats.current_improvement_streak);
            }
            _ => stats.current_improvement_streak = 0,
        }
        stats.last_round_score = Some(score);

        if leader == Some(player.id) {
            stats.was_in_last_place = true;
        }
    }
}
