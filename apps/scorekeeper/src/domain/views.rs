//! Read-only projections for the UI collaborator. Nothing here mutates
//! state; everything recomputes from `GameState` on demand.

use crate::domain::achievements::Achievement;
use crate::domain::rules::MAX_ROUNDS;
use crate::domain::state::{GameState, PlayerEntry, PlayerId, PlayerRoundScore, Round};

/// One row of the score table.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub total_score: i32,
}

/// Players ascending by total score; insertion order breaks ties.
pub fn standings(state: &GameState) -> Vec<Standing> {
    let mut rows: Vec<Standing> = state
        .players
        .iter()
        .map(|p| Standing {
            player_id: p.id,
            name: p.name.clone(),
            total_score: p.total_score,
        })
        .collect();
    rows.sort_by_key(|row| row.total_score);
    rows
}

/// Round history, newest first.
pub fn round_history(state: &GameState) -> Vec<&Round> {
    state.rounds.iter().rev().collect()
}

/// One round's score lines ascending by round score.
pub fn sorted_round_scores(round: &Round) -> Vec<&PlayerRoundScore> {
    let mut lines: Vec<&PlayerRoundScore> = round.scores.iter().collect();
    lines.sort_by_key(|line| line.round_score);
    lines
}

/// An unlocked achievement joined with its static catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementView {
    pub achievement: Achievement,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub fn achievement_list(player: &PlayerEntry) -> Vec<AchievementView> {
    player
        .achievements
        .iter()
        .map(|&achievement| AchievementView {
            achievement,
            title: achievement.title(),
            description: achievement.description(),
            icon: achievement.icon(),
        })
        .collect()
}

/// A projected final total for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictedStanding {
    pub player_id: PlayerId,
    pub name: String,
    pub current_total: i32,
    pub predicted_total: i32,
}

/// Linear extrapolation of each player's recent form: mean of their most
/// recent 3 round scores times the remaining rounds, on top of the current
/// total, ascending. `None` until at least 3 rounds exist.
pub fn predicted_final_ranking(state: &GameState) -> Option<Vec<PredictedStanding>> {
    if state.rounds.len() < 3 {
        return None;
    }
    let remaining = MAX_ROUNDS as usize - state.rounds.len().min(MAX_ROUNDS as usize);

    let mut rows: Vec<PredictedStanding> = state
        .players
        .iter()
        .map(|player| {
            let recent: Vec<i32> = state
                .rounds
                .iter()
                .rev()
                .filter_map(|round| {
                    round
                        .scores
                        .iter()
                        .find(|line| line.player_id == player.id)
                        .map(|line| line.round_score)
                })
                .take(3)
                .collect();
            let projected = if recent.is_empty() {
                0.0
            } else {
                let mean = recent.iter().map(|&s| f64::from(s)).sum::<f64>() / recent.len() as f64;
                mean * remaining as f64
            };
            PredictedStanding {
                player_id: player.id,
                name: player.name.clone(),
                current_total: player.total_score,
                predicted_total: player.total_score + projected.round() as i32,
            }
        })
        .collect();
    rows.sort_by_key(|row| row.predicted_total);
    Some(rows)
}
