//! Persistent snapshot: the wire shape of a game.
//!
//! In memory, statistics and achievements live on the player record. The
//! stored form keeps them as maps keyed by player id, so the blob stays
//! plain data with no nesting surprises for other readers. Splitting and
//! rejoining happens only here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::achievements::Achievement;
use crate::domain::state::{GameState, Phase, PlayerEntry, PlayerId, Round};
use crate::domain::stats::PlayerStats;
use crate::domain::wild_card::WildCard;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub total_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub rounds: Vec<Round>,
    pub current_round: u8,
    pub current_wild_card: WildCard,
    pub current_dealer: Option<PlayerId>,
    pub player_stats: BTreeMap<PlayerId, PlayerStats>,
    pub achievements: BTreeMap<PlayerId, Vec<Achievement>>,
}

/// Produce the wire shape of the current state. Never panics.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    GameSnapshot {
        players: state
            .players
            .iter()
            .map(|p| PlayerSnapshot {
                id: p.id,
                name: p.name.clone(),
                total_score: p.total_score,
            })
            .collect(),
        rounds: state.rounds.clone(),
        current_round: state.current_round_no,
        current_wild_card: state.current_wild_card(),
        current_dealer: state.current_dealer,
        player_stats: state
            .players
            .iter()
            .map(|p| (p.id, p.stats.clone()))
            .collect(),
        achievements: state
            .players
            .iter()
            .map(|p| (p.id, p.achievements.iter().copied().collect()))
            .collect(),
    }
}

/// Rebuild in-memory state from a stored snapshot. Missing stats or
/// achievement entries default to empty; the game-over phase is derived
/// from the recorded rounds rather than trusted from the blob.
pub fn restore(snapshot: GameSnapshot) -> GameState {
    let GameSnapshot {
        players,
        rounds,
        current_round,
        current_wild_card: _,
        current_dealer,
        mut player_stats,
        mut achievements,
    } = snapshot;

    let players: Vec<PlayerEntry> = players
        .into_iter()
        .map(|p| PlayerEntry {
            id: p.id,
            name: p.name,
            total_score: p.total_score,
            stats: player_stats.remove(&p.id).unwrap_or_default(),
            achievements: achievements.remove(&p.id).unwrap_or_default().into_iter().collect(),
        })
        .collect();

    let finished = rounds
        .last()
        .is_some_and(|round| round.wild_card.is_final());
    let winner = finished
        .then(|| players.iter().min_by_key(|p| p.total_score).map(|p| p.id))
        .flatten();

    GameState {
        players,
        rounds,
        current_round_no: current_round.max(1),
        current_dealer,
        phase: match winner {
            Some(winner) => Phase::GameOver { winner },
            None => Phase::InProgress,
        },
    }
}
