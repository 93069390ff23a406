//! Achievement catalog and rule evaluation.
//!
//! Rules run against just-updated statistics plus round context. A rule
//! fires at most once per player per game: the existing set is checked
//! before anything is added, so sets only ever grow.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::state::{GameState, PlayerEntry, PlayerId, Round};
use crate::domain::stats;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Achievement {
    #[serde(rename = "Perfect Round")]
    PerfectRound,
    #[serde(rename = "Hot Streak")]
    HotStreak,
    #[serde(rename = "Ice Cold")]
    IceCold,
    #[serde(rename = "Consistency King")]
    ConsistencyKing,
    #[serde(rename = "Comeback Kid")]
    ComebackKid,
    #[serde(rename = "Early Bird")]
    EarlyBird,
    #[serde(rename = "Rising Star")]
    RisingStar,
    #[serde(rename = "Speed Demon")]
    SpeedDemon,
    #[serde(rename = "Sharpshooter")]
    Sharpshooter,
    #[serde(rename = "Marathon Runner")]
    MarathonRunner,
    #[serde(rename = "Crown Master")]
    CrownMaster,
    #[serde(rename = "Closer")]
    Closer,
    #[serde(rename = "Survivor")]
    Survivor,
    #[serde(rename = "Underdog")]
    Underdog,
    #[serde(rename = "Steady Hand")]
    SteadyHand,
}

impl Achievement {
    pub const ALL: [Achievement; 15] = [
        Achievement::PerfectRound,
        Achievement::HotStreak,
        Achievement::IceCold,
        Achievement::ConsistencyKing,
        Achievement::ComebackKid,
        Achievement::EarlyBird,
        Achievement::RisingStar,
        Achievement::SpeedDemon,
        Achievement::Sharpshooter,
        Achievement::MarathonRunner,
        Achievement::CrownMaster,
        Achievement::Closer,
        Achievement::Survivor,
        Achievement::Underdog,
        Achievement::SteadyHand,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Achievement::PerfectRound => "Perfect Round",
            Achievement::HotStreak => "Hot Streak",
            Achievement::IceCold => "Ice Cold",
            Achievement::ConsistencyKing => "Consistency King",
            Achievement::ComebackKid => "Comeback Kid",
            Achievement::EarlyBird => "Early Bird",
            Achievement::RisingStar => "Rising Star",
            Achievement::SpeedDemon => "Speed Demon",
            Achievement::Sharpshooter => "Sharpshooter",
            Achievement::MarathonRunner => "Marathon Runner",
            Achievement::CrownMaster => "Crown Master",
            Achievement::Closer => "Closer",
            Achievement::Survivor => "Survivor",
            Achievement::Underdog => "Underdog",
            Achievement::SteadyHand => "Steady Hand",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::PerfectRound => "Score zero in a round",
            Achievement::HotStreak => "Lowest score three rounds in a row",
            Achievement::IceCold => "Lowest score five rounds in a row",
            Achievement::ConsistencyKing => "Average under 10 after at least three rounds",
            Achievement::ComebackKid => "Lowest this round after being highest last round",
            Achievement::EarlyBird => "Lowest score in the very first round",
            Achievement::RisingStar => "Improve your score three rounds running",
            Achievement::SpeedDemon => "Three perfect rounds in one game",
            Achievement::Sharpshooter => "Five perfect rounds in one game",
            Achievement::MarathonRunner => "Finish a full game",
            Achievement::CrownMaster => "Win the game",
            Achievement::Closer => "Take the final round",
            Achievement::Survivor => "Never the highest scorer in any round",
            Achievement::Underdog => "Win after sitting in last place",
            Achievement::SteadyHand => "Never score above 20 in any round",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Achievement::PerfectRound => "🎯",
            Achievement::HotStreak => "🔥",
            Achievement::IceCold => "🧊",
            Achievement::ConsistencyKing => "👑",
            Achievement::ComebackKid => "💪",
            Achievement::EarlyBird => "🐦",
            Achievement::RisingStar => "⭐",
            Achievement::SpeedDemon => "⚡",
            Achievement::Sharpshooter => "🏹",
            Achievement::MarathonRunner => "🏃",
            Achievement::CrownMaster => "🏆",
            Achievement::Closer => "🔒",
            Achievement::Survivor => "🛡️",
            Achievement::Underdog => "🐕",
            Achievement::SteadyHand => "🤝",
        }
    }
}

/// Newly unlocked achievements per player, in evaluation order.
pub type Unlocked = BTreeMap<PlayerId, Vec<Achievement>>;

/// The unique holder of the maximum score within one recorded round, if
/// exactly one line holds it.
fn unique_round_leader(round: &Round) -> Option<PlayerId> {
    let max = round.scores.iter().map(|s| s.round_score).max()?;
    let mut at_max = round.scores.iter().filter(|s| s.round_score == max);
    match (at_max.next(), at_max.next()) {
        (Some(only), None) => Some(only.player_id),
        _ => None,
    }
}

fn grant(player: &mut PlayerEntry, fired: Vec<Achievement>, out: &mut Unlocked) {
    for achievement in fired {
        if player.achievements.insert(achievement) {
            out.entry(player.id).or_default().push(achievement);
        }
    }
}

/// Per-round rules, evaluated immediately after the statistics update for
/// the last recorded round.
pub fn evaluate_round(state: &mut GameState) -> Unlocked {
    let mut unlocked = Unlocked::new();
    let Some(round) = state.rounds.last() else {
        return unlocked;
    };
    let Some(extremes) = stats::round_extremes(&round.scores) else {
        return unlocked;
    };
    let is_first_round = round.round_no == 1;
    let scores_by_id: HashMap<PlayerId, i32> = round
        .scores
        .iter()
        .map(|s| (s.player_id, s.round_score))
        .collect();
    // Comeback context comes from the recorded previous round, so scores of
    // since-removed players still count toward uniqueness.
    let previous_leader = state
        .rounds
        .len()
        .checked_sub(2)
        .and_then(|idx| state.rounds.get(idx))
        .and_then(unique_round_leader);

    for player in &mut state.players {
        let Some(&score) = scores_by_id.get(&player.id) else {
            continue;
        };
        let is_lowest = score == extremes.min;
        let stats = &player.stats;

        let mut fired = Vec::new();
        if score == 0 {
            fired.push(Achievement::PerfectRound);
        }
        if stats.current_low_streak == 3 {
            fired.push(Achievement::HotStreak);
        }
        if stats.current_low_streak == 5 {
            fired.push(Achievement::IceCold);
        }
        if stats.avg_score < 10.0 && stats.rounds_played >= 3 {
            fired.push(Achievement::ConsistencyKing);
        }
        if is_lowest && previous_leader == Some(player.id) {
            fired.push(Achievement::ComebackKid);
        }
        if is_first_round && is_lowest {
            fired.push(Achievement::EarlyBird);
        }
        if stats.current_improvement_streak >= 3 {
            fired.push(Achievement::RisingStar);
        }
        if stats.perfect_rounds >= 3 {
            fired.push(Achievement::SpeedDemon);
        }
        if stats.perfect_rounds >= 5 {
            fired.push(Achievement::Sharpshooter);
        }

        grant(player, fired, &mut unlocked);
    }
    unlocked
}

/// End-of-game rules, evaluated once over all players after the final
/// round's per-round rules.
pub fn evaluate_game_end(state: &mut GameState, winner: PlayerId, out: &mut Unlocked) {
    let final_round_min = state
        .rounds
        .last()
        .and_then(|r| r.scores.iter().map(|s| s.round_score).min());
    let final_scores: HashMap<PlayerId, i32> = state
        .rounds
        .last()
        .map(|r| {
            r.scores
                .iter()
                .map(|s| (s.player_id, s.round_score))
                .collect()
        })
        .unwrap_or_default();

    for player in &mut state.players {
        let stats = &player.stats;
        let mut fired = vec![Achievement::MarathonRunner];
        if player.id == winner {
            fired.push(Achievement::CrownMaster);
        }
        if let (Some(min), Some(&score)) = (final_round_min, final_scores.get(&player.id)) {
            if score == min {
                fired.push(Achievement::Closer);
            }
        }
        if !stats.had_highest_score {
            fired.push(Achievement::Survivor);
        }
        if player.id == winner && stats.was_in_last_place {
            fired.push(Achievement::Underdog);
        }
        if stats.max_round_score.is_some_and(|m| m <= 20) {
            fired.push(Achievement::SteadyHand);
        }

        grant(player, fired, out);
    }
}
