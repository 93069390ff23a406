//! Domain layer: pure game logic types and helpers.

pub mod achievements;
pub mod round_flow;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod views;
pub mod wild_card;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_stats;
#[cfg(test)]
mod tests_views;

// Re-exports for ergonomics
pub use achievements::Achievement;
pub use round_flow::{finish_round, parse_raw_score, GameOverSummary, RoundOutcome};
pub use rules::{wild_card_for_round, MAX_ROUNDS, MIN_PLAYERS};
pub use state::{GameState, Phase, PlayerEntry, PlayerId, PlayerRoundScore, Round};
pub use stats::PlayerStats;
pub use wild_card::WildCard;
