//! Round progression: raw-score conversion, history append, dealer and
//! wild-card advancement, and the game-end branch.
//!
//! Everything here is pure over `GameState`; the service layer owns
//! persistence and logging.

use std::collections::HashMap;

use crate::domain::achievements::{self, Unlocked};
use crate::domain::rules::MIN_PLAYERS;
use crate::domain::state::{GameState, Phase, PlayerId, PlayerRoundScore, Round};
use crate::domain::stats;
use crate::domain::views::{self, Standing};
use crate::errors::domain::DomainError;

/// Everything a caller needs to render the end of a round.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub round_no: u8,
    pub newly_unlocked: Unlocked,
    /// Present only when this was the Kings round.
    pub game_over: Option<GameOverSummary>,
}

#[derive(Debug, Clone)]
pub struct GameOverSummary {
    pub winner: PlayerId,
    pub winner_name: String,
    /// Final standings ascending by total; the winner is first.
    pub standings: Vec<Standing>,
}

/// Convert one raw score input with first-integer-prefix semantics:
/// leading whitespace is skipped, an optional sign is honored, then the
/// longest digit run is taken. Blank or unparseable input converts to 0,
/// `"12abc"` to 12. Out-of-range magnitudes saturate.
pub fn parse_raw_score(raw: &str) -> i32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let mut saw_digit = false;
    let mut value: i64 = 0;
    for c in digits.chars().take_while(char::is_ascii_digit) {
        saw_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(c as u8 - b'0'));
    }
    if !saw_digit {
        return 0;
    }
    let signed = if negative { -value } else { value };
    signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Finish the current round: apply scores, append history, update
/// statistics and achievements, then either end the game (Kings round) or
/// advance round number and dealer.
pub fn finish_round(
    state: &mut GameState,
    raw_scores: &HashMap<PlayerId, String>,
) -> Result<RoundOutcome, DomainError> {
    if state.is_over() {
        return Err(DomainError::validation("game is already over"));
    }
    if state.players.len() < MIN_PLAYERS {
        return Err(DomainError::validation(format!(
            "a round needs at least {MIN_PLAYERS} players"
        )));
    }

    let round_no = state.current_round_no;
    let wild_card = state.current_wild_card();
    let dealer_name = state.dealer_name();

    // Apply scores and snapshot each line before anything downstream runs.
    let mut scores = Vec::with_capacity(state.players.len());
    for player in &mut state.players {
        let round_score = raw_scores
            .get(&player.id)
            .map(|raw| parse_raw_score(raw))
            .unwrap_or(0);
        player.total_score += round_score;
        scores.push(PlayerRoundScore {
            player_id: player.id,
            name: player.name.clone(),
            round_score,
            total_score: player.total_score,
        });
    }
    state.rounds.push(Round {
        round_no,
        wild_card,
        dealer_name,
        scores,
    });

    // Statistics read the history that now includes this round, and the
    // achievement rules read the statistics just written.
    stats::update_after_round(state);
    let mut newly_unlocked = achievements::evaluate_round(state);

    if wild_card.is_final() {
        let (winner, winner_name) = winner_of(state)?;
        achievements::evaluate_game_end(state, winner, &mut newly_unlocked);
        state.phase = Phase::GameOver { winner };
        return Ok(RoundOutcome {
            round_no,
            newly_unlocked,
            game_over: Some(GameOverSummary {
                winner,
                winner_name,
                standings: views::standings(state),
            }),
        });
    }

    state.current_dealer = next_dealer(state);
    state.current_round_no += 1;
    Ok(RoundOutcome {
        round_no,
        newly_unlocked,
        game_over: None,
    })
}

/// Lowest total wins; ties go to the earliest-added player.
fn winner_of(state: &GameState) -> Result<(PlayerId, String), DomainError> {
    state
        .players
        .iter()
        .min_by_key(|p| p.total_score)
        .map(|p| (p.id, p.name.clone()))
        .ok_or_else(|| DomainError::validation("cannot determine a winner with no players"))
}

/// Next dealer, cyclic from the previous dealer's position in the player
/// list. A missing or removed dealer falls back to the first player.
fn next_dealer(state: &GameState) -> Option<PlayerId> {
    if state.players.is_empty() {
        return None;
    }
    let next_idx = state
        .current_dealer
        .and_then(|id| state.players.iter().position(|p| p.id == id))
        .map(|idx| (idx + 1) % state.players.len())
        .unwrap_or(0);
    Some(state.players[next_idx].id)
}
