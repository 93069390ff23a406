//! Game flow orchestration - bridges pure domain logic with snapshot
//! persistence.
//!
//! One command is applied fully (domain mutation, statistics, achievements,
//! save) before the next is accepted.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::domain::round_flow::{self, RoundOutcome};
use crate::domain::rules::MIN_PLAYERS;
use crate::domain::snapshot;
use crate::domain::state::{GameState, PlayerId};
use crate::domain::views::{self, PredictedStanding, Standing};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::store::SnapshotStore;

pub struct GameFlowService<S: SnapshotStore> {
    state: GameState,
    /// Draft inputs for the round being scored; never persisted.
    pending_scores: Option<HashMap<PlayerId, String>>,
    store: S,
}

impl<S: SnapshotStore> GameFlowService<S> {
    /// Explicit one-time initialization: restore the stored snapshot if one
    /// exists, otherwise start fresh.
    pub fn load_or_default(store: S) -> Self {
        let state = match store.load() {
            Some(saved) => {
                let state = snapshot::restore(saved);
                info!(
                    players = state.players.len(),
                    round = state.current_round_no,
                    "restored saved game"
                );
                state
            }
            None => GameState::new(),
        };
        Self {
            state,
            pending_scores: None,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pending_scores(&self) -> Option<&HashMap<PlayerId, String>> {
        self.pending_scores.as_ref()
    }

    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, AppError> {
        let id = self.state.add_player(name)?;
        debug!(%id, "player added");
        self.save();
        Ok(id)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), AppError> {
        self.state.remove_player(id)?;
        debug!(%id, "player removed");
        self.save();
        Ok(())
    }

    /// Open a scoring draft with a blank input per active player.
    pub fn begin_round_scoring(&mut self) -> Result<(), AppError> {
        if self.state.is_over() {
            return Err(DomainError::validation("game is already over").into());
        }
        if self.state.players.len() < MIN_PLAYERS {
            return Err(DomainError::validation(format!(
                "a round needs at least {MIN_PLAYERS} players"
            ))
            .into());
        }
        self.pending_scores = Some(
            self.state
                .players
                .iter()
                .map(|p| (p.id, String::new()))
                .collect(),
        );
        debug!(round = self.state.current_round_no, "round scoring begun");
        Ok(())
    }

    /// Update one player's draft input. Raw text is kept as typed;
    /// conversion happens at finish.
    pub fn update_pending_score(&mut self, id: PlayerId, raw: &str) -> Result<(), AppError> {
        if self.state.player(id).is_none() {
            return Err(
                DomainError::not_found(NotFoundKind::Player, format!("player {id}")).into(),
            );
        }
        let pending = self
            .pending_scores
            .as_mut()
            .ok_or_else(|| DomainError::validation("round scoring has not begun"))?;
        pending.insert(id, raw.to_string());
        Ok(())
    }

    /// Finish the current round with the drafted inputs (absent entries
    /// count as 0), then persist the result.
    pub fn finish_round(&mut self) -> Result<RoundOutcome, AppError> {
        let raw_scores = self.pending_scores.clone().unwrap_or_default();
        let outcome = round_flow::finish_round(&mut self.state, &raw_scores)?;
        // The draft survives a refused finish; it is spent only on success.
        self.pending_scores = None;
        match &outcome.game_over {
            Some(summary) => info!(
                round = outcome.round_no,
                winner = %summary.winner,
                "final round finished, game over"
            ),
            None => info!(
                round = outcome.round_no,
                next_round = self.state.current_round_no,
                wild_card = %self.state.current_wild_card(),
                "round finished"
            ),
        }
        self.save();
        Ok(outcome)
    }

    /// Back to fresh defaults; the stored snapshot is cleared as well.
    pub fn reset(&mut self) {
        info!("game reset");
        self.state = GameState::new();
        self.pending_scores = None;
        self.store.clear();
    }

    pub fn standings(&self) -> Vec<Standing> {
        views::standings(&self.state)
    }

    pub fn predicted_final_ranking(&self) -> Option<Vec<PredictedStanding>> {
        views::predicted_final_ranking(&self.state)
    }

    fn save(&mut self) {
        let snapshot = snapshot::snapshot(&self.state);
        self.store.save(&snapshot);
    }
}
