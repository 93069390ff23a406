use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::achievements::Achievement;
use crate::domain::rules::wild_card_for_round;
use crate::domain::stats::PlayerStats;
use crate::domain::wild_card::WildCard;
use crate::errors::domain::{DomainError, NotFoundKind};

pub type PlayerId = Uuid;

/// Dealer label recorded when a round finishes with no dealer set.
pub const NO_DEALER_NAME: &str = "Not specified";

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Rounds are still being played.
    InProgress,
    /// The Kings round has been scored; no further round exists.
    GameOver { winner: PlayerId },
}

/// One player plus everything derived for them. Statistics and achievements
/// live on the same record as the identity so the three can never drift.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub name: String,
    /// Cumulative score across all recorded rounds. Mutated only when a
    /// round finishes.
    pub total_score: i32,
    pub stats: PlayerStats,
    pub achievements: BTreeSet<Achievement>,
}

impl PlayerEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            total_score: 0,
            stats: PlayerStats::default(),
            achievements: BTreeSet::new(),
        }
    }
}

/// A player's score line within a recorded round: a snapshot, not a live
/// reference to the player record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRoundScore {
    pub player_id: PlayerId,
    pub name: String,
    pub round_score: i32,
    /// Cumulative total as of this round.
    pub total_score: i32,
}

/// A completed round. Appended once to history, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub round_no: u8,
    pub wild_card: WildCard,
    pub dealer_name: String,
    pub scores: Vec<PlayerRoundScore>,
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Insertion-ordered player records.
    pub players: Vec<PlayerEntry>,
    /// Completed rounds, oldest first.
    pub rounds: Vec<Round>,
    /// 1-based; equals `rounds.len() + 1` until the game ends.
    pub current_round_no: u8,
    /// The id may refer to a removed player; lookups degrade gracefully.
    pub current_dealer: Option<PlayerId>,
    pub phase: Phase,
}

impl GameState {
    /// Fresh game: no players, round 1, wild card 3, no dealer.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            rounds: Vec::new(),
            current_round_no: 1,
            current_dealer: None,
            phase: Phase::InProgress,
        }
    }

    /// Wild card for the current round, derived from the round number.
    pub fn current_wild_card(&self) -> WildCard {
        wild_card_for_round(self.current_round_no).unwrap_or(WildCard::Three)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            Phase::InProgress => None,
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerEntry> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Current dealer's display name, or the "Not specified" literal when no
    /// dealer is set or the dealer has been removed.
    pub fn dealer_name(&self) -> String {
        self.current_dealer
            .and_then(|id| self.player(id))
            .map(|p| p.name.clone())
            .unwrap_or_else(|| NO_DEALER_NAME.to_string())
    }

    /// Add a player. Blank names are refused. The first player added to an
    /// empty game becomes the dealer.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("player name must not be blank"));
        }
        let entry = PlayerEntry::new(name);
        let id = entry.id;
        if self.players.is_empty() {
            self.current_dealer = Some(id);
        }
        self.players.push(entry);
        Ok(id)
    }

    /// Remove a player. Recorded rounds keep their historical score lines;
    /// a dangling dealer id is resolved at the next round advance.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), DomainError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, format!("player {id}")))?;
        self.players.remove(idx);
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
