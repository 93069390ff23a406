//! Snapshot persistence: opaque load/save/clear of the serialized game.
//!
//! Failures never propagate. A load that cannot read or parse reports "no
//! snapshot"; saves and clears log and move on. The in-memory state stays
//! the source of truth for the session either way.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::domain::snapshot::GameSnapshot;

pub trait SnapshotStore {
    /// The previously saved snapshot, or `None` if absent or unreadable.
    fn load(&self) -> Option<GameSnapshot>;
    /// Best-effort write.
    fn save(&mut self, snapshot: &GameSnapshot);
    /// Remove any stored snapshot.
    fn clear(&mut self);
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Option<GameSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<GameSnapshot> {
        self.snapshot.clone()
    }

    fn save(&mut self, snapshot: &GameSnapshot) {
        self.snapshot = Some(snapshot.clone());
    }

    fn clear(&mut self) {
        self.snapshot = None;
    }
}

/// JSON blob at a fixed path.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured snapshot path (env override or default).
    pub fn from_env() -> Self {
        Self::new(crate::config::store::snapshot_path())
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Option<GameSnapshot> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(path = %self.path.display(), %err, "no stored snapshot");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "stored snapshot is unreadable, starting fresh");
                None
            }
        }
    }

    fn save(&mut self, snapshot: &GameSnapshot) {
        let json = match serde_json::to_vec(snapshot) {
            Ok(json) => json,
            Err(err) => {
                warn!(%err, "failed to serialize snapshot");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), %err, "failed to save snapshot");
        }
    }

    fn clear(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != ErrorKind::NotFound {
                warn!(path = %self.path.display(), %err, "failed to clear snapshot");
            }
        }
    }
}
