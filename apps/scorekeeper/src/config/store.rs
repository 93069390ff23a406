use std::env;
use std::path::PathBuf;

/// Environment variable overriding where the snapshot blob lives.
pub const SNAPSHOT_PATH_VAR: &str = "SCOREKEEPER_SNAPSHOT_PATH";

const DEFAULT_SNAPSHOT_FILE: &str = "scorekeeper.json";

/// Snapshot file location: the env override, or `scorekeeper.json` in the
/// working directory.
pub fn snapshot_path() -> PathBuf {
    env::var(SNAPSHOT_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_FILE))
}
