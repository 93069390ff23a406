#![allow(dead_code)]

use std::collections::HashMap;

use scorekeeper::domain::state::PlayerId;
use scorekeeper::{GameFlowService, SnapshotStore};

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    scorekeeper_test_support::logging::init();
}

/// Drive one full round through the service: begin, type every score,
/// finish.
pub fn score_round<S: SnapshotStore>(
    service: &mut GameFlowService<S>,
    scores: &[(PlayerId, &str)],
) -> scorekeeper::domain::RoundOutcome {
    service.begin_round_scoring().expect("round can begin");
    for (id, raw) in scores {
        service
            .update_pending_score(*id, raw)
            .expect("player exists");
    }
    service.finish_round().expect("round finishes")
}

/// Totals by player name, for terse assertions.
pub fn totals_by_name<S: SnapshotStore>(service: &GameFlowService<S>) -> HashMap<String, i32> {
    service
        .state()
        .players
        .iter()
        .map(|p| (p.name.clone(), p.total_score))
        .collect()
}
