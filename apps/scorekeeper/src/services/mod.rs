//! Service layer: command orchestration over the pure domain.

pub mod game_flow;
