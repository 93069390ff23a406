//! Error handling for the scorekeeper core.

pub mod domain;

pub use domain::DomainError;
