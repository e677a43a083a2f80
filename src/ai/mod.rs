//! Automated players: the alpha-beta minimax bot and a random baseline.

mod agent;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{MinimaxAgent, SearchReport, DEFAULT_DEPTH};
pub use random::RandomAgent;
