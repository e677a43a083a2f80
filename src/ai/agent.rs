use crate::game::GameState;

/// Common interface for automated players.
pub trait Agent {
    /// Select a 0-based column for the player to move, or `None` when the
    /// game is already over.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
