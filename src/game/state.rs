use super::position::{Cell, LegalColumns, MoveError, Position, COLS, ROWS};
use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A Connect Four game: a bitboard position plus terminal-state queries.
///
/// Win status is derived from the bitboards on every query, so it can never go
/// stale after `apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    position: Position,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            position: Position::new(),
        }
    }

    pub(crate) fn from_position(position: Position) -> Self {
        GameState { position }
    }

    /// Get reference to the underlying position
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.position.active_player()
    }

    pub fn turn(&self) -> u32 {
        self.position.turn()
    }

    /// Winner of the game, if either player has four in a row.
    pub fn winner(&self) -> Option<Player> {
        if self.position.has_won(Player::Red) {
            Some(Player::Red)
        } else if self.position.has_won(Player::Blue) {
            Some(Player::Blue)
        } else {
            None
        }
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.legal_columns().is_empty() || self.winner().is_some()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(player) => Some(GameOutcome::Winner(player)),
            None if self.is_board_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Columns (0-based) that are not full. Not filtered by winner.
    pub fn legal_columns(&self) -> LegalColumns {
        self.position.legal_columns()
    }

    /// Columns (1-based) a human may choose.
    pub fn valid_moves(&self) -> Vec<usize> {
        self.legal_columns().iter().map(|col| col + 1).collect()
    }

    /// Independent copy for exploring hypothetical moves.
    pub fn duplicate(&self) -> GameState {
        *self
    }

    /// Drop the current player's disc into a 0-based column.
    pub fn apply(&mut self, column: usize) -> Result<(), MoveError> {
        self.position.apply(column)
    }

    /// Drop the current player's disc into a 1-based column.
    pub fn apply_human(&mut self, column: usize) -> Result<(), MoveError> {
        match column.checked_sub(1) {
            Some(zero_based) if zero_based < COLS => self.apply(zero_based),
            _ => Err(MoveError::InvalidMove { column }),
        }
    }

    /// Occupant of the cell at `row` (0 = bottom) in `column`.
    pub fn occupant(&self, row: usize, column: usize) -> Cell {
        self.position.occupant(row, column)
    }

    /// All 42 cells hold a disc.
    pub fn is_board_full(&self) -> bool {
        self.position.disc_count() as usize == ROWS * COLS
    }

    /// Human-readable status line.
    pub fn status(&self) -> String {
        match self.outcome() {
            Some(GameOutcome::Winner(player)) => format!("{} team wins!", player.name()),
            Some(GameOutcome::Draw) => "The game was a draw!".to_string(),
            None => "The game is still ongoing".to_string(),
        }
    }
}
