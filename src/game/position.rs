//! Bitboard encoding of a Connect Four position.
//!
//! Cells are laid out column-major, seven bits per column:
//!
//! ```text
//!   6 13 20 27 34 41 48   sentinel row
//! +---------------------+
//! | 5 12 19 26 33 40 47 | top row
//! | 4 11 18 25 32 39 46 |
//! | 3 10 17 24 31 38 45 |
//! | 2  9 16 23 30 37 44 |
//! | 1  8 15 22 29 36 43 |
//! | 0  7 14 21 28 35 42 | bottom row
//! +---------------------+
//! ```

use super::win::has_four;
use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Bits per column: the playable rows plus one sentinel bit.
pub const COLUMN_STRIDE: usize = ROWS + 1;

/// Sentinel bit of every column. A column is full once its height reaches it.
pub const TOP: u64 = 0b1000000_1000000_1000000_1000000_1000000_1000000_1000000;

/// Every playable cell on the board.
pub const PLAYABLE: u64 = 0b0111111_0111111_0111111_0111111_0111111_0111111_0111111;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid move: column {column} is full or out of range")]
    InvalidMove { column: usize },
}

/// Linear bit index of the cell at `row` (0 = bottom) in `column`.
pub fn cell_index(row: usize, column: usize) -> usize {
    column * COLUMN_STRIDE + row
}

/// Bit index of the bottom cell of `column`.
pub fn column_base(column: usize) -> u8 {
    (column * COLUMN_STRIDE) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalColumns {
    columns: [u8; COLS],
    len: usize,
}

impl LegalColumns {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, column: usize) -> bool {
        self.as_slice().iter().any(|&c| c as usize == column)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.columns[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().map(|&c| c as usize)
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

/// Two player bitboards plus the next free bit of every column.
///
/// The whole position is a plain `Copy` value so search can branch on copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    bitboards: [u64; 2],
    heights: [u8; COLS],
    turn: u32,
    history: [u8; ROWS * COLS],
    history_len: u8,
}

impl Position {
    /// Create an empty position
    pub fn new() -> Self {
        let mut heights = [0u8; COLS];
        for (column, height) in heights.iter_mut().enumerate() {
            *height = column_base(column);
        }
        Position {
            bitboards: [0, 0],
            heights,
            turn: 0,
            history: [0; ROWS * COLS],
            history_len: 0,
        }
    }

    /// Assemble a position from raw parts. Callers validate the parts first.
    /// `history` is either empty or holds exactly `turn` columns.
    pub(crate) fn from_parts(
        bitboards: [u64; 2],
        heights: [u8; COLS],
        turn: u32,
        history: &[u8],
    ) -> Self {
        let mut recorded = [0; ROWS * COLS];
        recorded[..history.len()].copy_from_slice(history);
        Position {
            bitboards,
            heights,
            turn,
            history: recorded,
            history_len: history.len() as u8,
        }
    }

    pub fn bitboard(&self, player: Player) -> u64 {
        self.bitboards[player.index()]
    }

    pub fn heights(&self) -> [u8; COLS] {
        self.heights
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Columns played so far, 0-based, one entry per ply.
    ///
    /// Empty when the position was restored without a history; moves made
    /// afterwards are not recorded either, so a non-empty history always
    /// replays to this position.
    pub fn history(&self) -> &[u8] {
        &self.history[..self.history_len as usize]
    }

    pub fn active_player(&self) -> Player {
        Player::for_turn(self.turn)
    }

    pub fn disc_count(&self) -> u32 {
        (self.bitboards[0] | self.bitboards[1]).count_ones()
    }

    /// Whether `column` still has room below its sentinel bit.
    pub fn is_playable(&self, column: usize) -> bool {
        column < COLS && TOP & (1u64 << self.heights[column]) == 0
    }

    /// Columns with room for another disc, in ascending order.
    pub fn legal_columns(&self) -> LegalColumns {
        let mut legal = LegalColumns {
            columns: [0; COLS],
            len: 0,
        };
        for column in 0..COLS {
            if self.is_playable(column) {
                legal.columns[legal.len] = column as u8;
                legal.len += 1;
            }
        }
        legal
    }

    /// Drop the active player's disc into `column`.
    pub fn apply(&mut self, column: usize) -> Result<(), MoveError> {
        if !self.is_playable(column) {
            return Err(MoveError::InvalidMove { column });
        }

        let mv = 1u64 << self.heights[column];
        self.heights[column] += 1;
        self.bitboards[self.active_player().index()] |= mv;
        if u32::from(self.history_len) == self.turn {
            self.history[self.history_len as usize] = column as u8;
            self.history_len += 1;
        }
        self.turn += 1;
        Ok(())
    }

    /// Occupant of the cell at `row` (0 = bottom) in `column`.
    pub fn occupant(&self, row: usize, column: usize) -> Cell {
        if row >= ROWS || column >= COLS {
            return Cell::Empty;
        }
        let bit = 1u64 << cell_index(row, column);
        [Player::Red, Player::Blue]
            .into_iter()
            .find(|&player| self.bitboard(player) & bit != 0)
            .map_or(Cell::Empty, Player::to_cell)
    }

    /// Whether `player` has four in a row anywhere on the board.
    pub fn has_won(&self, player: Player) -> bool {
        has_four(self.bitboard(player))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
