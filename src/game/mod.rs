//! Core Connect Four game logic: bitboard position, win detection, player
//! types, game state and its persisted snapshot.

mod player;
pub mod position;
mod snapshot;
mod state;
pub mod win;

pub use player::{Player, UnknownTeam};
pub use position::{Cell, LegalColumns, MoveError, Position, COLS, ROWS};
pub use snapshot::Snapshot;
pub use state::{GameOutcome, GameState};
