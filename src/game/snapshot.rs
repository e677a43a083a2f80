//! Persisted form of a game.
//!
//! The snapshot keeps the raw bitboards and column heights so a stored game
//! loads without replaying moves. Every field is checked before a
//! [`GameState`] is built from it.

use serde::{Deserialize, Serialize};

use super::position::{column_base, Position, COLS, PLAYABLE, ROWS};
use super::win::has_four;
use super::{GameState, Player};
use crate::error::StateError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player1_board: u64,
    pub player2_board: u64,
    pub peaks: [u8; COLS],
    pub turn: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<u8>,
}

impl Default for Snapshot {
    fn default() -> Self {
        GameState::initial().snapshot()
    }
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that the snapshot describes a position reachable by legal play
    /// and build it.
    pub fn validate(&self) -> Result<Position, StateError> {
        let red = self.player1_board;
        let blue = self.player2_board;

        for (column, &height) in self.peaks.iter().enumerate() {
            let min = column_base(column);
            let max = min + ROWS as u8;
            if height < min || height > max {
                return Err(StateError::HeightOutOfRange {
                    column,
                    height,
                    min,
                    max,
                });
            }
        }

        if red & blue != 0 {
            return Err(StateError::OverlappingDiscs(red & blue));
        }

        let occupied = red | blue;
        if occupied & !PLAYABLE != 0 {
            return Err(StateError::StrayBits(occupied & !PLAYABLE));
        }

        for (column, &height) in self.peaks.iter().enumerate() {
            let base = column_base(column);
            let column_mask = ((1u64 << ROWS) - 1) << base;
            let filled = (1u64 << height) - (1u64 << base);
            if occupied & column_mask != filled {
                return Err(StateError::FloatingDisc { column });
            }
        }

        let discs = occupied.count_ones();
        if self.turn != discs {
            return Err(StateError::TurnMismatch {
                turn: self.turn,
                discs,
            });
        }

        let (red_count, blue_count) = (red.count_ones(), blue.count_ones());
        if red_count != blue_count && red_count != blue_count + 1 {
            return Err(StateError::DiscImbalance {
                red: red_count,
                blue: blue_count,
            });
        }

        check_winner(red, red_count, blue, blue_count)?;

        if !self.history.is_empty() {
            self.check_history()?;
        }

        Ok(Position::from_parts(
            [red, blue],
            self.peaks,
            self.turn,
            &self.history,
        ))
    }

    /// Replay the recorded columns and compare with the stored bitboards.
    fn check_history(&self) -> Result<(), StateError> {
        if self.history.len() != self.turn as usize {
            return Err(StateError::History(format!(
                "{} moves recorded for turn {}",
                self.history.len(),
                self.turn
            )));
        }

        let mut replay = Position::new();
        for (ply, &column) in self.history.iter().enumerate() {
            if let Some(winner) = winner_of(&replay) {
                return Err(StateError::PlayAfterWin { winner });
            }
            replay.apply(column as usize).map_err(|e| {
                StateError::History(format!("ply {ply}: {e}"))
            })?;
        }

        if replay.bitboard(Player::Red) != self.player1_board
            || replay.bitboard(Player::Blue) != self.player2_board
        {
            return Err(StateError::History(
                "replayed moves produce a different board".to_string(),
            ));
        }
        Ok(())
    }
}

fn winner_of(position: &Position) -> Option<Player> {
    [Player::Red, Player::Blue]
        .into_iter()
        .find(|&player| position.has_won(player))
}

/// A won game ends on the winner's move: only one side has four, and it made
/// the last drop. Red moves last when it holds one more disc than Blue.
fn check_winner(
    red: u64,
    red_count: u32,
    blue: u64,
    blue_count: u32,
) -> Result<(), StateError> {
    let red_moved_last = red_count > blue_count;
    match (has_four(red), has_four(blue)) {
        (true, true) => Err(StateError::PlayAfterWin {
            winner: if red_moved_last { Player::Blue } else { Player::Red },
        }),
        (true, false) if !red_moved_last => Err(StateError::PlayAfterWin {
            winner: Player::Red,
        }),
        (false, true) if red_moved_last => Err(StateError::PlayAfterWin {
            winner: Player::Blue,
        }),
        _ => Ok(()),
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let position = self.position();
        Snapshot {
            player1_board: position.bitboard(Player::Red),
            player2_board: position.bitboard(Player::Blue),
            peaks: position.heights(),
            turn: position.turn(),
            history: position.history().to_vec(),
        }
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, StateError> {
        Ok(GameState::from_position(snapshot.validate()?))
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        self.snapshot().to_json()
    }

    pub fn from_json(json: &str) -> Result<Self, StateError> {
        GameState::from_snapshot(&Snapshot::from_json(json)?)
    }
}
