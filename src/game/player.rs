use std::fmt;
use std::str::FromStr;

use super::position::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// Player who moves on the given ply. Red opens on even turns.
    pub fn for_turn(turn: u32) -> Player {
        if turn & 1 == 0 {
            Player::Red
        } else {
            Player::Blue
        }
    }

    /// Index of this player's bitboard
    pub fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Blue => 1,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Blue => Cell::Blue,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }

    /// Team name as it appears in commands
    pub fn team(self) -> &'static str {
        match self {
            Player::Red => "red",
            Player::Blue => "blue",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.team())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown team '{0}' (expected 'red' or 'blue')")]
pub struct UnknownTeam(pub String);

impl FromStr for Player {
    type Err = UnknownTeam;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Player::Red),
            "blue" => Ok(Player::Blue),
            _ => Err(UnknownTeam(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Red.name(), "Red");
        assert_eq!(Player::Blue.name(), "Blue");
    }

    #[test]
    fn test_for_turn_alternates() {
        assert_eq!(Player::for_turn(0), Player::Red);
        assert_eq!(Player::for_turn(1), Player::Blue);
        assert_eq!(Player::for_turn(40), Player::Red);
        assert_eq!(Player::for_turn(41), Player::Blue);
    }

    #[test]
    fn test_parse_team() {
        assert_eq!("red".parse::<Player>(), Ok(Player::Red));
        assert_eq!("Blue".parse::<Player>(), Ok(Player::Blue));
        assert_eq!(
            "green".parse::<Player>(),
            Err(UnknownTeam("green".to_string()))
        );
    }
}
