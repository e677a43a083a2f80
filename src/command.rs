//! Text commands that drive a game, in the `connect4|drop|red|4` form used as
//! issue titles, and the runner that applies them.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::ai::Agent;
use crate::error::CommandError;
use crate::game::{GameState, Player};

const PREFIX: &str = "connect4";

/// Display name used when the bot makes the move.
pub const BOT_HANDLE: &str = "Connect4Bot";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    /// A 1-based column picked by a human.
    Column(usize),
    /// Let the bot pick.
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    New,
    Drop { team: Player, choice: MoveChoice },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('|').collect();
        match parts.as_slice() {
            [PREFIX, "new"] => Ok(Command::New),
            [PREFIX, "drop", team, choice] => {
                let team = team
                    .parse::<Player>()
                    .map_err(|e| CommandError::Malformed(e.to_string()))?;
                let choice = match *choice {
                    "ai" => MoveChoice::Ai,
                    column => column
                        .parse::<usize>()
                        .map(MoveChoice::Column)
                        .map_err(|_| {
                            CommandError::Malformed(format!("'{column}' is not a column number"))
                        })?,
                };
                Ok(Command::Drop { team, choice })
            }
            _ => Err(CommandError::Malformed(format!("unrecognized command '{s}'"))),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::New => write!(f, "{PREFIX}|new"),
            Command::Drop {
                team,
                choice: MoveChoice::Column(column),
            } => write!(f, "{PREFIX}|drop|{team}|{column}"),
            Command::Drop {
                team,
                choice: MoveChoice::Ai,
            } => write!(f, "{PREFIX}|drop|{team}|ai"),
        }
    }
}

/// What a successfully executed command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReport {
    /// One-line summary, suitable as a commit message.
    pub message: String,
    /// 1-based column that received a disc, if any.
    pub column: Option<usize>,
}

/// Applies commands to a game, consulting `bot` for `ai` moves.
pub struct Runner<A: Agent> {
    bot: A,
    allow_restart: bool,
}

impl<A: Agent> Runner<A> {
    pub fn new(bot: A) -> Self {
        Runner {
            bot,
            allow_restart: false,
        }
    }

    /// Allow `new` to replace a game that is still in progress.
    pub fn allow_restart(mut self, allow: bool) -> Self {
        self.allow_restart = allow;
        self
    }

    /// Apply `command` on behalf of `actor`. The state is untouched on error.
    pub fn execute(
        &mut self,
        state: &mut GameState,
        command: &Command,
        actor: &str,
    ) -> Result<CommandReport, CommandError> {
        match *command {
            Command::New => {
                if !state.is_over() && !self.allow_restart {
                    return Err(CommandError::GameInProgress);
                }
                *state = GameState::initial();
                info!(actor, "new game started");
                Ok(CommandReport {
                    message: format!("{actor} started a new game!"),
                    column: None,
                })
            }
            Command::Drop { team, choice } => {
                if state.is_over() {
                    return Err(CommandError::GameOver);
                }
                let expected = state.current_player();
                if team != expected {
                    return Err(CommandError::OutOfTurn {
                        expected,
                        requested: team,
                    });
                }

                let (column, handle) = match choice {
                    MoveChoice::Column(column) => (column, actor),
                    MoveChoice::Ai => {
                        let column = self.bot.select_action(state).ok_or(CommandError::GameOver)?;
                        (column + 1, BOT_HANDLE)
                    }
                };
                state.apply_human(column)?;
                info!(team = %team, column, handle, bot = self.bot.name(), "disc dropped");

                Ok(CommandReport {
                    message: format!("{handle} dropped a {team} disk in column {column}"),
                    column: Some(column),
                })
            }
        }
    }
}
