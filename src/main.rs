use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use connect_four_bot::ai::{Agent, MinimaxAgent};
use connect_four_bot::command::{Command, MoveChoice, Runner};
use connect_four_bot::config::AppConfig;
use connect_four_bot::game::{GameState, Player};
use connect_four_bot::{render, store};

/// Play Connect Four against a minimax bot, one command at a time.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect Four against a minimax bot")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override the saved game file
    #[arg(long)]
    state: Option<PathBuf>,

    /// Override the search depth in plies
    #[arg(long)]
    depth: Option<usize>,

    /// Fix the bot's move-order seed
    #[arg(long)]
    seed: Option<u64>,

    /// Who is issuing the command, used in move messages
    #[arg(long, default_value = "local")]
    user: String,

    /// Log search details
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Start a new game
    New {
        /// Replace a game that is still in progress
        #[arg(long)]
        force: bool,
    },
    /// Drop a disc for TEAM in COLUMN (1-7), or let the bot choose with `ai`
    Drop { team: Player, column: String },
    /// Run a raw command such as `connect4|drop|red|4`
    Exec { command: String },
    /// Print the board and game status
    Show,
    /// Print the columns that can still be played
    Moves,
    /// Print the default configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if matches!(cli.command, Cmd::Config) {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(state) = cli.state {
        app_config.storage.state_path = state;
    }
    if let Some(depth) = cli.depth {
        app_config.search.depth = depth;
    }
    if cli.seed.is_some() {
        app_config.search.seed = cli.seed;
    }
    app_config.validate().context("invalid settings")?;

    let state_path = app_config.storage.state_path.clone();
    let mut state = store::load(&state_path)?;

    let (command, force) = match cli.command {
        Cmd::Show => {
            print_board(&state);
            return Ok(());
        }
        Cmd::Moves => {
            let moves: Vec<String> = state.valid_moves().iter().map(|c| c.to_string()).collect();
            println!("{}", moves.join(" "));
            return Ok(());
        }
        // Printed before the game was loaded.
        Cmd::Config => return Ok(()),
        Cmd::New { force } => (Command::New, force),
        Cmd::Drop { team, column } => {
            let choice = if column == "ai" {
                MoveChoice::Ai
            } else {
                MoveChoice::Column(
                    column
                        .parse()
                        .with_context(|| format!("'{column}' is not a column number"))?,
                )
            };
            (Command::Drop { team, choice }, false)
        }
        Cmd::Exec { command } => (command.parse::<Command>()?, false),
    };

    let bot = match app_config.search.seed {
        Some(seed) => MinimaxAgent::with_seed(app_config.search.depth, seed),
        None => MinimaxAgent::new(app_config.search.depth),
    };
    tracing::debug!(bot = bot.name(), depth = bot.depth(), "bot ready");

    let mut runner = Runner::new(bot).allow_restart(force);
    let report = runner.execute(&mut state, &command, &cli.user)?;

    store::save(&state_path, &state)?;
    println!("{}", report.message);
    print_board(&state);
    Ok(())
}

fn print_board(state: &GameState) {
    println!("{}", render::to_text(state));
    if state.is_over() {
        println!("GAME OVER! {}", state.status());
    } else {
        println!("It is the {} team's turn to play.", state.current_player().name());
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
