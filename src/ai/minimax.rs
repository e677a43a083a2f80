use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::game::{GameState, Player, COLS};

use super::agent::Agent;

/// Search depth used by the bot unless configured otherwise.
pub const DEFAULT_DEPTH: usize = 8;

/// Score of a win found on the root's own move. Every further simulated ply
/// costs one point, so faster wins and slower losses are preferred.
pub const WIN_SCORE: i32 = 22;

const INFINITY: i32 = i32::MAX / 2;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// Chosen column, 0-based.
    pub column: usize,
    /// Backed-up minimax value of the chosen column.
    pub value: i32,
    /// Nodes visited, root included.
    pub nodes: u64,
}

/// Score of a leaf reached `plies` moves below the root.
///
/// Anything without a winner scores 0, including depth cutoffs. A decided
/// game never scores weaker than ±1 so it cannot tie with a draw.
pub fn terminal_score(state: &GameState, maximizer: Player, plies: usize) -> i32 {
    let magnitude = (WIN_SCORE - plies as i32).max(1);
    match state.winner() {
        None => 0,
        Some(winner) if winner == maximizer => magnitude,
        Some(_) => -magnitude,
    }
}

/// Choose a column for the player to move with alpha-beta minimax.
///
/// The root is a maximizing node scored from `maximizer`'s point of view.
/// Legal columns are shuffled at every node, so among equally scored root
/// moves the first one evaluated wins. Returns `None` once the game is over.
/// A depth of 0 still expands the root so a move is always produced.
pub fn search<R: Rng + ?Sized>(
    state: &GameState,
    depth: usize,
    maximizer: Player,
    rng: &mut R,
) -> Option<SearchReport> {
    if state.is_over() {
        return None;
    }

    let root_depth = depth.max(1);
    let mut searcher = Searcher {
        rng,
        maximizer,
        root_depth,
        nodes: 1,
    };

    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best: Option<(usize, i32)> = None;

    for column in searcher.ordered_columns(state) {
        let mut child = state.duplicate();
        if child.apply(column).is_err() {
            continue;
        }

        let value = searcher.minimax(&child, root_depth - 1, false, alpha, beta);
        trace!(column, value, "root move evaluated");

        // Strictly greater: the first column reaching the maximum is kept.
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((column, value));
        }
        alpha = alpha.max(value);
        if alpha >= beta {
            break;
        }
    }

    let (column, value) = best?;
    let report = SearchReport {
        column,
        value,
        nodes: searcher.nodes,
    };
    debug!(
        depth = root_depth,
        column = report.column,
        value = report.value,
        nodes = report.nodes,
        "search finished"
    );
    Some(report)
}

/// Root value of plain minimax without pruning.
///
/// Reference for the alpha-beta search: both must agree on the root value.
/// Returns `None` when the game is already over.
pub fn exhaustive_value(state: &GameState, depth: usize, maximizer: Player) -> Option<i32> {
    fn minimax(
        state: &GameState,
        depth: usize,
        plies: usize,
        maximizing: bool,
        maximizer: Player,
    ) -> i32 {
        if depth == 0 || state.is_over() {
            return terminal_score(state, maximizer, plies);
        }
        let legal = state.legal_columns();
        let children = legal.iter().filter_map(|column| {
            let mut child = state.duplicate();
            child.apply(column).ok()?;
            Some(minimax(&child, depth - 1, plies + 1, !maximizing, maximizer))
        });
        if maximizing {
            children.max().unwrap_or(0)
        } else {
            children.min().unwrap_or(0)
        }
    }

    if state.is_over() {
        return None;
    }
    Some(minimax(state, depth.max(1), 0, true, maximizer))
}

struct Searcher<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
    maximizer: Player,
    root_depth: usize,
    nodes: u64,
}

impl<R: Rng + ?Sized> Searcher<'_, R> {
    fn ordered_columns(&mut self, state: &GameState) -> Vec<usize> {
        let mut columns: Vec<usize> = Vec::with_capacity(COLS);
        columns.extend(state.legal_columns().iter());
        columns.shuffle(&mut *self.rng);
        columns
    }

    fn minimax(
        &mut self,
        state: &GameState,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || state.is_over() {
            return terminal_score(state, self.maximizer, self.root_depth - depth);
        }

        if maximizing {
            let mut value = -INFINITY;
            for column in self.ordered_columns(state) {
                let mut child = state.duplicate();
                if child.apply(column).is_err() {
                    continue;
                }
                let score = self.minimax(&child, depth - 1, false, alpha, beta);
                value = value.max(score);
                alpha = alpha.max(score);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = INFINITY;
            for column in self.ordered_columns(state) {
                let mut child = state.duplicate();
                if child.apply(column).is_err() {
                    continue;
                }
                let score = self.minimax(&child, depth - 1, true, alpha, beta);
                value = value.min(score);
                beta = beta.min(score);
                if alpha >= beta {
                    break;
                }
            }
            value
        }
    }
}

/// Minimax agent with alpha-beta pruning and shuffled move order.
pub struct MinimaxAgent {
    depth: usize,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Agent with a fixed move-order seed, for reproducible play.
    pub fn with_seed(depth: usize, seed: u64) -> Self {
        MinimaxAgent {
            depth,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Search on behalf of the player to move.
    pub fn search(&mut self, state: &GameState) -> Option<SearchReport> {
        search(state, self.depth, state.current_player(), &mut self.rng)
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        self.search(state).map(|report| report.column)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
