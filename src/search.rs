//! Fixed-depth minimax search.
//!
//! The search explores every legal move to a fixed number of plies and
//! alternates between maximizing and minimizing according to whose turn it
//! is relative to a fixed `maximize_white` flag. Because extra turns are
//! common in Kalah, the same side may be on move at consecutive plies, so the
//! objective is derived from the position rather than from the ply number.
//!
//! Leaves are scored with [`Position::score`], which is always from the
//! point of view of the side to move *at the leaf*, not of the maximizing
//! side. This changes which moves are chosen and is kept as is.
//!
//! [`alphabeta`] is a pruned version that returns exactly the same move and
//! value as [`minimax`] for every position and depth.

use std::time::Instant;

use log::debug;

use crate::position::{Hole, Position};

/// Search with the given objective, counting visited nodes into `nodes`.
fn minimax_inner(
    pos: &Position,
    depth: u32,
    maximize_white: bool,
    nodes: &mut u64,
) -> (Option<Hole>, i32) {
    *nodes += 1;
    let moves = pos.legal_moves();
    if depth == 0 || moves.is_empty() {
        return (None, pos.score());
    }

    let is_max = pos.is_white_to_play() == maximize_white;
    let mut best_move = None;
    let mut best_score = if is_max { i32::MIN } else { i32::MAX };

    for hole in moves {
        let child = match pos.play(hole) {
            Ok(child) => child,
            Err(e) => unreachable!("legal move rejected: {e}"),
        };
        let (_, score) = minimax_inner(&child, depth - 1, maximize_white, nodes);
        if (is_max && score > best_score) || (!is_max && score < best_score) {
            best_score = score;
            best_move = Some(hole);
        }
    }

    (best_move, best_score)
}

/// Alpha-beta over the same objective as [`minimax_inner`].
///
/// Returns the exact value when it lies strictly inside `(alpha, beta)`, a
/// value `<= alpha` when the true value is `<= alpha`, and a value `>= beta`
/// when the true value is `>= beta`. Comparisons are strict, so the first
/// move reaching the best value is kept, as in plain minimax.
fn alphabeta_inner(
    pos: &Position,
    depth: u32,
    maximize_white: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> (Option<Hole>, i32) {
    *nodes += 1;
    let moves = pos.legal_moves();
    if depth == 0 || moves.is_empty() {
        return (None, pos.score());
    }

    let is_max = pos.is_white_to_play() == maximize_white;
    let mut best_move = None;
    let mut best_score = if is_max { i32::MIN } else { i32::MAX };

    for hole in moves {
        let child = match pos.play(hole) {
            Ok(child) => child,
            Err(e) => unreachable!("legal move rejected: {e}"),
        };
        let (_, score) = alphabeta_inner(&child, depth - 1, maximize_white, alpha, beta, nodes);
        if is_max {
            if score > best_score {
                best_score = score;
                best_move = Some(hole);
            }
            if best_score >= beta {
                break;
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(hole);
            }
            if best_score <= alpha {
                break;
            }
            beta = beta.min(best_score);
        }
    }

    (best_move, best_score)
}

/// Brute-force minimax to `depth` plies.
///
/// Returns the chosen hole and its value. The hole is `None` when `depth` is
/// zero or the side to move has no legal moves; the value is then the
/// position's own score.
pub fn minimax(pos: &Position, depth: u32, maximize_white: bool) -> (Option<Hole>, i32) {
    let mut nodes = 0;
    minimax_inner(pos, depth, maximize_white, &mut nodes)
}

/// Minimax with alpha-beta pruning. Same result as [`minimax`].
pub fn alphabeta(pos: &Position, depth: u32, maximize_white: bool) -> (Option<Hole>, i32) {
    let mut nodes = 0;
    alphabeta_inner(pos, depth, maximize_white, i32::MIN, i32::MAX, &mut nodes)
}

/// Search driver used by the computer player.
///
/// Holds the configured depth and pruning choice, and keeps a count of the
/// nodes visited by the most recent search.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth: u32,
    pruning: bool,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher for `depth` plies with pruning enabled.
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            pruning: true,
            nodes: 0,
        }
    }

    /// Enable or disable alpha-beta pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Nodes visited by the last call to [`Searcher::search`].
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Run a search with an explicit maximizing side.
    pub fn search(&mut self, pos: &Position, maximize_white: bool) -> (Option<Hole>, i32) {
        let start = Instant::now();
        self.nodes = 0;
        let result = if self.pruning {
            alphabeta_inner(pos, self.depth, maximize_white, i32::MIN, i32::MAX, &mut self.nodes)
        } else {
            minimax_inner(pos, self.depth, maximize_white, &mut self.nodes)
        };
        debug!(
            "search depth={} pruning={} nodes={} move={:?} value={} in {:.3}s",
            self.depth,
            self.pruning,
            self.nodes,
            result.0,
            result.1,
            start.elapsed().as_secs_f64()
        );
        result
    }

    /// Best move for the side to move, or `None` if the game is over.
    pub fn best_move(&mut self, pos: &Position) -> Option<Hole> {
        self.search(pos, pos.is_white_to_play()).0
    }
}
