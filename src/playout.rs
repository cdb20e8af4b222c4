//! Random playouts.
//!
//! A playout plays uniformly random legal moves until the side to move has
//! none left. Used as a weak opponent in self-play and to generate reachable
//! positions in tests.

use fastrand::Rng;

use crate::position::{Hole, Position};

/// Pick a uniformly random legal move, or `None` if the game is over.
pub fn random_move(pos: &Position, rng: &mut Rng) -> Option<Hole> {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Play random moves from `pos` until the game ends.
///
/// Returns the terminal position and the number of moves played.
pub fn random_playout(pos: &Position, rng: &mut Rng) -> (Position, usize) {
    let mut pos = *pos;
    let mut plies = 0;
    while let Some(hole) = random_move(&pos, rng) {
        pos = match pos.play(hole) {
            Ok(next) => next,
            Err(e) => unreachable!("legal move rejected: {e}"),
        };
        plies += 1;
    }
    (pos, plies)
}
