//! Constants for board geometry, seeding, and search parameters.
//!
//! The position is a flat array of 15 counters. Holes alternate ownership by
//! index parity (even = White, odd = Black), followed by the two stores and
//! the turn flag.

use crate::position::Hole;

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of holes on the board (six per side).
pub const HOLES: usize = 12;

/// Holes owned by each side.
pub const HOLES_PER_SIDE: usize = HOLES / 2;

/// Index of White's store.
pub const WHITE_STORE: usize = 12;

/// Index of Black's store.
pub const BLACK_STORE: usize = 13;

/// Index of the turn flag. An even value means White is to move.
pub const TURN: usize = 14;

/// Total number of slots in a position (holes, stores, turn flag).
pub const SLOTS: usize = 15;

/// Seeds placed in every hole at the start of a game.
pub const SEEDS_PER_HOLE: u8 = 4;

/// Total seeds in play. Conserved by every move.
pub const TOTAL_SEEDS: u32 = HOLES as u32 * SEEDS_PER_HOLE as u32;

/// Hole directly across the board from each hole.
///
/// The two rows run in opposite directions, so hole 0 faces hole 11,
/// hole 2 faces hole 9, and so on.
pub const OPPOSITE: [Hole; HOLES] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0];

// =============================================================================
// Evaluation and Search
// =============================================================================

/// Bonus awarded by the heuristic to the side holding more seeds in its row.
pub const ROW_BONUS: i32 = 2;

/// Search depth (plies) used by the computer player unless overridden.
pub const DEFAULT_DEPTH: u32 = 11;

/// Deepest search the command line accepts. Brute-force minimax grows as
/// roughly 6^depth, so anything past this is impractical.
pub const MAX_DEPTH: u32 = 16;
