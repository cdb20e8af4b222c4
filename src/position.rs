//! Mancala position representation and move execution.
//!
//! This module provides the core game logic for Kalah, including:
//! - Position representation as a flat array of seed counters
//! - Sowing, with the mover's store included and the opponent's skipped
//! - Captures on landing in an empty own hole
//! - Extra turns on landing in the mover's own store
//!
//! Ownership is encoded by index parity: even holes belong to White, odd holes
//! to Black. A move never mutates the position it is played on; `play` returns
//! the successor by value.

use std::fmt;

use crate::constants::*;

/// A hole on the board, as an index into the position array (0..12).
pub type Hole = usize;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The side that owns a hole (by parity).
    #[inline]
    pub fn of(hole: Hole) -> Side {
        if hole % 2 == 0 { Side::White } else { Side::Black }
    }

    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Parity offset of this side's holes (0 for White, 1 for Black).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// Index of this side's store.
    #[inline]
    pub fn store(self) -> usize {
        WHITE_STORE + self.index()
    }

    /// This side's six holes, in ascending index order.
    pub fn holes(self) -> impl DoubleEndedIterator<Item = Hole> {
        (self.index()..HOLES).step_by(2)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    /// The hole holds no seeds
    EmptyHole(Hole),
    /// The hole belongs to the side that is not on move
    OutOfSequence(Hole),
    /// The index is a store, the turn flag, or past the end of the board
    NotAHole(Hole),
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::EmptyHole(h) => write!(f, "invalid move: no seeds in hole {h}"),
            InvalidMove::OutOfSequence(h) => {
                write!(f, "invalid move: hole {h} belongs to the other side")
            }
            InvalidMove::NotAHole(h) => write!(f, "invalid move: {h} is not a hole"),
        }
    }
}

impl std::error::Error for InvalidMove {}

/// A Mancala position.
///
/// Slots 0-11 are holes, 12 and 13 the White and Black stores, and 14 the
/// turn flag. The sum of slots 0-13 never changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub slots: [u8; SLOTS],
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The starting position: four seeds in every hole, empty stores, White
    /// to move.
    pub fn new() -> Self {
        let mut slots = [0; SLOTS];
        slots[..HOLES].fill(SEEDS_PER_HOLE);
        Position { slots }
    }

    /// Build a position from raw slot values.
    ///
    /// No validation is done beyond what the array type enforces; this is
    /// meant for setting up test and analysis positions.
    pub fn from_slots(slots: [u8; SLOTS]) -> Self {
        Position { slots }
    }

    #[inline]
    pub fn is_white_to_play(&self) -> bool {
        self.slots[TURN] % 2 == 0
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        if self.is_white_to_play() { Side::White } else { Side::Black }
    }

    /// Seeds in a single slot (hole or store).
    #[inline]
    pub fn seeds(&self, slot: usize) -> u8 {
        self.slots[slot]
    }

    #[inline]
    pub fn store(&self, side: Side) -> u32 {
        self.slots[side.store()] as u32
    }

    /// Seeds remaining in a side's six holes.
    pub fn row(&self, side: Side) -> u32 {
        side.holes().map(|h| self.slots[h] as u32).sum()
    }

    /// Sum of every hole and both stores.
    pub fn seed_total(&self) -> u32 {
        self.slots[..TURN].iter().map(|&s| s as u32).sum()
    }

    /// Holes the side to move may play, in ascending order.
    ///
    /// An empty result means the game is over.
    pub fn legal_moves(&self) -> Vec<Hole> {
        self.side_to_move()
            .holes()
            .filter(|&h| self.slots[h] != 0)
            .collect()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.side_to_move().holes().any(|h| self.slots[h] != 0)
    }

    /// Sow the seeds of `hole` and return the resulting position.
    ///
    /// Seeds are dropped one at a time into every following hole and into
    /// the mover's own store, skipping the opponent's store. Ending in the
    /// own store grants another move. Ending in an own hole that was empty
    /// captures that seed together with everything in the opposite hole.
    ///
    /// # Errors
    /// - `NotAHole` if `hole` is not in 0..12
    /// - `OutOfSequence` if the hole belongs to the side not on move
    /// - `EmptyHole` if the hole holds no seeds
    pub fn play(&self, hole: Hole) -> Result<Position, InvalidMove> {
        if hole >= HOLES {
            return Err(InvalidMove::NotAHole(hole));
        }
        let side = Side::of(hole);
        if side != self.side_to_move() {
            return Err(InvalidMove::OutOfSequence(hole));
        }
        if self.slots[hole] == 0 {
            return Err(InvalidMove::EmptyHole(hole));
        }

        let mut next = *self;
        let slots = &mut next.slots;
        let store = side.store();
        let mut remaining = slots[hole];
        slots[hole] = 0;

        // Walk the ring in steps of two. Past the own store the cursor wraps
        // to the opponent's lowest hole, so the opponent's store is never hit.
        let mut cursor = hole;
        while remaining > 0 {
            cursor += 2;
            if cursor > store {
                cursor = (cursor + 1) % 2;
            }
            if cursor < HOLES || cursor == store {
                slots[cursor] += 1;
                remaining -= 1;
            }
        }

        slots[TURN] = if cursor == store {
            side.index() as u8
        } else {
            side.opponent().index() as u8
        };

        if cursor != store && Side::of(cursor) == side && slots[cursor] == 1 {
            let opposite = OPPOSITE[cursor];
            slots[store] += 1 + slots[opposite];
            slots[cursor] = 0;
            slots[opposite] = 0;
        }

        Ok(next)
    }

    /// Heuristic value of the position for the side to move.
    ///
    /// The mover's store, plus `ROW_BONUS` if the mover's row holds strictly
    /// more seeds than the opponent's.
    pub fn score(&self) -> i32 {
        let me = self.side_to_move();
        let bonus = if self.row(me) > self.row(me.opponent()) {
            ROW_BONUS
        } else {
            0
        };
        self.store(me) as i32 + bonus
    }

    /// Final tally as `(white, black)`: each side's row plus its store.
    ///
    /// Seeds left in the rows at the end of the game count for their owner.
    pub fn final_score(&self) -> (u32, u32) {
        (
            self.row(Side::White) + self.store(Side::White),
            self.row(Side::Black) + self.store(Side::Black),
        )
    }
}
