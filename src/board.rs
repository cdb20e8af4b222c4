//! Human-facing board layout: text rendering and pit numbering.
//!
//! Players refer to their own holes as pits 1 to 6, counted from their
//! left. The board is drawn with Black's row on top (running right to left)
//! and White's row at the bottom:
//!
//! ```text
//!    |  4 |  4 |  4 |  4 |  4 |  4 |
//!  0 +----+----+----+----+----+----+  0
//! >  |  4 |  4 |  4 |  4 |  4 |  4 |
//! ```
//!
//! Black's store is on the left, White's on the right, and `>` marks the row
//! of the side to move.

use std::fmt;

use crate::constants::{BLACK_STORE, HOLES_PER_SIDE, WHITE_STORE};
use crate::position::{Hole, Position, Side};

/// Map a pit number (1-6) on `side`'s row to a hole index.
///
/// Returns `None` for numbers outside 1-6.
pub fn hole_for_pit(side: Side, pit: usize) -> Option<Hole> {
    if (1..=HOLES_PER_SIDE).contains(&pit) {
        Some((pit - 1) * 2 + side.index())
    } else {
        None
    }
}

/// Inverse of [`hole_for_pit`].
pub fn pit_for_hole(hole: Hole) -> usize {
    hole / 2 + 1
}

fn marker(pos: &Position, side: Side) -> char {
    if pos.side_to_move() == side { '>' } else { ' ' }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  |", marker(self, Side::Black))?;
        for hole in Side::Black.holes().rev() {
            write!(f, " {:2} |", self.seeds(hole))?;
        }
        writeln!(f)?;

        write!(f, "{:2} +", self.seeds(BLACK_STORE))?;
        for _ in 0..HOLES_PER_SIDE {
            write!(f, "----+")?;
        }
        writeln!(f, " {:2}", self.seeds(WHITE_STORE))?;

        write!(f, "{}  |", marker(self, Side::White))?;
        for hole in Side::White.holes() {
            write!(f, " {:2} |", self.seeds(hole))?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole_for_pit() {
        assert_eq!(hole_for_pit(Side::White, 1), Some(0));
        assert_eq!(hole_for_pit(Side::White, 6), Some(10));
        assert_eq!(hole_for_pit(Side::Black, 1), Some(1));
        assert_eq!(hole_for_pit(Side::Black, 6), Some(11));
        assert_eq!(hole_for_pit(Side::White, 0), None);
        assert_eq!(hole_for_pit(Side::Black, 7), None);
    }

    #[test]
    fn test_pit_roundtrip() {
        for side in [Side::White, Side::Black] {
            for pit in 1..=HOLES_PER_SIDE {
                let hole = hole_for_pit(side, pit).unwrap();
                assert_eq!(Side::of(hole), side);
                assert_eq!(pit_for_hole(hole), pit);
            }
        }
    }

    #[test]
    fn test_render_opening() {
        let expected = "   |  4 |  4 |  4 |  4 |  4 |  4 |\n\
                        \u{20}0 +----+----+----+----+----+----+  0\n\
                        >  |  4 |  4 |  4 |  4 |  4 |  4 |\n";
        assert_eq!(Position::new().to_string(), expected);
    }

    #[test]
    fn test_render_after_move() {
        // White 4 ends in the store; Black's row is drawn from hole 11 down.
        let pos = Position::new().play(4).unwrap().play(10).unwrap();
        let text = pos.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], ">  |  4 |  4 |  5 |  5 |  5 |  5 |");
        assert_eq!(lines[1], " 0 +----+----+----+----+----+----+  2");
        assert_eq!(lines[2], "   |  4 |  4 |  0 |  5 |  5 |  0 |");
    }
}
