//! Interactive text shell: a human plays against the engine.
//!
//! The shell prints the board, reads one line per human turn and answers with
//! the engine's moves until the side to move has nothing left to play.
//!
//! ## Input
//!
//! - `1` to `6` - sow the given pit on the human's row (counted from the left)
//! - `hint` - ask the engine what it would play for the human
//! - `board` - print the board again
//! - `quit` - leave the game
//!
//! ## Example
//!
//! ```ignore
//! use mancala_rust::position::Side;
//! use mancala_rust::search::Searcher;
//! use mancala_rust::shell::Shell;
//!
//! let mut shell = Shell::new(Side::White, Searcher::new(11));
//! shell.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use log::info;

use crate::board::{hole_for_pit, pit_for_hole};
use crate::constants::HOLES_PER_SIDE;
use crate::position::{Position, Side};
use crate::search::Searcher;

/// What a line of human input led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The move was played
    Played,
    /// Nothing changed; show this text
    Message(String),
    /// The human wants to stop
    Quit,
}

/// A human-versus-engine game.
pub struct Shell {
    pos: Position,
    human: Side,
    searcher: Searcher,
}

impl Shell {
    /// Start a new game with the human playing `human`.
    pub fn new(human: Side, searcher: Searcher) -> Self {
        Self::with_position(Position::new(), human, searcher)
    }

    /// Resume play from an arbitrary position.
    pub fn with_position(pos: Position, human: Side, searcher: Searcher) -> Self {
        Self { pos, human, searcher }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Run the game on stdin and stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout)
    }

    /// Run the game on the given input and output.
    ///
    /// Returns when the game is over, the human quits, or the input ends.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let mut lines = input.lines();
        writeln!(out, "{}", self.pos)?;

        while !self.pos.is_terminal() {
            if self.pos.side_to_move() != self.human {
                self.computer_turn(out)?;
                continue;
            }

            write!(out, "your move (1 to {HOLES_PER_SIDE}): ")?;
            out.flush()?;
            let line = match lines.next() {
                Some(line) => line.context("failed to read move")?,
                None => return Ok(()),
            };

            match self.execute(line.trim()) {
                Reply::Played => writeln!(out, "\n{}", self.pos)?,
                Reply::Message(msg) => writeln!(out, "{msg}")?,
                Reply::Quit => return Ok(()),
            }
        }

        writeln!(out, "{}", final_message(&self.pos, self.human))?;
        out.flush()?;
        Ok(())
    }

    /// Let the engine move for its side.
    fn computer_turn<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(out, "now, it's my turn to play... let me think...")?;
        out.flush()?;

        let computer = self.human.opponent();
        let (hole, value) = self.searcher.search(&self.pos, computer == Side::White);
        let Some(hole) = hole else {
            bail!("search at depth {} returned no move", self.searcher.depth());
        };
        self.pos = self
            .pos
            .play(hole)
            .with_context(|| format!("engine chose an illegal move: {hole}"))?;
        info!("{computer} plays hole {hole} (value {value})");

        writeln!(out, "I play {}\n\n{}", pit_for_hole(hole), self.pos)?;
        Ok(())
    }

    /// Handle one line of human input. The position only changes on
    /// `Reply::Played`.
    pub fn execute(&mut self, line: &str) -> Reply {
        match line.to_lowercase().as_str() {
            "quit" | "exit" | "q" => return Reply::Quit,
            "board" => return Reply::Message(self.pos.to_string()),
            "hint" => {
                let (hole, value) = self.searcher.search(&self.pos, self.human == Side::White);
                return Reply::Message(match hole {
                    Some(hole) => format!("hint: pit {} (value {value})", pit_for_hole(hole)),
                    None => "no moves left".to_string(),
                });
            }
            _ => {}
        }

        let pit = line.parse::<usize>().ok();
        let Some(hole) = pit.and_then(|pit| hole_for_pit(self.human, pit)) else {
            return Reply::Message(format!(
                "... you must enter a number between 1 and {HOLES_PER_SIDE}"
            ));
        };

        match self.pos.play(hole) {
            Ok(next) => {
                info!("{} plays hole {hole}", self.human);
                self.pos = next;
                Reply::Played
            }
            Err(e) => Reply::Message(format!("error: {e}")),
        }
    }
}

/// End-of-game summary from the human's point of view.
pub fn final_message(pos: &Position, human: Side) -> String {
    let (white, black) = pos.final_score();
    let (mine, theirs) = match human {
        Side::White => (white, black),
        Side::Black => (black, white),
    };
    if mine < theirs {
        format!("sorry, you lost {mine} to {theirs}")
    } else if theirs < mine {
        format!("nice! you won {mine} to {theirs}")
    } else {
        "it's a draw".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SLOTS;

    fn shell(human: Side) -> Shell {
        Shell::new(human, Searcher::new(2))
    }

    #[test]
    fn test_execute_pit() {
        let mut s = shell(Side::White);
        assert_eq!(s.execute("3"), Reply::Played);
        // Pit 3 is hole 4, which ends in the store.
        assert!(s.position().is_white_to_play());
        assert_eq!(s.position().store(Side::White), 1);
    }

    #[test]
    fn test_execute_black_pit() {
        let pos = Position::new().play(0).unwrap();
        let mut s = Shell::with_position(pos, Side::Black, Searcher::new(2));
        assert_eq!(s.execute("1"), Reply::Played);
        assert_eq!(s.position().seeds(1), 0);
    }

    #[test]
    fn test_execute_bad_input() {
        let mut s = shell(Side::White);
        for input in ["0", "7", "abc", ""] {
            match s.execute(input) {
                Reply::Message(msg) => assert!(msg.contains("between 1 and 6"), "{input}: {msg}"),
                other => panic!("unexpected reply for {input:?}: {other:?}"),
            }
        }
        assert_eq!(*s.position(), Position::new());
    }

    #[test]
    fn test_execute_empty_hole() {
        let mut slots = Position::new().slots;
        slots[0] = 0;
        slots[12] = 4;
        let mut s = Shell::with_position(Position::from_slots(slots), Side::White, Searcher::new(2));
        let before = *s.position();
        assert_eq!(
            s.execute("1"),
            Reply::Message("error: invalid move: no seeds in hole 0".to_string())
        );
        assert_eq!(*s.position(), before);
    }

    #[test]
    fn test_execute_commands() {
        let mut s = shell(Side::White);
        assert_eq!(s.execute("quit"), Reply::Quit);
        assert_eq!(s.execute("board"), Reply::Message(Position::new().to_string()));
        match s.execute("hint") {
            Reply::Message(msg) => assert!(msg.starts_with("hint: pit "), "{msg}"),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_final_message() {
        let mut slots = [0u8; SLOTS];
        slots[12] = 30;
        slots[13] = 18;
        let pos = Position::from_slots(slots);
        assert_eq!(final_message(&pos, Side::White), "nice! you won 30 to 18");
        assert_eq!(final_message(&pos, Side::Black), "sorry, you lost 18 to 30");

        slots[12] = 24;
        slots[13] = 24;
        let pos = Position::from_slots(slots);
        assert_eq!(final_message(&pos, Side::White), "it's a draw");
    }

    #[test]
    fn test_run_until_quit() {
        let mut s = shell(Side::White);
        let mut out = Vec::new();
        s.run_with("9\n3\nquit\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("you must enter a number between 1 and 6"));
        assert!(text.contains("your move (1 to 6): "));
        // Pit 3 grants an extra turn, so the engine has not moved yet.
        assert!(!text.contains("let me think"));
        assert_eq!(s.position().store(Side::White), 1);
    }

    #[test]
    fn test_run_engine_moves_first_for_black_human() {
        let mut s = shell(Side::Black);
        let mut out = Vec::new();
        s.run_with("".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("now, it's my turn to play... let me think..."));
        assert!(text.contains("I play "));
        assert_eq!(s.position().side_to_move(), Side::Black);
    }

    #[test]
    fn test_run_reports_final_score() {
        // White's last seed goes into the store; Black then has no moves.
        let mut slots = [0u8; SLOTS];
        slots[10] = 1;
        slots[12] = 27;
        slots[13] = 20;
        let pos = Position::from_slots(slots);
        let mut s = Shell::with_position(pos, Side::White, Searcher::new(2));
        let mut out = Vec::new();
        s.run_with("6\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("nice! you won 28 to 20\n"), "{text}");
    }
}
