//! Mancala-Rust: a Kalah engine with fixed-depth minimax.
//!
//! This crate implements six-hole Kalah with four seeds per hole: sowing
//! that passes through the mover's own store, captures when the last seed
//! lands in an empty own hole, and an extra turn when it lands in the store.
//! Moves for the computer player are chosen by brute-force minimax, with an
//! alpha-beta variant that always picks the same move.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, seeding, and search parameters
//! - [`position`] - Core game logic (sowing, captures, extra turns, scoring)
//! - [`search`] - Minimax and alpha-beta search
//! - [`playout`] - Random games for self-play and testing
//! - [`board`] - Text rendering and pit numbering
//! - [`shell`] - Interactive human-versus-engine game
//!
//! ## Example
//!
//! ```
//! use mancala_rust::position::Position;
//! use mancala_rust::search::minimax;
//!
//! // Start a game and open with the first White hole
//! let pos = Position::new().play(0).unwrap();
//!
//! // Find Black's reply with a 4-ply search
//! let (best, value) = minimax(&pos, 4, pos.is_white_to_play());
//! let next = pos.play(best.unwrap()).unwrap();
//! println!("value {value}\n{next}");
//! ```

pub mod board;
pub mod constants;
pub mod playout;
pub mod position;
pub mod search;
pub mod shell;
