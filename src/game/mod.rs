//! The game aggregate: board, players and the turn controller.
//!
//! `Game` is the only entry point that mutates play. Hosts hand it
//! `Command`s and get back an `Outcome` or a `GameError`.

mod state;

pub use state::{Game, GameStatus};
