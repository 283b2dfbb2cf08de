//! # abduct
//!
//! Rules engine for Abduct, a two-player strategy game on a square grid.
//!
//! Each player commands a Wizard, three Dragons and three Knights, and may
//! place a limited number of immovable Houses during play. Units slide in
//! one of four directions until something stops them; what happens when a
//! slide runs into an opposing unit depends on the mover:
//!
//! - **Knight**: captures the first opposing unit and stops in its cell.
//! - **Dragon**: captures and keeps sliding, but takes at most one opposing
//!   Dragon per move (configurable).
//! - **Wizard**: captures everything in its path.
//!
//! Houses block every slide and cannot be captured. Capturing the opposing
//! Wizard wins the game.
//!
//! ## Architecture
//!
//! - **Single aggregate**: all state lives in one `Game`, passed explicitly.
//!   There is no global state and no internal locking; a concurrent host
//!   must serialise access per game.
//!
//! - **Validate, then mutate**: every command is checked in full before the
//!   first write, so rejected commands leave no trace.
//!
//! - **Persistent Data Structures**: O(1) cloning of the board via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: Positions, players, units, commands, configuration, errors
//! - `board`: Grid occupancy and placement legality
//! - `rules`: Sliding and capture resolution, legal command enumeration
//! - `game`: The game aggregate and turn controller
//! - `notation`: Text form of positions, directions and commands
//! - `render`: Plain-text board rendering

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod notation;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Capture, Color, Command, Direction, GameConfig, GameError, MoveOutcome, Outcome, Player,
    PlayerConfig, PlayerId, PlayerMap, Position, RuleSet, StartingUnit, Unit, UnitId, UnitKind,
};

pub use crate::board::Board;

pub use crate::rules::{MoveResolver, SlidePlan};

pub use crate::game::{Game, GameStatus};
