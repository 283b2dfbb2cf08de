//! Core engine types: geometry, players, units, commands, configuration, errors.
//!
//! This module holds the plain data the rest of the engine operates on.
//! None of it knows about sliding or turn order.

pub mod position;
pub mod player;
pub mod unit;
pub mod config;
pub mod action;
pub mod error;

pub use position::{Direction, Position};
pub use player::{Color, Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use unit::{Unit, UnitId, UnitKind};
pub use config::{GameConfig, PlayerConfig, RuleSet, StartingUnit};
pub use action::{Capture, Command, MoveOutcome, Outcome};
pub use error::GameError;
