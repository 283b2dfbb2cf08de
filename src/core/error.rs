//! Error kinds surfaced by the engine.
//!
//! All errors are non-fatal: each is detected before any mutation, so a
//! rejected command leaves the game exactly as it was and the same player
//! may retry.

use thiserror::Error;

use super::player::PlayerId;
use super::position::{Direction, Position};
use super::unit::UnitKind;

/// Engine error type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("position ({}, {}) is outside the board", .0.row, .0.col)]
    OutOfBounds(Position),

    #[error("cell ({}, {}) is already occupied", .0.row, .0.col)]
    CellOccupied(Position),

    #[error("a house at ({}, {}) would touch another house", .0.row, .0.col)]
    HouseAdjacencyViolation(Position),

    #[error("{0} has no houses left to place")]
    HouseQuotaExhausted(PlayerId),

    #[error("no unit at ({}, {})", .0.row, .0.col)]
    NoUnitAtPosition(Position),

    #[error("unit at ({}, {}) belongs to {owner}", .position.row, .position.col)]
    NotOwner { position: Position, owner: PlayerId },

    #[error("{kind} at ({}, {}) cannot move", .position.row, .position.col)]
    ImmovableUnit { position: Position, kind: UnitKind },

    #[error("unknown direction `{0}` (expected up, down, left or right)")]
    InvalidDirection(String),

    #[error("unit at ({}, {}) cannot move {}", .position.row, .position.col, .direction.token())]
    NoLegalStep {
        position: Position,
        direction: Direction,
    },

    #[error("moving {} from ({}, {}) captures nothing", .direction.token(), .position.row, .position.col)]
    NoCapture {
        position: Position,
        direction: Direction,
    },

    #[error("the game is already finished")]
    GameAlreadyFinished,

    #[error("invalid position `{0}` (expected a column letter followed by a row digit, e.g. B1)")]
    InvalidPosition(String),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` is missing its {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("starting {kind} for {owner} cannot be placed: {reason}")]
    InvalidLayout {
        kind: UnitKind,
        owner: PlayerId,
        reason: Box<GameError>,
    },

    #[error("board size {0} is outside 1..=26")]
    InvalidBoardSize(i32),

    #[error("{0} is not a seat in a two-player game")]
    UnknownPlayer(PlayerId),
}
