//! Command intents and their outcomes.
//!
//! A `Command` is what the surrounding layer hands the engine after it has
//! parsed player input: the verb (place a house, move a unit) plus its
//! already-typed arguments. The engine answers with an `Outcome` describing
//! every effect the command had.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::position::{Direction, Position};
use super::unit::{UnitId, UnitKind};

/// A pre-parsed move intent.
///
/// ## Example
///
/// ```
/// use abduct::core::{Command, Direction, Position};
///
/// let build = Command::PlaceHouse(Position::new(0, 1));
/// let slide = Command::MoveUnit(Position::new(3, 8), Direction::Right);
/// assert_ne!(build, slide);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Place one of the current player's houses.
    PlaceHouse(Position),
    /// Slide the current player's unit at a position.
    MoveUnit(Position, Direction),
}

impl Command {
    /// The cell this command refers to.
    #[must_use]
    pub fn position(&self) -> Position {
        match *self {
            Command::PlaceHouse(position) | Command::MoveUnit(position, _) => position,
        }
    }
}

/// A unit removed from the board by a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Identity of the captured unit.
    pub unit: UnitId,
    /// Its kind.
    pub kind: UnitKind,
    /// The player who lost it.
    pub owner: PlayerId,
    /// Where it stood.
    pub position: Position,
}

/// Everything a successful slide did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The unit that moved.
    pub unit: UnitId,
    /// Where it started.
    pub from: Position,
    /// Where it stopped.
    pub to: Position,
    /// Completed one-cell relocations.
    pub steps: u32,
    /// Captured units, in slide order.
    /// SmallVec avoids heap allocation for the usual 0-3 captures.
    pub captures: SmallVec<[Capture; 4]>,
    /// Points credited to the mover.
    pub points: u32,
    /// Whether an opposing Wizard was among the captures.
    pub wizard_killed: bool,
}

impl MoveOutcome {
    /// Check if the slide captured anything.
    #[must_use]
    pub fn captured_any(&self) -> bool {
        !self.captures.is_empty()
    }
}

/// Result of an accepted command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// A house was placed.
    HousePlaced {
        unit: UnitId,
        position: Position,
        houses_left: u32,
    },
    /// A unit slid.
    Moved(MoveOutcome),
}

impl Outcome {
    /// Check if this outcome ended the game.
    #[must_use]
    pub fn wizard_killed(&self) -> bool {
        matches!(self, Outcome::Moved(m) if m.wizard_killed)
    }
}
