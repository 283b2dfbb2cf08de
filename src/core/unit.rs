//! Units: the pieces that occupy board cells.
//!
//! Every unit has a stable `UnitId` allocated by the game when it is
//! created (starting layout or house placement). Ids are never reused, so a
//! captured unit's id stays dangling forever.
//!
//! A unit records its owner as a `PlayerId`; the `Player` record itself
//! lives in the game's player list.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;

/// Unique identifier of a unit within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// The closed set of unit kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Wizard,
    Dragon,
    Knight,
    House,
}

impl UnitKind {
    /// Whether units of this kind can ever slide.
    #[must_use]
    pub const fn is_movable(self) -> bool {
        !matches!(self, UnitKind::House)
    }

    /// Points awarded to the player who captures a unit of this kind.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            UnitKind::Wizard => 10,
            UnitKind::Dragon => 3,
            UnitKind::Knight => 1,
            UnitKind::House => 0,
        }
    }

    /// Single-letter board glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            UnitKind::Wizard => 'W',
            UnitKind::Dragon => 'D',
            UnitKind::Knight => 'K',
            UnitKind::House => 'H',
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UnitKind::Wizard => "Wizard",
            UnitKind::Dragon => "Dragon",
            UnitKind::Knight => "Knight",
            UnitKind::House => "House",
        };
        f.write_str(name)
    }
}

/// A unit on the board.
///
/// `position` always equals the cell that references this unit; only
/// `Board` writes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Stable identity.
    pub id: UnitId,
    /// What kind of unit this is.
    pub kind: UnitKind,
    /// Owning player.
    pub owner: PlayerId,
    /// Whether this unit may be the subject of a move.
    pub movable: bool,
    /// Current cell.
    pub position: Position,
}

impl Unit {
    /// Create a unit. Movability follows from the kind.
    #[must_use]
    pub fn new(id: UnitId, kind: UnitKind, owner: PlayerId, position: Position) -> Self {
        Self {
            id,
            kind,
            owner,
            movable: kind.is_movable(),
            position,
        }
    }

    /// Points awarded for capturing this unit.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.kind.points()
    }

    /// Check if this unit belongs to `player`.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == player
    }
}
