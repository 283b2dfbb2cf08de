//! Board grid: authoritative occupancy state and placement legality.
//!
//! The `Board` owns every unit on the field. Each cell holds at most one
//! `UnitId`; the `Unit` record it points to stores the same position
//! (dual-write). Only the four mutators below touch either side, and each
//! keeps both in step:
//!
//! - `place`: write a new unit into its cell
//! - `relocate`: move a unit to another cell
//! - `remove`: take a captured unit off the board
//!
//! Storage uses `im` persistent structures so that cloning a board (and so
//! a whole game) is O(1).

use std::hash::BuildHasherDefault;

use im::{HashMap as ImHashMap, Vector};
use rustc_hash::FxHasher;
use smallvec::SmallVec;

use crate::core::{GameError, PlayerId, Position, Unit, UnitId, UnitKind};

/// Unit records keyed by id, hashed with FxHash.
type UnitMap = ImHashMap<UnitId, Unit, BuildHasherDefault<FxHasher>>;

/// Square grid of `size x size` cells.
///
/// ## Usage
///
/// ```
/// use abduct::board::Board;
/// use abduct::core::{PlayerId, Position, Unit, UnitId, UnitKind};
///
/// let mut board = Board::new(10);
/// let at = Position::new(3, 8);
///
/// board.check_placement(at, UnitKind::Knight).unwrap();
/// board.place(Unit::new(UnitId(0), UnitKind::Knight, PlayerId::FIRST, at));
///
/// assert_eq!(board.occupant_at(at).unwrap().map(|u| u.id), Some(UnitId(0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: i32,
    /// Row-major cell contents.
    cells: Vector<Option<UnitId>>,
    units: UnitMap,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    /// Panics if `size` is not positive.
    #[must_use]
    pub fn new(size: i32) -> Self {
        assert!(size > 0, "Board size must be positive");
        let cell_count = (size * size) as usize;
        Self {
            size,
            cells: std::iter::repeat(None).take(cell_count).collect(),
            units: UnitMap::default(),
        }
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Check if both coordinates lie in `[0, size)`.
    #[must_use]
    pub fn in_bounds(&self, position: Position) -> bool {
        (0..self.size).contains(&position.row) && (0..self.size).contains(&position.col)
    }

    /// The up-to-8 in-bounds cells surrounding `position`.
    #[must_use]
    pub fn neighbors(&self, position: Position) -> SmallVec<[Position; 8]> {
        position
            .ring()
            .into_iter()
            .filter(|&p| self.in_bounds(p))
            .collect()
    }

    fn index(&self, position: Position) -> usize {
        debug_assert!(self.in_bounds(position));
        (position.row * self.size + position.col) as usize
    }

    /// The unit standing at `position`, if any.
    ///
    /// Fails with `OutOfBounds` for positions off the board.
    pub fn occupant_at(&self, position: Position) -> Result<Option<&Unit>, GameError> {
        if !self.in_bounds(position) {
            return Err(GameError::OutOfBounds(position));
        }
        Ok(self.cells[self.index(position)].and_then(|id| self.units.get(&id)))
    }

    /// Look up a unit by id.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// Check if a House stands in any neighbouring cell.
    #[must_use]
    pub fn is_adjacent_to_house(&self, position: Position) -> bool {
        self.neighbors(position).into_iter().any(|p| {
            self.cells[self.index(p)]
                .and_then(|id| self.units.get(&id))
                .is_some_and(|u| u.kind == UnitKind::House)
        })
    }

    /// Check whether a unit of `kind` may be placed at `position`.
    ///
    /// Houses additionally may not touch another House (any owner).
    pub fn check_placement(&self, position: Position, kind: UnitKind) -> Result<(), GameError> {
        if self.occupant_at(position)?.is_some() {
            return Err(GameError::CellOccupied(position));
        }
        if kind == UnitKind::House && self.is_adjacent_to_house(position) {
            return Err(GameError::HouseAdjacencyViolation(position));
        }
        Ok(())
    }

    /// Write a new unit into its cell.
    ///
    /// The caller must have established legality with `check_placement`.
    pub fn place(&mut self, unit: Unit) {
        debug_assert!(
            self.check_placement(unit.position, unit.kind).is_ok(),
            "illegal placement at {:?}",
            unit.position
        );
        debug_assert_eq!(
            unit.movable,
            unit.kind.is_movable(),
            "movable flag disagrees with {}",
            unit.kind
        );
        let index = self.index(unit.position);
        self.cells.set(index, Some(unit.id));
        self.units.insert(unit.id, unit);
    }

    /// Move a unit to `to`, clearing its old cell.
    ///
    /// `to` must be in bounds and empty (or the unit's own cell).
    pub fn relocate(&mut self, id: UnitId, to: Position) {
        let Some(unit) = self.units.get_mut(&id) else {
            debug_assert!(false, "relocating unknown unit {id}");
            return;
        };
        let from = unit.position;
        unit.position = to;

        let from_index = self.index(from);
        let to_index = self.index(to);
        debug_assert!(
            self.cells[to_index].is_none() || from == to,
            "relocating onto occupied cell {to:?}"
        );
        self.cells.set(from_index, None);
        self.cells.set(to_index, Some(id));
    }

    /// Take a unit off the board.
    ///
    /// Returns the removed record, or `None` if the id is not on the board.
    pub fn remove(&mut self, id: UnitId) -> Option<Unit> {
        let unit = self.units.remove(&id)?;
        let index = self.index(unit.position);
        self.cells.set(index, None);
        Some(unit)
    }

    /// Iterate over all units on the board, in no particular order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// Iterate over the units owned by `player`.
    pub fn units_of(&self, player: PlayerId) -> impl Iterator<Item = &Unit> {
        self.units.values().filter(move |u| u.owner == player)
    }

    /// Number of live units.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Number of cells holding a unit.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over every position on the board, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }
}
