//! Board occupancy model.
//!
//! The `Board` is the single source of truth for where units stand.
//! Placement legality (bounds, occupancy, house spacing) is checked here;
//! sliding is decided by `rules` and applied through the board's mutators.

pub mod grid;

pub use grid::Board;
