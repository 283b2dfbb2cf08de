//! Movement rules.
//!
//! - `resolver`: per-unit-type sliding and capture
//! - `legal`: enumeration of every command the engine would accept
//!
//! Nothing here knows about turn order; `game` decides who may move.

pub mod resolver;
pub mod legal;

pub use resolver::{MoveResolver, SlidePlan};
pub use legal::{legal_commands, legal_house_placements, legal_moves};
