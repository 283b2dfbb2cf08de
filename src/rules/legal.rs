//! Enumeration of legal commands.
//!
//! Lists every command a player could issue that the engine would accept
//! right now. House placements come first (row-major), then moves ordered
//! by unit position and direction.

use crate::board::Board;
use crate::core::{Command, Direction, PlayerId, RuleSet, UnitKind};

use super::resolver::MoveResolver;

/// All cells where a house could be placed.
///
/// Empty when `houses_left` is zero.
pub fn legal_house_placements(board: &Board, houses_left: u32) -> Vec<Command> {
    if houses_left == 0 {
        return Vec::new();
    }
    board
        .positions()
        .filter(|&p| board.check_placement(p, UnitKind::House).is_ok())
        .map(Command::PlaceHouse)
        .collect()
}

/// All slides `player` could make.
pub fn legal_moves(board: &Board, rules: &RuleSet, player: PlayerId) -> Vec<Command> {
    let mut origins: Vec<_> = board
        .units_of(player)
        .filter(|u| u.movable)
        .map(|u| u.position)
        .collect();
    origins.sort_unstable();

    origins
        .into_iter()
        .flat_map(|from| Direction::ALL.into_iter().map(move |d| (from, d)))
        .filter(|&(from, direction)| {
            MoveResolver::plan(board, rules, player, from, direction).is_ok()
        })
        .map(|(from, direction)| Command::MoveUnit(from, direction))
        .collect()
}

/// Every command `player` could issue.
pub fn legal_commands(
    board: &Board,
    rules: &RuleSet,
    player: PlayerId,
    houses_left: u32,
) -> Vec<Command> {
    let mut commands = legal_house_placements(board, houses_left);
    commands.extend(legal_moves(board, rules, player));
    commands
}
