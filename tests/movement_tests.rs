//! Sliding and capture behaviour through the public `Game` API.
//!
//! Each test builds a small position on an otherwise empty 10x10 board and
//! drives it with commands, the way a host would.

use abduct::core::{Command, Direction, GameConfig, GameError, PlayerId, Position, UnitKind};
use abduct::game::{Game, GameStatus};
use abduct::RuleSet;

const P0: PlayerId = PlayerId::FIRST;
const P1: PlayerId = PlayerId::SECOND;

fn game_with(units: &[(PlayerId, UnitKind, i32, i32)]) -> Game {
    game_with_rules(units, RuleSet::default())
}

fn game_with_rules(units: &[(PlayerId, UnitKind, i32, i32)], rules: RuleSet) -> Game {
    let config = units
        .iter()
        .fold(GameConfig::new().empty_board(), |config, &(owner, kind, row, col)| {
            config.with_unit(owner, kind, row, col)
        })
        .with_rules(rules);
    Game::new(&config).unwrap()
}

fn kind_at(game: &Game, row: i32, col: i32) -> Option<(PlayerId, UnitKind)> {
    game.board()
        .occupant_at(Position::new(row, col))
        .unwrap()
        .map(|u| (u.owner, u.kind))
}

// =============================================================================
// Knight
// =============================================================================

/// Knight at (3,8) moving right into an adjacent opposing Knight at (3,9).
#[test]
fn test_knight_captures_adjacent_knight() {
    let mut game = game_with(&[(P0, UnitKind::Knight, 3, 8), (P1, UnitKind::Knight, 3, 9)]);

    let outcome = game.move_unit(Position::new(3, 8), Direction::Right).unwrap();

    assert!(!outcome.wizard_killed());
    assert_eq!(kind_at(&game, 3, 9), Some((P0, UnitKind::Knight)));
    assert_eq!(kind_at(&game, 3, 8), None);
    assert_eq!(game.player(P0).score, UnitKind::Knight.points());
    assert_eq!(game.board().unit_count(), 1);
}

#[test]
fn test_knight_never_reaches_second_target() {
    let mut game = game_with(&[
        (P0, UnitKind::Knight, 9, 5),
        (P1, UnitKind::Knight, 6, 5),
        (P1, UnitKind::Dragon, 3, 5),
    ]);

    let outcome = game.move_unit(Position::new(9, 5), Direction::Up).unwrap();

    let abduct::Outcome::Moved(slide) = outcome else {
        panic!("expected a slide");
    };
    assert_eq!(slide.captures.len(), 1);
    assert_eq!(slide.to, Position::new(6, 5));
    assert_eq!(kind_at(&game, 3, 5), Some((P1, UnitKind::Dragon)));
}

// =============================================================================
// Dragon
// =============================================================================

#[test]
fn test_dragon_takes_only_one_dragon() {
    let mut game = game_with(&[
        (P0, UnitKind::Dragon, 5, 0),
        (P1, UnitKind::Dragon, 5, 2),
        (P1, UnitKind::Knight, 5, 4),
        (P1, UnitKind::Dragon, 5, 7),
    ]);

    game.move_unit(Position::new(5, 0), Direction::Right).unwrap();

    // First Dragon and the Knight fall, the second Dragon blocks.
    assert_eq!(kind_at(&game, 5, 6), Some((P0, UnitKind::Dragon)));
    assert_eq!(kind_at(&game, 5, 7), Some((P1, UnitKind::Dragon)));
    assert_eq!(
        game.player(P0).score,
        UnitKind::Dragon.points() + UnitKind::Knight.points()
    );
}

#[test]
fn test_dragon_blocked_by_second_dragon_on_first_step_after_capture() {
    let mut game = game_with(&[
        (P0, UnitKind::Dragon, 0, 0),
        (P1, UnitKind::Dragon, 1, 0),
        (P1, UnitKind::Dragon, 2, 0),
    ]);

    game.move_unit(Position::new(0, 0), Direction::Down).unwrap();

    assert_eq!(kind_at(&game, 1, 0), Some((P0, UnitKind::Dragon)));
    assert_eq!(kind_at(&game, 2, 0), Some((P1, UnitKind::Dragon)));
}

#[test]
fn test_dragon_facing_dragon_first_captures_it() {
    let mut game = game_with(&[(P0, UnitKind::Dragon, 0, 0), (P1, UnitKind::Dragon, 0, 1)]);

    game.move_unit(Position::new(0, 0), Direction::Right).unwrap();

    assert_eq!(kind_at(&game, 0, 9), Some((P0, UnitKind::Dragon)));
    assert_eq!(game.board().units_of(P1).count(), 0);
}

// =============================================================================
// Wizard
// =============================================================================

#[test]
fn test_wizard_sweeps_until_friendly_unit() {
    let mut game = game_with(&[
        (P0, UnitKind::Wizard, 0, 9),
        (P1, UnitKind::Dragon, 1, 9),
        (P1, UnitKind::Dragon, 2, 9),
        (P1, UnitKind::Dragon, 3, 9),
        (P1, UnitKind::Knight, 5, 9),
        (P0, UnitKind::Knight, 8, 9),
    ]);

    game.move_unit(Position::new(0, 9), Direction::Down).unwrap();

    assert_eq!(kind_at(&game, 7, 9), Some((P0, UnitKind::Wizard)));
    assert_eq!(game.board().units_of(P1).count(), 0);
    assert_eq!(
        game.player(P0).score,
        3 * UnitKind::Dragon.points() + UnitKind::Knight.points()
    );
}

#[test]
fn test_wizard_stops_at_edge() {
    let mut game = game_with(&[(P0, UnitKind::Wizard, 4, 4), (P1, UnitKind::Knight, 4, 9)]);

    game.move_unit(Position::new(4, 4), Direction::Right).unwrap();

    assert_eq!(kind_at(&game, 4, 9), Some((P0, UnitKind::Wizard)));
}

// =============================================================================
// Houses and blocking
// =============================================================================

#[test]
fn test_house_blocks_every_kind() {
    for kind in [UnitKind::Wizard, UnitKind::Dragon, UnitKind::Knight] {
        let mut game = game_with(&[(P0, kind, 2, 0), (P1, UnitKind::House, 2, 5)]);

        game.move_unit(Position::new(2, 0), Direction::Right).unwrap();

        assert_eq!(kind_at(&game, 2, 4), Some((P0, kind)), "{kind} should stop");
        assert_eq!(kind_at(&game, 2, 5), Some((P1, UnitKind::House)));
        assert_eq!(game.player(P0).score, 0);
    }
}

#[test]
fn test_house_cannot_move() {
    let mut game = game_with(&[(P0, UnitKind::House, 2, 2)]);

    assert_eq!(
        game.apply(Command::MoveUnit(Position::new(2, 2), Direction::Up)),
        Err(GameError::ImmovableUnit {
            position: Position::new(2, 2),
            kind: UnitKind::House,
        })
    );
}

#[test]
fn test_first_step_blocked_is_rejected() {
    let mut game = game_with(&[(P0, UnitKind::Knight, 4, 4), (P0, UnitKind::Knight, 4, 5)]);

    assert_eq!(
        game.move_unit(Position::new(4, 4), Direction::Right),
        Err(GameError::NoLegalStep {
            position: Position::new(4, 4),
            direction: Direction::Right,
        })
    );
    assert_eq!(game.turn(), 1);
    assert_eq!(game.current_player(), P0);
}

// =============================================================================
// Wizard capture
// =============================================================================

#[test]
fn test_dragon_capturing_wizard_ends_game_after_slide() {
    let mut game = game_with(&[
        (P0, UnitKind::Dragon, 7, 0),
        (P1, UnitKind::Wizard, 7, 3),
        (P1, UnitKind::Knight, 7, 5),
    ]);

    let outcome = game.move_unit(Position::new(7, 0), Direction::Right).unwrap();

    assert!(outcome.wizard_killed());
    assert_eq!(game.status(), GameStatus::Finished { winner: P0 });
    // The slide runs to completion before the game ends.
    assert_eq!(kind_at(&game, 7, 9), Some((P0, UnitKind::Dragon)));
    assert_eq!(
        game.player(P0).score,
        UnitKind::Wizard.points() + UnitKind::Knight.points()
    );
}

#[test]
fn test_second_player_can_win() {
    let mut game = game_with(&[
        (P0, UnitKind::Wizard, 0, 0),
        (P0, UnitKind::Knight, 9, 9),
        (P1, UnitKind::Knight, 5, 0),
    ]);

    game.move_unit(Position::new(9, 9), Direction::Up).unwrap();
    game.move_unit(Position::new(5, 0), Direction::Up).unwrap();

    assert_eq!(game.status(), GameStatus::Finished { winner: P1 });
    assert_eq!(game.winner().map(|p| p.name.as_str()), Some("B"));
    assert_eq!(game.turn(), 2);
    assert_eq!(game.current_player(), P1);
}

// =============================================================================
// Rule variants
// =============================================================================

#[test]
fn test_captures_only_rule() {
    let rules = RuleSet::default().captures_only();
    let mut game = game_with_rules(
        &[(P0, UnitKind::Knight, 0, 0), (P1, UnitKind::Knight, 0, 5)],
        rules,
    );

    assert_eq!(
        game.move_unit(Position::new(0, 0), Direction::Down),
        Err(GameError::NoCapture {
            position: Position::new(0, 0),
            direction: Direction::Down,
        })
    );
    assert_eq!(kind_at(&game, 0, 0), Some((P0, UnitKind::Knight)));

    game.move_unit(Position::new(0, 0), Direction::Right).unwrap();
    assert_eq!(kind_at(&game, 0, 5), Some((P0, UnitKind::Knight)));
}

#[test]
fn test_unlimited_dragon_kills() {
    let rules = RuleSet::default().with_dragon_kill_limit(None);
    let mut game = game_with_rules(
        &[
            (P0, UnitKind::Dragon, 0, 0),
            (P1, UnitKind::Dragon, 0, 2),
            (P1, UnitKind::Dragon, 0, 4),
            (P1, UnitKind::Dragon, 0, 6),
        ],
        rules,
    );

    game.move_unit(Position::new(0, 0), Direction::Right).unwrap();

    assert_eq!(game.board().units_of(P1).count(), 0);
    assert_eq!(game.player(P0).score, 3 * UnitKind::Dragon.points());
}

#[test]
fn test_dragon_limit_of_two() {
    let rules = RuleSet::default().with_dragon_kill_limit(Some(2));
    let mut game = game_with_rules(
        &[
            (P0, UnitKind::Dragon, 0, 0),
            (P1, UnitKind::Dragon, 0, 2),
            (P1, UnitKind::Dragon, 0, 4),
            (P1, UnitKind::Dragon, 0, 6),
        ],
        rules,
    );

    game.move_unit(Position::new(0, 0), Direction::Right).unwrap();

    assert_eq!(kind_at(&game, 0, 5), Some((P0, UnitKind::Dragon)));
    assert_eq!(kind_at(&game, 0, 6), Some((P1, UnitKind::Dragon)));
}
