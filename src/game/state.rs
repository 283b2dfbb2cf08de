//! The game aggregate and its turn controller.
//!
//! ## Turn flow
//!
//! - A command is only processed while the game is `InProgress`.
//! - An accepted command that does not capture the opposing Wizard
//!   increments the turn counter and hands the turn to the other player.
//! - A move that captures the opposing Wizard finishes the game. The turn
//!   counter and current player stay as they were; the mover is the winner.
//! - A rejected command changes nothing; the same player tries again.
//!
//! Every command is validated before the first mutation, so a command
//! either applies all of its effects (board, score, quota, turn) or none.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::core::{
    Command, Direction, GameConfig, GameError, Outcome, Player, PlayerId, PlayerMap, Position,
    RuleSet, Unit, UnitId, UnitKind,
};
use crate::rules::{legal_commands, MoveResolver};

/// Lifecycle of a game. `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Commands are accepted.
    InProgress,
    /// A Wizard was captured by `winner`.
    Finished { winner: PlayerId },
}

/// A running game: board, both players and turn state.
///
/// ## Example
///
/// ```
/// use abduct::core::{Direction, GameConfig, PlayerId, Position};
/// use abduct::game::Game;
///
/// let mut game = Game::new(&GameConfig::default()).unwrap();
/// assert_eq!(game.current_player(), PlayerId::FIRST);
///
/// game.move_unit(Position::new(1, 6), Direction::Left).unwrap();
///
/// assert_eq!(game.turn(), 2);
/// assert_eq!(game.current_player(), PlayerId::SECOND);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    rules: RuleSet,
    board: Board,
    players: PlayerMap<Player>,
    current: PlayerId,
    /// Starts at 1, +1 per completed non-winning command.
    turn: u32,
    status: GameStatus,
    next_unit_id: UnitId,
}

impl Game {
    /// Set up a game from its configuration.
    ///
    /// Fails with `InvalidBoardSize` for a board outside `1..=26`, and with
    /// `InvalidLayout` if a starting unit has an unknown owner, is off the
    /// board, sits on an occupied cell, or is a House next to another House.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut game = Self {
            rules: config.rules,
            board: Board::new(config.board_size),
            players: PlayerMap::new(|id| {
                let display = &config.players[id];
                Player::new(id, display.name.clone(), display.color, config.house_quota)
            }),
            current: PlayerId::FIRST,
            turn: 1,
            status: GameStatus::InProgress,
            next_unit_id: UnitId(0),
        };

        for start in &config.layout {
            game.board
                .check_placement(start.position, start.kind)
                .map_err(|reason| GameError::InvalidLayout {
                    kind: start.kind,
                    owner: start.owner,
                    reason: Box::new(reason),
                })?;
            let id = game.alloc_unit_id();
            game.board.place(Unit::new(id, start.kind, start.owner, start.position));
        }

        debug!(
            board_size = config.board_size,
            units = game.board.unit_count(),
            "game set up"
        );
        Ok(game)
    }

    // === Queries ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Active rule variants.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// A player's record.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Both player records.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// The player whose command is processed next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Turn counter (starts at 1).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Lifecycle state.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if a Wizard has been captured.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    /// The winning player, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Finished { winner } => Some(&self.players[winner]),
            GameStatus::InProgress => None,
        }
    }

    /// Every command the current player could issue right now.
    ///
    /// Empty once the game is finished.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        if self.is_finished() {
            return Vec::new();
        }
        let houses_left = self.players[self.current].houses_left;
        legal_commands(&self.board, &self.rules, self.current, houses_left)
    }

    // === Commands ===

    /// Process a pre-parsed command for the current player.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, GameError> {
        match command {
            Command::PlaceHouse(position) => self.place_house(position),
            Command::MoveUnit(position, direction) => self.move_unit(position, direction),
        }
    }

    /// Place one of the current player's houses at `position`.
    #[instrument(skip(self), fields(player = %self.current, turn = self.turn))]
    pub fn place_house(&mut self, position: Position) -> Result<Outcome, GameError> {
        self.try_place_house(position)
            .inspect_err(|err| debug!(%err, "house placement rejected"))
    }

    fn try_place_house(&mut self, position: Position) -> Result<Outcome, GameError> {
        self.ensure_in_progress()?;
        let player = self.current;

        if self.players[player].houses_left == 0 {
            return Err(GameError::HouseQuotaExhausted(player));
        }
        self.board.check_placement(position, UnitKind::House)?;

        let id = self.alloc_unit_id();
        self.board.place(Unit::new(id, UnitKind::House, player, position));
        let taken = self.players[player].take_house();
        debug_assert!(taken, "quota checked above");
        let houses_left = self.players[player].houses_left;

        self.end_turn();
        Ok(Outcome::HousePlaced {
            unit: id,
            position,
            houses_left,
        })
    }

    /// Slide the current player's unit at `from` towards `direction`.
    #[instrument(skip(self), fields(player = %self.current, turn = self.turn))]
    pub fn move_unit(&mut self, from: Position, direction: Direction) -> Result<Outcome, GameError> {
        self.try_move_unit(from, direction)
            .inspect_err(|err| debug!(%err, "move rejected"))
    }

    fn try_move_unit(&mut self, from: Position, direction: Direction) -> Result<Outcome, GameError> {
        self.ensure_in_progress()?;
        let player = self.current;

        let outcome = MoveResolver::resolve(&mut self.board, &self.rules, player, from, direction)?;
        self.players[player].award(outcome.points);

        if outcome.wizard_killed {
            self.status = GameStatus::Finished { winner: player };
            info!(
                winner = %player,
                name = %self.players[player].name,
                turn = self.turn,
                "wizard captured, game over"
            );
        } else {
            self.end_turn();
        }
        Ok(Outcome::Moved(outcome))
    }

    // === Internals ===

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::Finished { .. } => Err(GameError::GameAlreadyFinished),
        }
    }

    /// Hand the turn to the other player.
    fn end_turn(&mut self) {
        self.turn += 1;
        self.current = self.current.opponent();
    }

    fn alloc_unit_id(&mut self) -> UnitId {
        let id = self.next_unit_id;
        self.next_unit_id = id.next();
        id
    }
}
