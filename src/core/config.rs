//! Game configuration types.
//!
//! Hosts configure a game at startup by providing:
//! - `RuleSet`: the policy points where rule variants disagree
//! - `PlayerConfig`: names and colour tags
//! - `StartingUnit`: the initial layout
//! - `GameConfig`: combines all configuration
//!
//! `GameConfig::default()` is the standard 10x10 game.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::{Color, PlayerId, PlayerMap, PLAYER_COUNT};
use super::position::Position;
use super::unit::UnitKind;

/// Standard board edge length.
pub const DEFAULT_BOARD_SIZE: i32 = 10;

/// Standard number of houses each player may place.
pub const DEFAULT_HOUSE_QUOTA: u32 = 6;

/// Largest supported board: columns are addressed by a single letter.
pub const MAX_BOARD_SIZE: i32 = 26;

/// Rule variants that are configurable per game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Is a slide that captures nothing a legal move?
    pub allow_quiet_slides: bool,

    /// Maximum opposing Dragons a single Dragon move may capture.
    /// `None` for unlimited.
    pub dragon_kill_limit: Option<u32>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            allow_quiet_slides: true,
            dragon_kill_limit: Some(1),
        }
    }
}

impl RuleSet {
    /// Require every move to capture at least one unit.
    #[must_use]
    pub fn captures_only(mut self) -> Self {
        self.allow_quiet_slides = false;
        self
    }

    /// Set the Dragon kill limit (`None` for unlimited).
    #[must_use]
    pub fn with_dragon_kill_limit(mut self, limit: Option<u32>) -> Self {
        self.dragon_kill_limit = limit;
        self
    }
}

/// Display settings of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Human-readable name.
    pub name: String,
    /// Colour tag.
    pub color: Color,
}

impl PlayerConfig {
    /// Create a new player configuration.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// One entry of the starting layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingUnit {
    pub owner: PlayerId,
    pub kind: UnitKind,
    pub position: Position,
}

impl StartingUnit {
    /// Create a layout entry.
    #[must_use]
    pub const fn new(owner: PlayerId, kind: UnitKind, row: i32, col: i32) -> Self {
        Self {
            owner,
            kind,
            position: Position::new(row, col),
        }
    }
}

/// Player 0's standard units. Player 1 gets the transposed layout.
const STANDARD_HALF: [(UnitKind, i32, i32); 7] = [
    (UnitKind::Wizard, 4, 5),
    (UnitKind::Dragon, 3, 5),
    (UnitKind::Dragon, 3, 6),
    (UnitKind::Dragon, 4, 6),
    (UnitKind::Knight, 1, 6),
    (UnitKind::Knight, 2, 7),
    (UnitKind::Knight, 3, 8),
];

/// The standard mirrored layout for a 10x10 board.
///
/// ```
/// use abduct::core::config::standard_layout;
///
/// let layout = standard_layout();
/// assert_eq!(layout.len(), 14);
/// ```
#[must_use]
pub fn standard_layout() -> Vec<StartingUnit> {
    let first = STANDARD_HALF
        .iter()
        .map(|&(kind, row, col)| StartingUnit::new(PlayerId::FIRST, kind, row, col));
    let second = STANDARD_HALF
        .iter()
        .map(|&(kind, row, col)| StartingUnit::new(PlayerId::SECOND, kind, col, row));
    first.chain(second).collect()
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board edge length.
    pub board_size: i32,

    /// Houses each player may place during play.
    pub house_quota: u32,

    /// Per-player display settings.
    pub players: PlayerMap<PlayerConfig>,

    /// Units on the board before the first turn.
    pub layout: Vec<StartingUnit>,

    /// Active rule variants.
    pub rules: RuleSet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            house_quota: DEFAULT_HOUSE_QUOTA,
            players: PlayerMap::new(|p| {
                if p == PlayerId::FIRST {
                    PlayerConfig::new("A", Color::Red)
                } else {
                    PlayerConfig::new("B", Color::Blue)
                }
            }),
            layout: standard_layout(),
            rules: RuleSet::default(),
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board edge length.
    ///
    /// # Panics
    /// Panics if `size` is not in `1..=26`.
    #[must_use]
    pub fn with_board_size(mut self, size: i32) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "Board size must be 1-26"
        );
        self.board_size = size;
        self
    }

    /// Set the per-player house quota.
    #[must_use]
    pub fn with_house_quota(mut self, quota: u32) -> Self {
        self.house_quota = quota;
        self
    }

    /// Set a player's name and colour.
    #[must_use]
    pub fn with_player(mut self, player: PlayerId, config: PlayerConfig) -> Self {
        self.players[player] = config;
        self
    }

    /// Replace the starting layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Vec<StartingUnit>) -> Self {
        self.layout = layout;
        self
    }

    /// Add a single unit to the starting layout.
    #[must_use]
    pub fn with_unit(mut self, owner: PlayerId, kind: UnitKind, row: i32, col: i32) -> Self {
        self.layout.push(StartingUnit::new(owner, kind, row, col));
        self
    }

    /// Start from an empty board.
    #[must_use]
    pub fn empty_board(mut self) -> Self {
        self.layout.clear();
        self
    }

    /// Set the rule variants.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Check the parts of a configuration the builder asserts on.
    ///
    /// Configurations deserialized from data skip the builder, so
    /// `Game::new` runs this before touching anything. Cell-level layout
    /// problems are left to the board.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(1..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(GameError::InvalidBoardSize(self.board_size));
        }
        for start in &self.layout {
            if start.owner.index() >= PLAYER_COUNT {
                return Err(GameError::InvalidLayout {
                    kind: start.kind,
                    owner: start.owner,
                    reason: Box::new(GameError::UnknownPlayer(start.owner)),
                });
            }
        }
        Ok(())
    }
}
