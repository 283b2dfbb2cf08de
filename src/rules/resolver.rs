//! Slide resolution: per-unit-type movement and capture.
//!
//! A moving unit advances one cell at a time in a fixed direction and
//! re-evaluates at every step:
//!
//! - off the board: the slide ends
//! - empty cell: the unit enters it and keeps going
//! - friendly unit or opposing House: the slide ends in front of it
//! - opposing movable unit: the mover's capture rule decides
//!
//! | Mover  | On an opposing unit                                         |
//! |--------|-------------------------------------------------------------|
//! | Knight | captures it, enters its cell, stops                         |
//! | Dragon | captures it and keeps sliding; stops in front of an opposing Dragon once the Dragon kill limit is reached |
//! | Wizard | captures it and keeps sliding                               |
//!
//! A capture counts as a step: the captured unit's cell is the next one
//! the mover enters, and a Dragon or Wizard carries on from there. A first
//! step that captures is therefore never followed by `NoLegalStep`.
//!
//! Resolution is split in two. `MoveResolver::plan` walks the ray without
//! touching the board and either rejects the move or returns a
//! `SlidePlan`; `MoveResolver::commit` applies a plan. A rejected move
//! therefore never leaves a half-applied slide behind.

use smallvec::SmallVec;
use tracing::debug;

use crate::board::Board;
use crate::core::{
    Capture, Direction, GameError, MoveOutcome, PlayerId, Position, RuleSet, Unit, UnitId,
    UnitKind,
};

/// What the mover does with the next cell of its slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Encounter {
    /// Empty cell: enter and continue.
    Enter,
    /// Friendly unit, House, or a Dragon over the kill limit.
    Blocked,
    /// Capture the occupant and enter its cell.
    Capture { then_stop: bool },
}

/// A fully evaluated, not yet applied slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlidePlan {
    /// The sliding unit.
    pub unit: UnitId,
    /// Its kind.
    pub kind: UnitKind,
    /// The player moving it.
    pub owner: PlayerId,
    /// Start cell.
    pub from: Position,
    /// Final cell.
    pub to: Position,
    /// Completed one-cell relocations.
    pub steps: u32,
    /// Units the slide captures, in order.
    pub captures: SmallVec<[Capture; 4]>,
}

impl SlidePlan {
    /// Total points the captures are worth.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.captures.iter().map(|c| c.kind.points()).sum()
    }

    /// Whether one of the captures is a Wizard.
    #[must_use]
    pub fn kills_wizard(&self) -> bool {
        self.captures.iter().any(|c| c.kind == UnitKind::Wizard)
    }

    fn dragons_captured(&self) -> u32 {
        self.captures
            .iter()
            .filter(|c| c.kind == UnitKind::Dragon)
            .count() as u32
    }
}

/// Resolves sliding moves against a board.
pub struct MoveResolver;

impl MoveResolver {
    /// Evaluate moving `player`'s unit at `from` towards `direction`.
    ///
    /// Fails without touching the board when the cell is off the board or
    /// empty, the unit belongs to the other player or is a House, the
    /// very first step is blocked, or (under a captures-only rule set) the
    /// slide would capture nothing.
    pub fn plan(
        board: &Board,
        rules: &RuleSet,
        player: PlayerId,
        from: Position,
        direction: Direction,
    ) -> Result<SlidePlan, GameError> {
        let unit = board
            .occupant_at(from)?
            .ok_or(GameError::NoUnitAtPosition(from))?;

        if !unit.is_owned_by(player) {
            return Err(GameError::NotOwner {
                position: from,
                owner: unit.owner,
            });
        }
        if !unit.movable {
            return Err(GameError::ImmovableUnit {
                position: from,
                kind: unit.kind,
            });
        }

        let mut plan = SlidePlan {
            unit: unit.id,
            kind: unit.kind,
            owner: unit.owner,
            from,
            to: from,
            steps: 0,
            captures: SmallVec::new(),
        };

        loop {
            let next = plan.to.step(direction);
            if !board.in_bounds(next) {
                break;
            }

            let encounter = match board.occupant_at(next)? {
                None => Encounter::Enter,
                Some(other) => Self::encounter(unit, other, &plan, rules),
            };

            match encounter {
                Encounter::Blocked => break,
                Encounter::Enter => {
                    plan.to = next;
                    plan.steps += 1;
                }
                Encounter::Capture { then_stop } => {
                    if let Some(victim) = board.occupant_at(next)? {
                        plan.captures.push(Capture {
                            unit: victim.id,
                            kind: victim.kind,
                            owner: victim.owner,
                            position: next,
                        });
                    }
                    plan.to = next;
                    plan.steps += 1;
                    if then_stop {
                        break;
                    }
                }
            }
        }

        if plan.steps == 0 {
            return Err(GameError::NoLegalStep {
                position: from,
                direction,
            });
        }
        if plan.captures.is_empty() && !rules.allow_quiet_slides {
            return Err(GameError::NoCapture {
                position: from,
                direction,
            });
        }

        Ok(plan)
    }

    /// Decide what `mover` does with an occupied cell.
    fn encounter(mover: &Unit, other: &Unit, plan: &SlidePlan, rules: &RuleSet) -> Encounter {
        if other.owner == mover.owner || other.kind == UnitKind::House {
            return Encounter::Blocked;
        }

        match mover.kind {
            UnitKind::Knight => Encounter::Capture { then_stop: true },
            UnitKind::Dragon => {
                let limit_reached = rules
                    .dragon_kill_limit
                    .is_some_and(|limit| plan.dragons_captured() >= limit);
                if other.kind == UnitKind::Dragon && limit_reached {
                    Encounter::Blocked
                } else {
                    Encounter::Capture { then_stop: false }
                }
            }
            UnitKind::Wizard => Encounter::Capture { then_stop: false },
            // Houses never slide; `plan` rejects them before the walk.
            UnitKind::House => Encounter::Blocked,
        }
    }

    /// Apply a plan produced by `plan` against the same board state.
    pub fn commit(board: &mut Board, plan: &SlidePlan) -> MoveOutcome {
        for capture in &plan.captures {
            debug!(
                mover = %plan.unit,
                victim = %capture.unit,
                kind = %capture.kind,
                row = capture.position.row,
                col = capture.position.col,
                "capture"
            );
            board.remove(capture.unit);
        }
        board.relocate(plan.unit, plan.to);

        MoveOutcome {
            unit: plan.unit,
            from: plan.from,
            to: plan.to,
            steps: plan.steps,
            captures: plan.captures.clone(),
            points: plan.points(),
            wizard_killed: plan.kills_wizard(),
        }
    }

    /// Plan and commit in one go.
    pub fn resolve(
        board: &mut Board,
        rules: &RuleSet,
        player: PlayerId,
        from: Position,
        direction: Direction,
    ) -> Result<MoveOutcome, GameError> {
        let plan = Self::plan(board, rules, player, from, direction)?;
        Ok(Self::commit(board, &plan))
    }
}
