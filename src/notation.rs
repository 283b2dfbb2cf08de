//! Text notation for positions, directions and commands.
//!
//! ## Positions
//!
//! A column letter followed by a row number: `A0` is the top-left cell,
//! `J9` the bottom-right cell of a standard board. Letters are
//! case-insensitive. `B1` is `Position::new(1, 1)`, `C0` is
//! `Position::new(0, 2)`.
//!
//! ## Commands
//!
//! ```text
//! put-house <pos>        (alias: ph)
//! move <pos> <dir>       (alias: m)     dir = up | down | left | right
//! ```
//!
//! Parsing only checks shape. Bounds, ownership and occupancy are checked by
//! the engine when the command is applied.

use std::fmt;
use std::str::FromStr;

use crate::core::{Command, Direction, GameError, Position};

/// Highest row number accepted in notation.
const MAX_ROW: i32 = 99;

impl FromStr for Position {
    type Err = GameError;

    /// ```
    /// use abduct::core::Position;
    ///
    /// assert_eq!("b1".parse::<Position>().unwrap(), Position::new(1, 1));
    /// assert_eq!("C0".parse::<Position>().unwrap(), Position::new(0, 2));
    /// assert!("1B".parse::<Position>().is_err());
    /// ```
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidPosition(token.to_string());

        let mut chars = token.chars();
        let letter = chars.next().filter(char::is_ascii_alphabetic).ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let row: i32 = digits.parse().map_err(|_| invalid())?;
        if row > MAX_ROW {
            return Err(invalid());
        }
        let col = i32::from(letter.to_ascii_uppercase() as u8 - b'A');
        Ok(Position::new(row, col))
    }
}

impl fmt::Display for Position {
    /// Notation form when representable, `(row, col)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.col) && (0..=MAX_ROW).contains(&self.row) {
            let letter = char::from(b'A' + self.col as u8);
            write!(f, "{}{}", letter, self.row)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| GameError::InvalidDirection(token.to_string()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Command {
    type Err = GameError;

    /// ```
    /// use abduct::core::{Command, Direction, Position};
    ///
    /// let command: Command = "m D3 right".parse().unwrap();
    /// assert_eq!(command, Command::MoveUnit(Position::new(3, 3), Direction::Right));
    /// ```
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| GameError::UnknownCommand(String::new()))?
            .to_ascii_lowercase();

        let command = match verb.as_str() {
            "put-house" | "ph" => {
                let position = words.next().ok_or(GameError::MissingArgument {
                    command: "put-house",
                    argument: "position",
                })?;
                Command::PlaceHouse(position.parse()?)
            }
            "move" | "m" => {
                let position = words.next().ok_or(GameError::MissingArgument {
                    command: "move",
                    argument: "position",
                })?;
                let direction = words.next().ok_or(GameError::MissingArgument {
                    command: "move",
                    argument: "direction",
                })?;
                Command::MoveUnit(position.parse()?, direction.parse()?)
            }
            _ => return Err(GameError::UnknownCommand(verb)),
        };

        if words.next().is_some() {
            return Err(GameError::UnknownCommand(line.trim().to_string()));
        }
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PlaceHouse(position) => write!(f, "put-house {position}"),
            Command::MoveUnit(position, direction) => write!(f, "move {position} {direction}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!("A0".parse::<Position>(), Ok(Position::new(0, 0)));
        assert_eq!("j9".parse::<Position>(), Ok(Position::new(9, 9)));
        assert_eq!("I3".parse::<Position>(), Ok(Position::new(3, 8)));
    }

    #[test]
    fn test_parse_position_rejects_bad_tokens() {
        for token in ["", "A", "5", "AA", "A-1", "#3", "A1x"] {
            assert_eq!(
                token.parse::<Position>(),
                Err(GameError::InvalidPosition(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 8).to_string(), "I3");
        assert_eq!(Position::new(-1, 0).to_string(), "(-1, 0)");
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("UP".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(
            "north".parse::<Direction>(),
            Err(GameError::InvalidDirection("north".to_string()))
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "put-house B1".parse::<Command>(),
            Ok(Command::PlaceHouse(Position::new(1, 1)))
        );
        assert_eq!(
            "PH a0".parse::<Command>(),
            Ok(Command::PlaceHouse(Position::new(0, 0)))
        );
        assert_eq!(
            "  move   I3  right ".parse::<Command>(),
            Ok(Command::MoveUnit(Position::new(3, 8), Direction::Right))
        );
    }

    #[test]
    fn test_parse_command_errors() {
        assert_eq!(
            "jump A1".parse::<Command>(),
            Err(GameError::UnknownCommand("jump".to_string()))
        );
        assert_eq!(
            "move A1".parse::<Command>(),
            Err(GameError::MissingArgument {
                command: "move",
                argument: "direction",
            })
        );
        assert_eq!(
            "m A1 sideways".parse::<Command>(),
            Err(GameError::InvalidDirection("sideways".to_string()))
        );
        assert!(matches!(
            "ph A1 A2".parse::<Command>(),
            Err(GameError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_command_display_parses_back() {
        let command = Command::MoveUnit(Position::new(2, 7), Direction::Down);
        assert_eq!(command.to_string(), "move H2 down");
        assert_eq!(command.to_string().parse::<Command>(), Ok(command));
    }
}
