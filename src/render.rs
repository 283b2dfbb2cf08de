//! Plain-text rendering of the board and game summary.
//!
//! `Display` for `Board` draws a bordered grid with column letters and row
//! numbers matching the notation. Player 0's units are upper case, player
//! 1's lower case. Hosts that want colour pass their own cell painter to
//! `render_board`.

use std::fmt::{self, Write as _};

use crate::board::Board;
use crate::core::{PlayerId, Unit};
use crate::game::Game;

/// Glyph of a unit without colour: case marks the owner.
#[must_use]
pub fn plain_glyph(unit: &Unit) -> String {
    let glyph = unit.kind.glyph();
    if unit.owner == PlayerId::FIRST {
        glyph.to_string()
    } else {
        glyph.to_ascii_lowercase().to_string()
    }
}

/// Draw the board, asking `paint` for the text of every occupied cell.
///
/// `paint` should return a single visible character (plus any escape
/// sequences) to keep the grid aligned.
pub fn render_board(board: &Board, paint: impl Fn(&Unit) -> String) -> String {
    let size = board.size();
    let mut out = String::new();

    let mut header = String::from("   ");
    for col in 0..size {
        let letter = char::from(b'A' + col as u8);
        let _ = write!(header, "  {letter} ");
    }
    out.push_str(header.trim_end());
    out.push('\n');

    let border = format!("   +{}\n", "---+".repeat(size as usize));
    out.push_str(&border);

    for row in board.positions().collect::<Vec<_>>().chunks(size as usize) {
        let _ = write!(out, "{:>2} |", row[0].row);
        for &position in row {
            let cell = match board.occupant_at(position) {
                Ok(Some(unit)) => paint(unit),
                _ => " ".to_string(),
            };
            let _ = write!(out, " {cell} |");
        }
        out.push('\n');
        out.push_str(&border);
    }
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self, plain_glyph))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Turn: {}", self.turn())?;
        for (_, player) in self.players().iter() {
            writeln!(
                f,
                "Player {}: {} | Houses: {}",
                player.name, player.score, player.houses_left
            )?;
        }
        write!(f, "{}", self.board())
    }
}
