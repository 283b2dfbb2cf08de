//! Console front end: two players sharing one terminal.
//!
//! Reads one command per line from stdin and prints the board after each.
//! Set `RUST_LOG=abduct=debug` to see engine logs on stderr.

use std::io::{self, BufRead, Write};

use abduct::core::{Command, GameConfig, Unit};
use abduct::game::Game;
use abduct::render::{plain_glyph, render_board};
use tracing_subscriber::EnvFilter;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const HELP: &str = "\
Available commands:
  put-house <position>            (alias: ph)   e.g. ph B1
  move <position> <direction>     (alias: m)    e.g. m I3 left
  help                            show this text
  quit                            leave the game

Positions are a column letter and a row number. Directions: up, down, left, right.";

fn print_game(game: &Game) {
    let players = game.players();
    let paint = |unit: &Unit| {
        let color = players[unit.owner].color.ansi();
        format!("{BOLD}{color}{}{RESET}", plain_glyph(unit))
    };

    println!("Turn: {}", game.turn());
    for (_, player) in players.iter() {
        println!(
            "{}Player {}{}: {} | Houses: {}",
            player.color.ansi(),
            player.name,
            RESET,
            player.score,
            player.houses_left
        );
    }
    print!("{}", render_board(game.board(), paint));
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut game = match Game::new(&GameConfig::default()) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("cannot set up game: {err}");
            std::process::exit(1);
        }
    };

    println!("====================================");
    println!("{BOLD}Abduct{RESET}   (type `help` for commands)");
    println!("------------------------------------");
    print_game(&game);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_finished() {
        let player = game.player(game.current_player());
        print!("\n{}[Player {}]{} > ", player.color.ansi(), player.name, RESET);
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };
        let line = line.trim();

        match line.to_ascii_lowercase().as_str() {
            "" => continue,
            "help" => {
                println!("{HELP}");
                println!("{} legal commands available.", game.legal_commands().len());
                continue;
            }
            "quit" | "exit" => return Ok(()),
            _ => {}
        }

        match line.parse::<Command>().and_then(|command| game.apply(command)) {
            Ok(_) => print_game(&game),
            Err(err) => {
                print_game(&game);
                println!("{}Invalid move: {err}{RESET}", abduct::core::Color::Red.ansi());
            }
        }
    }

    if let Some(winner) = game.winner() {
        println!(
            "\n{}[Player {}]{} WINS!",
            winner.color.ansi(),
            winner.name,
            RESET
        );
    }
    Ok(())
}
