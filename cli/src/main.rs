use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use rand::Rng;
use suraido_core::{
    count_inversions, is_solvable, scramble_seed, Board, ClickOutcome, GameSession, GRID_SIZE,
    PUZZLE_SEED, TILE_COUNT,
};

#[derive(Parser)]
#[command(name = "suraido-cli", version, about = "Terminal tools for the suraido puzzle")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Shuffle {
        #[arg(long)]
        seed: Option<String>,
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    Play {
        #[arg(long)]
        seed: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Shuffle { seed, count } => {
            let base = resolve_seed(seed.as_deref())?;
            for round in 0..count {
                let seed = scramble_seed(PUZZLE_SEED, base.wrapping_add(round), GRID_SIZE);
                let session = GameSession::fresh(seed, None);
                let order = session.board().order();
                let empty_slot = session.board().empty_slot();
                println!("seed: {seed:#010x}");
                print!("{}", format_board(session.board()));
                println!(
                    "inversions: {}  empty slot: {}  solvable: {}",
                    count_inversions(&order),
                    empty_slot,
                    is_solvable(&order, empty_slot, GRID_SIZE)
                );
            }
        }
        Commands::Play { seed } => {
            let base = resolve_seed(seed.as_deref())?;
            play(scramble_seed(PUZZLE_SEED, base, GRID_SIZE))?;
        }
    }

    Ok(())
}

fn play(seed: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = GameSession::fresh(seed, None);
    let mut moves = 0u32;
    println!("photo: {}", session.photo().label);
    println!(
        "slide tiles into the gap: enter a slot number 0-{}, or q to quit",
        TILE_COUNT - 1
    );
    print!("{}", format_board(session.board()));

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("q") {
            break;
        }
        let Ok(slot) = input.parse::<usize>() else {
            println!("enter a slot number 0-{}, or q", TILE_COUNT - 1);
            continue;
        };
        match session.handle_click(slot) {
            ClickOutcome::Ignored => println!("that is the empty slot"),
            ClickOutcome::Rejected => println!("slot {slot} is not next to the empty slot"),
            ClickOutcome::Moved => {
                moves += 1;
                print!("{}", format_board(session.board()));
            }
            ClickOutcome::Solved => {
                moves += 1;
                print!("{}", format_board(session.board()));
                println!("solved in {moves} moves");
                break;
            }
        }
    }

    Ok(())
}

fn format_board(board: &Board) -> String {
    let grid = board.grid_size();
    let mut out = String::new();
    for (slot, tile) in board.tiles().iter().enumerate() {
        if slot == board.empty_slot() {
            out.push_str("  .");
        } else {
            let _ = write!(out, "{:3}", tile.home + 1);
        }
        if (slot + 1) % grid == 0 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    out
}

fn resolve_seed(raw: Option<&str>) -> Result<u32, Box<dyn std::error::Error>> {
    match raw {
        Some(raw) => parse_seed_arg(raw),
        None => Ok(rand::rng().random()),
    }
}

fn parse_seed_arg(raw: &str) -> Result<u32, Box<dyn std::error::Error>> {
    let trimmed = raw.trim();
    let value = if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)?
    } else {
        trimmed.parse::<u32>()?
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{format_board, parse_seed_arg};
    use suraido_core::{Board, GRID_SIZE};

    #[test]
    fn boards_print_with_a_dot_for_the_gap() {
        let board = Board::solved(GRID_SIZE);
        assert_eq!(
            format_board(&board),
            "  1   2   3   4\n  5   6   7   8\n  9  10  11  12\n 13  14  15   .\n"
        );
    }

    #[test]
    fn seeds_parse_as_decimal_or_hex() {
        assert_eq!(parse_seed_arg("42").unwrap(), 42);
        assert_eq!(parse_seed_arg("0x2A").unwrap(), 42);
        assert_eq!(parse_seed_arg(" 0X2a ").unwrap(), 42);
        assert!(parse_seed_arg("nope").is_err());
    }
}
