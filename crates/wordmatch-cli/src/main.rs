//! Terminal front end for the wordmatch engine.
//!
//! Prints the board as text and reads commands from standard input:
//!
//! ```text
//! swap 0 2 1 2    swap two adjacent cells (the `swap` keyword is optional)
//! show            print the board again
//! score           print the score
//! help            list commands
//! quit            leave the game
//! ```
//!
//! # Usage
//!
//! ```sh
//! cargo run -- --category fruit --category animal --category color
//! cargo run -- --define "planet=mars,venus,earth" --category planet --category fish --category tool
//! cargo run -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! RUST_LOG=debug cargo run
//! ```

use std::{
    io::{self, BufRead as _, Write as _},
    process,
};

use clap::Parser;
use wordmatch_catalog::TokenCatalog;
use wordmatch_game::{
    CategoryDefinition, CategorySelection, DEFAULT_CATEGORY_COUNT, Game, GameConfig, GameError,
    SwapRejection,
};
use wordmatch_generator::BoardSeed;

use crate::command::Command;

mod command;
mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of board rows.
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    rows: usize,

    /// Number of board columns.
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    cols: usize,

    /// Category to play with. Repeatable; random categories are used if omitted.
    #[arg(short, long = "category", value_name = "NAME")]
    categories: Vec<String>,

    /// Number of random categories when none are named.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_CATEGORY_COUNT)]
    random_categories: usize,

    /// Custom category as `NAME=word,word,...`. Repeatable.
    #[arg(long = "define", value_name = "NAME=WORDS", value_parser = command::parse_definition)]
    definitions: Vec<CategoryDefinition>,

    /// Seed (64 hex digits) of a board to replay.
    #[arg(long, value_name = "HEX")]
    seed: Option<BoardSeed>,

    /// Print the available categories and exit.
    #[arg(long)]
    list_categories: bool,
}

impl Args {
    fn config(&self) -> GameConfig {
        let categories = if self.categories.is_empty() {
            CategorySelection::Random {
                count: self.random_categories,
            }
        } else {
            CategorySelection::Named(
                self.categories
                    .iter()
                    .map(|name| name.trim().to_lowercase())
                    .collect(),
            )
        };
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            categories,
            overrides: self.definitions.clone(),
            seed: self.seed,
        }
    }
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut catalog = TokenCatalog::builtin();

    if args.list_categories {
        for definition in &args.definitions {
            if let Err(e) = catalog.define(&definition.name, &definition.words) {
                eprintln!("{e}");
                process::exit(2);
            }
        }
        print!("{}", render::catalog(&catalog));
        return;
    }

    let mut game = match args.config().start(&mut catalog) {
        Ok(game) => game,
        Err(e) => {
            log::error!("failed to start game: {e}");
            eprintln!("Failed to start game: {e}");
            process::exit(1);
        }
    };

    println!("Seed: {}", game.seed());
    println!("{}", render::categories(&game));
    println!();
    println!("{}", render::board(&game.snapshot()));
    println!("Type `help` for commands.");

    if let Err(e) = run(&mut game) {
        log::error!("input error: {e}");
        eprintln!("Input error: {e}");
        process::exit(1);
    }
}

fn run(game: &mut Game) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };
        match command::parse(&line) {
            Ok(Command::Empty) => {}
            Ok(Command::Swap(a, b)) => match game.attempt_swap(a, b) {
                Ok(outcome) if outcome.accepted => {
                    println!(
                        "Removed {} cells in {} passes (+{}).",
                        outcome.total_removed,
                        outcome.passes(),
                        outcome.score_delta
                    );
                    println!("{}", render::board(&game.snapshot()));
                }
                Ok(outcome) => match outcome.rejection {
                    Some(SwapRejection::NotAdjacent) => println!("Cells {a} and {b} are not adjacent."),
                    Some(SwapRejection::NoMatch) | None => println!("No match; swap undone."),
                },
                Err(e @ GameError::OutOfBounds { .. }) => println!("{e}"),
                Err(e) => {
                    log::error!("swap failed: {e}");
                    println!("Swap failed: {e}");
                }
            },
            Ok(Command::Show) => println!("{}", render::board(&game.snapshot())),
            Ok(Command::Score) => println!("Score: {}", game.score()),
            Ok(Command::Help) => print!("{}", command::HELP),
            Ok(Command::Quit) => {
                println!("Final score: {}", game.score());
                return Ok(());
            }
            Err(e) => println!("{e} (type `help` for commands)"),
        }
    }
}
