use std::{env, process};

use tracing::info;

use crate::{
    config::{Config, Part, DEFAULT_DRAWS},
    error::Result,
    parser::{load_boards, load_draws},
    simulation::{first_winner, last_winner},
};

mod board;
mod config;
mod error;
mod logger;
mod parser;
mod simulation;

fn main() {
    logger::init();

    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<String> {
    let config = Config::from_args(args)?;

    let boards = load_boards(&config.boards_path)?;
    let draws = match &config.draws_path {
        Some(path) => load_draws(path)?,
        None => DEFAULT_DRAWS.to_vec(),
    };

    let win = match config.part {
        Part::First => first_winner(boards, &draws)?,
        Part::Last => last_winner(boards, &draws)?,
    };
    let score = win.score();
    info!(
        board_index = win.board_index,
        draw = win.draw,
        score,
        "scored winning board"
    );

    Ok(format!("Final score: {}", score))
}
