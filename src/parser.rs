use std::{fs, path::Path};

use itertools::Itertools;
use nom::{
    character::complete::digit1,
    combinator::{all_consuming, map_res},
    IResult,
};
use tracing::{debug, info};

use crate::{
    board::{Board, CELLS_PER_BOARD, MAX_CELL_VALUE},
    error::{BingoError, Result},
};

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |value: &str| value.parse())(input)
}

fn parse_token(token_index: usize, token: &str) -> Result<u32> {
    all_consuming(number)(token)
        .map(|(_, value)| value)
        .map_err(|_| {
            let is_negative_number = token.strip_prefix('-').map_or(false, |rest| {
                !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
            });
            let reason = if is_negative_number {
                "negative numbers are not valid bingo values"
            } else if token.chars().all(|c| c.is_ascii_digit()) {
                "value is too large"
            } else {
                "not a non-negative integer"
            };
            BingoError::Parse {
                token_index,
                token: token.to_string(),
                reason: reason.to_string(),
            }
        })
}

fn parse_numbers<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Vec<u32>> {
    tokens
        .enumerate()
        .map(|(index, token)| parse_token(index, token))
        .collect()
}

/// Every run of 25 whitespace-separated numbers is one board, row-major.
/// There is no separator syntax between boards; they are inferred by count.
/// Cell values must lie in `0..=MAX_CELL_VALUE`.
pub fn parse_boards(input: &str) -> Result<Vec<Board>> {
    let numbers = parse_numbers(input.split_ascii_whitespace())?;
    if let Some((token_index, value)) = numbers.iter().find_position(|x| **x > MAX_CELL_VALUE) {
        return Err(BingoError::Parse {
            token_index,
            token: value.to_string(),
            reason: format!("bingo values range from 0 to {}", MAX_CELL_VALUE),
        });
    }
    if numbers.len() % CELLS_PER_BOARD != 0 {
        return Err(BingoError::IncompleteBoard {
            token_count: numbers.len(),
        });
    }

    Ok(numbers
        .chunks_exact(CELLS_PER_BOARD)
        .map(Board::from_cells)
        .collect_vec())
}

/// Draws may be separated by commas, whitespace, or both.
pub fn parse_draws(input: &str) -> Result<Vec<u32>> {
    parse_numbers(
        input
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|x| !x.is_empty()),
    )
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| BingoError::from_io(path, e))
}

pub fn load_boards(path: &Path) -> Result<Vec<Board>> {
    let content = read_input(path)?;
    let boards = parse_boards(&content)?;
    info!(path = %path.display(), boards = boards.len(), "loaded boards");
    Ok(boards)
}

pub fn load_draws(path: &Path) -> Result<Vec<u32>> {
    let content = read_input(path)?;
    let draws = parse_draws(&content)?;
    debug!(path = %path.display(), draws = draws.len(), "loaded draw sequence");
    Ok(draws)
}
