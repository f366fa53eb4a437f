use tracing::{debug, trace};

use crate::{
    board::Board,
    error::{BingoError, Result},
};

/// A board completing a row or column. `board` is the card as it looked at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Win {
    pub board_index: usize,
    pub draw: u32,
    pub board: Board,
}

impl Win {
    pub fn score(&self) -> u64 {
        self.board.score(self.draw)
    }
}

/// Every win of a run, in the order the wins happened.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub wins: Vec<Win>,
    pub draws_made: usize,
    pub still_playing: usize,
}

impl Outcome {
    pub fn first(&self) -> Option<&Win> {
        self.wins.first()
    }

    /// The last board to win. Among boards completing on the same draw, the one
    /// that comes later in the original board order counts as the later winner.
    pub fn last(&self) -> Option<&Win> {
        self.wins.last()
    }
}

/// Calls every draw in order against every board that has not yet won.
/// Winning boards drop out of play for good the moment they complete.
pub fn play(boards: Vec<Board>, draws: &[u32]) -> Outcome {
    let mut active: Vec<(usize, Board)> = boards.into_iter().enumerate().collect();
    let mut wins = Vec::new();

    for &draw in draws {
        if active.is_empty() {
            trace!(draw, "no boards left in play");
            continue;
        }

        let mut matched = false;
        active.retain_mut(|(board_index, board)| {
            let marked = board.mark(draw);
            matched |= marked;
            if !(marked && board.has_won()) {
                return true;
            }

            debug!(
                board_index = *board_index,
                draw,
                marked = board.marked_count(),
                "board won:\n{}",
                board
            );
            wins.push(Win {
                board_index: *board_index,
                draw,
                board: board.clone(),
            });
            false
        });

        if !matched {
            trace!(draw, "matched no board");
        }
    }

    Outcome {
        wins,
        draws_made: draws.len(),
        still_playing: active.len(),
    }
}

fn pick_winner(
    boards: Vec<Board>,
    draws: &[u32],
    pick: impl FnOnce(&Outcome) -> Option<&Win>,
) -> Result<Win> {
    let board_count = boards.len();
    let outcome = play(boards, draws);
    debug!(
        wins = outcome.wins.len(),
        still_playing = outcome.still_playing,
        "draw sequence exhausted"
    );

    pick(&outcome).cloned().ok_or(BingoError::NoWinner {
        boards: board_count,
        draws: outcome.draws_made,
    })
}

pub fn first_winner(boards: Vec<Board>, draws: &[u32]) -> Result<Win> {
    pick_winner(boards, draws, Outcome::first)
}

pub fn last_winner(boards: Vec<Board>, draws: &[u32]) -> Result<Win> {
    pick_winner(boards, draws, Outcome::last)
}
