use std::ops::{Deref, DerefMut};

use crate::log_debug;
use super::board::Board;
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::types::Mark;

/// Terminal score for a won position. O maximizes, X minimizes.
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub index: Option<usize>,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self { score, index: None }
    }
}

/// Snapshot of what the bot needs, detached from the live game so it can be searched off-lock.
#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

/// A hypothetical mark that is cleared again when the guard goes out of scope.
struct ScopedMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> ScopedMove<'a> {
    fn place(board: &'a mut Board, index: usize, mark: Mark) -> Self {
        board.place(index, mark);
        Self { board, index }
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}

pub fn calculate_minimax_move(input: &BotInput) -> Result<usize, GameError> {
    calculate_move(&input.board, input.current_mark)
}

/// Picks the optimal cell for `mark`. A single remaining cell is returned without searching.
pub fn calculate_move(board: &Board, mark: Mark) -> Result<usize, GameError> {
    if mark == Mark::Empty {
        return Err(GameError::NotYourTurn);
    }
    if board.has_winner() {
        return Err(GameError::GameOver);
    }

    let available_moves = board.available_indices();
    match available_moves.as_slice() {
        [] => Err(GameError::NoLegalMoves),
        [forced] => {
            log_debug!("Forced move for {} at {}", mark, forced);
            Ok(*forced)
        }
        _ => {
            let mut scratch = *board;
            let mut nodes = 0u64;
            let result = search(&mut scratch, mark, &mut nodes);
            log_debug!(
                "Minimax for {} searched {} positions, best {:?} with score {}",
                mark,
                nodes,
                result.index,
                result.score
            );
            result.index.ok_or(GameError::NoLegalMoves)
        }
    }
}

/// Exhaustive minimax from the position where `player` is to move.
/// Leaves `board` exactly as it found it.
pub fn minimax(board: &mut Board, player: Mark) -> SearchResult {
    let mut nodes = 0u64;
    search(board, player, &mut nodes)
}

fn search(board: &mut Board, player: Mark, nodes: &mut u64) -> SearchResult {
    *nodes += 1;

    // The mark that completed the line is the one that moved last.
    if board.has_winner() {
        return SearchResult::terminal(if player == Mark::O { -WIN_SCORE } else { WIN_SCORE });
    }

    let available_moves = board.available_indices();
    if available_moves.is_empty() {
        return SearchResult::terminal(DRAW_SCORE);
    }

    debug_assert!(player != Mark::Empty, "minimax needs a mark to move");
    let Some(opponent) = player.opponent() else {
        return SearchResult::terminal(DRAW_SCORE);
    };
    let maximizing = player == Mark::O;

    let mut best = SearchResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        index: None,
    };

    for index in available_moves {
        let score = {
            let mut hypothetical = ScopedMove::place(board, index, player);
            search(&mut hypothetical, opponent, nodes).score
        };

        let improved = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improved {
            best = SearchResult {
                score,
                index: Some(index),
            };
        }
    }

    best
}
