use super::board::Board;
use super::bot_controller::calculate_move;
use super::error::GameError;
use super::types::{CELL_COUNT, GameMode, GameStatus, GameView, Mark, StatusView};
use super::win_detector::check_win_with_line;

/// Result of a completed move, as seen by whoever drives the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub index: usize,
    pub mark: Mark,
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    mode: GameMode,
    generation: u64,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            mode,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Bumped on every restart so deferred bot moves can detect they are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.mode.ai_mark() == Some(self.current_mark)
    }

    /// Human move for the player whose turn it is.
    pub fn place_mark(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        if index >= CELL_COUNT {
            return Err(GameError::InvalidIndex(index));
        }
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if self.is_bot_turn() {
            return Err(GameError::NotYourTurn);
        }
        if !self.board.is_empty(index) {
            return Err(GameError::CellOccupied(index));
        }

        Ok(self.apply_move(index))
    }

    /// Searches and plays the bot's move, provided the game has not been restarted since
    /// `generation` was observed.
    pub fn play_bot_turn(&mut self, generation: u64) -> Result<MoveOutcome, GameError> {
        self.check_bot_turn(generation)?;
        let index = calculate_move(&self.board, self.current_mark)?;
        Ok(self.apply_move(index))
    }

    /// Applies a bot move that was searched elsewhere on a snapshot of this game.
    pub fn apply_bot_move(&mut self, generation: u64, index: usize) -> Result<MoveOutcome, GameError> {
        self.check_bot_turn(generation)?;
        if index >= CELL_COUNT {
            return Err(GameError::InvalidIndex(index));
        }
        if !self.board.is_empty(index) {
            return Err(GameError::CellOccupied(index));
        }
        Ok(self.apply_move(index))
    }

    fn check_bot_turn(&self, generation: u64) -> Result<(), GameError> {
        if generation != self.generation {
            return Err(GameError::StaleMove {
                expected: generation,
                actual: self.generation,
            });
        }
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_bot_turn() {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    fn apply_move(&mut self, index: usize) -> MoveOutcome {
        let mark = self.current_mark;
        self.board.place(index, mark);

        // The mark that just moved is the only one that can have completed a line.
        if self.board.has_winner() {
            self.status = GameStatus::won_by(mark).unwrap_or(GameStatus::InProgress);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else if let Some(next) = mark.opponent() {
            self.current_mark = next;
        }

        MoveOutcome {
            index,
            mark,
            status: self.status,
        }
    }

    pub fn restart(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.generation += 1;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.restart();
    }

    pub fn status_view(&self) -> StatusView {
        match self.status {
            GameStatus::InProgress if self.is_bot_turn() => StatusView::AiTurn,
            GameStatus::InProgress => StatusView::PlayerTurn(self.current_mark),
            GameStatus::XWon | GameStatus::OWon => {
                let mark = self.status.winner().unwrap_or(self.current_mark);
                StatusView::Win {
                    mark,
                    by_ai: self.mode.ai_mark() == Some(mark),
                }
            }
            GameStatus::Draw => StatusView::Draw,
        }
    }

    pub fn view(&self) -> GameView {
        GameView {
            status: self.status_view(),
            cells: *self.board.cells(),
            mode: self.mode,
            winning_line: check_win_with_line(self.board.cells()),
        }
    }
}
