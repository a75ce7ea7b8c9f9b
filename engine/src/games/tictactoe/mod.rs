mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, DRAW_SCORE, SearchResult, WIN_SCORE, calculate_minimax_move, calculate_move,
    minimax,
};
pub use error::GameError;
pub use game_state::{MoveOutcome, TicTacToeGameState};
pub use session::TicTacToeSession;
pub use settings::{GameConfig, TicTacToeSessionSettings, get_config_manager};
pub use types::{CELL_COUNT, GameMode, GameStatus, GameView, Mark, StatusView, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
