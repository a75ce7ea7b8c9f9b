use std::fmt;

use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn won_by(mark: Mark) -> Option<GameStatus> {
        match mark {
            Mark::X => Some(GameStatus::XWon),
            Mark::O => Some(GameStatus::OWon),
            Mark::Empty => None,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// The AI, when present, always plays O.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsAi,
}

impl GameMode {
    pub fn ai_mark(&self) -> Option<Mark> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsAi => Some(Mark::O),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}

/// Status category the presentation layer renders as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusView {
    PlayerTurn(Mark),
    AiTurn,
    Win { mark: Mark, by_ai: bool },
    Draw,
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusView::PlayerTurn(mark) => write!(f, "Player {}'s turn", mark),
            StatusView::AiTurn => write!(f, "AI's turn"),
            StatusView::Win { by_ai: true, .. } => write!(f, "AI Wins!"),
            StatusView::Win { mark, by_ai: false } => write!(f, "{} Wins!", mark),
            StatusView::Draw => write!(f, "It's a Draw!"),
        }
    }
}

/// Everything the presentation layer needs to redraw after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub status: StatusView,
    pub cells: [Mark; CELL_COUNT],
    pub mode: GameMode,
    pub winning_line: Option<WinningLine>,
}
