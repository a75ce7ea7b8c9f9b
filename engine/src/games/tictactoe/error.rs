use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    InvalidIndex(usize),
    CellOccupied(usize),
    GameOver,
    NotYourTurn,
    NoLegalMoves,
    StaleMove { expected: u64, actual: u64 },
}

impl GameError {
    /// Rejections caused by a well-formed index arriving at the wrong time or place.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            GameError::CellOccupied(_) | GameError::GameOver | GameError::NotYourTurn
        )
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidIndex(index) => write!(f, "Cell index {} is out of bounds", index),
            GameError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotYourTurn => write!(f, "Not your turn"),
            GameError::NoLegalMoves => write!(f, "No legal moves left to search"),
            GameError::StaleMove { expected, actual } => write!(
                f,
                "Move was scheduled for game {} but game {} is in progress",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for GameError {}
