use gomoku_core::GomokuInvalidMoveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum ServerError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),
    #[error("Not found")]
    NotFound,
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not your turn")]
    NotYourTurn,
    #[error("Invalid move: {}", describe_move_error(.0))]
    InvalidMove(GomokuInvalidMoveError),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl From<GomokuInvalidMoveError> for ServerError {
    fn from(error: GomokuInvalidMoveError) -> Self {
        Self::InvalidMove(error)
    }
}

/// The engine only exposes error kinds; the user-facing wording lives here.
fn describe_move_error(error: &GomokuInvalidMoveError) -> String {
    match error {
        GomokuInvalidMoveError::IllegalMoveType { phase, move_type } => {
            format!("move type {move_type:?} is not legal in phase {phase:?}")
        }
        GomokuInvalidMoveError::MissingStone(move_type) => {
            format!("move type {move_type:?} requires a stone")
        }
        GomokuInvalidMoveError::Unimplemented(move_type) => {
            format!("move type {move_type:?} has no defined effect yet")
        }
        GomokuInvalidMoveError::GameEnded => "the game has already ended".to_string(),
        GomokuInvalidMoveError::UnknownPhase => "unknown game phase".to_string(),
    }
}
