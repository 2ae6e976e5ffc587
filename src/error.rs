use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The best-move selector was asked to move in a position without legal moves.
    #[error("no legal moves in position")]
    NoLegalMoves,

    /// The rules engine refused to apply or revert a move.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("FEN error: {0}")]
    Fen(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
