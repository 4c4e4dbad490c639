//! Errors surfaced to drivers of the rules engine.
//!
//! Rules operations themselves are infallible: illegal moves never leave the
//! legal-move generator. These variants cover the driver-facing edges, i.e.
//! parsing square codes, move notation and board diagrams, and engine runs.

/// Errors that can occur at the engine's input boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A square code was not a file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid square: {text:?}")]
    InvalidSquare { text: String },

    /// Move notation was not two concatenated square codes.
    #[error("invalid move notation: {text:?}")]
    InvalidMoveNotation { text: String },

    /// The move is well-formed but not legal in the current position.
    #[error("move {notation} is not legal in this position")]
    IllegalMove { notation: String },

    /// A board diagram could not be turned into a position.
    #[error("invalid board diagram: {message}")]
    InvalidDiagram { message: String },

    /// An engine could not produce a move.
    #[error("engine {engine} failed: {message}")]
    Engine { engine: String, message: String },
}

/// Result type alias for driver-facing operations.
pub type ChessResult<T> = Result<T, ChessError>;
