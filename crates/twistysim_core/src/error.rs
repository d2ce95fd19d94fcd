use thiserror::Error;
use twistysim_notation::ParseError;

/// Error produced when a well-formed move cannot be applied to a puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Square-1 slash while a piece crosses the cut in at least one layer.
    #[error("slash is blocked (top aligned: {top_aligned}, bottom aligned: {bottom_aligned})")]
    SlashBlocked {
        /// Whether the top layer could be sliced.
        top_aligned: bool,
        /// Whether the bottom layer could be sliced.
        bottom_aligned: bool,
    },
}

/// Error produced when simulating an algorithm in
/// [`ParseMode::Strict`](twistysim_notation::ParseMode::Strict).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A token could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A move could not be applied.
    #[error("cannot apply {token:?}: {source}")]
    Move {
        /// Move that failed, as written in notation.
        token: String,
        /// Reason the move failed.
        source: MoveError,
    },
}
