use thiserror::Error;

/// Error produced when parsing a single move token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("bad move {token:?}: {kind}")]
pub struct ParseError {
    /// Token that could not be parsed.
    pub token: String,
    /// Reason the token was rejected.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Constructs a parse error for `token`.
    pub fn new(token: &str, kind: ParseErrorKind) -> Self {
        Self {
            token: token.to_owned(),
            kind,
        }
    }
}

/// Reason a move token was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Empty token
    #[error("empty move")]
    Empty,
    /// Face, axis, or pin group is not part of the puzzle's alphabet
    #[error("unknown face {0:?}")]
    UnknownFace(String),
    /// Suffix after the face is not a known modifier
    #[error("unknown modifier {0:?}")]
    UnknownModifier(String),
    /// Layer prefix is not a plain decimal number
    #[error("bad layer count: {0:?}")]
    BadLayerCount(String),
    /// Clock tick count is missing its sign or is out of range
    #[error("tick count must be 0-6 followed by `+` or `-`")]
    BadTickCount,
    /// Square-1 token is not `(u,d)` or `/`
    #[error("expected `(top,bottom)` or `/`")]
    MalformedSquare1,
}
