//! Move notation parser and serializer for WCA twisty puzzles.
//!
//! Each puzzle family has its own token grammar:
//!
//! | Family    | Examples                          |
//! |-----------|-----------------------------------|
//! | NxN cube  | `R`, `U'`, `F2`, `Rw`, `3Uw'`     |
//! | Pyraminx  | `U`, `L'`, `r`, `b'`              |
//! | Skewb     | `U`, `R'`, `L`, `B'`              |
//! | Square-1  | `(1,0)`, `/`, `(-3,3)`            |
//! | Megaminx  | `R++`, `D--`, `U'`                |
//! | Clock     | `UR3+`, `ALL2-`, `y2`, `DL`       |
//!
//! Parsing is permissive by default: see [`ParseMode`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod clock;
pub mod common;
pub mod cube;
mod errors;
pub mod megaminx;
pub mod pyraminx;
pub mod skewb;
pub mod square1;

pub use clock::{ClockMove, PinGroup};
pub use common::{Direction, Modifier};
pub use cube::{CubeFace, CubeMove};
pub use errors::{ParseError, ParseErrorKind};
pub use megaminx::MegaminxMove;
pub use pyraminx::{PyraminxAxis, PyraminxMove};
pub use skewb::{SkewbAxis, SkewbMove};
pub use square1::Sq1Move;

/// What to do with a token that cannot be parsed or a move that cannot be
/// applied.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Skip the token and keep going.
    ///
    /// Malformed scrambles must never prevent a state from being built, so
    /// this is the default.
    #[default]
    Lenient,
    /// Stop at the first bad token and report it.
    Strict,
}

impl ParseMode {
    /// Returns whether this is [`ParseMode::Strict`].
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

/// Move in the notation of a single puzzle family.
pub trait MoveToken: Sized + fmt::Display + FromStr<Err = ParseError> {
    /// Splits an algorithm into move tokens.
    ///
    /// Most families are whitespace-delimited.
    fn tokenize(alg: &str) -> Vec<&str> {
        alg.split_whitespace().collect()
    }

    /// Returns the move that undoes this one.
    fn inv(&self) -> Self;
}

/// Parses an algorithm into a list of moves.
///
/// In [`ParseMode::Lenient`], unrecognized tokens are logged and skipped, so
/// this never returns an error.
pub fn parse_alg<M: MoveToken>(alg: &str, mode: ParseMode) -> Result<Vec<M>, ParseError> {
    let mut moves = vec![];
    for token in M::tokenize(alg) {
        match token.parse() {
            Ok(m) => moves.push(m),
            Err(e) if mode.is_strict() => return Err(e),
            Err(e) => log::debug!("skipping token: {e}"),
        }
    }
    Ok(moves)
}

/// Returns the inverse of an algorithm: each move inverted, in reverse order.
pub fn invert_alg<M: MoveToken>(moves: &[M]) -> Vec<M> {
    moves.iter().rev().map(M::inv).collect()
}

/// Serializes a list of moves as a space-separated algorithm.
pub fn alg_to_string<M: fmt::Display>(moves: &[M]) -> String {
    struct Alg<'a, M>(&'a [M]);
    impl<M: fmt::Display> fmt::Display for Alg<'_, M> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            common::write_separated_list(f, self.0, " ")
        }
    }
    Alg(moves).to_string()
}
