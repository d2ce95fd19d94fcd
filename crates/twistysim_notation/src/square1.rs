//! Square-1 notation.
//!
//! Example: `(1,0) / (-3,3) / (0,-1)`
//!
//! Tokens do not need to be separated by whitespace, so `(1,0)/(3,3)/` is
//! also accepted, as is whitespace inside the parentheses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{MoveToken, ParseError, ParseErrorKind};

/// Largest layer rotation accepted in notation, in multiples of 30°.
pub const MAX_LAYER_UNITS: i32 = 12;

/// Square-1 move.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(rename_all = "snake_case")]
pub enum Sq1Move {
    /// Move of the top and bottom layers.
    ///
    /// Example: `(1,-3)`
    UD {
        /// How far clockwise to move the top layer, as a multiple of 30°.
        #[cfg_attr(test, proptest(strategy = "-12..=12_i32"))]
        u: i32,
        /// How far clockwise to move the bottom layer, as a multiple of 30°.
        #[cfg_attr(test, proptest(strategy = "-12..=12_i32"))]
        d: i32,
    },
    /// Move of the right side by 180°.
    Slash,
}

impl fmt::Display for Sq1Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UD { u, d } => write!(f, "({u},{d})"),
            Self::Slash => write!(f, "/"),
        }
    }
}

impl FromStr for Sq1Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::new(s, ParseErrorKind::MalformedSquare1);

        if s == "/" {
            return Ok(Self::Slash);
        }
        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let (u, d) = inner.split_once(',').ok_or_else(err)?;
        let parse_units = |units: &str| {
            units
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|n| n.abs() <= MAX_LAYER_UNITS)
                .ok_or_else(err)
        };
        Ok(Self::UD {
            u: parse_units(u)?,
            d: parse_units(d)?,
        })
    }
}

impl MoveToken for Sq1Move {
    fn tokenize(alg: &str) -> Vec<&str> {
        let mut tokens = vec![];
        let mut rest = alg.trim_start();
        while let Some(c) = rest.chars().next() {
            let len = match c {
                '/' => 1,
                '(' => rest.find(')').map_or(rest.len(), |i| i + 1),
                _ => rest
                    .find(|c: char| c.is_whitespace() || c == '/' || c == '(')
                    .unwrap_or(rest.len()),
            };
            tokens.push(&rest[..len]);
            rest = rest[len..].trim_start();
        }
        tokens
    }

    fn inv(&self) -> Self {
        match *self {
            Self::UD { u, d } => Self::UD { u: -u, d: -d },
            Self::Slash => Self::Slash,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_square1_tokenize() {
        assert_eq!(
            vec!["(1,0)", "/", "(-3, 3)", "/", "junk", "/"],
            Sq1Move::tokenize("(1,0)/ (-3, 3)/junk/"),
        );
        assert_eq!(Vec::<&str>::new(), Sq1Move::tokenize("   "));
        assert_eq!(vec!["(1,0"], Sq1Move::tokenize("(1,0"));
    }

    #[test]
    fn test_square1_parse() {
        assert_eq!(Ok(Sq1Move::UD { u: -3, d: 3 }), "(-3, 3)".parse());
        assert_eq!(Ok(Sq1Move::Slash), "/".parse());
        assert!("(1,0".parse::<Sq1Move>().is_err());
        assert!("(1;0)".parse::<Sq1Move>().is_err());
        assert!("(13,0)".parse::<Sq1Move>().is_err());
    }
}
