//! Skewb notation.
//!
//! Each letter names a corner; the half of the puzzle containing that corner
//! turns by 120°.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::common::split_first_char;
use crate::{Direction, MoveToken, ParseError, ParseErrorKind};

/// Corner that a Skewb move turns around.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum SkewbAxis {
    /// Up-left-back corner
    U,
    /// Down-right-back corner
    R,
    /// Down-left-front corner
    L,
    /// Down-left-back corner
    B,
}

impl SkewbAxis {
    /// All axes.
    pub const ALL: [SkewbAxis; 4] = [Self::U, Self::R, Self::L, Self::B];

    /// Returns the letter for the axis.
    pub fn letter(self) -> char {
        match self {
            SkewbAxis::U => 'U',
            SkewbAxis::R => 'R',
            SkewbAxis::L => 'L',
            SkewbAxis::B => 'B',
        }
    }
}

/// Move on a Skewb.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct SkewbMove {
    /// Corner to turn around.
    pub axis: SkewbAxis,
    /// Direction, viewed from the corner.
    pub direction: Direction,
}

impl fmt::Display for SkewbMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis.letter(), self.direction)
    }
}

impl FromStr for SkewbMove {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |kind| ParseError::new(s, kind);

        let (c, rest) = split_first_char(s).ok_or_else(|| err(ParseErrorKind::Empty))?;
        let axis = match c {
            'U' => SkewbAxis::U,
            'R' => SkewbAxis::R,
            'L' => SkewbAxis::L,
            'B' => SkewbAxis::B,
            _ => return Err(err(ParseErrorKind::UnknownFace(c.to_string()))),
        };
        let direction = rest.parse().map_err(err)?;
        Ok(Self { axis, direction })
    }
}

impl MoveToken for SkewbMove {
    fn inv(&self) -> Self {
        Self {
            axis: self.axis,
            direction: self.direction.inv(),
        }
    }
}
