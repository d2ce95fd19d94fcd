//! Pyraminx notation.
//!
//! Uppercase letters turn the two layers nearest a vertex; lowercase letters
//! turn only the tip.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::common::split_first_char;
use crate::{Direction, MoveToken, ParseError, ParseErrorKind};

/// Vertex of a Pyraminx, held with one face toward the solver and one vertex
/// up.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PyraminxAxis {
    /// Top vertex
    U,
    /// Front-left vertex
    L,
    /// Front-right vertex
    R,
    /// Back vertex
    B,
}

impl PyraminxAxis {
    /// All vertices.
    pub const ALL: [PyraminxAxis; 4] = [Self::U, Self::L, Self::R, Self::B];

    /// Returns the uppercase letter for the vertex.
    pub fn letter(self) -> char {
        match self {
            PyraminxAxis::U => 'U',
            PyraminxAxis::L => 'L',
            PyraminxAxis::R => 'R',
            PyraminxAxis::B => 'B',
        }
    }
}

/// Move on a Pyraminx.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct PyraminxMove {
    /// Vertex to turn around.
    pub axis: PyraminxAxis,
    /// Whether to turn only the tip.
    pub tip: bool,
    /// Direction, viewed from the vertex.
    pub direction: Direction,
}

impl PyraminxMove {
    /// Constructs a move of a vertex layer.
    pub fn layer(axis: PyraminxAxis, direction: Direction) -> Self {
        Self {
            axis,
            tip: false,
            direction,
        }
    }

    /// Constructs a move of a tip.
    pub fn tip(axis: PyraminxAxis, direction: Direction) -> Self {
        Self {
            axis,
            tip: true,
            direction,
        }
    }
}

impl fmt::Display for PyraminxMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.axis.letter();
        let letter = if self.tip {
            letter.to_ascii_lowercase()
        } else {
            letter
        };
        write!(f, "{letter}{}", self.direction)
    }
}

impl FromStr for PyraminxMove {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |kind| ParseError::new(s, kind);

        let (c, rest) = split_first_char(s).ok_or_else(|| err(ParseErrorKind::Empty))?;
        let axis = match c.to_ascii_uppercase() {
            'U' => PyraminxAxis::U,
            'L' => PyraminxAxis::L,
            'R' => PyraminxAxis::R,
            'B' => PyraminxAxis::B,
            _ => return Err(err(ParseErrorKind::UnknownFace(c.to_string()))),
        };
        let direction = rest.parse().map_err(err)?;

        Ok(Self {
            axis,
            tip: c.is_ascii_lowercase(),
            direction,
        })
    }
}

impl MoveToken for PyraminxMove {
    fn inv(&self) -> Self {
        Self {
            direction: self.direction.inv(),
            ..*self
        }
    }
}
