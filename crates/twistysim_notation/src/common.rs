//! Structures shared by several puzzle families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseErrorKind;

/// Turn amount suffix for NxN cube moves.
///
/// The default modifier is a clockwise quarter turn, written with no suffix.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// Clockwise quarter turn.
    ///
    /// Example: `R`
    #[default]
    Clockwise,
    /// Counterclockwise quarter turn.
    ///
    /// Example: `R'`
    CounterClockwise,
    /// Half turn.
    ///
    /// Example: `R2`
    Double,
}

impl Modifier {
    /// Returns the number of clockwise quarter turns, from 1 to 3.
    pub fn quarter_turns(self) -> usize {
        match self {
            Modifier::Clockwise => 1,
            Modifier::Double => 2,
            Modifier::CounterClockwise => 3,
        }
    }

    /// Returns the modifier that undoes this one.
    #[must_use]
    pub fn inv(self) -> Self {
        match self {
            Modifier::Clockwise => Modifier::CounterClockwise,
            Modifier::CounterClockwise => Modifier::Clockwise,
            Modifier::Double => Modifier::Double,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Clockwise => Ok(()),
            Modifier::CounterClockwise => write!(f, "'"),
            Modifier::Double => write!(f, "2"),
        }
    }
}

impl FromStr for Modifier {
    type Err = ParseErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Clockwise),
            "'" => Ok(Self::CounterClockwise),
            // `2'` is the same physical move, and shows up in hand-written algs
            "2" | "2'" => Ok(Self::Double),
            _ => Err(ParseErrorKind::UnknownModifier(s.to_owned())),
        }
    }
}

/// Turn direction for puzzles whose moves have no half turn (Pyraminx and
/// Skewb, where every move is 120°).
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Clockwise, written with no suffix.
    #[default]
    Clockwise,
    /// Counterclockwise, written `'`.
    CounterClockwise,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn inv(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => Ok(()),
            Direction::CounterClockwise => write!(f, "'"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Clockwise),
            "'" => Ok(Self::CounterClockwise),
            _ => Err(ParseErrorKind::UnknownModifier(s.to_owned())),
        }
    }
}

/// Splits the first character off of `s`.
pub(crate) fn split_first_char(s: &str) -> Option<(char, &str)> {
    let c = s.chars().next()?;
    Some((c, &s[c.len_utf8()..]))
}

pub(crate) fn write_separated_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    elements: &[T],
    separator: &str,
) -> fmt::Result {
    let mut is_first = true;
    for elem in elements {
        if is_first {
            is_first = false;
        } else {
            write!(f, "{separator}")?;
        }
        write!(f, "{elem}")?;
    }
    Ok(())
}
