//! WCA event identifiers and the puzzle families they select.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use twistysim_notation::{
    ClockMove, CubeMove, MegaminxMove, ParseError, ParseMode, PyraminxMove, SkewbMove, Sq1Move,
};

use crate::puzzles::invert_alg_str;

/// Event identifier, as stored alongside each timed solve.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[allow(missing_docs)]
pub enum Event {
    #[strum(serialize = "222")]
    #[serde(rename = "222")]
    Cube2,
    #[strum(serialize = "333")]
    #[serde(rename = "333")]
    Cube3,
    #[strum(serialize = "444")]
    #[serde(rename = "444")]
    Cube4,
    #[strum(serialize = "555")]
    #[serde(rename = "555")]
    Cube5,
    #[strum(serialize = "666")]
    #[serde(rename = "666")]
    Cube6,
    #[strum(serialize = "777")]
    #[serde(rename = "777")]
    Cube7,
    #[strum(serialize = "333OH")]
    #[serde(rename = "333OH")]
    OneHanded,
    #[strum(serialize = "333BLD")]
    #[serde(rename = "333BLD")]
    Blindfolded,
    #[strum(serialize = "PYRAMINX")]
    #[serde(rename = "PYRAMINX")]
    Pyraminx,
    #[strum(serialize = "SKEWB")]
    #[serde(rename = "SKEWB")]
    Skewb,
    #[strum(serialize = "SQ1")]
    #[serde(rename = "SQ1")]
    Square1,
    #[strum(serialize = "MEGAMINX")]
    #[serde(rename = "MEGAMINX")]
    Megaminx,
    #[strum(serialize = "CLOCK")]
    #[serde(rename = "CLOCK")]
    Clock,
}

impl Event {
    /// Returns the event identifier.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Returns the puzzle family used for the event.
    pub fn kind(self) -> PuzzleKind {
        match self {
            Event::Cube2 => PuzzleKind::Cube(2),
            Event::Cube3 | Event::OneHanded | Event::Blindfolded => PuzzleKind::Cube(3),
            Event::Cube4 => PuzzleKind::Cube(4),
            Event::Cube5 => PuzzleKind::Cube(5),
            Event::Cube6 => PuzzleKind::Cube(6),
            Event::Cube7 => PuzzleKind::Cube(7),
            Event::Pyraminx => PuzzleKind::Pyraminx,
            Event::Skewb => PuzzleKind::Skewb,
            Event::Square1 => PuzzleKind::Square1,
            Event::Megaminx => PuzzleKind::Megaminx,
            Event::Clock => PuzzleKind::Clock,
        }
    }
}

/// Puzzle family, with the side length for NxN cubes.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleKind {
    /// NxN cube with the given side length.
    Cube(u8),
    /// Pyraminx.
    Pyraminx,
    /// Skewb.
    Skewb,
    /// Square-1.
    Square1,
    /// Megaminx. Only scrambles are supported; the state is not simulated.
    Megaminx,
    /// Clock.
    Clock,
}

impl Default for PuzzleKind {
    fn default() -> Self {
        Self::Cube(3)
    }
}

impl PuzzleKind {
    /// Resolves an event identifier to a puzzle family.
    ///
    /// Known identifiers are matched exactly. Otherwise an identifier that
    /// starts with a digit from 2 to 7 is an NxN cube of that size, and
    /// anything else falls back to 3x3x3.
    pub fn from_event_id(id: &str) -> Self {
        if let Ok(event) = Event::from_str(id) {
            return event.kind();
        }
        match id.chars().next().and_then(|c| c.to_digit(10)) {
            Some(n @ 2..=7) => Self::Cube(n as u8),
            _ => {
                log::debug!("unknown event {id:?}; using 3x3x3");
                Self::default()
            }
        }
    }

    /// Returns the inverse of an algorithm in this family's notation.
    ///
    /// In [`ParseMode::Lenient`], unrecognized tokens are dropped.
    pub fn invert_alg(self, alg: &str, mode: ParseMode) -> Result<String, ParseError> {
        match self {
            Self::Cube(_) => invert_alg_str::<CubeMove>(alg, mode),
            Self::Pyraminx => invert_alg_str::<PyraminxMove>(alg, mode),
            Self::Skewb => invert_alg_str::<SkewbMove>(alg, mode),
            Self::Square1 => invert_alg_str::<Sq1Move>(alg, mode),
            Self::Megaminx => invert_alg_str::<MegaminxMove>(alg, mode),
            Self::Clock => invert_alg_str::<ClockMove>(alg, mode),
        }
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cube(n) => write!(f, "{n}x{n}x{n}"),
            Self::Pyraminx => write!(f, "Pyraminx"),
            Self::Skewb => write!(f, "Skewb"),
            Self::Square1 => write!(f, "Square-1"),
            Self::Megaminx => write!(f, "Megaminx"),
            Self::Clock => write!(f, "Clock"),
        }
    }
}
