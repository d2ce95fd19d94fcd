//! Clock notation.
//!
//! A turn names the pins that are pushed up and how far to turn, such as
//! `UR3+` or `ALL2-`. `y2` flips the puzzle over. A pin group with no tick
//! count, such as `UR`, pushes those pins up without turning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::{MoveToken, ParseError, ParseErrorKind};

/// Largest tick count in a single clock turn.
pub const MAX_TICKS: i8 = 6;

/// Set of pins pushed up for a turn.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum PinGroup {
    /// Up-right pin
    UR,
    /// Down-right pin
    DR,
    /// Down-left pin
    DL,
    /// Up-left pin
    UL,
    /// Both upper pins
    U,
    /// Both right pins
    R,
    /// Both lower pins
    D,
    /// Both left pins
    L,
    /// All four pins
    All,
}

impl PinGroup {
    /// Returns the pins in the group as a 2x2 grid, `[[UL, UR], [DL, DR]]`,
    /// viewed from the front.
    pub fn pins(self) -> [[bool; 2]; 2] {
        match self {
            PinGroup::UR => [[false, true], [false, false]],
            PinGroup::DR => [[false, false], [false, true]],
            PinGroup::DL => [[false, false], [true, false]],
            PinGroup::UL => [[true, false], [false, false]],
            PinGroup::U => [[true, true], [false, false]],
            PinGroup::R => [[false, true], [false, true]],
            PinGroup::D => [[false, false], [true, true]],
            PinGroup::L => [[true, false], [true, false]],
            PinGroup::All => [[true, true], [true, true]],
        }
    }

    /// Returns the name used in notation.
    pub fn name(self) -> &'static str {
        match self {
            PinGroup::UR => "UR",
            PinGroup::DR => "DR",
            PinGroup::DL => "DL",
            PinGroup::UL => "UL",
            PinGroup::U => "U",
            PinGroup::R => "R",
            PinGroup::D => "D",
            PinGroup::L => "L",
            PinGroup::All => "ALL",
        }
    }

    fn from_name(s: &str) -> Option<Self> {
        match s {
            "UR" => Some(PinGroup::UR),
            "DR" => Some(PinGroup::DR),
            "DL" => Some(PinGroup::DL),
            "UL" => Some(PinGroup::UL),
            "U" => Some(PinGroup::U),
            "R" => Some(PinGroup::R),
            "D" => Some(PinGroup::D),
            "L" => Some(PinGroup::L),
            "ALL" => Some(PinGroup::All),
            _ => None,
        }
    }
}

impl fmt::Display for PinGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Clock move.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(rename_all = "snake_case")]
pub enum ClockMove {
    /// Set the pins to exactly `pins` and turn by `ticks` hours.
    ///
    /// Example: `UR3+`, `ALL2-`
    Turn {
        /// Pins pushed up.
        pins: PinGroup,
        /// Signed number of hours to turn clockwise, from -6 to 6.
        #[cfg_attr(test, proptest(strategy = "-6..=6_i8"))]
        ticks: i8,
    },
    /// Push pins up without turning.
    ///
    /// Example: `UR`
    Pins(PinGroup),
    /// Flip the puzzle over, front to back.
    ///
    /// Example: `y2`
    Flip,
}

impl fmt::Display for ClockMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockMove::Turn { pins, ticks } => {
                let sign = if *ticks < 0 { '-' } else { '+' };
                write!(f, "{pins}{}{sign}", ticks.unsigned_abs())
            }
            ClockMove::Pins(pins) => write!(f, "{pins}"),
            ClockMove::Flip => write!(f, "y2"),
        }
    }
}

impl FromStr for ClockMove {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |kind| ParseError::new(s, kind);

        if s.is_empty() {
            return Err(err(ParseErrorKind::Empty));
        }
        if s == "y2" {
            return Ok(Self::Flip);
        }

        let name_len = s
            .find(|c: char| !c.is_ascii_uppercase())
            .unwrap_or(s.len());
        let (name, suffix) = s.split_at(name_len);
        let pins = PinGroup::from_name(name)
            .ok_or_else(|| err(ParseErrorKind::UnknownFace(name.to_owned())))?;

        if suffix.is_empty() {
            return Ok(Self::Pins(pins));
        }

        let (amount, sign) = if let Some(amount) = suffix.strip_suffix('+') {
            (amount, 1)
        } else if let Some(amount) = suffix.strip_suffix('-') {
            (amount, -1)
        } else {
            return Err(err(ParseErrorKind::BadTickCount));
        };
        if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err(ParseErrorKind::BadTickCount));
        }
        let amount = amount
            .parse::<i8>()
            .ok()
            .filter(|n| (0..=MAX_TICKS).contains(n))
            .ok_or_else(|| err(ParseErrorKind::BadTickCount))?;

        Ok(Self::Turn {
            pins,
            ticks: amount * sign,
        })
    }
}

impl MoveToken for ClockMove {
    fn inv(&self) -> Self {
        match *self {
            ClockMove::Turn { pins, ticks } => ClockMove::Turn {
                pins,
                ticks: -ticks,
            },
            other => other,
        }
    }
}
