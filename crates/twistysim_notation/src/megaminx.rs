//! WCA Megaminx scrambling notation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{MoveToken, ParseError, ParseErrorKind};

/// WCA Megaminx scrambling move.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum MegaminxMove {
    /// R++
    Rpp,
    /// R--
    Rmm,
    /// D++
    Dpp,
    /// D--
    Dmm,
    /// U
    U,
    /// U'
    Ui,
}

impl fmt::Display for MegaminxMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MegaminxMove::Rpp => write!(f, "R++"),
            MegaminxMove::Rmm => write!(f, "R--"),
            MegaminxMove::Dpp => write!(f, "D++"),
            MegaminxMove::Dmm => write!(f, "D--"),
            MegaminxMove::U => write!(f, "U"),
            MegaminxMove::Ui => write!(f, "U'"),
        }
    }
}

impl FromStr for MegaminxMove {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R++" => Ok(Self::Rpp),
            "R--" => Ok(Self::Rmm),
            "D++" => Ok(Self::Dpp),
            "D--" => Ok(Self::Dmm),
            "U" => Ok(Self::U),
            "U'" => Ok(Self::Ui),
            "" => Err(ParseError::new(s, ParseErrorKind::Empty)),
            _ => Err(ParseError::new(
                s,
                ParseErrorKind::UnknownFace(s.chars().take(1).collect()),
            )),
        }
    }
}

impl MoveToken for MegaminxMove {
    fn inv(&self) -> Self {
        match self {
            MegaminxMove::Rpp => MegaminxMove::Rmm,
            MegaminxMove::Rmm => MegaminxMove::Rpp,
            MegaminxMove::Dpp => MegaminxMove::Dmm,
            MegaminxMove::Dmm => MegaminxMove::Dpp,
            MegaminxMove::U => MegaminxMove::Ui,
            MegaminxMove::Ui => MegaminxMove::U,
        }
    }
}
