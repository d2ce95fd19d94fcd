//! Megaminx scrambles.
//!
//! Megaminx states are not simulated; only the move list is kept.

use std::fmt;

use serde::{Deserialize, Serialize};
use twistysim_notation::MegaminxMove;

/// Megaminx move list.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MegaminxScramble {
    /// Moves, in order.
    pub moves: Vec<MegaminxMove>,
}

impl fmt::Display for MegaminxScramble {
    /// Writes the moves with a line break after each `U` or `U'`, the way
    /// Megaminx scrambles are usually printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut at_line_start = true;
        for m in &self.moves {
            if !at_line_start {
                write!(f, " ")?;
            }
            write!(f, "{m}")?;
            at_line_start = matches!(m, MegaminxMove::U | MegaminxMove::Ui);
            if at_line_start {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
