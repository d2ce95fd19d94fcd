//! Puzzle state simulators.

use std::fmt;

use serde::{Deserialize, Serialize};
use twistysim_notation::{MegaminxMove, MoveToken, ParseError, ParseMode, parse_alg};

mod clock;
mod cube;
mod megaminx;
mod pyraminx;
mod skewb;
mod square1;
#[cfg(test)]
mod strategies;

pub use clock::{ClockState, DIAL_POSITIONS, DialGrid};
pub use cube::CubeState;
pub use megaminx::MegaminxScramble;
pub use pyraminx::{PyraminxFace, PyraminxState};
pub use skewb::SkewbState;
pub use square1::{LAYER_SLOTS, Sq1Layer, Sq1Piece, Sq1State};

use crate::{MoveError, PuzzleKind, SimulationError};

/// Puzzle state that can be advanced one move at a time.
pub trait PuzzleSim: Clone {
    /// Move type in the puzzle's notation.
    type Move: MoveToken;

    /// Applies a single move. If the move cannot be applied, returns an error
    /// and leaves the state unchanged.
    fn apply_move(&mut self, m: &Self::Move) -> Result<(), MoveError>;

    /// Returns whether the puzzle is solved.
    fn is_solved(&self) -> bool;

    /// Returns a copy of the state with a move applied.
    fn do_move(&self, m: &Self::Move) -> Result<Self, MoveError> {
        let mut ret = self.clone();
        ret.apply_move(m)?;
        Ok(ret)
    }

    /// Applies a sequence of moves.
    ///
    /// In [`ParseMode::Strict`], stops at the first move that cannot be
    /// applied; moves before it stay applied. In [`ParseMode::Lenient`], such
    /// moves are skipped.
    fn apply_moves(&mut self, moves: &[Self::Move], mode: ParseMode) -> Result<(), SimulationError> {
        for m in moves {
            match self.apply_move(m) {
                Ok(()) => (),
                Err(source) if mode.is_strict() => {
                    return Err(SimulationError::Move {
                        token: m.to_string(),
                        source,
                    });
                }
                Err(e) => log::debug!("skipping move {m}: {e}"),
            }
        }
        Ok(())
    }

    /// Parses and applies an algorithm.
    ///
    /// The whole algorithm is parsed before any move is applied, so a parse
    /// error leaves the state untouched.
    fn apply_alg(&mut self, alg: &str, mode: ParseMode) -> Result<(), SimulationError> {
        let moves = parse_alg::<Self::Move>(alg, mode)?;
        self.apply_moves(&moves, mode)
    }
}

/// State of any supported puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "puzzle", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum PuzzleState {
    Cube(CubeState),
    Pyraminx(PyraminxState),
    Skewb(SkewbState),
    Square1(Sq1State),
    Megaminx(MegaminxScramble),
    Clock(ClockState),
}

impl PuzzleState {
    /// Constructs a solved puzzle of the given kind.
    pub fn new_solved(kind: PuzzleKind) -> Self {
        match kind {
            PuzzleKind::Cube(n) => Self::Cube(CubeState::new(usize::from(n))),
            PuzzleKind::Pyraminx => Self::Pyraminx(PyraminxState::new()),
            PuzzleKind::Skewb => Self::Skewb(SkewbState::new()),
            PuzzleKind::Square1 => Self::Square1(Sq1State::new()),
            PuzzleKind::Megaminx => Self::Megaminx(MegaminxScramble::default()),
            PuzzleKind::Clock => Self::Clock(ClockState::new()),
        }
    }

    /// Constructs a solved puzzle of the given kind and applies an algorithm
    /// to it.
    pub fn simulate(kind: PuzzleKind, alg: &str, mode: ParseMode) -> Result<Self, SimulationError> {
        let mut ret = Self::new_solved(kind);
        ret.apply_alg(alg, mode)?;
        Ok(ret)
    }

    /// Returns the kind of puzzle.
    pub fn kind(&self) -> PuzzleKind {
        match self {
            Self::Cube(state) => PuzzleKind::Cube(u8::try_from(state.n()).unwrap_or(u8::MAX)),
            Self::Pyraminx(_) => PuzzleKind::Pyraminx,
            Self::Skewb(_) => PuzzleKind::Skewb,
            Self::Square1(_) => PuzzleKind::Square1,
            Self::Megaminx(_) => PuzzleKind::Megaminx,
            Self::Clock(_) => PuzzleKind::Clock,
        }
    }

    /// Parses and applies an algorithm. Megaminx moves are appended to the
    /// move list.
    pub fn apply_alg(&mut self, alg: &str, mode: ParseMode) -> Result<(), SimulationError> {
        match self {
            Self::Cube(state) => state.apply_alg(alg, mode),
            Self::Pyraminx(state) => state.apply_alg(alg, mode),
            Self::Skewb(state) => state.apply_alg(alg, mode),
            Self::Square1(state) => state.apply_alg(alg, mode),
            Self::Megaminx(scramble) => {
                let moves: Vec<MegaminxMove> = parse_alg(alg, mode)?;
                scramble.moves.extend(moves);
                Ok(())
            }
            Self::Clock(state) => state.apply_alg(alg, mode),
        }
    }

    /// Returns whether the puzzle is solved, or `None` if the puzzle's state
    /// is not tracked.
    pub fn is_solved(&self) -> Option<bool> {
        match self {
            Self::Cube(state) => Some(state.is_solved()),
            Self::Pyraminx(state) => Some(state.is_solved()),
            Self::Skewb(state) => Some(state.is_solved()),
            Self::Square1(state) => Some(state.is_solved()),
            Self::Megaminx(_) => None,
            Self::Clock(state) => Some(state.is_solved()),
        }
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cube(state) => fmt::Display::fmt(state, f),
            Self::Pyraminx(state) => fmt::Display::fmt(state, f),
            Self::Skewb(state) => fmt::Display::fmt(state, f),
            Self::Square1(state) => fmt::Display::fmt(state, f),
            Self::Megaminx(scramble) => fmt::Display::fmt(scramble, f),
            Self::Clock(state) => fmt::Display::fmt(state, f),
        }
    }
}

/// Returns the inverse of an algorithm for a puzzle family.
pub(crate) fn invert_alg_str<M: MoveToken>(alg: &str, mode: ParseMode) -> Result<String, ParseError> {
    let moves = parse_alg::<M>(alg, mode)?;
    Ok(twistysim_notation::alg_to_string(&twistysim_notation::invert_alg(&moves)))
}
