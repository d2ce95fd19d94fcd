//! Puzzle state simulation and scramble generation for WCA twisty puzzles.
//!
//! Each puzzle family has a state type implementing [`PuzzleSim`], which
//! applies moves parsed by [`twistysim_notation`]. [`PuzzleState`] wraps all
//! of them behind a single enum selected by [`PuzzleKind`], usually resolved
//! from a WCA event identifier.
//!
//! ```
//! use twistysim_core::prelude::*;
//!
//! let kind = PuzzleKind::from_event_id("333");
//! let state = PuzzleState::simulate(kind, "R U R' U' U R U' R'", ParseMode::Lenient).unwrap();
//! assert_eq!(Some(true), state.is_solved());
//! ```

#[macro_use]
extern crate lazy_static;

mod color;
mod error;
mod event;
pub mod geom;
mod metric;
mod puzzles;
mod scramble;
mod timestamp;

/// Re-export of `chrono`.
pub use chrono;
/// Re-export of `twistysim_notation`.
pub use twistysim_notation as notation;
pub use prelude::*;

pub use crate::color::Color;
pub use crate::error::{MoveError, SimulationError};
pub use crate::event::{Event, PuzzleKind};
pub use crate::metric::{StmCounter, count_stm};
pub use crate::puzzles::*;
pub use crate::scramble::{
    ScrambleParams, ScrambledPuzzle, random_clock_moves, random_cube_moves,
    random_megaminx_moves, random_pyraminx_moves, random_scramble, random_skewb_moves,
    random_sq1_moves,
};
pub use crate::timestamp::Timestamp;

/// Prelude of common imports.
pub mod prelude {
    pub use twistysim_notation::{MoveToken, ParseMode};

    pub use crate::{
        Color, Event, MoveError, PuzzleKind, PuzzleSim, PuzzleState, ScrambleParams,
        SimulationError,
    };
}

/// Version string such as `twistysim_core v1.2.3`.
pub const ENGINE_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));
