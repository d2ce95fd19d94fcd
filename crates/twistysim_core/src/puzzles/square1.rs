//! Square-1 simulation.
//!
//! Each layer is stored as 12 slots of 30° each, listed clockwise as seen
//! looking at that layer, starting just after the cut on the right half.
//! Edges fill one slot and corners fill two consecutive slots. The top layer
//! starts at the back end of the cut and the bottom layer starts at the
//! front end, so the first 6 slots of each layer are the half that a slash
//! exchanges, in the order in which they land.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use twistysim_notation::square1::MAX_LAYER_UNITS;
use twistysim_notation::Sq1Move;

use super::PuzzleSim;
use crate::MoveError;

/// Number of 30° slots in a layer.
pub const LAYER_SLOTS: usize = MAX_LAYER_UNITS as usize;
const HALF: usize = LAYER_SLOTS / 2;

/// Piece IDs in each slot of the solved top layer.
const SOLVED_TOP: [u8; LAYER_SLOTS] = [0, 0, 1, 2, 2, 3, 4, 4, 5, 6, 6, 7];
/// Piece IDs in each slot of the solved bottom layer.
const SOLVED_BOTTOM: [u8; LAYER_SLOTS] = [8, 9, 9, 10, 11, 11, 12, 13, 13, 14, 15, 15];

/// Square-1 piece.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sq1Piece {
    /// Piece ID: 0 to 7 start in the top layer and 8 to 15 start in the
    /// bottom layer.
    pub id: u8,
    /// Whether the piece is a corner (60°) rather than an edge (30°).
    pub is_corner: bool,
}

impl Sq1Piece {
    /// Returns the number of 30° slots that the piece fills.
    pub fn width(self) -> usize {
        if self.is_corner { 2 } else { 1 }
    }
}

fn is_corner_id(id: u8) -> bool {
    (id < 8) == (id % 2 == 0)
}

/// One layer of a Square-1.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sq1Layer {
    slots: [u8; LAYER_SLOTS],
}

impl Sq1Layer {
    /// Returns the piece ID in each slot.
    pub fn slots(&self) -> &[u8; LAYER_SLOTS] {
        &self.slots
    }

    /// Returns the pieces in the layer, starting with the piece that fills
    /// the first slot.
    pub fn pieces(&self) -> SmallVec<[Sq1Piece; LAYER_SLOTS]> {
        let mut pieces: SmallVec<[Sq1Piece; LAYER_SLOTS]> = SmallVec::new();
        for (i, &id) in self.slots.iter().enumerate() {
            let continues_previous = i > 0 && self.slots[i - 1] == id;
            // A corner that straddles the cut appears at both ends.
            let wraps = i == LAYER_SLOTS - 1 && self.slots[0] == id && !continues_previous;
            if !continues_previous && !wraps {
                pieces.push(Sq1Piece {
                    id,
                    is_corner: is_corner_id(id),
                });
            }
        }
        pieces
    }

    /// Returns whether a piece boundary lies between slot `i - 1` and slot
    /// `i`, wrapping around.
    fn has_boundary_before(&self, i: usize) -> bool {
        self.slots[(i + LAYER_SLOTS - 1) % LAYER_SLOTS] != self.slots[i % LAYER_SLOTS]
    }

    /// Returns whether the layer can be sliced: no piece crosses either end
    /// of the cut.
    pub fn is_aligned(&self) -> bool {
        self.has_boundary_before(0) && self.has_boundary_before(HALF)
    }

    /// Rotates the layer clockwise by `units` slots, as seen looking at the
    /// layer.
    fn rotate(&mut self, units: i32) {
        let units = units.rem_euclid(MAX_LAYER_UNITS) as usize;
        self.slots.rotate_right(units);
    }

    fn is_rotation_of(&self, other: &[u8; LAYER_SLOTS]) -> bool {
        (0..LAYER_SLOTS).any(|k| {
            let mut rotated = self.slots;
            rotated.rotate_left(k);
            rotated == *other
        })
    }
}

/// State of a Square-1.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sq1State {
    /// Top layer.
    pub top: Sq1Layer,
    /// Bottom layer.
    pub bottom: Sq1Layer,
    /// Whether the right half of the middle layer has been flipped an odd
    /// number of times.
    pub middle_flipped: bool,
}

impl Default for Sq1State {
    fn default() -> Self {
        Self::new()
    }
}

impl Sq1State {
    /// Constructs a solved Square-1 in cube shape.
    pub fn new() -> Self {
        Self {
            top: Sq1Layer { slots: SOLVED_TOP },
            bottom: Sq1Layer {
                slots: SOLVED_BOTTOM,
            },
            middle_flipped: false,
        }
    }

    /// Returns whether a slash is currently possible.
    pub fn can_slash(&self) -> bool {
        self.top.is_aligned() && self.bottom.is_aligned()
    }

    /// Exchanges the right halves of both layers, or returns an error and
    /// leaves the state unchanged if a piece crosses the cut.
    pub fn slash(&mut self) -> Result<(), MoveError> {
        if !self.can_slash() {
            return Err(MoveError::SlashBlocked {
                top_aligned: self.top.is_aligned(),
                bottom_aligned: self.bottom.is_aligned(),
            });
        }
        self.top.slots[..HALF].swap_with_slice(&mut self.bottom.slots[..HALF]);
        self.middle_flipped = !self.middle_flipped;
        Ok(())
    }
}

impl PuzzleSim for Sq1State {
    type Move = Sq1Move;

    fn apply_move(&mut self, m: &Sq1Move) -> Result<(), MoveError> {
        match *m {
            Sq1Move::UD { u, d } => {
                self.top.rotate(u);
                self.bottom.rotate(d);
                Ok(())
            }
            Sq1Move::Slash => self.slash(),
        }
    }

    /// Returns whether every piece is in its home layer in solved order and
    /// the middle layer is unflipped. Layers may be turned by any amount.
    fn is_solved(&self) -> bool {
        !self.middle_flipped
            && self.top.is_rotation_of(&SOLVED_TOP)
            && self.bottom.is_rotation_of(&SOLVED_BOTTOM)
    }
}

impl fmt::Display for Sq1Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &id) in self.slots.iter().enumerate() {
            if i == HALF {
                write!(f, " |")?;
            }
            let letter = char::from(b'a' + id);
            let letter = if is_corner_id(id) {
                letter.to_ascii_uppercase()
            } else {
                letter
            };
            write!(f, " {letter}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Sq1State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "top    {}", self.top)?;
        writeln!(f, "bottom {}", self.bottom)?;
        let middle = if self.middle_flipped { "flipped" } else { "solved" };
        write!(f, "middle  {middle}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use twistysim_notation::{MoveToken, ParseMode, invert_alg};

    use super::*;
    use crate::SimulationError;
    use crate::puzzles::strategies::arb_sq1_move;

    fn width_sum(pieces: &[Sq1Piece]) -> usize {
        pieces.iter().map(|p| p.width()).sum()
    }

    #[test]
    fn test_solved_layers() {
        let sq1 = Sq1State::new();
        assert!(sq1.is_solved());
        assert!(sq1.can_slash());
        for layer in [sq1.top, sq1.bottom] {
            let pieces = layer.pieces();
            assert_eq!(8, pieces.len());
            assert_eq!(LAYER_SLOTS, width_sum(&pieces));
            assert_eq!(4, pieces.iter().filter(|p| p.is_corner).count());
        }
    }

    #[test]
    fn test_slash_twice_is_identity() {
        let mut sq1 = Sq1State::new();
        sq1.slash().unwrap();
        assert!(sq1.middle_flipped);
        assert!(!sq1.is_solved());
        sq1.slash().unwrap();
        assert_eq!(Sq1State::new(), sq1);
    }

    #[test]
    fn test_blocked_slash_leaves_state_unchanged() {
        let mut sq1 = Sq1State::new();
        sq1.apply_alg("(2,0)", ParseMode::Strict).unwrap();
        assert!(!sq1.top.is_aligned());
        let before = sq1;
        assert_eq!(
            Err(MoveError::SlashBlocked {
                top_aligned: false,
                bottom_aligned: true,
            }),
            sq1.slash(),
        );
        assert_eq!(before, sq1);

        // Lenient simulation skips the blocked slash.
        sq1.apply_alg("/", ParseMode::Lenient).unwrap();
        assert_eq!(before, sq1);

        let err = sq1.apply_alg("(0,3) /", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, SimulationError::Move { .. }));
    }

    #[test]
    fn test_corner_straddling_cut() {
        let mut sq1 = Sq1State::new();
        sq1.apply_alg("(2,0)", ParseMode::Strict).unwrap();
        assert_eq!(sq1.top.slots()[0], sq1.top.slots()[LAYER_SLOTS - 1]);
        let pieces = sq1.top.pieces();
        assert_eq!(8, pieces.len());
        assert_eq!(LAYER_SLOTS, width_sum(&pieces));
        assert!(sq1.is_solved());
    }

    #[test]
    fn test_shape_change_keeps_all_pieces() {
        let mut sq1 = Sq1State::new();
        sq1.apply_alg("(1,0)/(-3,0)/", ParseMode::Strict).unwrap();
        assert!(!sq1.middle_flipped);
        assert_eq!([7, 0, 0, 1, 2, 2], sq1.top.slots()[..6]);
        assert!(!sq1.is_solved());
        assert_eq!(16, sq1.top.pieces().len() + sq1.bottom.pieces().len());
    }

    #[test]
    fn test_full_rotation_is_identity() {
        let mut sq1 = Sq1State::new();
        sq1.apply_alg("(12,-12) (6,6) (6,6)", ParseMode::Strict)
            .unwrap();
        assert_eq!(Sq1State::new(), sq1);
    }

    proptest! {
        #[test]
        fn proptest_sq1_alg_then_inverse(moves in prop::collection::vec(arb_sq1_move(), 0..30)) {
            let mut sq1 = Sq1State::new();
            let mut applied = vec![];
            for m in moves {
                if sq1.apply_move(&m).is_ok() {
                    applied.push(m);
                }
            }
            for layer in [sq1.top, sq1.bottom] {
                prop_assert_eq!(LAYER_SLOTS, width_sum(&layer.pieces()));
            }
            sq1.apply_moves(&invert_alg(&applied), ParseMode::Strict).unwrap();
            prop_assert_eq!(Sq1State::new(), sq1);
        }

        #[test]
        fn proptest_sq1_move_inverse(m in arb_sq1_move()) {
            let sq1 = Sq1State::new().do_move(&m).unwrap().do_move(&m.inv()).unwrap();
            prop_assert_eq!(Sq1State::new(), sq1);
        }
    }
}
