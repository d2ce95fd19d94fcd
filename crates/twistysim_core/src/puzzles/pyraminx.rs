//! Pyraminx simulation.
//!
//! Each face has 9 sticker slots, drawn as a triangle with vertex `v0` at
//! the top:
//!
//! ```text
//!         0
//!       1 2 3
//!     4 5 6 7 8
//! ```
//!
//! Slot 0 is the tip at `v0`, 2 is the center piece at `v0`, 1 and 3 are
//! the edges from `v0` to `v1` and `v2`, 4 and 8 are the tips at `v1` and
//! `v2`, 5 and 7 are their centers, and 6 is the edge from `v1` to `v2`.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use twistysim_notation::{Direction, PyraminxAxis, PyraminxMove};

use super::PuzzleSim;
use crate::{Color, MoveError};

/// Face of a Pyraminx, held with one face toward the solver and one vertex
/// up.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PyraminxFace {
    /// Front face, green when solved.
    F,
    /// Right face, blue when solved.
    R,
    /// Left face, red when solved.
    L,
    /// Bottom face, yellow when solved.
    D,
}

impl PyraminxFace {
    /// All faces, in storage order.
    pub const ALL: [Self; 4] = [Self::F, Self::R, Self::L, Self::D];

    /// Returns the color of the face in the solved state.
    pub fn color(self) -> Color {
        match self {
            PyraminxFace::F => Color::Green,
            PyraminxFace::R => Color::Blue,
            PyraminxFace::L => Color::Red,
            PyraminxFace::D => Color::Yellow,
        }
    }

    /// Returns the vertices of the face, top vertex first, then
    /// bottom-left and bottom-right as seen from outside.
    pub fn vertices(self) -> [PyraminxAxis; 3] {
        use PyraminxAxis as V;
        match self {
            PyraminxFace::F => [V::U, V::L, V::R],
            PyraminxFace::R => [V::U, V::R, V::B],
            PyraminxFace::L => [V::U, V::B, V::L],
            PyraminxFace::D => [V::B, V::R, V::L],
        }
    }

    /// Returns the face that does not touch a vertex.
    pub fn opposite(vertex: PyraminxAxis) -> Self {
        match vertex {
            PyraminxAxis::B => PyraminxFace::F,
            PyraminxAxis::L => PyraminxFace::R,
            PyraminxAxis::R => PyraminxFace::L,
            PyraminxAxis::U => PyraminxFace::D,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Piece that a sticker belongs to, identified by the vertices it touches.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Sticker {
    Tip(PyraminxAxis),
    Center(PyraminxAxis),
    Edge(PyraminxAxis, PyraminxAxis),
}

impl Sticker {
    fn map(self, f: impl Fn(PyraminxAxis) -> PyraminxAxis) -> Self {
        match self {
            Sticker::Tip(v) => Sticker::Tip(f(v)),
            Sticker::Center(v) => Sticker::Center(f(v)),
            Sticker::Edge(a, b) => Sticker::Edge(f(a), f(b)),
        }
    }

    fn touches(self, vertex: PyraminxAxis) -> bool {
        match self {
            Sticker::Tip(v) | Sticker::Center(v) => v == vertex,
            Sticker::Edge(a, b) => a == vertex || b == vertex,
        }
    }

    fn same_piece(self, other: Self) -> bool {
        match (self, other) {
            (Sticker::Edge(a, b), Sticker::Edge(c, d)) => (a, b) == (c, d) || (a, b) == (d, c),
            _ => self == other,
        }
    }
}

fn slot_stickers(face: PyraminxFace) -> [Sticker; 9] {
    let [v0, v1, v2] = face.vertices();
    [
        Sticker::Tip(v0),
        Sticker::Edge(v0, v1),
        Sticker::Center(v0),
        Sticker::Edge(v0, v2),
        Sticker::Tip(v1),
        Sticker::Center(v1),
        Sticker::Edge(v1, v2),
        Sticker::Center(v2),
        Sticker::Tip(v2),
    ]
}

fn sticker_slot(face: PyraminxFace, sticker: Sticker) -> Option<usize> {
    slot_stickers(face)
        .iter()
        .position(|&s| s.same_piece(sticker))
}

/// Returns the image of a vertex under a clockwise turn around `axis`, seen
/// from the vertex.
fn turn_vertex(axis: PyraminxAxis, v: PyraminxAxis) -> PyraminxAxis {
    use PyraminxAxis as V;
    let cycle = match axis {
        V::U => [V::B, V::R, V::L],
        V::R => [V::U, V::B, V::L],
        V::L => [V::U, V::R, V::B],
        V::B => [V::U, V::L, V::R],
    };
    match cycle.iter().position(|&x| x == v) {
        Some(i) => cycle[(i + 1) % 3],
        None => v,
    }
}

/// Sticker index: `face * 9 + slot`.
type Cycle = [usize; 3];

/// Builds the 3-cycles of sticker indices for a clockwise turn.
fn build_cycles(axis: PyraminxAxis, tip: bool) -> SmallVec<[Cycle; 4]> {
    let is_moved = |s: Sticker| match s {
        Sticker::Tip(v) => v == axis,
        _ => !tip && s.touches(axis),
    };
    let image = |idx: usize| -> Option<usize> {
        let face = PyraminxFace::ALL[idx / 9];
        let sticker = slot_stickers(face)[idx % 9];
        let opposite_vertex = PyraminxAxis::ALL
            .into_iter()
            .find(|v| !face.vertices().contains(v))?;
        let new_face = PyraminxFace::opposite(turn_vertex(axis, opposite_vertex));
        let new_sticker = sticker.map(|v| turn_vertex(axis, v));
        Some(new_face.index() * 9 + sticker_slot(new_face, new_sticker)?)
    };

    let mut cycles = SmallVec::new();
    let mut visited = [false; 36];
    for idx in 0..36 {
        let sticker = slot_stickers(PyraminxFace::ALL[idx / 9])[idx % 9];
        if visited[idx] || !is_moved(sticker) {
            continue;
        }
        let Some(b) = image(idx) else { continue };
        let Some(c) = image(b) else { continue };
        for i in [idx, b, c] {
            visited[i] = true;
        }
        cycles.push([idx, b, c]);
    }
    cycles
}

lazy_static! {
    /// 3-cycles for each move, indexed by `[axis][tip as usize]`.
    static ref PYRAMINX_CYCLES: [[SmallVec<[Cycle; 4]>; 2]; 4] =
        PyraminxAxis::ALL.map(|axis| [build_cycles(axis, false), build_cycles(axis, true)]);
}

/// State of a Pyraminx.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PyraminxState {
    faces: [[Color; 9]; 4],
}

impl Default for PyraminxState {
    fn default() -> Self {
        Self::new()
    }
}

impl PyraminxState {
    /// Constructs a solved Pyraminx.
    pub fn new() -> Self {
        Self {
            faces: PyraminxFace::ALL.map(|face| [face.color(); 9]),
        }
    }

    /// Returns the stickers of a face, in slot order.
    pub fn face(&self, face: PyraminxFace) -> &[Color; 9] {
        &self.faces[face.index()]
    }

    fn get(&self, idx: usize) -> Color {
        self.faces[idx / 9][idx % 9]
    }

    fn set(&mut self, idx: usize, color: Color) {
        self.faces[idx / 9][idx % 9] = color;
    }
}

impl PuzzleSim for PyraminxState {
    type Move = PyraminxMove;

    fn apply_move(&mut self, m: &PyraminxMove) -> Result<(), MoveError> {
        let cycles = &PYRAMINX_CYCLES[m.axis as usize][m.tip as usize];
        for &[a, b, c] in cycles {
            let (va, vb, vc) = (self.get(a), self.get(b), self.get(c));
            match m.direction {
                Direction::Clockwise => {
                    self.set(b, va);
                    self.set(c, vb);
                    self.set(a, vc);
                }
                Direction::CounterClockwise => {
                    self.set(a, vb);
                    self.set(b, vc);
                    self.set(c, va);
                }
            }
        }
        Ok(())
    }

    fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|stickers| stickers.iter().all(|&c| c == stickers[0]))
    }
}

impl fmt::Display for PyraminxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in PyraminxFace::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let s = self.face(face).map(Color::letter);
            writeln!(f, "{face:?}     {}", s[0])?;
            writeln!(f, "     {} {} {}", s[1], s[2], s[3])?;
            write!(f, "   {} {} {} {} {}", s[4], s[5], s[6], s[7], s[8])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use twistysim_notation::{MoveToken, ParseMode, invert_alg};

    use super::*;
    use crate::puzzles::strategies::arb_pyraminx_move;

    fn moved_stickers(axis: PyraminxAxis, tip: bool) -> HashSet<usize> {
        PYRAMINX_CYCLES[axis as usize][tip as usize]
            .iter()
            .flatten()
            .copied()
            .collect()
    }

    #[test]
    fn test_cycle_tables() {
        for axis in PyraminxAxis::ALL {
            let vertex = moved_stickers(axis, false);
            let tip = moved_stickers(axis, true);
            assert_eq!(12, vertex.len(), "{axis:?}");
            assert_eq!(3, tip.len(), "{axis:?}");
            assert!(tip.is_subset(&vertex));
            assert!(tip.len() < vertex.len());
        }
    }

    #[test]
    fn test_faces_are_consistent() {
        for axis in PyraminxAxis::ALL {
            let face = PyraminxFace::opposite(axis);
            assert!(!face.vertices().contains(&axis));
            for v in face.vertices() {
                assert_eq!(v, turn_vertex(axis, turn_vertex(axis, turn_vertex(axis, v))));
            }
        }
    }

    #[test]
    fn test_three_turns_are_identity() {
        for axis in PyraminxAxis::ALL {
            for tip in [false, true] {
                let m = PyraminxMove {
                    axis,
                    tip,
                    direction: Direction::Clockwise,
                };
                let mut pyra = PyraminxState::new();
                pyra.apply_move(&m).unwrap();
                assert!(!pyra.is_solved());
                pyra.apply_move(&m).unwrap();
                pyra.apply_move(&m).unwrap();
                assert_eq!(PyraminxState::new(), pyra, "{m}");
            }
        }
    }

    #[test]
    fn test_face_opposite_turning_vertex_is_untouched() {
        let mut pyra = PyraminxState::new();
        pyra.apply_alg("U", ParseMode::Strict).unwrap();
        assert_eq!(&[Color::Yellow; 9], pyra.face(PyraminxFace::D));
        // Bottom row of the front face is below the turning layers.
        assert_eq!(&[Color::Green; 5], &pyra.face(PyraminxFace::F)[4..]);
        // U takes the right face's top to the front.
        assert_eq!(Color::Blue, pyra.face(PyraminxFace::F)[0]);
    }

    proptest! {
        #[test]
        fn proptest_pyraminx_alg_then_inverse(moves in prop::collection::vec(arb_pyraminx_move(), 0..30)) {
            let mut pyra = PyraminxState::new();
            pyra.apply_moves(&moves, ParseMode::Strict).unwrap();
            pyra.apply_moves(&invert_alg(&moves), ParseMode::Strict).unwrap();
            prop_assert_eq!(PyraminxState::new(), pyra);
        }

        #[test]
        fn proptest_pyraminx_move_inverse(m in arb_pyraminx_move()) {
            let pyra = PyraminxState::new().do_move(&m).unwrap().do_move(&m.inv()).unwrap();
            prop_assert_eq!(PyraminxState::new(), pyra);
        }

        #[test]
        fn proptest_pyraminx_preserves_color_counts(moves in prop::collection::vec(arb_pyraminx_move(), 0..30)) {
            let mut pyra = PyraminxState::new();
            pyra.apply_moves(&moves, ParseMode::Strict).unwrap();
            for face in PyraminxFace::ALL {
                let count = pyra.faces.iter().flatten().filter(|&&c| c == face.color()).count();
                prop_assert_eq!(9, count);
            }
        }
    }
}
