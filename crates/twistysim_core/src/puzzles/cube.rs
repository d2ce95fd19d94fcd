//! NxN cube simulation.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use twistysim_notation::{CubeFace, CubeMove};

use super::PuzzleSim;
use crate::{Color, MoveError};

/// Row or column selector for one sticker strip of a layer turn.
#[derive(Debug, Copy, Clone)]
enum Coord {
    /// Layer depth, counted from the turning face.
    Depth,
    /// Layer depth, counted from the far edge.
    FarDepth,
    /// Position along the strip.
    T,
    /// Position along the strip, counted from the far end.
    FarT,
}

impl Coord {
    fn resolve(self, n: usize, depth: usize, t: usize) -> usize {
        match self {
            Coord::Depth => depth,
            Coord::FarDepth => n - 1 - depth,
            Coord::T => t,
            Coord::FarT => n - 1 - t,
        }
    }
}

/// Sticker strip on a face adjacent to the turning face: `(face, row, col)`.
type Strip = (CubeFace, Coord, Coord);

/// Strips moved by a clockwise turn of each face, in `CubeFace` index order.
/// Stickers move from each strip to the next one.
const STRIPS: [[Strip; 4]; 6] = {
    use Coord::*;
    use CubeFace::*;
    [
        // U: a clockwise turn sends the front top row to the left face (WCA direction)
        [(F, Depth, T), (L, Depth, T), (B, Depth, T), (R, Depth, T)],
        // F
        [(U, FarDepth, T), (R, T, Depth), (D, Depth, FarT), (L, FarT, FarDepth)],
        // R
        [(F, T, FarDepth), (U, T, FarDepth), (B, FarT, Depth), (D, T, FarDepth)],
        // B
        [(U, Depth, T), (L, FarT, Depth), (D, FarDepth, FarT), (R, T, FarDepth)],
        // L
        [(U, T, Depth), (F, T, Depth), (D, T, Depth), (B, FarT, FarDepth)],
        // D
        [(F, FarDepth, T), (R, FarDepth, T), (B, FarDepth, T), (L, FarDepth, T)],
    ]
};

/// State of an NxN cube, stored as six faces of row-major facelets.
///
/// Each face is stored as seen from outside the cube, oriented as in the net
/// drawn by the [`fmt::Display`] implementation: `U` above `F`, then `L F R
/// B` in a row, then `D` below `F`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    n: usize,
    faces: [Vec<Color>; 6],
}

impl CubeState {
    /// Constructs a solved cube with side length `n`, which is raised to 1 if
    /// it is 0.
    pub fn new(n: usize) -> Self {
        let n = n.max(1);
        Self {
            n,
            faces: CubeFace::ALL.map(|face| vec![Color::of_cube_face(face); n * n]),
        }
    }

    /// Returns the side length.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the largest number of layers that a single move may turn.
    pub fn max_layers(&self) -> usize {
        (self.n / 2).max(1)
    }

    /// Returns the facelets of a face in row-major order.
    pub fn face(&self, face: CubeFace) -> &[Color] {
        &self.faces[face.index()]
    }

    /// Returns the color of the facelet at `row` and `col` on `face`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn get(&self, face: CubeFace, row: usize, col: usize) -> Color {
        self.faces[face.index()][row * self.n + col]
    }

    fn rotate_face_matrix(&mut self, face: CubeFace, quarter_turns: usize) {
        let n = self.n;
        let facelets = &mut self.faces[face.index()];
        for ring in 0..n / 2 {
            let far = n - 1 - ring;
            for i in ring..far {
                let cycle = [
                    (ring, i),
                    (i, far),
                    (far, n - 1 - i),
                    (n - 1 - i, ring),
                ]
                .map(|(row, col)| row * n + col);
                let old = cycle.map(|idx| facelets[idx]);
                for (k, color) in old.into_iter().enumerate() {
                    facelets[cycle[(k + quarter_turns) % 4]] = color;
                }
            }
        }
    }

    fn cycle_strips(&mut self, face: CubeFace, depth: usize, quarter_turns: usize) {
        let n = self.n;
        let strips = STRIPS[face.index()].map(|(strip_face, row, col)| {
            (0..n)
                .map(|t| {
                    let idx = row.resolve(n, depth, t) * n + col.resolve(n, depth, t);
                    (strip_face.index(), idx)
                })
                .collect::<SmallVec<[(usize, usize); 8]>>()
        });
        let old = strips.each_ref().map(|strip| {
            strip
                .iter()
                .map(|&(f, idx)| self.faces[f][idx])
                .collect::<SmallVec<[Color; 8]>>()
        });
        for (k, colors) in old.into_iter().enumerate() {
            let dst = &strips[(k + quarter_turns) % 4];
            for (&(f, idx), color) in dst.iter().zip(colors) {
                self.faces[f][idx] = color;
            }
        }
    }
}

impl PuzzleSim for CubeState {
    type Move = CubeMove;

    fn apply_move(&mut self, m: &CubeMove) -> Result<(), MoveError> {
        let layers = usize::from(m.layers).clamp(1, self.max_layers());
        let quarter_turns = m.modifier.quarter_turns();
        self.rotate_face_matrix(m.face, quarter_turns);
        for depth in 0..layers {
            self.cycle_strips(m.face, depth, quarter_turns);
        }
        Ok(())
    }

    fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|facelets| facelets.iter().all(|&c| c == facelets[0]))
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.n;
        let indent = " ".repeat(n + 1);
        let write_row = |f: &mut fmt::Formatter<'_>, face: CubeFace, row: usize| {
            self.face(face)[row * n..(row + 1) * n]
                .iter()
                .try_for_each(|c| write!(f, "{}", c.letter()))
        };

        for row in 0..n {
            write!(f, "{indent}")?;
            write_row(f, CubeFace::U, row)?;
            writeln!(f)?;
        }
        for row in 0..n {
            for (i, face) in [CubeFace::L, CubeFace::F, CubeFace::R, CubeFace::B]
                .into_iter()
                .enumerate()
            {
                if i > 0 {
                    write!(f, " ")?;
                }
                write_row(f, face, row)?;
            }
            writeln!(f)?;
        }
        for row in 0..n {
            write!(f, "{indent}")?;
            write_row(f, CubeFace::D, row)?;
            if row + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use twistysim_notation::{Modifier, MoveToken, ParseMode, invert_alg};

    use super::*;
    use crate::geom::{FaceFrame, face_from_normal};
    use crate::puzzles::strategies::arb_cube_move;

    fn face_moves(n: usize) -> Vec<CubeMove> {
        let mut moves = vec![];
        for face in CubeFace::ALL {
            for layers in 1..=(n / 2).max(1) {
                for modifier in [
                    Modifier::Clockwise,
                    Modifier::CounterClockwise,
                    Modifier::Double,
                ] {
                    moves.push(CubeMove::wide(face, layers as u16, modifier));
                }
            }
        }
        moves
    }

    /// Applies a move by rotating every sticker in 3D, independently of the
    /// strip tables.
    fn apply_geometric(state: &CubeState, m: CubeMove) -> CubeState {
        let n = state.n as i32;
        let layers = usize::from(m.layers).clamp(1, state.max_layers()) as i32;
        let axis = FaceFrame::of(m.face).normal;
        let threshold = n + 1 - 2 * layers;

        // Positions are doubled so that sticker centers have integer
        // coordinates.
        let position = |face: CubeFace, row: i32, col: i32| {
            let frame = FaceFrame::of(face);
            frame.normal * n + frame.right * (2 * col - n + 1) + frame.down * (2 * row - n + 1)
        };

        let mut out = state.clone();
        for face in CubeFace::ALL {
            for row in 0..n {
                for col in 0..n {
                    let mut p = position(face, row, col);
                    if p.dot(axis) < threshold {
                        continue;
                    }
                    let mut normal = FaceFrame::of(face).normal;
                    for _ in 0..m.modifier.quarter_turns() {
                        p = p.rotate_quarter(axis);
                        normal = normal.rotate_quarter(axis);
                    }
                    let new_face = face_from_normal(normal).unwrap();
                    let frame = FaceFrame::of(new_face);
                    let new_col = (p.dot(frame.right) + n - 1) / 2;
                    let new_row = (p.dot(frame.down) + n - 1) / 2;
                    let idx = (new_row * n + new_col) as usize;
                    out.faces[new_face.index()][idx] = state.get(face, row as usize, col as usize);
                }
            }
        }
        out
    }

    fn color_counts(state: &CubeState) -> Vec<usize> {
        use strum::IntoEnumIterator;
        Color::iter()
            .map(|color| {
                state
                    .faces
                    .iter()
                    .flatten()
                    .filter(|&&c| c == color)
                    .count()
            })
            .collect()
    }

    #[test]
    fn test_solved_state() {
        for n in 1..=7 {
            let cube = CubeState::new(n);
            assert!(cube.is_solved());
            assert_eq!(Color::White, cube.get(CubeFace::U, 0, 0));
            assert_eq!(Color::Yellow, cube.get(CubeFace::D, n - 1, n - 1));
            assert_eq!(vec![n * n; 6], color_counts(&cube));
        }
    }

    #[test]
    fn test_move_then_inverse_is_identity() {
        for n in 2..=7 {
            let solved = CubeState::new(n);
            for m in face_moves(n) {
                let state = solved.do_move(&m).unwrap().do_move(&m.inv()).unwrap();
                assert_eq!(solved, state, "{n}x{n}x{n} {m}");
            }
        }
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        for n in 2..=7 {
            let solved = CubeState::new(n);
            for m in face_moves(n) {
                let mut state = solved.clone();
                for _ in 0..4 {
                    state.apply_move(&m).unwrap();
                }
                assert_eq!(solved, state, "{n}x{n}x{n} {m}");
                assert!(!solved.do_move(&m).unwrap().is_solved());
            }
        }
    }

    #[test]
    fn test_sexy_move_and_inverse() {
        let mut cube = CubeState::new(3);
        cube.apply_alg("R U R' U'", ParseMode::Strict).unwrap();
        assert!(!cube.is_solved());
        cube.apply_alg("U R U' R'", ParseMode::Strict).unwrap();
        assert_eq!(CubeState::new(3), cube);
    }

    #[test]
    fn test_sexy_move_has_order_six() {
        let mut cube = CubeState::new(3);
        for _ in 0..6 {
            cube.apply_alg("R U R' U'", ParseMode::Strict).unwrap();
        }
        assert_eq!(CubeState::new(3), cube);
    }

    #[test]
    fn test_opposite_double_turns_preserve_color_counts() {
        for n in 2..=7 {
            let mut cube = CubeState::new(n);
            cube.apply_alg("U2 D2 R2 L2 F2 B2", ParseMode::Strict)
                .unwrap();
            assert_eq!(vec![n * n; 6], color_counts(&cube));
            for face in CubeFace::ALL {
                assert_eq!(n * n, cube.face(face).len());
            }
        }
    }

    #[test]
    fn test_u_turn_cycles_front_to_left() {
        let cube = CubeState::new(3)
            .do_move(&CubeMove::new(CubeFace::U, Modifier::Clockwise))
            .unwrap();
        assert_eq!(Color::Red, cube.get(CubeFace::F, 0, 1));
        assert_eq!(Color::Green, cube.get(CubeFace::L, 0, 1));
        assert_eq!(Color::Green, cube.get(CubeFace::F, 1, 1));
    }

    #[test]
    fn test_wide_layers_are_clamped() {
        let wide = CubeMove::wide(CubeFace::R, 5, Modifier::Clockwise);
        let clamped = CubeMove::wide(CubeFace::R, 2, Modifier::Clockwise);
        let cube = CubeState::new(4);
        assert_eq!(cube.do_move(&clamped), cube.do_move(&wide));

        let cube = CubeState::new(3);
        let single = CubeMove::new(CubeFace::R, Modifier::Clockwise);
        assert_eq!(cube.do_move(&single), cube.do_move(&wide));
    }

    #[test]
    fn test_lenient_skips_unknown_faces() {
        let mut cube = CubeState::new(3);
        cube.apply_alg("R x M U'", ParseMode::Lenient).unwrap();
        let mut expected = CubeState::new(3);
        expected.apply_alg("R U'", ParseMode::Strict).unwrap();
        assert_eq!(expected, cube);

        let mut cube = CubeState::new(3);
        assert!(cube.apply_alg("R x", ParseMode::Strict).is_err());
        assert_eq!(CubeState::new(3), cube);
    }

    #[test]
    fn test_display_net() {
        let expected = "   WW\n   WW\nOO GG RR BB\nOO GG RR BB\n   YY\n   YY";
        assert_eq!(expected, CubeState::new(2).to_string());
    }

    fn arb_cube_and_moves() -> impl Strategy<Value = (usize, Vec<CubeMove>)> {
        (2..=7_usize).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_cube_move(), 0..20)))
    }

    proptest! {
        #[test]
        fn proptest_cube_matches_geometric_model((n, moves) in arb_cube_and_moves()) {
            let mut table = CubeState::new(n);
            let mut geometric = CubeState::new(n);
            for m in moves {
                table.apply_move(&m).unwrap();
                geometric = apply_geometric(&geometric, m);
                prop_assert_eq!(&table, &geometric, "after {}", m);
            }
        }

        #[test]
        fn proptest_double_turn_equals_two_quarter_turns(
            (n, moves) in arb_cube_and_moves(),
            face in prop::sample::select(CubeFace::ALL.to_vec()),
            layers in 1..=3_u16,
        ) {
            let mut state = CubeState::new(n);
            for m in &moves {
                state.apply_move(m).unwrap();
            }
            let double = state.do_move(&CubeMove::wide(face, layers, Modifier::Double)).unwrap();
            let quarter = CubeMove::wide(face, layers, Modifier::Clockwise);
            let twice = state.do_move(&quarter).unwrap().do_move(&quarter).unwrap();
            prop_assert_eq!(double, twice);
        }

        #[test]
        fn proptest_alg_then_inverse_is_identity((n, moves) in arb_cube_and_moves()) {
            let mut state = CubeState::new(n);
            state.apply_moves(&moves, ParseMode::Strict).unwrap();
            state.apply_moves(&invert_alg(&moves), ParseMode::Strict).unwrap();
            prop_assert_eq!(CubeState::new(n), state);
        }

        #[test]
        fn proptest_moves_preserve_color_counts((n, moves) in arb_cube_and_moves()) {
            let mut state = CubeState::new(n);
            state.apply_moves(&moves, ParseMode::Strict).unwrap();
            prop_assert_eq!(vec![n * n; 6], color_counts(&state));
        }
    }

    #[test]
    fn test_geometric_model_sanity() {
        // The model itself must agree with the hand-checked U turn.
        let cube = apply_geometric(
            &CubeState::new(3),
            CubeMove::new(CubeFace::U, Modifier::Clockwise),
        );
        assert_eq!(Color::Red, cube.get(CubeFace::F, 0, 0));
        assert_eq!(Color::Orange, cube.get(CubeFace::B, 0, 2));
    }
}
