//! Skewb simulation.
//!
//! The state stores 8 corners and 6 centers. Each corner holds one sticker
//! per coordinate axis, ordered X, Y, Z. Each face shows 4 corner stickers
//! and 1 center, derived on demand.

use std::fmt;

use serde::{Deserialize, Serialize};
use twistysim_notation::{CubeFace, Direction, SkewbAxis, SkewbMove};

use super::PuzzleSim;
use crate::geom::{FaceFrame, Vec3, face_from_normal};
use crate::{Color, MoveError};

/// Clockwise third-turn permutation around one corner.
#[derive(Debug, Clone)]
struct SkewbTurn {
    /// `(from, to, axis_map)` for each moved corner, where sticker `i` of
    /// `from` lands on sticker `axis_map[i]` of `to`.
    corners: Vec<(usize, usize, [usize; 3])>,
    /// `(from, to)` for each moved center.
    centers: Vec<(CubeFace, CubeFace)>,
}

lazy_static! {
    static ref SKEWB_TURNS: [SkewbTurn; 4] = SkewbAxis::ALL.map(build_turn);
}

/// Returns the corner of the puzzle that a move turns around.
fn axis_vector(axis: SkewbAxis) -> Vec3 {
    match axis {
        SkewbAxis::U => Vec3::new(-1, 1, -1),
        SkewbAxis::R => Vec3::new(1, -1, -1),
        SkewbAxis::L => Vec3::new(-1, -1, 1),
        SkewbAxis::B => Vec3::new(-1, -1, -1),
    }
}

fn corner_position(index: usize) -> Vec3 {
    Vec3([0, 1, 2].map(|bit| if index & (1 << bit) != 0 { 1 } else { -1 }))
}

fn corner_index(position: Vec3) -> usize {
    (0..3).filter(|&bit| position.0[bit] > 0).map(|bit| 1 << bit).sum()
}

fn build_turn(axis: SkewbAxis) -> SkewbTurn {
    let a = axis_vector(axis);

    let corners = (0..8)
        .filter(|&i| corner_position(i).dot(a) >= 1)
        .map(|i| {
            let p = corner_position(i);
            let axis_map = [Vec3::X, Vec3::Y, Vec3::Z].map(|e| {
                let sticker_dir = e * p.dot(e);
                sticker_dir.rotate_third(a).major_axis()
            });
            (i, corner_index(p.rotate_third(a)), axis_map)
        })
        .collect();

    let centers = CubeFace::ALL
        .into_iter()
        .filter(|&face| FaceFrame::of(face).normal.dot(a) > 0)
        .filter_map(|face| {
            let to = face_from_normal(FaceFrame::of(face).normal.rotate_third(a))?;
            Some((face, to))
        })
        .collect();

    SkewbTurn { corners, centers }
}

/// State of a Skewb.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkewbState {
    corners: [[Color; 3]; 8],
    centers: [Color; 6],
}

impl Default for SkewbState {
    fn default() -> Self {
        Self::new()
    }
}

impl SkewbState {
    /// Constructs a solved Skewb.
    pub fn new() -> Self {
        let corners = std::array::from_fn(|i| {
            let p = corner_position(i);
            [Vec3::X, Vec3::Y, Vec3::Z].map(|e| {
                let face = face_from_normal(e * p.dot(e)).unwrap_or(CubeFace::U);
                Color::of_cube_face(face)
            })
        });
        Self {
            corners,
            centers: CubeFace::ALL.map(Color::of_cube_face),
        }
    }

    /// Returns the 5 stickers visible on a face: top-left, top-right,
    /// center, bottom-left, bottom-right, as seen from outside the puzzle.
    pub fn face_stickers(&self, face: CubeFace) -> [Color; 5] {
        let FaceFrame {
            normal,
            right,
            down,
        } = FaceFrame::of(face);
        let axis = normal.major_axis();
        let corner = |p: Vec3| self.corners[corner_index(p)][axis];
        [
            corner(normal - right - down),
            corner(normal + right - down),
            self.centers[face.index()],
            corner(normal - right + down),
            corner(normal + right + down),
        ]
    }

    fn turn_clockwise(&mut self, axis: SkewbAxis) {
        let turn = &SKEWB_TURNS[axis as usize];
        let old = self.clone();
        for &(from, to, axis_map) in &turn.corners {
            for (i, &j) in axis_map.iter().enumerate() {
                self.corners[to][j] = old.corners[from][i];
            }
        }
        for &(from, to) in &turn.centers {
            self.centers[to.index()] = old.centers[from.index()];
        }
    }
}

impl PuzzleSim for SkewbState {
    type Move = SkewbMove;

    fn apply_move(&mut self, m: &SkewbMove) -> Result<(), MoveError> {
        let turns = match m.direction {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => 2,
        };
        for _ in 0..turns {
            self.turn_clockwise(m.axis);
        }
        Ok(())
    }

    fn is_solved(&self) -> bool {
        CubeFace::ALL.into_iter().all(|face| {
            let stickers = self.face_stickers(face);
            stickers.iter().all(|&c| c == stickers[0])
        })
    }
}

impl fmt::Display for SkewbState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in CubeFace::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let [tl, tr, c, bl, br] = self.face_stickers(face).map(Color::letter);
            write!(f, "{face}  {tl} {tr}  {c}  {bl} {br}")?;
        }
        Ok(())
    }
}
