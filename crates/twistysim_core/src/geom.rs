//! Small integer vector math for cube-shaped puzzles.
//!
//! Coordinates: `x` points right, `y` points up, `z` points toward the
//! solver.

use std::ops::{Add, Mul, Neg, Sub};

use twistysim_notation::CubeFace;

/// Vector with integer coordinates.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vec3(pub [i32; 3]);

impl Vec3 {
    /// Unit vector along the X axis.
    pub const X: Self = Self([1, 0, 0]);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self([0, 1, 0]);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self([0, 0, 1]);

    /// Constructs a vector.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self([x, y, z])
    }

    /// Returns the dot product of two vectors.
    pub fn dot(self, other: Self) -> i32 {
        (0..3).map(|i| self.0[i] * other.0[i]).sum()
    }

    /// Returns the cross product of two vectors.
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }

    /// Returns the index of the largest-magnitude component.
    pub fn major_axis(self) -> usize {
        (0..3).max_by_key(|&i| self.0[i].abs()).unwrap_or(0)
    }

    /// Rotates the vector a quarter turn clockwise, as seen looking at the
    /// origin from the tip of `axis`. `axis` must be a unit vector along a
    /// coordinate axis.
    #[must_use]
    pub fn rotate_quarter(self, axis: Self) -> Self {
        axis * axis.dot(self) - axis.cross(self)
    }

    /// Rotates the vector a third of a turn clockwise, as seen looking at the
    /// origin from the tip of `axis`. `axis` must be a cube diagonal such as
    /// `(1, -1, 1)` and `self` must be a cube corner or face normal.
    #[must_use]
    pub fn rotate_third(self, axis: Self) -> Self {
        let doubled = axis * axis.dot(self) - self - axis.cross(self);
        debug_assert!(doubled.0.iter().all(|c| c % 2 == 0));
        Self(doubled.0.map(|c| c / 2))
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self([0, 1, 2].map(|i| self.0[i] + rhs.0[i]))
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self([0, 1, 2].map(|i| self.0[i] - rhs.0[i]))
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|c| -c))
    }
}

impl Mul<i32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Self(self.0.map(|c| c * rhs))
    }
}

/// Orientation of a cube face as drawn in an unfolded net.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FaceFrame {
    /// Outward normal.
    pub normal: Vec3,
    /// Direction of increasing column.
    pub right: Vec3,
    /// Direction of increasing row.
    pub down: Vec3,
}

impl FaceFrame {
    /// Returns the frame for a face, as seen from outside the cube with `U`
    /// above `F` and `D` below `F` in the net.
    pub fn of(face: CubeFace) -> Self {
        let (normal, right, down) = match face {
            CubeFace::U => (Vec3::Y, Vec3::X, Vec3::Z),
            CubeFace::F => (Vec3::Z, Vec3::X, -Vec3::Y),
            CubeFace::R => (Vec3::X, -Vec3::Z, -Vec3::Y),
            CubeFace::B => (-Vec3::Z, -Vec3::X, -Vec3::Y),
            CubeFace::L => (-Vec3::X, Vec3::Z, -Vec3::Y),
            CubeFace::D => (-Vec3::Y, Vec3::X, -Vec3::Z),
        };
        Self {
            normal,
            right,
            down,
        }
    }
}

/// Returns the face whose outward normal is `normal`, or `None` if `normal`
/// is not a unit vector along a coordinate axis.
pub fn face_from_normal(normal: Vec3) -> Option<CubeFace> {
    CubeFace::ALL
        .into_iter()
        .find(|&face| FaceFrame::of(face).normal == normal)
}
