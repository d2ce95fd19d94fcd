use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use twistysim_notation::CubeFace;

/// Sticker color.
///
/// Every puzzle uses the standard WCA color scheme.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl Color {
    /// Returns the single-letter abbreviation used in text output.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    /// Returns the color of a cube face in the solved state.
    pub fn of_cube_face(face: CubeFace) -> Self {
        match face {
            CubeFace::U => Color::White,
            CubeFace::F => Color::Green,
            CubeFace::R => Color::Red,
            CubeFace::B => Color::Blue,
            CubeFace::L => Color::Orange,
            CubeFace::D => Color::Yellow,
        }
    }
}
