//! NxN cube notation.
//!
//! Token grammar: `[<layers>]<face>[w][<modifier>]`. A token containing `w` is
//! a wide move; the face is the character immediately before `w` and any
//! digits before the face give the layer count, which defaults to 2. Without
//! `w`, the face is the first character, unless the first character is a
//! digit, in which case the face is the second character and the digit is
//! ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr};

use crate::common::split_first_char;
use crate::{Modifier, MoveToken, ParseError, ParseErrorKind};

/// Face of a cube.
///
/// The discriminant is the index used for facelet storage: `U`=0, `F`=1,
/// `R`=2, `B`=3, `L`=4, `D`=5.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, FromRepr,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[repr(u8)]
pub enum CubeFace {
    /// Up
    U = 0,
    /// Front
    F = 1,
    /// Right
    R = 2,
    /// Back
    B = 3,
    /// Left
    L = 4,
    /// Down
    D = 5,
}

impl CubeFace {
    /// All faces, in index order.
    pub const ALL: [CubeFace; 6] = [Self::U, Self::F, Self::R, Self::B, Self::L, Self::D];

    /// Returns the storage index of the face.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the face on the other side of the cube.
    pub fn opposite(self) -> Self {
        match self {
            CubeFace::U => CubeFace::D,
            CubeFace::F => CubeFace::B,
            CubeFace::R => CubeFace::L,
            CubeFace::B => CubeFace::F,
            CubeFace::L => CubeFace::R,
            CubeFace::D => CubeFace::U,
        }
    }

    /// Returns the letter used for the face in notation.
    pub fn letter(self) -> char {
        match self {
            CubeFace::U => 'U',
            CubeFace::F => 'F',
            CubeFace::R => 'R',
            CubeFace::B => 'B',
            CubeFace::L => 'L',
            CubeFace::D => 'D',
        }
    }

    /// Returns the face for a notation letter, or `None` if the letter is not
    /// a face.
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'U' => Some(CubeFace::U),
            'F' => Some(CubeFace::F),
            'R' => Some(CubeFace::R),
            'B' => Some(CubeFace::B),
            'L' => Some(CubeFace::L),
            'D' => Some(CubeFace::D),
            _ => None,
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Move on an NxN cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct CubeMove {
    /// Face to turn.
    pub face: CubeFace,
    /// Number of layers to turn, counting from the face. Always at least 1.
    #[cfg_attr(test, proptest(strategy = "1..=6_u16"))]
    pub layers: u16,
    /// Direction and amount.
    pub modifier: Modifier,
}

impl CubeMove {
    /// Constructs a move of the outermost layer.
    pub fn new(face: CubeFace, modifier: Modifier) -> Self {
        Self {
            face,
            layers: 1,
            modifier,
        }
    }

    /// Constructs a wide move of `layers` layers.
    pub fn wide(face: CubeFace, layers: u16, modifier: Modifier) -> Self {
        Self {
            face,
            layers: layers.max(1),
            modifier,
        }
    }

    /// Returns whether the move turns more than one layer.
    pub fn is_wide(self) -> bool {
        self.layers > 1
    }
}

impl fmt::Display for CubeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            face,
            layers,
            modifier,
        } = self;
        match layers {
            0 | 1 => write!(f, "{face}{modifier}"),
            2 => write!(f, "{face}w{modifier}"),
            n => write!(f, "{n}{face}w{modifier}"),
        }
    }
}

impl FromStr for CubeMove {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |kind| ParseError::new(s, kind);

        if s.is_empty() {
            return Err(err(ParseErrorKind::Empty));
        }

        let (face_char, layers, modifier) = match s.find('w') {
            Some(w) => {
                let before_w = &s[..w];
                let face_char = before_w
                    .chars()
                    .next_back()
                    .ok_or_else(|| err(ParseErrorKind::UnknownFace(String::new())))?;
                let prefix = &before_w[..before_w.len() - face_char.len_utf8()];
                let layers = if prefix.is_empty() {
                    2
                } else if prefix.bytes().all(|b| b.is_ascii_digit()) {
                    prefix
                        .parse::<u16>()
                        .map_err(|_| err(ParseErrorKind::BadLayerCount(prefix.to_owned())))?
                        .max(1)
                } else {
                    return Err(err(ParseErrorKind::BadLayerCount(prefix.to_owned())));
                };
                (face_char, layers, &s[w + 1..])
            }
            None => {
                let (first, rest) =
                    split_first_char(s).ok_or_else(|| err(ParseErrorKind::Empty))?;
                if first.is_ascii_digit() {
                    // Layer prefix without `w` is reserved.
                    let (second, rest) = split_first_char(rest)
                        .ok_or_else(|| err(ParseErrorKind::UnknownFace(String::new())))?;
                    (second, 1, rest)
                } else {
                    (first, 1, rest)
                }
            }
        };

        let face = CubeFace::from_letter(face_char)
            .ok_or_else(|| err(ParseErrorKind::UnknownFace(face_char.to_string())))?;
        let modifier = modifier.parse().map_err(err)?;

        Ok(Self {
            face,
            layers,
            modifier,
        })
    }
}

impl MoveToken for CubeMove {
    fn inv(&self) -> Self {
        Self {
            modifier: self.modifier.inv(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ParseMode, parse_alg};

    fn mv(face: CubeFace, layers: u16, modifier: Modifier) -> CubeMove {
        CubeMove {
            face,
            layers,
            modifier,
        }
    }

    #[test]
    fn test_parse_simple_moves() {
        use Modifier::*;

        assert_eq!(Ok(mv(CubeFace::R, 1, Clockwise)), "R".parse());
        assert_eq!(Ok(mv(CubeFace::U, 1, CounterClockwise)), "U'".parse());
        assert_eq!(Ok(mv(CubeFace::F, 1, Double)), "F2".parse());
        assert_eq!(Ok(mv(CubeFace::D, 1, Double)), "D2'".parse());
    }

    #[test]
    fn test_parse_wide_moves() {
        use Modifier::*;

        assert_eq!(Ok(mv(CubeFace::R, 2, Clockwise)), "Rw".parse());
        assert_eq!(Ok(mv(CubeFace::U, 2, CounterClockwise)), "Uw'".parse());
        assert_eq!(Ok(mv(CubeFace::B, 3, Double)), "3Bw2".parse());
        assert_eq!(Ok(mv(CubeFace::L, 1, Clockwise)), "1Lw".parse());
        assert_eq!(Ok(mv(CubeFace::F, 12, CounterClockwise)), "12Fw'".parse());
    }

    #[test]
    fn test_parse_digit_without_w() {
        assert_eq!(
            Ok(mv(CubeFace::R, 1, Modifier::CounterClockwise)),
            "2R'".parse(),
        );
    }

    #[test]
    fn test_parse_errors() {
        let kind = |s: &str| s.parse::<CubeMove>().map_err(|e| e.kind);

        assert_eq!(Err(ParseErrorKind::Empty), kind(""));
        assert_eq!(Err(ParseErrorKind::UnknownFace("x".to_owned())), kind("x"));
        assert_eq!(Err(ParseErrorKind::UnknownFace("M".to_owned())), kind("M2"));
        assert_eq!(Err(ParseErrorKind::UnknownFace("r".to_owned())), kind("r"));
        assert_eq!(Err(ParseErrorKind::UnknownFace(String::new())), kind("w"));
        assert_eq!(
            Err(ParseErrorKind::UnknownModifier("3".to_owned())),
            kind("R3"),
        );
        assert_eq!(Err(ParseErrorKind::BadLayerCount("x".to_owned())), kind("xRw"));
        assert_eq!(Err(ParseErrorKind::BadLayerCount("+2".to_owned())), kind("+2Rw"));
        assert_eq!(Err(ParseErrorKind::BadLayerCount("-2".to_owned())), kind("-2Rw"));
    }

    #[test]
    fn test_lenient_alg_skips_bad_tokens() {
        let moves = parse_alg::<CubeMove>("R M U' x2 F2", ParseMode::Lenient).unwrap();
        assert_eq!(crate::alg_to_string(&moves), "R U' F2");

        let err = parse_alg::<CubeMove>("R M U'", ParseMode::Strict).unwrap_err();
        assert_eq!(err.token, "M");
    }

    #[test]
    fn test_display() {
        assert_eq!("R", mv(CubeFace::R, 1, Modifier::Clockwise).to_string());
        assert_eq!("Uw'", mv(CubeFace::U, 2, Modifier::CounterClockwise).to_string());
        assert_eq!("3Fw2", mv(CubeFace::F, 3, Modifier::Double).to_string());
    }

    #[test]
    fn test_opposite_faces() {
        for face in CubeFace::ALL {
            assert_ne!(face, face.opposite());
            assert_eq!(face, face.opposite().opposite());
            assert_eq!(Some(face), CubeFace::from_repr(face.index() as u8));
        }
    }
}
