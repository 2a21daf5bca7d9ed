//! The 54-facelet cube state and its indexing scheme.
//!
//! Facelets are stored in six blocks of nine, one block per face in the order
//! U, L, F, R, B, D. Inside a block, positions are numbered row-major as seen
//! when looking straight at that face:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! Position 4 is the center, which no face turn ever moves.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::validate::ValidationError;

pub const FACELET_COUNT: usize = 54;
pub const FACELETS_PER_FACE: usize = 9;
/// The position of the center facelet inside a face block.
pub const CENTER: usize = 4;

/// One of the six faces. The same symbols are used as facelet colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[repr(u8)]
pub enum Face {
    U,
    L,
    F,
    R,
    B,
    D,
}

/// The color each face block shows on a solved cube, indexed by face.
const SOLVED_COLORS: [Face; 6] = [Face::B, Face::L, Face::U, Face::R, Face::F, Face::D];

impl Face {
    /// Every face, in block order.
    pub const ALL: [Self; 6] = {
        use Face::{B, D, F, L, R, U};
        let v = [U, L, F, R, B, D];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The index of this face's block.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The linear index of `position` (0-8) inside this face's block.
    pub const fn facelet(self, position: usize) -> usize {
        self.index() * FACELETS_PER_FACE + position
    }

    pub const fn symbol(self) -> char {
        match self {
            Face::U => 'U',
            Face::L => 'L',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::D => 'D',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Face> {
        match symbol {
            'U' => Some(Face::U),
            'L' => Some(Face::L),
            'F' => Some(Face::F),
            'R' => Some(Face::R),
            'B' => Some(Face::B),
            'D' => Some(Face::D),
            _ => None,
        }
    }

    /// The color of this face's center, and of the whole face when solved.
    pub const fn identity_color(self) -> Face {
        SOLVED_COLORS[self.index()]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The colors of all 54 facelets.
///
/// There is no way to overwrite a single facelet: a state is either built
/// solved, parsed from a flat string whose color counts are legal, or changed
/// by face turns, all of which keep nine facelets of each color.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FaceletState {
    blocks: [[Face; FACELETS_PER_FACE]; 6],
}

impl FaceletState {
    pub fn solved() -> FaceletState {
        FaceletState {
            blocks: Face::ALL.map(|face| [face.identity_color(); FACELETS_PER_FACE]),
        }
    }

    /// All facelets in block order.
    pub fn facelets(&self) -> &[Face] {
        self.blocks.as_flattened()
    }

    pub fn get(&self, index: usize) -> Option<Face> {
        self.facelets().get(index).copied()
    }

    /// The nine facelets of `face` in row-major order.
    pub fn face(&self, face: Face) -> &[Face; FACELETS_PER_FACE] {
        &self.blocks[face.index()]
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    pub fn at(&self, face: Face, row: usize, col: usize) -> Face {
        assert!(row < 3 && col < 3, "({row}, {col}) is outside a 3x3 face");
        self.blocks[face.index()][row * 3 + col]
    }

    pub fn center(&self, face: Face) -> Face {
        self.blocks[face.index()][CENTER]
    }

    /// The center of every face, in block order.
    pub fn centers(&self) -> [Face; 6] {
        self.blocks.map(|block| block[CENTER])
    }

    /// Rearranges the facelets so that facelet `i` takes the old value at
    /// `comes_from[i]`. `comes_from` must be a permutation of `0..54`.
    pub(crate) fn permute(&mut self, comes_from: &[usize; FACELET_COUNT]) {
        let old = self.blocks;
        let old = old.as_flattened();

        for (facelet, &source) in self.blocks.as_flattened_mut().iter_mut().zip(comes_from) {
            *facelet = old[source];
        }
    }
}

impl Default for FaceletState {
    fn default() -> Self {
        FaceletState::solved()
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStateError {
    #[error("A cube state has 54 facelets, but {0} were given")]
    WrongLength(usize),
    #[error("Unknown facelet {symbol:?} at index {index}; expected one of U, L, F, R, B, D")]
    UnknownSymbol { index: usize, symbol: char },
    #[error(transparent)]
    ColorCount(#[from] ValidationError),
}

impl FromStr for FaceletState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != FACELET_COUNT {
            return Err(ParseStateError::WrongLength(length));
        }

        let mut blocks = [[Face::U; FACELETS_PER_FACE]; 6];
        for ((index, symbol), facelet) in s
            .chars()
            .enumerate()
            .zip(blocks.as_flattened_mut().iter_mut())
        {
            *facelet = Face::from_symbol(symbol)
                .ok_or(ParseStateError::UnknownSymbol { index, symbol })?;
        }

        let state = FaceletState { blocks };
        state.validate_color_counts()?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "BBBBBBBBBLLLLLLLLLUUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDD";

    #[test]
    fn test_face_indexing() {
        assert_eq!(Face::U.facelet(0), 0);
        assert_eq!(Face::F.facelet(4), 22);
        assert_eq!(Face::D.facelet(8), 53);
        for face in Face::ALL {
            assert_eq!(Face::from_symbol(face.symbol()), Some(face));
        }
        assert_eq!(Face::from_symbol('X'), None);
    }

    #[test]
    fn test_solved_layout() {
        let cube = FaceletState::solved();
        assert_eq!(cube.to_string(), SOLVED);
        assert_eq!(cube.centers(), [Face::B, Face::L, Face::U, Face::R, Face::F, Face::D]);
        assert_eq!(cube.face(Face::F), &[Face::U; 9]);
        assert_eq!(cube.at(Face::B, 2, 1), Face::F);
        assert_eq!(cube.get(53), Some(Face::D));
        assert_eq!(cube.get(54), None);
    }

    #[test]
    #[should_panic(expected = "outside a 3x3 face")]
    fn test_at_out_of_range() {
        FaceletState::solved().at(Face::U, 3, 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(SOLVED.parse::<FaceletState>(), Ok(FaceletState::solved()));
        assert_eq!(
            SOLVED[1..].parse::<FaceletState>(),
            Err(ParseStateError::WrongLength(53))
        );

        let mut unknown = SOLVED.to_owned();
        unknown.replace_range(10..11, "x");
        assert_eq!(
            unknown.parse::<FaceletState>(),
            Err(ParseStateError::UnknownSymbol {
                index: 10,
                symbol: 'x'
            })
        );

        let mut too_many_l = SOLVED.to_owned();
        too_many_l.replace_range(0..1, "L");
        assert_eq!(
            too_many_l.parse::<FaceletState>(),
            Err(ParseStateError::ColorCount(ValidationError::ColorCount {
                color: Face::L,
                count: 10
            }))
        );
    }

    #[test]
    fn test_permute_identity() {
        let mut cube = FaceletState::solved();
        let identity: [usize; FACELET_COUNT] = std::array::from_fn(|i| i);
        cube.permute(&identity);
        assert_eq!(cube, FaceletState::solved());
    }
}
