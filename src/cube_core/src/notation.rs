//! Move tokens: a face letter followed by nothing, `2`, or `'`.

use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::facelet::Face;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Modifier {
    Clockwise,
    Half,
    CounterClockwise,
}

impl Modifier {
    pub const ALL: [Self; 3] = [
        Modifier::Clockwise,
        Modifier::Half,
        Modifier::CounterClockwise,
    ];

    /// How many clockwise quarter-turns this modifier stands for.
    pub const fn turns(self) -> u8 {
        match self {
            Modifier::Clockwise => 1,
            Modifier::Half => 2,
            Modifier::CounterClockwise => 3,
        }
    }

    pub const fn inverse(self) -> Modifier {
        match self {
            Modifier::Clockwise => Modifier::CounterClockwise,
            Modifier::Half => Modifier::Half,
            Modifier::CounterClockwise => Modifier::Clockwise,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Modifier::Clockwise => "",
            Modifier::Half => "2",
            Modifier::CounterClockwise => "'",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Move {
    pub face: Face,
    pub modifier: Modifier,
}

impl Move {
    /// All 18 legal moves, grouped by face.
    pub const ALL: [Self; 18] = {
        let mut moves = [Move::new(Face::U, Modifier::Clockwise); 18];

        let mut i = 0;
        while i < moves.len() {
            moves[i] = Move::new(Face::ALL[i / 3], Modifier::ALL[i % 3]);
            i += 1;
        }

        moves
    };

    pub const fn new(face: Face, modifier: Modifier) -> Move {
        Move { face, modifier }
    }

    /// The move that undoes this one.
    pub const fn inverse(self) -> Move {
        Move::new(self.face, self.modifier.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.modifier.suffix())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Empty move token")]
    Empty,
    #[error("Invalid move `{token}`: `{face}` is not one of U, L, F, R, B, D")]
    UnknownFace { token: String, face: char },
    #[error("Invalid move `{token}`: a move may only end in `2` or `'`")]
    UnknownModifier { token: String },
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(symbol) = chars.next() else {
            return Err(MoveParseError::Empty);
        };

        let face = Face::from_symbol(symbol).ok_or_else(|| MoveParseError::UnknownFace {
            token: s.to_owned(),
            face: symbol,
        })?;

        let modifier = match chars.as_str() {
            "" => Modifier::Clockwise,
            "2" => Modifier::Half,
            "'" => Modifier::CounterClockwise,
            _ => {
                return Err(MoveParseError::UnknownModifier {
                    token: s.to_owned(),
                });
            }
        };

        Ok(Move { face, modifier })
    }
}

/// Parses whitespace-separated move tokens, e.g. `"R U' F2"`.
///
/// # Errors
///
/// Returns the error of the first token that is not one of the 18 moves.
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, MoveParseError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Reverses `moves` and inverts each of them, so that applying a sequence
/// followed by its inverse leaves the cube unchanged.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|move_| move_.inverse()).collect()
}

pub fn format_sequence(moves: &[Move]) -> String {
    moves.iter().join(" ")
}
