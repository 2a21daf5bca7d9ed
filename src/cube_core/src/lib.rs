//! A 3x3x3 cube modelled as 54 colored facelets.
//!
//! [`FaceletState`] holds the colors, [`moves`] turns faces, [`notation`]
//! parses and prints move tokens, [`ScrambleGenerator`] produces random move
//! sequences, and the [`validate`] and [`render`] modules check and display a
//! state.

#![warn(clippy::pedantic)]

pub mod facelet;
pub mod moves;
pub mod notation;
pub mod render;
pub mod scramble;
pub mod validate;

#[cfg(test)]
mod tests;

pub use facelet::{Face, FaceletState, ParseStateError};
pub use notation::{Modifier, Move, MoveParseError, format_sequence, invert_sequence, parse_sequence};
pub use render::Diagram;
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, ScrambleGenerator};
pub use validate::ValidationError;
