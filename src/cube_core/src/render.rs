//! Text output: the flat 54-character string and the unfolded diagram.

use std::fmt;

use itertools::Itertools;

use crate::facelet::{Face, FaceletState};

const BORDER: &str = "------------------------------------------------------";
/// Lines U, B and D up with F in the middle strip.
const INDENT: &str = "            ";

impl FaceletState {
    /// All 54 facelets in block order, one character each.
    pub fn flat_string(&self) -> String {
        self.facelets().iter().map(|facelet| facelet.symbol()).collect()
    }

    /// Displays the cube unfolded into a cross: U on top, then L F R side by
    /// side, then B, then D.
    pub fn diagram(&self) -> Diagram<'_> {
        Diagram(self)
    }

    pub fn unfolded_diagram(&self) -> String {
        self.diagram().to_string()
    }
}

impl fmt::Display for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for facelet in self.facelets() {
            write!(f, "{facelet}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FaceletState")
            .field(&format_args!("{self}"))
            .finish()
    }
}

pub struct Diagram<'a>(&'a FaceletState);

impl Diagram<'_> {
    fn row(&self, face: Face, row: usize) -> String {
        format!("|{}|", self.0.face(face)[row * 3..row * 3 + 3].iter().join("   "))
    }

    fn write_lone_face(&self, f: &mut fmt::Formatter<'_>, face: Face) -> fmt::Result {
        for row in 0..3 {
            writeln!(f, "{INDENT}{}", self.row(face, row))?;
        }
        writeln!(f, "{BORDER}")
    }
}

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BORDER}")?;
        self.write_lone_face(f, Face::U)?;

        for row in 0..3 {
            writeln!(
                f,
                "{} {} {}",
                self.row(Face::L, row),
                self.row(Face::F, row),
                self.row(Face::R, row)
            )?;
        }
        writeln!(f, "{BORDER}")?;

        self.write_lone_face(f, Face::B)?;

        for row in 0..3 {
            writeln!(f, "{INDENT}{}", self.row(Face::D, row))?;
        }
        write!(f, "{BORDER}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::notation::Modifier;

    #[test]
    fn test_flat_string() {
        let mut cube = FaceletState::solved();
        assert_eq!(
            cube.flat_string(),
            "BBBBBBBBBLLLLLLLLLUUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDD"
        );
        cube.apply_move(Face::R, Modifier::Clockwise);
        assert_eq!(cube.flat_string(), cube.to_string());
        assert_eq!(cube.flat_string().len(), 54);
    }

    #[test]
    fn test_solved_diagram() {
        let expected = "\
------------------------------------------------------
            |B   B   B|
            |B   B   B|
            |B   B   B|
------------------------------------------------------
|L   L   L| |U   U   U| |R   R   R|
|L   L   L| |U   U   U| |R   R   R|
|L   L   L| |U   U   U| |R   R   R|
------------------------------------------------------
            |F   F   F|
            |F   F   F|
            |F   F   F|
------------------------------------------------------
            |D   D   D|
            |D   D   D|
            |D   D   D|
------------------------------------------------------";
        assert_eq!(FaceletState::solved().unfolded_diagram(), expected);
    }

    #[test]
    fn test_diagram_after_front_turn() {
        let mut cube = FaceletState::solved();
        cube.rotate_face_clockwise(Face::F);
        let expected = "\
------------------------------------------------------
            |B   B   B|
            |B   B   B|
            |L   L   L|
------------------------------------------------------
|L   L   D| |U   U   U| |B   R   R|
|L   L   D| |U   U   U| |B   R   R|
|L   L   D| |U   U   U| |B   R   R|
------------------------------------------------------
            |F   F   F|
            |F   F   F|
            |F   F   F|
------------------------------------------------------
            |R   R   R|
            |D   D   D|
            |D   D   D|
------------------------------------------------------";
        assert_eq!(format!("{}", cube.diagram()), expected);
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", FaceletState::solved()),
            "FaceletState(BBBBBBBBBLLLLLLLLLUUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDD)"
        );
    }
}
