//! Legality checks on a cube state.

use thiserror::Error;

use crate::facelet::{FACELETS_PER_FACE, Face, FaceletState};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Color {color} has {count} occurrences, expected 9")]
    ColorCount { color: Face, count: usize },
}

impl FaceletState {
    /// How many facelets show each color, indexed by [`Face::index`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for facelet in self.facelets() {
            counts[facelet.index()] += 1;
        }
        counts
    }

    /// # Errors
    ///
    /// Reports the first color, in block order, that does not appear exactly
    /// nine times.
    pub fn validate_color_counts(&self) -> Result<(), ValidationError> {
        let counts = self.color_counts();

        match Face::ALL
            .into_iter()
            .find(|color| counts[color.index()] != FACELETS_PER_FACE)
        {
            Some(color) => Err(ValidationError::ColorCount {
                color,
                count: counts[color.index()],
            }),
            None => Ok(()),
        }
    }

    /// The faces whose center does not show that face's identity color.
    pub fn misaligned_centers(&self) -> Vec<Face> {
        Face::ALL
            .into_iter()
            .filter(|&face| self.center(face) != face.identity_color())
            .collect()
    }

    /// Face turns never move centers, so this only fails for states that were
    /// not reached by turning a solved cube.
    pub fn check_centers_aligned(&self) -> bool {
        Face::ALL
            .into_iter()
            .all(|face| self.center(face) == face.identity_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_is_valid() {
        let cube = FaceletState::solved();
        assert_eq!(cube.validate_color_counts(), Ok(()));
        assert_eq!(cube.color_counts(), [9; 6]);
        assert!(cube.check_centers_aligned());
        assert!(cube.misaligned_centers().is_empty());
    }

    #[test]
    fn test_swapped_centers() {
        // Legal counts, but the U and L centers have traded places.
        let cube: FaceletState = "BBBBLBBBBLLLLBLLLLUUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDD"
            .parse()
            .unwrap();
        assert_eq!(cube.validate_color_counts(), Ok(()));
        assert!(!cube.check_centers_aligned());
        assert_eq!(cube.misaligned_centers(), vec![Face::U, Face::L]);
    }

    #[test]
    fn test_error_message() {
        let error = ValidationError::ColorCount {
            color: Face::R,
            count: 8,
        };
        assert_eq!(
            error.to_string(),
            "Color R has 8 occurrences, expected 9"
        );
    }
}
