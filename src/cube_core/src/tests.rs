use proptest::prelude::*;

use crate::*;

fn move_sequence() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(any::<Move>(), 0..60)
}

fn scrambled(moves: &[Move]) -> FaceletState {
    let mut cube = FaceletState::solved();
    cube.apply_all(moves);
    cube
}

proptest! {
    #[test]
    fn proptest_colors_are_conserved(moves in move_sequence()) {
        let cube = scrambled(&moves);
        prop_assert_eq!(cube.validate_color_counts(), Ok(()));
        prop_assert_eq!(cube.color_counts(), [9; 6]);
    }

    #[test]
    fn proptest_centers_stay_put(moves in move_sequence()) {
        let cube = scrambled(&moves);
        prop_assert!(cube.check_centers_aligned());
        prop_assert_eq!(cube.centers(), FaceletState::solved().centers());
    }

    #[test]
    fn proptest_four_quarter_turns_are_identity(moves in move_sequence(), face in any::<Face>()) {
        let start = scrambled(&moves);
        let mut cube = start.clone();
        for _ in 0..4 {
            cube.rotate_face_clockwise(face);
        }
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn proptest_modifiers_are_repeated_quarter_turns(
        moves in move_sequence(),
        face in any::<Face>(),
        modifier in any::<Modifier>()
    ) {
        let mut expected = scrambled(&moves);
        let mut cube = expected.clone();
        for _ in 0..modifier.turns() {
            expected.rotate_face_clockwise(face);
        }
        cube.apply_move(face, modifier);
        prop_assert_eq!(cube, expected);
    }

    #[test]
    fn proptest_inverse_sequence_undoes(setup in move_sequence(), moves in move_sequence()) {
        let start = scrambled(&setup);
        let mut cube = start.clone();
        cube.apply_all(&moves);
        cube.apply_all(&invert_sequence(&moves));
        prop_assert_eq!(cube, start);
    }

    #[test]
    fn proptest_move_roundtrip(move_ in any::<Move>()) {
        prop_assert_eq!(move_.to_string().parse::<Move>(), Ok(move_));
    }

    #[test]
    fn proptest_sequence_roundtrip(moves in move_sequence()) {
        prop_assert_eq!(parse_sequence(&format_sequence(&moves)), Ok(moves));
    }

    #[test]
    fn proptest_flat_string_roundtrip(moves in move_sequence()) {
        let cube = scrambled(&moves);
        prop_assert_eq!(cube.flat_string().parse::<FaceletState>(), Ok(cube));
    }
}
