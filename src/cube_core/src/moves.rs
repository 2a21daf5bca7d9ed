//! The move engine: the permutation performed by a clockwise quarter-turn of
//! each face, and the moves built out of quarter-turns.

use log::trace;

use crate::{
    facelet::{FACELET_COUNT, FACELETS_PER_FACE, Face, FaceletState},
    notation::{Modifier, Move},
};

/// New position `i` of a turned face takes the old value at `ROTATION_MAP[i]`.
const ROTATION_MAP: [usize; FACELETS_PER_FACE] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Three facelet positions on one neighboring face.
type EdgeTriple = (Face, [usize; 3]);

/// For each face, the rows and columns of its four neighbors that travel with
/// it. A clockwise turn moves the values of each triple into the next one, and
/// the values of the last triple into the first. Positions are matched in
/// order: element `j` of one triple feeds element `j` of the next.
const ADJACENT_EDGES: [[EdgeTriple; 4]; 6] = {
    use Face::{B, D, F, L, R, U};

    [
        // U
        [(B, [0, 1, 2]), (R, [0, 1, 2]), (F, [0, 1, 2]), (L, [0, 1, 2])],
        // L
        [(U, [0, 3, 6]), (F, [0, 3, 6]), (D, [0, 3, 6]), (B, [8, 5, 2])],
        // F
        [(U, [6, 7, 8]), (R, [0, 3, 6]), (D, [2, 1, 0]), (L, [8, 5, 2])],
        // R
        [(U, [2, 5, 8]), (B, [0, 3, 6]), (D, [2, 5, 8]), (F, [2, 5, 8])],
        // B
        [(U, [0, 1, 2]), (L, [0, 3, 6]), (D, [8, 7, 6]), (R, [0, 3, 6])],
        // D
        [(F, [6, 7, 8]), (R, [6, 7, 8]), (B, [6, 7, 8]), (L, [6, 7, 8])],
    ]
};

/// Folds the face rotation and the edge cycle of `face` into a single
/// "comes-from" table over all 54 facelets.
const fn quarter_turn(face: Face) -> [usize; FACELET_COUNT] {
    let mut table = [0; FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        table[i] = i;
        i += 1;
    }

    let mut i = 0;
    while i < FACELETS_PER_FACE {
        table[face.facelet(i)] = face.facelet(ROTATION_MAP[i]);
        i += 1;
    }

    let cycle = &ADJACENT_EDGES[face.index()];
    let mut k = 0;
    while k < cycle.len() {
        let (from_face, from_positions) = cycle[k];
        let (to_face, to_positions) = cycle[(k + 1) % cycle.len()];
        assert!(from_face.index() != face.index());

        let mut j = 0;
        while j < 3 {
            table[to_face.facelet(to_positions[j])] = from_face.facelet(from_positions[j]);
            j += 1;
        }
        k += 1;
    }

    table
}

/// The clockwise quarter-turn of every face, indexed by face.
pub(crate) static QUARTER_TURNS: [[usize; FACELET_COUNT]; 6] = [
    quarter_turn(Face::U),
    quarter_turn(Face::L),
    quarter_turn(Face::F),
    quarter_turn(Face::R),
    quarter_turn(Face::B),
    quarter_turn(Face::D),
];

impl FaceletState {
    /// Turns `face` clockwise by 90 degrees, dragging the adjacent rows and
    /// columns of its four neighbors along with it.
    pub fn rotate_face_clockwise(&mut self, face: Face) {
        self.permute(&QUARTER_TURNS[face.index()]);
    }

    /// Turns `face` by `modifier`, as that many clockwise quarter-turns.
    pub fn apply_move(&mut self, face: Face, modifier: Modifier) {
        for _ in 0..modifier.turns() {
            self.rotate_face_clockwise(face);
        }
    }

    pub fn apply(&mut self, move_: Move) {
        trace!("Applying {move_}");
        self.apply_move(move_.face, move_.modifier);
    }

    pub fn apply_all<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &move_ in moves {
            self.apply(move_);
        }
    }
}
