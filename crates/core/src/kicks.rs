//! Wall-kick tables (SRS).
//!
//! Offsets are `(dx, dy)` in playfield coordinates, where `dy` grows
//! downward. Each transition lists five candidates tried in order; the first
//! is always the plain rotation.
//!
//! Transition index is `from * 2 + d` with `d = 0` for clockwise and `d = 1`
//! for counter-clockwise:
//!
//! | index | transition |
//! |-------|------------|
//! | 0 | N -> E |
//! | 1 | N -> W |
//! | 2 | E -> S |
//! | 3 | E -> N |
//! | 4 | S -> W |
//! | 5 | S -> E |
//! | 6 | W -> N |
//! | 7 | W -> S |

use crate::types::{Direction, Rotation, Shape};

/// Candidate offset for one kick attempt.
pub type Kick = (i8, i8);

/// Five candidates per transition, eight transitions.
pub type KickTable = [[Kick; 5]; 8];

/// Kicks shared by T, S, Z, J and L.
pub const JLSTZ_KICKS: KickTable = [
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// Kicks for the I piece.
///
/// Unlike the JLSTZ table, the rows for `A -> B` and `B -> A` are not
/// negations of each other.
pub const I_KICKS: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (1, -2), (-2, 1)],
    [(0, 0), (2, 0), (-1, 0), (-1, -2), (2, 1)],
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 1)],
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 1)],
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

/// Index of the transition leaving `from` in `direction`.
#[inline]
pub fn transition_index(from: Rotation, direction: Direction) -> usize {
    let d = match direction {
        Direction::Clockwise => 0,
        Direction::CounterClockwise => 1,
    };
    from.index() * 2 + d
}

/// Kick table for a piece family. The O piece never rotates, so it has none.
pub fn kick_table(shape: Shape) -> Option<&'static KickTable> {
    match shape {
        Shape::O => None,
        Shape::I => Some(&I_KICKS),
        Shape::T | Shape::S | Shape::Z | Shape::J | Shape::L => Some(&JLSTZ_KICKS),
    }
}

/// Ordered candidates for rotating `shape` out of `from`.
pub fn kicks(shape: Shape, from: Rotation, direction: Direction) -> Option<&'static [Kick; 5]> {
    kick_table(shape).map(|table| &table[transition_index(from, direction)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_indices_cover_all_eight() {
        let mut seen = [false; 8];
        for r in 0..4 {
            for dir in [Direction::Clockwise, Direction::CounterClockwise] {
                seen[transition_index(Rotation::from_index(r), dir)] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn first_candidate_is_plain_rotation() {
        for table in [&JLSTZ_KICKS, &I_KICKS] {
            for row in table.iter() {
                assert_eq!(row[0], (0, 0));
            }
        }
    }

    #[test]
    fn jlstz_reverse_transitions_mirror_each_other() {
        // Kicking A->B then B->A with the same candidate must cancel out.
        for r in 0..4 {
            let from = Rotation::from_index(r);
            let to = from.rotate_cw();
            let fwd = JLSTZ_KICKS[transition_index(from, Direction::Clockwise)];
            let back = JLSTZ_KICKS[transition_index(to, Direction::CounterClockwise)];
            for (a, b) in fwd.iter().zip(back.iter()) {
                assert_eq!((a.0 + b.0, a.1 + b.1), (0, 0));
            }
        }
    }

    #[test]
    fn i_kick_candidate_order() {
        let north_cw = kicks(Shape::I, Rotation::North, Direction::Clockwise);
        assert_eq!(
            north_cw,
            Some(&[(0, 0), (-2, 0), (1, 0), (1, -2), (-2, 1)])
        );
        let west_ccw = kicks(Shape::I, Rotation::West, Direction::CounterClockwise);
        assert_eq!(
            west_ccw,
            Some(&[(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)])
        );
    }

    #[test]
    fn o_piece_has_no_kicks() {
        assert!(kicks(Shape::O, Rotation::North, Direction::Clockwise).is_none());
        assert!(kicks(Shape::T, Rotation::North, Direction::Clockwise).is_some());
    }
}
