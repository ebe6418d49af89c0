//! Shape table tests

use term_tetris::core::shapes::{minos, SHAPE_TABLE};
use term_tetris::core::occupancy;
use term_tetris::types::{Rotation, Shape};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn test_every_entry_has_four_cells() {
    for shape in Shape::ALL {
        for rotation in ROTATIONS {
            let bitmap = occupancy(shape, rotation);
            assert_eq!(
                bitmap.count_ones(),
                4,
                "{:?} {:?} has {:#06x}",
                shape,
                rotation,
                bitmap
            );
            assert_eq!(minos(bitmap).count(), 4);
        }
    }
}

#[test]
fn test_table_is_indexed_by_shape_then_rotation() {
    for shape in Shape::ALL {
        for rotation in ROTATIONS {
            assert_eq!(
                SHAPE_TABLE[shape.index()][rotation.index()],
                occupancy(shape, rotation)
            );
        }
    }
}

#[test]
fn test_o_is_rotation_invariant() {
    let north = occupancy(Shape::O, Rotation::North);
    for rotation in ROTATIONS {
        assert_eq!(occupancy(Shape::O, rotation), north);
    }
}

#[test]
fn test_i_spawn_is_a_horizontal_bar_in_box_row_one() {
    let cells: Vec<_> = minos(occupancy(Shape::I, Rotation::North)).collect();
    assert_eq!(cells, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
}

#[test]
fn test_cells_stay_inside_the_box() {
    for shape in Shape::ALL {
        for rotation in ROTATIONS {
            for (x, y) in minos(occupancy(shape, rotation)) {
                assert!((0..4).contains(&x) && (0..4).contains(&y));
            }
        }
    }
}
