//! Shape table - 4x4 occupancy bitmaps for every (shape, rotation)
//!
//! A bitmap is read row-major from the most significant bit: bit 15 is
//! row 0 / column 0 and bit 0 is row 3 / column 3, so each nibble written
//! below is one row of the bounding box, top row first. Geometry follows the
//! Super Rotation System spawn states, which the kick data in
//! [`crate::kicks`] assumes.

use crate::types::{Rotation, Shape};

/// 16-bit occupancy of a 4x4 bounding box.
pub type Bitmap = u16;

/// Occupancy bitmaps indexed by `[shape][rotation]`.
pub const SHAPE_TABLE: [[Bitmap; 4]; 7] = [
    // I
    [
        0b0000_1111_0000_0000,
        0b0010_0010_0010_0010,
        0b0000_0000_1111_0000,
        0b0100_0100_0100_0100,
    ],
    // O
    [
        0b0110_0110_0000_0000,
        0b0110_0110_0000_0000,
        0b0110_0110_0000_0000,
        0b0110_0110_0000_0000,
    ],
    // T
    [
        0b0100_1110_0000_0000,
        0b0100_0110_0100_0000,
        0b0000_1110_0100_0000,
        0b0100_1100_0100_0000,
    ],
    // S
    [
        0b0110_1100_0000_0000,
        0b0100_0110_0010_0000,
        0b0000_0110_1100_0000,
        0b1000_1100_0100_0000,
    ],
    // Z
    [
        0b1100_0110_0000_0000,
        0b0010_0110_0100_0000,
        0b0000_1100_0110_0000,
        0b0100_1100_1000_0000,
    ],
    // J
    [
        0b1000_1110_0000_0000,
        0b0110_0100_0100_0000,
        0b0000_1110_0010_0000,
        0b0100_0100_1100_0000,
    ],
    // L
    [
        0b0010_1110_0000_0000,
        0b0100_0100_0110_0000,
        0b0000_1110_1000_0000,
        0b1100_0100_0100_0000,
    ],
];

/// Occupancy bitmap for a shape in a rotation state.
#[inline]
pub fn occupancy(shape: Shape, rotation: Rotation) -> Bitmap {
    SHAPE_TABLE[shape.index()][rotation.index()]
}

/// Local `(column, row)` of every set cell in a bitmap, top row first.
pub fn minos(bitmap: Bitmap) -> impl Iterator<Item = (i8, i8)> {
    (0..16u8)
        .filter(move |i| (bitmap >> (15 - i)) & 1 == 1)
        .map(|i| ((i % 4) as i8, (i / 4) as i8))
}
