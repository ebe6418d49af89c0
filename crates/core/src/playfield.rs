//! Playfield - the grid of locked cells
//!
//! 10 columns by 40 rows, stored as a flat row-major array. Rows
//! `0..VISIBLE_TOP` form the hidden buffer; pieces spawn there and a lock that
//! leaves anything in it ends the game.
//! Coordinates are `(x, y)` with x growing right and y growing down.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::shapes::{minos, Bitmap};
use crate::types::{Cell, Shape, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, VISIBLE_TOP};

const WIDTH: usize = PLAYFIELD_WIDTH as usize;
const HEIGHT: usize = PLAYFIELD_HEIGHT as usize;
const SIZE: usize = WIDTH * HEIGHT;

/// Most rows a single lock can clear.
pub const MAX_CLEARED_ROWS: usize = 4;

/// Grid of locked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfield {
    cells: [Cell; SIZE],
}

impl Playfield {
    pub fn new() -> Self {
        Self { cells: [None; SIZE] }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= PLAYFIELD_WIDTH as i8 || y < 0 || y >= PLAYFIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        PLAYFIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        PLAYFIELD_HEIGHT
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Overwrite a cell. Returns false if out of bounds.
    ///
    /// Gameplay only fills cells through [`Playfield::lock`]; this exists for
    /// building positions in tests and tools.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// One row of cells. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Would a bitmap placed with its box origin at `(x, y)` collide?
    ///
    /// A cell blocks when it is left or right of the walls, below the floor,
    /// or on a filled cell. Cells above row 0 never block.
    pub fn collides(&self, bitmap: Bitmap, x: i8, y: i8) -> bool {
        minos(bitmap).any(|(mx, my)| {
            let px = x + mx;
            let py = y + my;
            if px < 0 || px >= PLAYFIELD_WIDTH as i8 || py >= PLAYFIELD_HEIGHT as i8 {
                return true;
            }
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Write a piece's cells into the grid, tagged with its shape.
    ///
    /// Cells outside the grid (above row 0) are dropped.
    pub fn lock(&mut self, piece: &Piece) {
        self.lock_bitmap(piece.bitmap(), piece.x, piece.y, piece.shape);
    }

    fn lock_bitmap(&mut self, bitmap: Bitmap, x: i8, y: i8, shape: Shape) {
        for (mx, my) in minos(bitmap) {
            self.set(x + mx, y + my, Some(shape));
        }
    }

    /// True when any buffer row holds a locked cell.
    pub fn is_overflowing(&self) -> bool {
        self.cells[..VISIBLE_TOP as usize * WIDTH]
            .iter()
            .any(|cell| cell.is_some())
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        y < HEIGHT && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Shift every row above `y` down by one, overwriting row `y`, and empty row 0.
    fn collapse_row(&mut self, y: usize) {
        self.cells.copy_within(0..y * WIDTH, WIDTH);
        self.cells[..WIDTH].fill(None);
    }

    /// Clear full visible rows, compacting the stack after each one.
    ///
    /// Rows are scanned bottom to top. After a clear the same index is checked
    /// again since a new row has moved into it. Returns the cleared rows'
    /// indices as they were before the call, bottom first.
    ///
    /// # Panics
    ///
    /// Panics if more than four rows clear at once. A single piece spans at
    /// most four rows, so that only happens when the grid is already
    /// inconsistent.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared = ArrayVec::new();
        let mut y = HEIGHT - 1;

        while y >= VISIBLE_TOP as usize {
            if self.is_row_full(y) {
                // Rows above y have already dropped once per earlier clear.
                let original = y - cleared.len();
                if cleared.try_push(original).is_err() {
                    panic!(
                        "more than {} rows cleared by a single lock (row {})",
                        MAX_CLEARED_ROWS, original
                    );
                }
                self.collapse_row(y);
            } else {
                y -= 1;
            }
        }

        cleared
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::occupancy;
    use crate::types::{Rotation, VISIBLE_HEIGHT};

    const BOTTOM: i8 = PLAYFIELD_HEIGHT as i8 - 1;

    fn fill_row(field: &mut Playfield, y: i8, shape: Shape) {
        for x in 0..PLAYFIELD_WIDTH as i8 {
            field.set(x, y, Some(shape));
        }
    }

    #[test]
    fn index_calculation() {
        assert_eq!(Playfield::index(0, 0), Some(0));
        assert_eq!(Playfield::index(9, 0), Some(9));
        assert_eq!(Playfield::index(0, 1), Some(10));
        assert_eq!(Playfield::index(9, 39), Some(399));
        assert_eq!(Playfield::index(-1, 0), None);
        assert_eq!(Playfield::index(10, 0), None);
        assert_eq!(Playfield::index(0, 40), None);
    }

    #[test]
    fn collides_ignores_rows_above_grid() {
        let field = Playfield::new();
        let i = occupancy(Shape::I, Rotation::East);
        // Vertical I with three cells above row 0.
        assert!(!field.collides(i, 3, -3));
    }

    #[test]
    fn collides_with_walls_floor_and_stack() {
        let mut field = Playfield::new();
        let o = occupancy(Shape::O, Rotation::North);
        // O occupies box columns 1..=2.
        assert!(field.collides(o, -2, 10));
        assert!(!field.collides(o, -1, 10));
        assert!(field.collides(o, 8, 10));
        assert!(field.collides(o, 3, BOTTOM));
        assert!(!field.collides(o, 3, BOTTOM - 1));

        field.set(4, 11, Some(Shape::T));
        assert!(field.collides(o, 3, 10));
    }

    #[test]
    fn overflow_only_looks_at_buffer() {
        let mut field = Playfield::new();
        field.set(0, VISIBLE_TOP as i8, Some(Shape::L));
        assert!(!field.is_overflowing());
        field.set(9, VISIBLE_TOP as i8 - 1, Some(Shape::L));
        assert!(field.is_overflowing());
    }

    #[test]
    fn clears_stacked_rows_and_reports_original_indices() {
        let mut field = Playfield::new();
        fill_row(&mut field, BOTTOM, Shape::I);
        fill_row(&mut field, BOTTOM - 2, Shape::I);
        field.set(0, BOTTOM - 1, Some(Shape::T));
        field.set(5, BOTTOM - 3, Some(Shape::Z));

        let cleared = field.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[BOTTOM as usize, BOTTOM as usize - 2]);

        assert_eq!(field.get(0, BOTTOM), Some(Some(Shape::T)));
        assert_eq!(field.get(5, BOTTOM - 1), Some(Some(Shape::Z)));
        assert!(!field.is_row_full(BOTTOM as usize));
    }

    #[test]
    #[should_panic(expected = "more than 4 rows")]
    fn five_full_rows_is_fatal() {
        let mut field = Playfield::new();
        for dy in 0..5 {
            fill_row(&mut field, BOTTOM - dy, Shape::O);
        }
        field.clear_full_rows();
    }

    #[test]
    fn buffer_rows_are_not_scanned_for_clears() {
        let mut field = Playfield::new();
        fill_row(&mut field, VISIBLE_TOP as i8 - 1, Shape::J);
        assert!(field.clear_full_rows().is_empty());
        assert_eq!(VISIBLE_HEIGHT as usize + VISIBLE_TOP as usize, HEIGHT);
    }
}
