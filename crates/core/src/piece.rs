//! Active piece - the falling piece and its moves
//!
//! The piece's origin is the top-left corner of its 4x4 bounding box and may
//! sit above the grid (negative row) or left of it. Its bitmap always matches
//! the shape table for its current rotation.

use crate::kicks::{kicks, Kick};
use crate::playfield::Playfield;
use crate::shapes::{minos, occupancy, Bitmap};
use crate::types::{Direction, Rotation, Shape, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    rotation: Rotation,
    bitmap: Bitmap,
    /// Cleared once the piece has stopped and is waiting to lock.
    pub falling: bool,
}

impl Piece {
    /// New piece at the spawn position in rotation 0.
    pub fn spawn(shape: Shape) -> Self {
        Self::new(shape, SPAWN_X, SPAWN_Y, Rotation::North)
    }

    pub fn new(shape: Shape, x: i8, y: i8, rotation: Rotation) -> Self {
        Self {
            shape,
            x,
            y,
            rotation,
            bitmap: occupancy(shape, rotation),
            falling: true,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn bitmap(&self) -> Bitmap {
        self.bitmap
    }

    /// Absolute `(x, y)` of each of the four cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        minos(self.bitmap).map(move |(mx, my)| (self.x + mx, self.y + my))
    }

    /// Does the piece overlap the walls, floor, or stack where it stands?
    pub fn collides(&self, field: &Playfield) -> bool {
        field.collides(self.bitmap, self.x, self.y)
    }

    /// Translate by `(dx, dy)` if the target position is free.
    ///
    /// Leaves the piece untouched and returns false when blocked.
    pub fn try_move(&mut self, field: &Playfield, dx: i8, dy: i8) -> bool {
        if field.collides(self.bitmap, self.x + dx, self.y + dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate with wall kicks. Returns false, unchanged, when every candidate collides.
    pub fn try_rotate(&mut self, field: &Playfield, direction: Direction) -> bool {
        self.rotate_with_kicks(field, direction).is_some()
    }

    /// Rotate with wall kicks and report the offset that was applied.
    ///
    /// The O piece never rotates and reports `(0, 0)`. Other shapes try the
    /// five candidates for their transition in order against the rotated
    /// bitmap and commit the first free one.
    pub fn rotate_with_kicks(&mut self, field: &Playfield, direction: Direction) -> Option<Kick> {
        let Some(candidates) = kicks(self.shape, self.rotation, direction) else {
            return Some((0, 0));
        };

        let rotation = self.rotation.rotate(direction);
        let rotated = Piece {
            rotation,
            bitmap: occupancy(self.shape, rotation),
            ..*self
        };

        for &(dx, dy) in candidates {
            let mut candidate = rotated;
            if candidate.try_move(field, dx, dy) {
                *self = candidate;
                return Some((dx, dy));
            }
        }

        None
    }

    /// Move down until blocked. Returns the number of rows dropped.
    pub fn hard_drop(&mut self, field: &Playfield) -> u32 {
        let mut rows = 0;
        while self.try_move(field, 0, 1) {
            rows += 1;
        }
        rows
    }

    /// Resting on the floor or the stack?
    pub fn is_grounded(&self, field: &Playfield) -> bool {
        field.collides(self.bitmap, self.x, self.y + 1)
    }
}
