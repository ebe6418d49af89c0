use crate::game::Phase;
use crate::piece::Piece;
use crate::playfield::Playfield;
use crate::shapes::Bitmap;
use crate::types::{Rotation, Shape, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub bitmap: Bitmap,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape,
            rotation: value.rotation(),
            x: value.x,
            y: value.y,
            bitmap: value.bitmap(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub playfield: Playfield,
    pub active: Option<ActiveSnapshot>,
    pub next: Shape,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            playfield: Playfield::new(),
            active: None,
            next: Shape::I,
            score: 0,
            lines: 0,
            level: START_LEVEL,
            phase: Phase::Spawn,
        }
    }
}
