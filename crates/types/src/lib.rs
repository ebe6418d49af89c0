//! Shared types and tuning constants.
//!
//! Everything here is plain data with no dependencies, usable from the core
//! rules, the session loop, and the terminal front end alike.
//!
//! # Playfield geometry
//!
//! The playfield is 10 columns by 40 rows. Row 0 is the top of an 18-row
//! hidden buffer; the 22 visible rows start at [`VISIBLE_TOP`]:
//!
//! | Rows | Region |
//! |------|--------|
//! | 0..18 | hidden buffer (spawn happens at its last row) |
//! | 18..40 | visible play area |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LOGIC_TICK` | 1ms | Game-logic step interval |
//! | `FRAME_INTERVAL` | 16.667ms | Minimum time between rendered frames |
//! | `LOCK_DELAY` | 500ms | Slide grace period before a grounded piece locks |
//! | `GRAVITY_INTERVALS` | 1s .. 7.06ms | Time per row at levels 1..=15 |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{Command, Rotation, Shape, PLAYFIELD_WIDTH, VISIBLE_HEIGHT};
//!
//! assert_eq!(Shape::T.as_str(), "T");
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Command::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(PLAYFIELD_WIDTH, 10);
//! assert_eq!(VISIBLE_HEIGHT, 22);
//! ```

use std::time::Duration;

/// Playfield width in cells.
pub const PLAYFIELD_WIDTH: u8 = 10;

/// Rows of the hidden buffer above the visible area.
pub const BUFFER_HEIGHT: u8 = 18;

/// Rows of the visible play area.
pub const VISIBLE_HEIGHT: u8 = 22;

/// Total playfield height, buffer included.
pub const PLAYFIELD_HEIGHT: u8 = BUFFER_HEIGHT + VISIBLE_HEIGHT;

/// Index of the first visible row.
pub const VISIBLE_TOP: u8 = BUFFER_HEIGHT;

/// Spawn column of a piece's 4x4 bounding box.
pub const SPAWN_X: i8 = 3;

/// Spawn row of a piece's 4x4 bounding box (the last buffer row).
pub const SPAWN_Y: i8 = BUFFER_HEIGHT as i8 - 1;

/// Number of shapes in one bag.
pub const BAG_SIZE: usize = 7;

/// Highest reachable level. Gravity is fastest here and lock is immediate.
pub const MAX_LEVEL: u32 = 15;

/// Level a session starts at.
pub const START_LEVEL: u32 = 1;

/// Lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Time per row of gravity, indexed by `level - 1`.
pub const GRAVITY_INTERVALS: [Duration; MAX_LEVEL as usize] = [
    Duration::from_micros(1_000_000),
    Duration::from_micros(793_000),
    Duration::from_micros(617_800),
    Duration::from_micros(472_730),
    Duration::from_micros(355_200),
    Duration::from_micros(262_000),
    Duration::from_micros(189_680),
    Duration::from_micros(134_730),
    Duration::from_micros(93_880),
    Duration::from_micros(64_150),
    Duration::from_micros(42_980),
    Duration::from_micros(28_220),
    Duration::from_micros(18_150),
    Duration::from_micros(11_440),
    Duration::from_micros(7_060),
];

/// Slide grace period: how long a grounded piece may keep moving before it locks.
pub const LOCK_DELAY: Duration = Duration::from_millis(500);

/// Game-logic step interval.
pub const LOGIC_TICK: Duration = Duration::from_millis(1);

/// Minimum interval between rendered frames (~60 FPS).
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Base points for clearing N rows in one lock, multiplied by the level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];


/// The seven piece shapes.
///
/// A shape is also the tag stored in locked playfield cells, so renderers use
/// it to pick a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Shape {
    /// All shapes in table order.
    pub const ALL: [Shape; BAG_SIZE] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Position of this shape in [`Shape::ALL`].
    pub fn index(self) -> usize {
        match self {
            Shape::I => 0,
            Shape::O => 1,
            Shape::T => 2,
            Shape::S => 3,
            Shape::Z => 4,
            Shape::J => 5,
            Shape::L => 6,
        }
    }

    /// Upper-case letter for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "I",
            Shape::O => "O",
            Shape::T => "T",
            Shape::S => "S",
            Shape::Z => "Z",
            Shape::J => "J",
            Shape::L => "L",
        }
    }
}

/// Rotation state, cyclic modulo 4. `North` is the spawn orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation state from any integer, reduced modulo 4.
    pub fn from_index(n: usize) -> Self {
        match n % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// 0 for `North` through 3 for `West`.
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate clockwise (+1 mod 4).
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (+3 mod 4).
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn rotate(&self, direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => self.rotate_cw(),
            Direction::CounterClockwise => self.rotate_ccw(),
        }
    }
}

/// Rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Discrete player commands, polled at most one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the piece one column left.
    MoveLeft,
    /// Move the piece one column right.
    MoveRight,
    /// Move the piece one row down; locks it if it cannot move.
    SoftDrop,
    /// Rotate clockwise with wall kicks.
    RotateCw,
    /// Rotate counter-clockwise with wall kicks.
    RotateCcw,
    /// Drop to the lowest free position and lock immediately.
    HardDrop,
    /// End the session.
    Quit,
    /// Lower the level by one (debug).
    LevelDown,
    /// Raise the level by one (debug).
    LevelUp,
}

impl Command {
    /// camelCase name, used in log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::HardDrop => "hardDrop",
            Command::Quit => "quit",
            Command::LevelDown => "levelDown",
            Command::LevelUp => "levelUp",
        }
    }
}

/// A playfield cell: `None` when empty, otherwise the shape that locked there.
pub type Cell = Option<Shape>;
