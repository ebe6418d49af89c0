//! Core game logic - pure, deterministic, and testable
//!
//! Everything here is free of terminal, timing and I/O concerns. The caller
//! passes elapsed time and player commands into [`Game::tick`] and reads the
//! result back through accessors or a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`shapes`]: the 4x4 occupancy bitmap of each shape in each rotation
//! - [`kicks`]: SRS wall-kick offsets for every rotation transition
//! - [`bag`]: 7-bag randomizer
//! - [`piece`]: the active piece with move, rotate and drop
//! - [`playfield`]: 10x40 grid with collision, locking and row clearing
//! - [`scoring`]: line-clear points, level progression and gravity speed
//! - [`game`]: the spawn/fall/lock state machine
//! - [`snapshot`]: render-ready copy of the game state
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use term_tetris_core::{Game, Phase};
//! use term_tetris_types::Command;
//!
//! let mut game = Game::new(12345);
//! game.start();
//!
//! game.tick(Duration::from_millis(1), Some(Command::MoveRight));
//! game.tick(Duration::from_millis(1), Some(Command::HardDrop));
//!
//! assert_eq!(game.phase(), Phase::Falling);
//! assert_eq!(game.pieces_spawned(), 2);
//! ```

pub mod bag;
pub mod game;
pub mod kicks;
pub mod piece;
pub mod playfield;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use term_tetris_types as types;

pub use bag::Bag;
pub use game::{Game, LockEvent, Phase};
pub use kicks::{kicks, Kick};
pub use piece::Piece;
pub use playfield::Playfield;
pub use shapes::{occupancy, Bitmap};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
