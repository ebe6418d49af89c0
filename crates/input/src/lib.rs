//! Terminal input.
//!
//! Maps `crossterm` key events into [`Command`](crate::types::Command)s and
//! offers a non-blocking [`InputSource`](term_tetris_engine::InputSource)
//! over the process terminal.

pub mod map;
pub mod source;

pub use term_tetris_types as types;

pub use map::map_key;
pub use source::{fold_event, latest_command, CrosstermInput};
