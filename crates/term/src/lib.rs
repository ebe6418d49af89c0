//! Terminal rendering.
//!
//! A small, game-oriented rendering layer: [`GameView`] draws a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a [`FrameBuffer`] and
//! [`TerminalRenderer`] flushes it to the terminal through crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{shape_color, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
