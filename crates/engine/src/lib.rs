//! Session plumbing between the core game and the outside world.
//!
//! The core knows nothing about terminals or clocks. A [`Session`] owns a
//! [`Game`](term_tetris_core::Game) and drives it with wall-clock time,
//! reading commands from an [`InputSource`] and drawing through a
//! [`Renderer`]. Both are traits so the loop can be exercised headless.

pub mod frame_gate;
pub mod session;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

use anyhow::Result;
use term_tetris_core::GameSnapshot;
use term_tetris_types::Command;

pub use frame_gate::FrameGate;
pub use session::Session;

/// Something that can show a game frame.
pub trait Renderer {
    /// Prepare the output surface. Called once before the first frame.
    fn init(&mut self) -> Result<()>;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    /// Restore the output surface. Called once, even after a failed frame.
    fn teardown(&mut self) -> Result<()>;
}

/// Non-blocking source of player commands.
pub trait InputSource {
    /// Return the pending command, if any, without waiting.
    fn poll(&mut self) -> Result<Option<Command>>;
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn init(&mut self) -> Result<()> {
        (**self).init()
    }

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).render(snapshot)
    }

    fn teardown(&mut self) -> Result<()> {
        (**self).teardown()
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self) -> Result<Option<Command>> {
        (**self).poll()
    }
}
