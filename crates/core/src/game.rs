//! Game state machine - spawn, fall, lock, clear, score
//!
//! One [`Game`] owns the playfield, the active piece, the bag and the score
//! counters for a whole session. It is driven by [`Game::tick`], which takes
//! the time elapsed since the previous tick and at most one player command.
//!
//! ```text
//! Spawn -> Falling -> Locking -> Spawn ...
//!   |         |          |
//!   v         v          v
//! GameOver   Quit     GameOver
//! ```
//!
//! Two timers run while a piece falls: the gravity timer, re-armed after each
//! row of descent, and the slide grace timer, started the first time gravity
//! finds the piece grounded and restarted by every successful move or rotate.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::bag::Bag;
use crate::piece::Piece;
use crate::playfield::Playfield;
use crate::scoring::{clamp_level, gravity_interval, level_for_lines, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A new piece is due.
    Spawn,
    /// The active piece is under player and gravity control.
    Falling,
    /// The active piece has stopped and merges into the playfield next.
    Locking,
    /// A piece could not spawn or the stack reached the buffer.
    GameOver,
    /// The player asked to stop.
    Quit,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver | Phase::Quit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Spawn => "spawn",
            Phase::Falling => "falling",
            Phase::Locking => "locking",
            Phase::GameOver => "game_over",
            Phase::Quit => "quit",
        }
    }
}

/// Outcome of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub shape: Shape,
    pub rows_cleared: u32,
    pub points: u32,
    /// The lock left cells in the hidden buffer and ended the game.
    pub overflow: bool,
}

#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    playfield: Playfield,
    active: Option<Piece>,
    bag: Bag<R>,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    gravity_elapsed: Duration,
    /// `Some` while the slide grace period runs.
    grace_elapsed: Option<Duration>,
    quit_requested: bool,
    pieces_spawned: u32,
    last_event: Option<LockEvent>,
}

impl Game<StdRng> {
    /// New game whose piece sequence is fixed by `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_bag(Bag::seeded(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_bag(Bag::from_entropy())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_bag(bag: Bag<R>) -> Self {
        Self {
            playfield: Playfield::new(),
            active: None,
            bag,
            phase: Phase::Spawn,
            score: 0,
            lines: 0,
            level: START_LEVEL,
            gravity_elapsed: Duration::ZERO,
            grace_elapsed: None,
            quit_requested: false,
            pieces_spawned: 0,
            last_event: None,
        }
    }

    /// Spawn the first piece. Does nothing once play has begun.
    pub fn start(&mut self) {
        if self.phase == Phase::Spawn {
            self.spawn();
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Set the level directly, clamped to the valid range.
    pub fn set_level(&mut self, level: u32) {
        self.level = clamp_level(level);
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Shape that spawns next.
    pub fn next_shape(&self) -> Shape {
        self.bag.peek()
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Mutable playfield, for setting up positions.
    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn grace_elapsed(&self) -> Option<Duration> {
        self.grace_elapsed
    }

    /// Replace the active piece and resume falling, for setting up positions.
    ///
    /// Returns false, leaving the game unchanged, if the piece collides or the
    /// game has ended.
    pub fn place_active(&mut self, piece: Piece) -> bool {
        if self.phase.is_terminal() || piece.collides(&self.playfield) {
            return false;
        }
        self.active = Some(piece);
        self.phase = Phase::Falling;
        self.reset_timers();
        true
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    fn reset_timers(&mut self) {
        self.gravity_elapsed = Duration::ZERO;
        self.grace_elapsed = None;
    }

    /// Restart the grace period if it is running.
    fn renew_grace(&mut self) {
        if self.grace_elapsed.is_some() {
            self.grace_elapsed = Some(Duration::ZERO);
        }
    }

    fn enter_locking(&mut self) {
        if let Some(piece) = self.active.as_mut() {
            piece.falling = false;
        }
        self.gravity_elapsed = Duration::ZERO;
        self.phase = Phase::Locking;
    }

    /// Bring the next shape into play at the spawn position.
    ///
    /// Returns false and ends the game if the new piece overlaps the stack.
    pub fn spawn(&mut self) -> bool {
        let shape = self.bag.draw();
        let piece = Piece::spawn(shape);

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.reset_timers();

        if piece.collides(&self.playfield) {
            debug!(shape = shape.as_str(), "spawn blocked");
            self.phase = Phase::GameOver;
            return false;
        }

        trace!(shape = shape.as_str(), next = self.bag.peek().as_str(), "spawn");
        self.phase = Phase::Falling;
        true
    }

    /// Merge the active piece into the playfield, then clear rows and score.
    pub fn lock_active(&mut self) {
        let Some(mut piece) = self.active.take() else {
            return;
        };
        piece.falling = false;
        self.playfield.lock(&piece);

        if self.playfield.is_overflowing() {
            debug!(shape = piece.shape.as_str(), score = self.score, "stack overflow");
            self.last_event = Some(LockEvent {
                shape: piece.shape,
                rows_cleared: 0,
                points: 0,
                overflow: true,
            });
            self.phase = Phase::GameOver;
            return;
        }

        let rows = self.playfield.clear_full_rows().len();
        let mut points = 0;
        if rows > 0 {
            points = line_clear_points(rows, self.level);
            self.score += points;
            self.lines += rows as u32;

            let level = level_for_lines(self.lines, self.level);
            if level != self.level {
                debug!(from = self.level, to = level, "level up");
            }
            self.level = level;
            debug!(rows, points, score = self.score, lines = self.lines, "rows cleared");
        }

        self.last_event = Some(LockEvent {
            shape: piece.shape,
            rows_cleared: rows as u32,
            points,
            overflow: false,
        });
        self.phase = Phase::Spawn;
    }

    /// Apply one player command to the falling piece.
    ///
    /// Returns true if the command changed anything. Moves and rotations that
    /// succeed restart a running grace period; a soft drop or hard drop that
    /// cannot go further sends the piece to lock.
    pub fn apply_command(&mut self, command: Command) -> bool {
        trace!(command = command.as_str(), "command");
        match command {
            Command::Quit => {
                self.quit_requested = true;
                return true;
            }
            Command::LevelDown => {
                let before = self.level;
                self.set_level(self.level.saturating_sub(1));
                return self.level != before;
            }
            Command::LevelUp => {
                let before = self.level;
                self.set_level(self.level + 1);
                return self.level != before;
            }
            _ => {}
        }

        if self.phase != Phase::Falling {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let field = &self.playfield;

        match command {
            Command::MoveLeft | Command::MoveRight => {
                let dx = if command == Command::MoveLeft { -1 } else { 1 };
                let moved = piece.try_move(field, dx, 0);
                if moved {
                    self.renew_grace();
                }
                moved
            }
            Command::RotateCw | Command::RotateCcw => {
                let direction = if command == Command::RotateCw {
                    Direction::Clockwise
                } else {
                    Direction::CounterClockwise
                };
                let rotated = piece.try_rotate(field, direction);
                if rotated {
                    self.renew_grace();
                }
                rotated
            }
            Command::SoftDrop => {
                if piece.try_move(field, 0, 1) {
                    self.grace_elapsed = None;
                } else {
                    self.enter_locking();
                }
                true
            }
            Command::HardDrop => {
                piece.hard_drop(field);
                self.enter_locking();
                true
            }
            Command::Quit | Command::LevelDown | Command::LevelUp => false,
        }
    }

    /// Advance gravity and the grace period by `elapsed`.
    fn apply_gravity(&mut self, elapsed: Duration) {
        if let Some(grace) = self.grace_elapsed.as_mut() {
            *grace += elapsed;
        }
        self.gravity_elapsed += elapsed;
        if self.gravity_elapsed < gravity_interval(self.level) {
            return;
        }

        let moved = match self.active.as_mut() {
            Some(piece) => piece.try_move(&self.playfield, 0, 1),
            None => return,
        };
        if moved {
            self.reset_timers();
            return;
        }

        // Grounded. The gravity timer stays expired so every tick re-tries the
        // descent until the piece either slides free or locks.
        if self.level >= MAX_LEVEL {
            self.enter_locking();
            return;
        }
        let grace = *self.grace_elapsed.get_or_insert(Duration::ZERO);
        if grace >= LOCK_DELAY {
            self.enter_locking();
        }
    }

    /// Run one step of the state machine.
    ///
    /// A quit requested on an earlier tick takes effect here first. Then a
    /// pending spawn happens, the command (if any) is applied, gravity runs,
    /// and a piece that stopped is locked and replaced within the same tick.
    pub fn tick(&mut self, elapsed: Duration, command: Option<Command>) -> Phase {
        if self.phase.is_terminal() {
            return self.phase;
        }
        if self.quit_requested {
            debug!(score = self.score, "quit");
            self.phase = Phase::Quit;
            return self.phase;
        }

        if self.phase == Phase::Spawn {
            self.spawn();
        }
        if self.phase == Phase::Falling {
            if let Some(command) = command {
                self.apply_command(command);
            }
            if self.phase == Phase::Falling {
                self.apply_gravity(elapsed);
            }
        }
        if self.phase == Phase::Locking {
            self.lock_active();
        }
        if self.phase == Phase::Spawn {
            self.spawn();
        }

        self.phase
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.playfield.clone_from(&self.playfield);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.bag.peek();
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
