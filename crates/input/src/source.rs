use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::map_key;
use crate::types::Command;
use term_tetris_engine::InputSource;

/// Reads the terminal's pending key events without blocking.
///
/// Each poll drains everything queued and keeps the most recent bound
/// command; earlier presses in the same tick are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

/// Fold one event into the command seen so far this tick.
pub fn fold_event(latest: Option<Command>, event: Event) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key).or(latest),
        _ => latest,
    }
}

/// Fold a batch of events into the command a tick should see.
pub fn latest_command<I>(events: I) -> Option<Command>
where
    I: IntoIterator<Item = Event>,
{
    events.into_iter().fold(None, fold_event)
}

impl InputSource for CrosstermInput {
    fn poll(&mut self) -> Result<Option<Command>> {
        let mut latest = None;
        while event::poll(Duration::ZERO)? {
            latest = fold_event(latest, event::read()?);
        }
        Ok(latest)
    }
}
