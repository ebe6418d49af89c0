//! Fixed-tick session loop.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::frame_gate::FrameGate;
use crate::{InputSource, Renderer};
use term_tetris_core::{Game, GameSnapshot, Phase};
use term_tetris_types::{FRAME_INTERVAL, LOGIC_TICK};

pub struct Session<R, I, G = StdRng> {
    game: Game<G>,
    renderer: R,
    input: I,
    gate: FrameGate,
    snapshot: GameSnapshot,
    frames: u64,
    locks: u64,
}

impl<R, I, G> Session<R, I, G>
where
    R: Renderer,
    I: InputSource,
    G: Rng,
{
    pub fn new(game: Game<G>, renderer: R, input: I) -> Self {
        Self {
            game,
            renderer,
            input,
            gate: FrameGate::new(FRAME_INTERVAL),
            snapshot: GameSnapshot::default(),
            frames: 0,
            locks: 0,
        }
    }

    pub fn game(&self) -> &Game<G> {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// One logic tick: poll input, advance the game, maybe draw a frame.
    pub fn step(&mut self, elapsed: Duration) -> Result<Phase> {
        let command = self.input.poll()?;
        let phase = self.game.tick(elapsed, command);

        if let Some(event) = self.game.take_last_event() {
            self.locks += 1;
            debug!(
                shape = event.shape.as_str(),
                rows = event.rows_cleared,
                points = event.points,
                overflow = event.overflow,
                "lock"
            );
        }

        if self.gate.should_render(elapsed, phase.is_terminal()) {
            self.game.snapshot_into(&mut self.snapshot);
            self.renderer.render(&self.snapshot)?;
            self.frames += 1;
        }

        Ok(phase)
    }

    /// Play until the game ends or the player quits. Returns the final score.
    ///
    /// The renderer is torn down whether or not the loop succeeded; a loop
    /// error takes precedence over a teardown error.
    pub fn run(&mut self) -> Result<u32> {
        self.renderer.init()?;
        let result = self.run_loop();
        let teardown = self.renderer.teardown();
        let score = result?;
        teardown?;
        Ok(score)
    }

    fn run_loop(&mut self) -> Result<u32> {
        self.game.start();
        info!(level = self.game.level(), "session started");

        let mut last = Instant::now();
        loop {
            let now = Instant::now();
            let elapsed = now - last;
            last = now;

            let phase = self.step(elapsed)?;
            if phase.is_terminal() {
                info!(
                    reason = phase.as_str(),
                    score = self.game.score(),
                    lines = self.game.lines(),
                    level = self.game.level(),
                    pieces = self.locks,
                    "session finished"
                );
                return Ok(self.game.score());
            }

            let spent = last.elapsed();
            if spent < LOGIC_TICK {
                thread::sleep(LOGIC_TICK - spent);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::collections::VecDeque;
    use term_tetris_types::Command;

    const TICK: Duration = Duration::from_millis(1);

    #[derive(Default)]
    struct Scripted(VecDeque<Command>);

    impl InputSource for Scripted {
        fn poll(&mut self) -> Result<Option<Command>> {
            Ok(self.0.pop_front())
        }
    }

    #[derive(Default)]
    struct Recording {
        inits: u32,
        teardowns: u32,
        frames: Vec<GameSnapshot>,
        fail_on_render: bool,
    }

    impl Renderer for Recording {
        fn init(&mut self) -> Result<()> {
            self.inits += 1;
            Ok(())
        }

        fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
            if self.fail_on_render {
                bail!("display lost");
            }
            self.frames.push(snapshot.clone());
            Ok(())
        }

        fn teardown(&mut self) -> Result<()> {
            self.teardowns += 1;
            Ok(())
        }
    }

    fn script(commands: &[Command]) -> Scripted {
        Scripted(commands.iter().copied().collect())
    }

    #[test]
    fn step_renders_first_frame_then_throttles() {
        let mut session = Session::new(Game::new(1), Recording::default(), Scripted::default());
        session.step(TICK).unwrap();
        session.step(TICK).unwrap();
        assert_eq!(session.frames_rendered(), 1);
        assert_eq!(session.renderer().frames[0].phase, Phase::Falling);
    }

    #[test]
    fn run_returns_score_after_quit() {
        let mut renderer = Recording::default();
        let mut session = Session::new(Game::new(1), &mut renderer, script(&[Command::Quit]));
        let score = session.run().unwrap();
        assert_eq!(score, 0);
        assert_eq!(session.game().phase(), Phase::Quit);
        drop(session);

        assert_eq!(renderer.inits, 1);
        assert_eq!(renderer.teardowns, 1);
        assert_eq!(renderer.frames.last().unwrap().phase, Phase::Quit);
    }

    #[test]
    fn teardown_runs_when_render_fails() {
        let mut renderer = Recording {
            fail_on_render: true,
            ..Recording::default()
        };
        let mut session = Session::new(Game::new(1), &mut renderer, Scripted::default());
        let err = session.run().unwrap_err();
        assert!(err.to_string().contains("display lost"));
        drop(session);
        assert_eq!(renderer.teardowns, 1);
    }

    #[test]
    fn commands_reach_the_game() {
        let mut session = Session::new(
            Game::new(1),
            Recording::default(),
            script(&[Command::HardDrop]),
        );
        session.step(TICK).unwrap();
        assert_eq!(session.game().pieces_spawned(), 2);
    }
}
