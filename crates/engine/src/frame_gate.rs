use std::time::Duration;

/// Limits rendering to one frame per interval of accumulated game time.
#[derive(Debug, Clone)]
pub struct FrameGate {
    interval: Duration,
    accumulated: Duration,
    has_rendered: bool,
}

impl FrameGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
            has_rendered: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Decide whether to render after `elapsed` more time has passed.
    ///
    /// - The first call always renders.
    /// - `force` renders immediately (used for the final frame).
    /// - Otherwise renders once the time since the last frame reaches the interval.
    pub fn should_render(&mut self, elapsed: Duration, force: bool) -> bool {
        self.accumulated += elapsed;

        if !self.has_rendered || force || self.accumulated >= self.interval {
            self.has_rendered = true;
            self.accumulated = Duration::ZERO;
            return true;
        }

        false
    }
}
