//! Timed linear movement between two positions.

use std::time::{Duration, Instant};

use crate::Position;

/// A linear move from `from` to `to` over `duration`, starting at
/// `started_at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Position,
    pub to: Position,
    pub started_at: Instant,
    pub duration: Duration,
}

impl Motion {
    pub fn new(from: Position, to: Position, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// Fraction of the move completed at `now`, clamped to `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Position along the move at `now`.
    pub fn sample(&self, now: Instant) -> Position {
        self.from.lerp(self.to, self.progress(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
