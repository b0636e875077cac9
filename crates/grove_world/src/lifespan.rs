//! Countdown shared by components that remove their entity when they expire.

use serde::{Deserialize, Serialize};

/// Elapsed/duration timer in milliseconds.
///
/// [`Lifespan::tick`] reports expiry exactly once: on the tick where the
/// accumulated time first reaches the duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifespan {
    elapsed_ms: f32,
    duration_ms: f32,
    expired: bool,
}

impl Lifespan {
    /// A fresh countdown of `duration_ms`.
    #[must_use]
    pub fn new(duration_ms: f32) -> Self {
        Self {
            elapsed_ms: 0.0,
            duration_ms: duration_ms.max(0.0),
            expired: false,
        }
    }

    /// Advance by `delta_ms`. Returns `true` if this tick expired the timer.
    pub fn tick(&mut self, delta_ms: f32) -> bool {
        if self.expired {
            return false;
        }
        self.elapsed_ms += delta_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.expired = true;
            return true;
        }
        false
    }

    /// Fraction of the duration that has passed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    #[must_use]
    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }
}
