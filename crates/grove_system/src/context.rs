//! Per-tick execution context provided to scheduled systems.

use crate::config::GameConfig;
use crate::log::LogSink;

/// What a scheduled system receives on each tick besides the registry.
pub struct SystemContext<'a> {
    /// The current tick number (first tick is 1).
    pub tick_id: u64,
    /// Time since the previous tick, in milliseconds.
    pub delta_ms: f32,
    pub config: &'a GameConfig,
    pub sink: &'a mut dyn LogSink,
}

impl<'a> SystemContext<'a> {
    #[must_use]
    pub fn new(
        tick_id: u64,
        delta_ms: f32,
        config: &'a GameConfig,
        sink: &'a mut dyn LogSink,
    ) -> Self {
        Self {
            tick_id,
            delta_ms,
            config,
            sink,
        }
    }
}

impl std::fmt::Debug for SystemContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemContext")
            .field("tick_id", &self.tick_id)
            .field("delta_ms", &self.delta_ms)
            .finish_non_exhaustive()
    }
}

/// Whether the tick loop should keep going after a system ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemOutcome {
    Continue,
    /// The game reached its terminal state; schedule no further ticks.
    Halt,
}
