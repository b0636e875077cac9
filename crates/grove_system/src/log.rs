//! The game log collaborator.
//!
//! Systems report player-facing events through a [`LogSink`] passed in by
//! the caller. The sink decides how to present them; systems never wait on
//! it and never read anything back.

use tracing::{Level, error, info, warn};

/// How prominently a log line should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    /// Something notable but harmless happened (a sapling was trampled).
    Event,
    /// A player died.
    Fatal,
    /// Separator between trample turns.
    NextTurn,
    /// The simulation has ended.
    GameOver,
}

/// Receives player-facing log lines.
pub trait LogSink {
    fn log(&mut self, message: &str, emphasis: Emphasis);
}

/// Forwards log lines to `tracing` under the `grove::log` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// The `tracing` level a line of the given emphasis is emitted at.
    #[must_use]
    pub fn level_for(emphasis: Emphasis) -> Level {
        match emphasis {
            Emphasis::Normal | Emphasis::NextTurn => Level::INFO,
            Emphasis::Event => Level::WARN,
            Emphasis::Fatal | Emphasis::GameOver => Level::ERROR,
        }
    }
}

impl LogSink for TracingSink {
    fn log(&mut self, message: &str, emphasis: Emphasis) {
        let level = Self::level_for(emphasis);
        if level == Level::ERROR {
            error!(target: "grove::log", ?emphasis, "{message}");
        } else if level == Level::WARN {
            warn!(target: "grove::log", ?emphasis, "{message}");
        } else {
            info!(target: "grove::log", ?emphasis, "{message}");
        }
    }
}

/// One recorded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    pub emphasis: Emphasis,
}

/// Keeps every line in memory, oldest first.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Vec<LogEntry>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Messages logged with the given emphasis, in order.
    #[must_use]
    pub fn messages_with(&self, emphasis: Emphasis) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.emphasis == emphasis)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl LogSink for MemorySink {
    fn log(&mut self, message: &str, emphasis: Emphasis) {
        self.entries.push(LogEntry {
            message: message.to_string(),
            emphasis,
        });
    }
}
