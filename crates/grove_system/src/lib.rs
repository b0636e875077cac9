//! # grove_system
//!
//! The simulation systems and what they need from the outside world.
//!
//! Each system is a plain function over the [`Registry`](grove_world::Registry)
//! that owns one concern of the tick:
//!
//! - [`movement`]: time-scaled integration with a scroll bias.
//! - [`enemy_ai`]: enemies steer toward the player ship.
//! - [`wraparound`]: ships clamp vertically and wrap horizontally; other
//!   entities wrap on both axes.
//! - [`damage_indicator`] / [`explosion`]: tick-and-expire lifespans.
//! - [`trample`]: the unscaled player-vs-trees movement and collision game.
//!
//! Supporting pieces:
//!
//! - [`GameConfig`]: named constants (speeds, intervals, padding).
//! - [`LogSink`]: the injected game log.
//! - [`SystemContext`]: what a scheduled system receives each tick.
//!
//! ## Usage
//!
//! ```rust
//! use grove_system::{movement, MemorySink};
//! use grove_world::{Position, Registry, Velocity};
//!
//! let mut registry = Registry::new();
//! let e = registry.spawn_with([Position::new(0.0, 0.0).into(), Velocity::new(10.0, 0.0).into()]);
//!
//! movement::movement_system(&mut registry, 500.0);
//! assert_eq!(registry.get::<Position>(e), Some(&Position::new(5.0, 0.0)));
//! # let _ = MemorySink::new();
//! ```

pub mod config;
pub mod context;
pub mod damage_indicator;
pub mod enemy_ai;
pub mod explosion;
pub mod log;
pub mod movement;
pub mod trample;
pub mod wraparound;

pub use config::{ConfigError, GameConfig, GameMode};
pub use context::{SystemContext, SystemOutcome};
pub use log::{Emphasis, LogEntry, LogSink, MemorySink, TracingSink};
pub use trample::TrampleOutcome;
