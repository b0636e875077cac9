//! The player-vs-trees game.
//!
//! Players advance by their full velocity every tick (no time scaling).
//! Landing exactly on a sapling tramples it; landing on a mature or ancient
//! tree kills the player and ends the game.

use grove_world::{Player, Position, Registry, TreeType, Velocity};
use tracing::debug;

use crate::context::SystemOutcome;
use crate::log::{Emphasis, LogSink};

/// Result of one trample turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrampleOutcome {
    /// Nobody died; the next turn should be scheduled.
    Continue,
    /// A player hit a fully grown tree. Terminal.
    GameOver,
}

impl From<TrampleOutcome> for SystemOutcome {
    fn from(outcome: TrampleOutcome) -> Self {
        match outcome {
            TrampleOutcome::Continue => SystemOutcome::Continue,
            TrampleOutcome::GameOver => SystemOutcome::Halt,
        }
    }
}

/// Move every player one step and resolve tree collisions.
///
/// Players are processed in insertion order. After a fatal collision no
/// further trees or players are examined.
pub fn trample_system(registry: &mut Registry, sink: &mut dyn LogSink) -> TrampleOutcome {
    let trees: Vec<(Position, TreeType)> = registry
        .query::<(Position, TreeType)>()
        .into_iter()
        .map(|(position, tree)| (*position, *tree))
        .collect();

    for entity in registry.query_ids::<(Player, Position, Velocity)>() {
        let Some(&velocity) = registry.get::<Velocity>(entity) else {
            continue;
        };
        let Some(position) = registry.get_mut::<Position>(entity) else {
            continue;
        };
        position.translate(velocity);
        let position = *position;
        let name = registry
            .get::<Player>(entity)
            .map(Player::full_name)
            .unwrap_or_default();
        let (x, y) = (position.x, position.y);

        for (tree_position, tree) in &trees {
            if !position.is_colliding(tree_position) {
                continue;
            }
            if tree.is_sapling() {
                sink.log(
                    &format!(
                        "{name} moved to ({x}, {y}) and trampled a small {} sapling. What a terrible person!",
                        tree.species
                    ),
                    Emphasis::Event,
                );
                continue;
            }
            sink.log(
                &format!(
                    "{name} moved to ({x}, {y}) and was killed when hitting a huge {} tree",
                    tree.species
                ),
                Emphasis::Fatal,
            );
            debug!(entity = entity.id(), x, y, "fatal tree collision");
            return TrampleOutcome::GameOver;
        }

        sink.log(&format!("{name} moved to: ({x}, {y})"), Emphasis::Normal);
    }

    TrampleOutcome::Continue
}
