//! Floating damage numbers: drift, then disappear.

use grove_world::{DamageIndicator, Entity, Position, Registry, Velocity};
use tracing::debug;

/// Move each damage indicator by its velocity (per second), tick its
/// lifespan, and delete the ones that expired.
///
/// Deletions happen after the pass, so every matched indicator is updated
/// exactly once this tick.
pub fn damage_indicator_system(registry: &mut Registry, delta_ms: f32) {
    let delta_s = delta_ms / 1000.0;
    let mut expired: Vec<Entity> = Vec::new();

    for entity in registry.query_ids::<(DamageIndicator, Position, Velocity)>() {
        let Some(&velocity) = registry.get::<Velocity>(entity) else {
            continue;
        };
        if let Some(position) = registry.get_mut::<Position>(entity) {
            position.x += velocity.dx * delta_s;
            position.y += velocity.dy * delta_s;
        }
        let done = registry
            .get_mut::<DamageIndicator>(entity)
            .is_some_and(|indicator| indicator.tick(delta_ms));
        if done {
            expired.push(entity);
        }
    }

    for entity in expired {
        registry.delete_entity(entity);
        debug!(entity = entity.id(), "damage indicator expired");
    }
}
