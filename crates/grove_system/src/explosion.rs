//! Explosions: grow, then disappear.

use grove_world::{Entity, Explosion, Registry, Renderable};
use tracing::debug;

/// Set each explosion's render radius from its progress, tick its lifespan,
/// and delete the ones that expired once the pass is over.
pub fn explosion_system(registry: &mut Registry, delta_ms: f32) {
    let mut expired: Vec<Entity> = Vec::new();

    registry.update::<Renderable, Explosion>(|_, renderable, explosion| {
        renderable.radius = explosion.radius();
    });

    for entity in registry.query_ids::<(Explosion, Renderable)>() {
        let done = registry
            .get_mut::<Explosion>(entity)
            .is_some_and(|explosion| explosion.tick(delta_ms));
        if done {
            expired.push(entity);
        }
    }

    for entity in expired {
        registry.delete_entity(entity);
        debug!(entity = entity.id(), "explosion finished");
    }
}
