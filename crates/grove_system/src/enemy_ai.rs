//! Enemy steering.
//!
//! Every enemy ship heads straight for the player ship at a fixed speed and
//! turns its sprite to face it.

use grove_math::{facing_angle, steer_toward};
use grove_world::{Enemy, Entity, Position, Registry, Ship, Velocity};
use tracing::trace;

/// Point every enemy at the player ship.
///
/// The player is the first ship whose kind is `Player`. With no player the
/// system does nothing. An enemy sitting exactly on the player keeps its
/// velocity and rotation.
pub fn enemy_ai_system(registry: &mut Registry, enemy_speed: f32) {
    let Some(target) = registry
        .query::<(Ship, Position)>()
        .into_iter()
        .find(|(ship, _)| ship.is_player())
        .map(|(_, position)| position.to_vec2())
    else {
        return;
    };

    let steering: Vec<(Entity, Velocity, f32)> = registry
        .query_with_ids::<(Enemy, Position, Velocity, Ship)>()
        .into_iter()
        .filter_map(|(entity, (_, position, _, _))| {
            let from = position.to_vec2();
            let velocity = steer_toward(from, target, enemy_speed)?;
            Some((entity, velocity.into(), facing_angle(target - from)))
        })
        .collect();

    for (entity, velocity, rotation) in steering {
        if let Some(v) = registry.get_mut::<Velocity>(entity) {
            *v = velocity;
        }
        if let Some(ship) = registry.get_mut::<Ship>(entity) {
            ship.rotation = rotation;
        }
        trace!(entity = entity.id(), rotation, "enemy steered");
    }
}
