//! Time-scaled movement.
//!
//! Velocities here are per second: each tick moves an entity by
//! `velocity * delta_ms / 1000`. The trample game uses unscaled per-tick
//! steps instead; see [`crate::trample`].

use grove_world::{Position, Registry, Velocity};

/// Advance every entity with [`Position`] and [`Velocity`] by its velocity
/// scaled to the elapsed time.
pub fn movement_system(registry: &mut Registry, delta_ms: f32) {
    scrolling_movement_system(registry, delta_ms, 0.0);
}

/// Like [`movement_system`], with `scroll_bias` subtracted from every
/// vertical velocity before integrating.
///
/// The bias is a configuration constant (see
/// [`GameConfig::scroll_bias`](crate::GameConfig::scroll_bias)), not
/// per-entity state; stored velocities are left untouched.
pub fn scrolling_movement_system(registry: &mut Registry, delta_ms: f32, scroll_bias: f32) {
    let delta_s = delta_ms / 1000.0;
    registry.update::<Position, Velocity>(|_, position, velocity| {
        position.x += velocity.dx * delta_s;
        position.y += (velocity.dy - scroll_bias) * delta_s;
    });
}
