//! Steering helpers for chasing AI.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

/// Velocity of magnitude `speed` pointing from `from` to `to`.
///
/// Returns `None` when the points coincide, so callers keep their previous
/// velocity instead of dividing by zero.
#[must_use]
pub fn steer_toward(from: Vec2, to: Vec2, speed: f32) -> Option<Vec2> {
    let delta = to - from;
    let distance = delta.length();
    if distance > 0.0 {
        Some(delta / distance * speed)
    } else {
        None
    }
}

/// Sprite rotation that faces along `delta`.
///
/// Screen space has y growing downward, and sprites are authored facing
/// down, hence the negated y and the quarter-turn offset.
#[must_use]
pub fn facing_angle(delta: Vec2) -> f32 {
    (-delta.y).atan2(delta.x) + FRAC_PI_2
}
