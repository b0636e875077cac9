//! # grove_math
//!
//! Math types for the grove ECS. Re-exports [`glam`] for linear algebra and
//! defines the 2D spatial components ([`Position`], [`Velocity`]) that
//! implement [`Component`](grove_component::Component), plus the steering
//! and canvas-boundary helpers the systems share.

pub mod bounds;
pub mod spatial;
pub mod steer;

// Re-export glam types for convenience.
pub use glam::Vec2;

pub use bounds::{Bounds, clamp_axis, wrap_axis};
pub use spatial::{Position, Velocity};
pub use steer::{facing_angle, steer_toward};
