//! 2D spatial components.
//!
//! [`Position`] is a world-space point in screen coordinates (y grows
//! downward). [`Velocity`] is a displacement applied either once per tick or
//! per second, depending on which movement system drives the entity.

use glam::Vec2;
use grove_component::{Component, ComponentKind};
use serde::{Deserialize, Serialize};

/// A world-space position.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Apply a full, unscaled velocity step.
    pub fn translate(&mut self, velocity: Velocity) {
        self.x += velocity.dx;
        self.y += velocity.dy;
    }

    /// Collision is exact coordinate equality, not a distance threshold.
    #[must_use]
    pub fn is_colliding(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// The position as a glam vector.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Component for Position {
    const KIND: ComponentKind = ComponentKind::Position;
}

/// A 2D velocity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Velocity {
    pub dx: f32,
    pub dy: f32,
}

impl Velocity {
    /// Zero velocity.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a new velocity.
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// The velocity as a glam vector.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }
}

impl From<Vec2> for Velocity {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Component for Velocity {
    const KIND: ComponentKind = ComponentKind::Velocity;
}
