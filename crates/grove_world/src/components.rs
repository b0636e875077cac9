//! Game component records.
//!
//! Plain data with small derived-value helpers. Spatial components
//! ([`Position`](grove_math::Position), [`Velocity`](grove_math::Velocity))
//! live in `grove_math`.

use grove_component::{Component, ComponentKind};
use serde::{Deserialize, Serialize};

use crate::lifespan::Lifespan;

/// A named player in the trample game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
}

impl Player {
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// `"<first> <last>"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Component for Player {
    const KIND: ComponentKind = ComponentKind::Player;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TreeSpecies {
    Oak,
    Pine,
    Birch,
}

impl std::fmt::Display for TreeSpecies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TreeSpecies::Oak => "Oak",
            TreeSpecies::Pine => "Pine",
            TreeSpecies::Birch => "Birch",
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TreeSize {
    Sapling,
    Mature,
    Ancient,
}

/// A tree obstacle. Saplings get trampled; anything bigger is fatal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeType {
    pub species: TreeSpecies,
    pub size: TreeSize,
}

impl TreeType {
    #[must_use]
    pub const fn new(species: TreeSpecies, size: TreeSize) -> Self {
        Self { species, size }
    }

    #[must_use]
    pub fn is_sapling(&self) -> bool {
        self.size == TreeSize::Sapling
    }
}

impl Component for TreeType {
    const KIND: ComponentKind = ComponentKind::TreeType;
}

/// Which side a ship flies for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShipKind {
    Player,
    Enemy,
}

/// A ship in the scroller. `rotation` is the sprite angle in radians.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Ship {
    pub kind: ShipKind,
    pub rotation: f32,
}

impl Ship {
    #[must_use]
    pub const fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            rotation: 0.0,
        }
    }

    #[must_use]
    pub fn is_player(&self) -> bool {
        self.kind == ShipKind::Player
    }
}

impl Component for Ship {
    const KIND: ComponentKind = ComponentKind::Ship;
}

/// Marks a ship as AI-controlled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enemy;

impl Component for Enemy {
    const KIND: ComponentKind = ComponentKind::Enemy;
}

/// A projectile. Bullets are left alone by the boundary pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bullet {
    pub damage: f32,
}

impl Bullet {
    #[must_use]
    pub const fn new(damage: f32) -> Self {
        Self { damage }
    }
}

impl Component for Bullet {
    const KIND: ComponentKind = ComponentKind::Bullet;
}

/// Floating damage number that drifts with its velocity and then expires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DamageIndicator {
    pub amount: f32,
    pub lifespan: Lifespan,
}

impl DamageIndicator {
    #[must_use]
    pub fn new(amount: f32, duration_ms: f32) -> Self {
        Self {
            amount,
            lifespan: Lifespan::new(duration_ms),
        }
    }

    /// Advance the countdown. Returns `true` on the tick it expires.
    pub fn tick(&mut self, delta_ms: f32) -> bool {
        self.lifespan.tick(delta_ms)
    }
}

impl Component for DamageIndicator {
    const KIND: ComponentKind = ComponentKind::DamageIndicator;
}

/// An expanding blast. Its radius grows with progress until it expires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Explosion {
    pub max_radius: f32,
    pub lifespan: Lifespan,
}

impl Explosion {
    #[must_use]
    pub fn new(max_radius: f32, duration_ms: f32) -> Self {
        Self {
            max_radius,
            lifespan: Lifespan::new(duration_ms),
        }
    }

    /// Current radius: quadratic ease-out of progress, so 0 at spawn and
    /// `max_radius` at expiry, never shrinking in between.
    #[must_use]
    pub fn radius(&self) -> f32 {
        let remaining = 1.0 - self.lifespan.progress();
        self.max_radius * (1.0 - remaining * remaining)
    }

    /// Advance the countdown. Returns `true` on the tick it expires.
    pub fn tick(&mut self, delta_ms: f32) -> bool {
        self.lifespan.tick(delta_ms)
    }
}

impl Component for Explosion {
    const KIND: ComponentKind = ComponentKind::Explosion;
}

/// Display parameters consumed by the renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Renderable {
    pub radius: f32,
    /// Packed `0xRRGGBBAA`.
    pub color: u32,
}

impl Renderable {
    #[must_use]
    pub const fn new(radius: f32, color: u32) -> Self {
        Self { radius, color }
    }
}

impl Component for Renderable {
    const KIND: ComponentKind = ComponentKind::Renderable;
}
