//! Core [`Component`] trait and the [`ComponentKind`] enumeration.
//!
//! Every piece of data stored in the ECS must implement [`Component`]. The
//! set of kinds is closed: each kind gets its own typed table in the
//! registry, so dispatch is a `match` on [`ComponentKind`] rather than a
//! runtime type lookup.

use serde::{Deserialize, Serialize};

/// The closed set of component kinds known to the game.
///
/// Each kind maps to exactly one table in the registry. The declaration
/// order is also the order used by [`ComponentKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Position,
    Velocity,
    Player,
    TreeType,
    Ship,
    Enemy,
    Bullet,
    Explosion,
    DamageIndicator,
    Renderable,
}

impl ComponentKind {
    /// Every kind, in declaration order.
    pub const ALL: [ComponentKind; 10] = [
        ComponentKind::Position,
        ComponentKind::Velocity,
        ComponentKind::Player,
        ComponentKind::TreeType,
        ComponentKind::Ship,
        ComponentKind::Enemy,
        ComponentKind::Bullet,
        ComponentKind::Explosion,
        ComponentKind::DamageIndicator,
        ComponentKind::Renderable,
    ];

    /// The human-readable name of this kind (e.g. `"Position"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ComponentKind::Position => "Position",
            ComponentKind::Velocity => "Velocity",
            ComponentKind::Player => "Player",
            ComponentKind::TreeType => "TreeType",
            ComponentKind::Ship => "Ship",
            ComponentKind::Enemy => "Enemy",
            ComponentKind::Bullet => "Bullet",
            ComponentKind::Explosion => "Explosion",
            ComponentKind::DamageIndicator => "DamageIndicator",
            ComponentKind::Renderable => "Renderable",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The core component trait.
///
/// All data stored in the ECS must implement this trait. Components are plain
/// data records: serialisable so frames and configs can carry them, and
/// `Send + Sync` so a registry can be handed to another thread between ticks.
///
/// # Examples
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use grove_component::{Component, ComponentKind};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Bullet {
///     damage: f32,
/// }
///
/// impl Component for Bullet {
///     const KIND: ComponentKind = ComponentKind::Bullet;
/// }
///
/// assert_eq!(Bullet::type_name(), "Bullet");
/// ```
pub trait Component: Send + Sync + 'static + Serialize + for<'de> Deserialize<'de> {
    /// The table this component type is stored in.
    const KIND: ComponentKind;

    /// A human-readable name for this component type.
    fn type_name() -> &'static str {
        Self::KIND.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
    struct Marker;

    impl Component for Marker {
        const KIND: ComponentKind = ComponentKind::Enemy;
    }

    #[test]
    fn test_type_name_follows_kind() {
        assert_eq!(Marker::type_name(), "Enemy");
        assert_eq!(Marker::KIND, ComponentKind::Enemy);
    }

    #[test]
    fn test_all_kinds_have_distinct_names() {
        let mut names: Vec<_> = ComponentKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ComponentKind::ALL.len());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ComponentKind::DamageIndicator.to_string(), "DamageIndicator");
    }

    #[test]
    fn test_kind_serialization_roundtrip() {
        let json = serde_json::to_string(&ComponentKind::TreeType).unwrap();
        let restored: ComponentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ComponentKind::TreeType);
    }
}
