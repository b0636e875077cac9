//! [`ComponentValue`]: a single component of any kind.
//!
//! Used where one call carries components of different kinds, such as
//! [`Registry::add_components`](crate::Registry::add_components).

use grove_component::{ComponentKind, Entity};
use grove_math::{Position, Velocity};
use serde::{Deserialize, Serialize};

use crate::components::{
    Bullet, DamageIndicator, Enemy, Explosion, Player, Renderable, Ship, TreeType,
};
use crate::registry::Registry;

/// One component, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentValue {
    Position(Position),
    Velocity(Velocity),
    Player(Player),
    TreeType(TreeType),
    Ship(Ship),
    Enemy(Enemy),
    Bullet(Bullet),
    Explosion(Explosion),
    DamageIndicator(DamageIndicator),
    Renderable(Renderable),
}

macro_rules! component_values {
    ($($variant:ident),+ $(,)?) => {
        impl ComponentValue {
            /// The kind of the wrapped component.
            #[must_use]
            pub fn kind(&self) -> ComponentKind {
                match self {
                    $(ComponentValue::$variant(_) => ComponentKind::$variant,)+
                }
            }

            /// Store the wrapped component on `entity`, overwriting any
            /// previous component of the same kind.
            pub fn insert_into(self, registry: &mut Registry, entity: Entity) {
                match self {
                    $(ComponentValue::$variant(c) => registry.add_component(entity, c),)+
                }
            }
        }

        $(
            impl From<$variant> for ComponentValue {
                fn from(c: $variant) -> Self {
                    ComponentValue::$variant(c)
                }
            }
        )+
    };
}

component_values!(
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
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let v: ComponentValue = Position::new(1.0, 2.0).into();
        assert_eq!(v.kind(), ComponentKind::Position);
        let v: ComponentValue = Enemy.into();
        assert_eq!(v.kind(), ComponentKind::Enemy);
    }

    #[test]
    fn test_insert_into_registry() {
        let mut registry = Registry::new();
        let e = registry.spawn();
        ComponentValue::from(Velocity::new(3.0, 4.0)).insert_into(&mut registry, e);
        assert_eq!(registry.get::<Velocity>(e), Some(&Velocity::new(3.0, 4.0)));
    }
}
