//! The component [`Registry`].
//!
//! One typed [`Table`] per [`ComponentKind`], all keyed by [`Entity`]. The
//! registry is the single owner of component data; systems borrow rows for
//! the length of one pass and hold on to entity ids, never references.

use grove_component::{Component, ComponentKind, Entity, EntityAllocator, QueryDescriptor, Table};
use grove_math::{Position, Velocity};

use crate::components::{
    Bullet, DamageIndicator, Enemy, Explosion, Player, Renderable, Ship, TreeType,
};
use crate::error::RegistryError;
use crate::query::Query;
use crate::value::ComponentValue;

/// A component type that has a table in the [`Registry`].
pub trait Stored: Component + Sized {
    fn table(registry: &Registry) -> &Table<Self>;
    fn table_mut(registry: &mut Registry) -> &mut Table<Self>;
}

macro_rules! registry_tables {
    ($($field:ident: $ty:ident),+ $(,)?) => {
        /// Central store mapping (component kind, entity) to a component.
        #[derive(Debug, Default)]
        pub struct Registry {
            allocator: EntityAllocator,
            $($field: Table<$ty>,)+
        }

        $(
            impl Stored for $ty {
                fn table(registry: &Registry) -> &Table<Self> {
                    &registry.$field
                }

                fn table_mut(registry: &mut Registry) -> &mut Table<Self> {
                    &mut registry.$field
                }
            }
        )+

        impl Registry {
            /// Entity ids of one kind's table, in insertion order.
            #[must_use]
            pub fn entities_of(&self, kind: ComponentKind) -> &[Entity] {
                match kind {
                    $(ComponentKind::$ty => self.$field.entities(),)+
                }
            }

            /// Returns the number of components stored for `kind`.
            #[must_use]
            pub fn len_of(&self, kind: ComponentKind) -> usize {
                self.entities_of(kind).len()
            }

            /// Returns `true` if `entity` has a component of `kind`.
            #[must_use]
            pub fn has_kind(&self, kind: ComponentKind, entity: Entity) -> bool {
                match kind {
                    $(ComponentKind::$ty => self.$field.contains(entity),)+
                }
            }

            /// Remove `entity` from every table. Returns `true` if any
            /// component was removed.
            pub fn delete_entity(&mut self, entity: Entity) -> bool {
                let mut removed = false;
                $(removed |= self.$field.remove(entity).is_some();)+
                removed
            }
        }
    };
}

registry_tables!(
    positions: Position,
    velocities: Velocity,
    players: Player,
    trees: TreeType,
    ships: Ship,
    enemies: Enemy,
    bullets: Bullet,
    explosions: Explosion,
    damage_indicators: DamageIndicator,
    renderables: Renderable,
);

impl Registry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh entity id. The entity has no components yet.
    pub fn spawn(&mut self) -> Entity {
        self.allocator.allocate()
    }

    /// Allocate a fresh entity and attach `components` to it.
    pub fn spawn_with(&mut self, components: impl IntoIterator<Item = ComponentValue>) -> Entity {
        let entity = self.spawn();
        self.add_components(entity, components);
        entity
    }

    // -- Insertion --

    /// Store `component` for `entity`, replacing any component of the same
    /// kind. `entity` need not have been spawned by this registry.
    pub fn add_component<T: Stored>(&mut self, entity: Entity, component: T) {
        self.allocator.reserve(entity);
        T::table_mut(self).insert(entity, component);
    }

    /// Store each component in turn. Kinds may be mixed freely.
    pub fn add_components(
        &mut self,
        entity: Entity,
        components: impl IntoIterator<Item = ComponentValue>,
    ) {
        for component in components {
            component.insert_into(self, entity);
        }
    }

    /// Remove one component from `entity`, returning it.
    pub fn remove_component<T: Stored>(&mut self, entity: Entity) -> Option<T> {
        T::table_mut(self).remove(entity)
    }

    // -- Access --

    #[must_use]
    pub fn get<T: Stored>(&self, entity: Entity) -> Option<&T> {
        T::table(self).get(entity)
    }

    #[must_use]
    pub fn get_mut<T: Stored>(&mut self, entity: Entity) -> Option<&mut T> {
        T::table_mut(self).get_mut(entity)
    }

    #[must_use]
    pub fn has<T: Stored>(&self, entity: Entity) -> bool {
        T::table(self).contains(entity)
    }

    /// Returns `true` if `entity` has a component of any kind.
    #[must_use]
    pub fn contains_entity(&self, entity: Entity) -> bool {
        ComponentKind::ALL
            .iter()
            .any(|&kind| self.has_kind(kind, entity))
    }

    /// Returns the number of distinct entities holding at least one
    /// component.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        let mut seen: Vec<Entity> = ComponentKind::ALL
            .iter()
            .flat_map(|&kind| self.entities_of(kind).iter().copied())
            .collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    // -- Query --

    /// Every entity holding all kinds in `Q`, as rows of component
    /// references in request order.
    ///
    /// Candidates come from the first kind's table in insertion order and
    /// are filtered by membership in the rest.
    #[must_use]
    pub fn query<Q: Query>(&self) -> Vec<Q::Item<'_>> {
        self.candidates(Q::KINDS)
            .iter()
            .filter_map(|&entity| Q::fetch(self, entity))
            .collect()
    }

    /// Like [`Registry::query`], with the entity id in front of each row.
    #[must_use]
    pub fn query_with_ids<Q: Query>(&self) -> Vec<(Entity, Q::Item<'_>)> {
        self.candidates(Q::KINDS)
            .iter()
            .filter_map(|&entity| Q::fetch(self, entity).map(|row| (entity, row)))
            .collect()
    }

    /// Only the entity ids matched by `Q`.
    #[must_use]
    pub fn query_ids<Q: Query>(&self) -> Vec<Entity> {
        self.join(Q::KINDS)
    }

    /// Entities holding every kind the descriptor reads or writes.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyQuery`] if the descriptor names no
    /// kind.
    pub fn matching(&self, descriptor: &QueryDescriptor) -> Result<Vec<Entity>, RegistryError> {
        if descriptor.is_empty() {
            return Err(RegistryError::EmptyQuery);
        }
        Ok(self.join(&descriptor.required_kinds()))
    }

    // -- Mutable passes --

    /// Run `f` on every component of kind `W`, in insertion order.
    pub fn for_each_mut<W: Stored>(&mut self, mut f: impl FnMut(Entity, &mut W)) {
        for (entity, value) in W::table_mut(self).iter_mut() {
            f(entity, value);
        }
    }

    /// Run `f` on every entity holding both `W` and `R`, with `W` borrowed
    /// mutably and `R` shared.
    ///
    /// `W` and `R` must be different kinds; if they are the same, no row
    /// matches.
    pub fn update<W: Stored, R: Stored>(&mut self, mut f: impl FnMut(Entity, &mut W, &R)) {
        // The written table is moved out for the pass so the rest of the
        // registry can be read alongside it.
        let mut table = std::mem::take(W::table_mut(self));
        for (entity, value) in table.iter_mut() {
            if let Some(read) = R::table(self).get(entity) {
                f(entity, value, read);
            }
        }
        *W::table_mut(self) = table;
    }

    fn candidates(&self, kinds: &[ComponentKind]) -> &[Entity] {
        match kinds.first() {
            Some(&first) => self.entities_of(first),
            None => &[],
        }
    }

    fn join(&self, kinds: &[ComponentKind]) -> Vec<Entity> {
        let Some((&first, rest)) = kinds.split_first() else {
            return Vec::new();
        };
        self.entities_of(first)
            .iter()
            .copied()
            .filter(|&entity| rest.iter().all(|&kind| self.has_kind(kind, entity)))
            .collect()
    }
}
