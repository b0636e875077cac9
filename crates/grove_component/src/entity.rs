//! Entity ids.
//!
//! An entity is nothing but the key that ties a row in one component table
//! to rows in the others. The registry hands them out from an
//! [`EntityAllocator`].

use serde::{Deserialize, Serialize};

/// Key shared by every component that belongs to the same game object.
///
/// Two components describe the same object exactly when they are stored
/// under the same `Entity`. Nothing else is attached to the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(pub u64);

impl Entity {
    /// Never handed out by an allocator. Useful as a "no target" marker.
    pub const INVALID: Entity = Entity(0);

    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// `false` only for [`Entity::INVALID`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Hands out entity ids for one registry.
///
/// Ids count up from 1 and are not recycled, so an id held by a system
/// after its entity was deleted can never start naming a new one.
#[derive(Debug)]
pub struct EntityAllocator {
    next_id: u64,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Take the next unused id.
    pub fn allocate(&mut self) -> Entity {
        let id = self.next_id;
        self.next_id += 1;
        Entity(id)
    }

    /// Record an id the caller chose, so `allocate` never returns it.
    pub fn reserve(&mut self, entity: Entity) {
        if entity.0 >= self.next_id {
            self.next_id = entity.0 + 1;
        }
    }

    /// Highest id handed out or reserved so far (0 when none).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.next_id - 1
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_allocator_starts_after_invalid() {
        let mut alloc = EntityAllocator::default();
        assert_eq!(alloc.count(), 0);
        let first = alloc.allocate();
        assert!(first.is_valid());
        assert_ne!(first, Entity::INVALID);
    }

    #[test]
    fn test_spawned_ids_never_repeat() {
        let mut alloc = EntityAllocator::new();
        let ids: Vec<u64> = (0..5).map(|_| alloc.allocate().id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(alloc.count(), 5);
    }

    #[test]
    fn test_reserve_skips_past_external_ids() {
        let mut alloc = EntityAllocator::new();
        alloc.reserve(Entity::from_raw(10));
        assert_eq!(alloc.allocate(), Entity(11));

        alloc.reserve(Entity::from_raw(3));
        assert_eq!(alloc.allocate(), Entity(12));
        assert_eq!(alloc.count(), 12);
    }

    #[test]
    fn test_entity_orders_by_id() {
        let mut ids = vec![Entity::from_raw(9), Entity::from_raw(2), Entity::INVALID];
        ids.sort();
        assert_eq!(ids, vec![Entity(0), Entity(2), Entity(9)]);
        assert_eq!(Entity::from_raw(7).to_string(), "Entity(7)");
    }
}
