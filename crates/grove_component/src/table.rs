//! Typed storage for a single component kind.
//!
//! A [`Table`] keeps components in two parallel vectors (entity ids and
//! values) plus an id → row index. Rows stay in insertion order: iteration
//! always visits entities in the order their component was first added, and
//! overwriting a component keeps its row.

use std::collections::HashMap;

use crate::entity::Entity;

/// Insertion-ordered storage for components of one type.
///
/// `entities[i]` owns `values[i]`; `index` maps each entity back to its row.
#[derive(Debug, Clone)]
pub struct Table<T> {
    entities: Vec<Entity>,
    values: Vec<T>,
    index: HashMap<Entity, usize>,
}

impl<T> Table<T> {
    /// Create a new, empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            values: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the number of components stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if this table contains no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns `true` if `entity` has a component in this table.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.index.contains_key(&entity)
    }

    /// Store `value` for `entity`, returning the component it replaced.
    ///
    /// A replaced component keeps its row, so iteration order is unchanged.
    pub fn insert(&mut self, entity: Entity, value: T) -> Option<T> {
        if let Some(&row) = self.index.get(&entity) {
            return Some(std::mem::replace(&mut self.values[row], value));
        }
        self.index.insert(entity, self.entities.len());
        self.entities.push(entity);
        self.values.push(value);
        None
    }

    /// Get a reference to the component of `entity`.
    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.index.get(&entity).map(|&row| &self.values[row])
    }

    /// Get a mutable reference to the component of `entity`.
    #[must_use]
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.index.get(&entity).map(|&row| &mut self.values[row])
    }

    /// Remove the component of `entity`, preserving the order of the
    /// remaining rows.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let row = self.index.remove(&entity)?;
        self.entities.remove(row);
        let value = self.values.remove(row);
        for (shifted, e) in self.entities[row..].iter().enumerate() {
            self.index.insert(*e, row + shifted);
        }
        Some(value)
    }

    /// Entity ids in row order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Iterate `(entity, component)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter().copied().zip(self.values.iter())
    }

    /// Iterate `(entity, component)` pairs mutably in row order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.entities.iter().copied().zip(self.values.iter_mut())
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(table: &Table<u32>) -> Vec<u64> {
        table.entities().iter().map(|e| e.id()).collect()
    }

    #[test]
    fn test_insert_and_get() {
        let mut table = Table::new();
        assert!(table.insert(Entity(1), 10u32).is_none());
        assert_eq!(table.get(Entity(1)), Some(&10));
        assert_eq!(table.len(), 1);
        assert!(table.contains(Entity(1)));
        assert!(!table.contains(Entity(2)));
    }

    #[test]
    fn test_overwrite_keeps_row() {
        let mut table = Table::new();
        table.insert(Entity(1), 1u32);
        table.insert(Entity(2), 2u32);
        assert_eq!(table.insert(Entity(1), 100), Some(1));
        assert_eq!(ids(&table), vec![1, 2]);
        assert_eq!(table.get(Entity(1)), Some(&100));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_remove_preserves_order_and_index() {
        let mut table = Table::new();
        for i in 1..=4 {
            table.insert(Entity(i), i as u32 * 10);
        }
        assert_eq!(table.remove(Entity(2)), Some(20));
        assert_eq!(ids(&table), vec![1, 3, 4]);
        // Rows after the removed one must still resolve correctly.
        assert_eq!(table.get(Entity(3)), Some(&30));
        assert_eq!(table.get(Entity(4)), Some(&40));
        assert!(table.remove(Entity(2)).is_none());
    }

    #[test]
    fn test_iter_mut_updates_in_place() {
        let mut table = Table::new();
        table.insert(Entity(5), 1u32);
        table.insert(Entity(6), 2u32);
        for (_, v) in table.iter_mut() {
            *v += 1;
        }
        let collected: Vec<_> = table.iter().map(|(e, v)| (e.id(), *v)).collect();
        assert_eq!(collected, vec![(5, 2), (6, 3)]);
    }

    #[test]
    fn test_default_is_empty() {
        let table: Table<String> = Table::default();
        assert!(table.is_empty());
    }
}
