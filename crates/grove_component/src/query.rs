//! Query descriptors for system data access declarations.
//!
//! A [`QueryDescriptor`] declares which component kinds a system reads and
//! writes. The registry uses descriptors for dynamic (runtime-built) queries,
//! and the scheduler uses them to tell which systems could share a stage.

use serde::{Deserialize, Serialize};

use crate::component::ComponentKind;

/// Describes the data access requirements of a system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    /// Component kinds the system reads immutably.
    pub reads: Vec<ComponentKind>,
    /// Component kinds the system writes (mutable access).
    pub writes: Vec<ComponentKind>,
    /// The system deletes entities, removing rows from every kind.
    #[serde(default)]
    pub despawns: bool,
}

impl QueryDescriptor {
    /// Create a new empty query descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a read-only component requirement.
    #[must_use]
    pub fn read(mut self, kind: ComponentKind) -> Self {
        self.reads.push(kind);
        self
    }

    /// Add a mutable component requirement.
    #[must_use]
    pub fn write(mut self, kind: ComponentKind) -> Self {
        self.writes.push(kind);
        self
    }

    /// Mark the system as deleting entities.
    #[must_use]
    pub fn despawn(mut self) -> Self {
        self.despawns = true;
        self
    }

    /// Returns the required kinds (reads then writes), without duplicates,
    /// in first-mention order.
    ///
    /// The first element is the kind whose table drives iteration.
    #[must_use]
    pub fn required_kinds(&self) -> Vec<ComponentKind> {
        let mut kinds = Vec::with_capacity(self.reads.len() + self.writes.len());
        for &kind in self.reads.iter().chain(&self.writes) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Returns `true` if the descriptor names no component kind at all.
    ///
    /// The despawn flag is not a kind and does not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reads.is_empty() && self.writes.is_empty()
    }

    /// Checks whether this query conflicts with another.
    ///
    /// Two queries conflict when one writes a component kind that the other
    /// reads or writes:
    ///
    /// ```text
    /// A.writes ∩ (B.reads ∪ B.writes) ≠ ∅  OR
    /// B.writes ∩ (A.reads ∪ A.writes) ≠ ∅
    /// ```
    ///
    /// A despawning query writes every kind, so it conflicts with any other
    /// query that touches at least one kind or also despawns.
    #[must_use]
    pub fn conflicts_with(&self, other: &QueryDescriptor) -> bool {
        let touches_any = |q: &QueryDescriptor| q.despawns || !q.is_empty();
        if (self.despawns && touches_any(other)) || (other.despawns && touches_any(self)) {
            return true;
        }
        let touches = |q: &QueryDescriptor, kind: &ComponentKind| {
            q.reads.contains(kind) || q.writes.contains(kind)
        };
        self.writes.iter().any(|w| touches(other, w))
            || other.writes.iter().any(|w| touches(self, w))
    }
}
