//! Typed conjunctive queries.
//!
//! [`Query`] is implemented for tuples of one to four component types. A
//! query yields one row per entity holding every listed kind, with the
//! components in the order they were requested. The empty tuple is
//! deliberately not a query, so zero-kind queries do not compile; the
//! runtime path ([`Registry::matching`](crate::Registry::matching)) rejects
//! them with [`RegistryError::EmptyQuery`](crate::RegistryError::EmptyQuery).

use grove_component::{ComponentKind, Entity};

use crate::registry::{Registry, Stored};

/// A tuple of component types that can be fetched together.
pub trait Query {
    /// The row produced for one matching entity.
    type Item<'r>;

    /// Requested kinds, in request order. The first drives iteration.
    const KINDS: &'static [ComponentKind];

    /// Fetch the row for `entity`, or `None` if any kind is missing.
    fn fetch(registry: &Registry, entity: Entity) -> Option<Self::Item<'_>>;
}

macro_rules! impl_query {
    ($($t:ident),+) => {
        impl<$($t: Stored),+> Query for ($($t,)+) {
            type Item<'r> = ($(&'r $t,)+);

            const KINDS: &'static [ComponentKind] = &[$($t::KIND),+];

            fn fetch(registry: &Registry, entity: Entity) -> Option<Self::Item<'_>> {
                Some(($(registry.get::<$t>(entity)?,)+))
            }
        }
    };
}

impl_query!(A);
impl_query!(A, B);
impl_query!(A, B, C);
impl_query!(A, B, C, D);
