//! # grove_world
//!
//! The registry: sole owner of all component data, keyed by
//! ([`ComponentKind`], [`Entity`]).
//!
//! - [`components`]: the game's component records.
//! - [`Lifespan`]: the countdown shared by expiring components.
//! - [`ComponentValue`]: one of any component, for heterogeneous inserts.
//! - [`Query`]: typed conjunctive queries over tuples of component types.
//! - [`Registry`]: insertion, querying, and entity deletion.

pub mod components;
pub mod error;
pub mod lifespan;
pub mod query;
pub mod registry;
pub mod value;

pub use components::{
    Bullet, DamageIndicator, Enemy, Explosion, Player, Renderable, Ship, ShipKind, TreeSize,
    TreeSpecies, TreeType,
};
pub use error::RegistryError;
pub use grove_component::{Component, ComponentKind, Entity, QueryDescriptor};
pub use grove_math::{Position, Velocity};
pub use lifespan::Lifespan;
pub use query::Query;
pub use registry::{Registry, Stored};
pub use value::ComponentValue;
