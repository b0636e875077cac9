//! # grove_component
//!
//! The "C" in ECS: defines what a component is, how entities are named, and
//! how components of one kind are stored.
//!
//! This crate provides:
//!
//! - [`Component`] trait: the contract all ECS data must satisfy.
//! - [`ComponentKind`]: the closed set of component kinds the game knows.
//! - [`Entity`]: lightweight `u64` entity identifiers.
//! - [`EntityAllocator`]: monotonically increasing ID allocator.
//! - [`Table`]: insertion-ordered storage for a single component kind.
//! - [`QueryDescriptor`]: declarative data access requirements for systems.

pub mod component;
pub mod entity;
pub mod query;
pub mod table;

pub use component::{Component, ComponentKind};
pub use entity::{Entity, EntityAllocator};
pub use query::QueryDescriptor;
pub use table::Table;
