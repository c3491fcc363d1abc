//! `stocktrack-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no console, no storage).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod event;
pub mod value_object;

pub use aggregate::Aggregate;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::Event;
pub use value_object::ValueObject;
