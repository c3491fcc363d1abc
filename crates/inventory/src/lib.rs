//! Inventory domain module.
//!
//! This crate contains the stock record model and the bounded, append-only
//! inventory, implemented purely as deterministic domain logic (no IO).

pub mod item;
pub mod stock;

pub use item::{Item, ItemId, ItemName, NAME_MAX_CHARS, Quantity, UnitPrice};
pub use stock::{AddItem, DEFAULT_CAPACITY, Inventory, InventoryCommand, InventoryEvent, ItemAdded};
